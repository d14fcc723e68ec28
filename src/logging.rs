use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::noise::FieldStatistics;

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

#[derive(Debug, Serialize)]
pub struct GenerationLogEntry {
    pub operation: String,
    pub timestamp_ms: u128,
    pub rows: usize,
    pub cols: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

pub fn log_generation(
    operation: &str,
    rows: usize,
    cols: usize,
    stats: &FieldStatistics,
) -> io::Result<()> {
    log_dir()?;
    let entry = GenerationLogEntry {
        operation: operation.to_string(),
        timestamp_ms: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis(),
        rows,
        cols,
        min: stats.min,
        max: stats.max,
        mean: stats.mean,
    };
    append_json_line("logs/generation.jsonl", &entry)
}
