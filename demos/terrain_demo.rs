use std::path::PathBuf;

use noise_field_core::config::ConfigError;
use noise_field_core::{
    band_exclude, fill_level, gaussian_series, generate_value_field, save_field_csv, seeded_rng,
    Axis, AxisSpacing, EngineConfig, FrequencyProgression, GaussianSpec, ValueNoiseSpec,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    println!(
        "Loaded config: rows={} cols={} scale={} octaves={} seed={}",
        config.rows, config.cols, config.scale, config.octaves, config.seed
    );

    let spec = ValueNoiseSpec {
        octaves: config.octaves,
        progression: FrequencyProgression::PeriodDoubling,
        seed: config.seed,
    };
    let (_, mut terrain) = generate_value_field(config.rows, config.cols, config.scale, &spec)?;

    // flood everything below sea level
    fill_level(terrain.as_mut_slice(), -0.2);
    save_field_csv(&terrain, PathBuf::from("out/terrain.csv"))?;

    let axis = Axis::new(0.0, 100.0, AxisSpacing::Increment(0.5))?;
    let mut rng = seeded_rng(Some(config.seed));
    let gaussian = GaussianSpec {
        mean: 0.0,
        std_dev: 1.0,
    };
    let mut profile = gaussian_series(&axis, &gaussian, &mut rng)?;
    band_exclude(&mut profile, 0.05, 0.0)?;

    let stats = terrain.statistics();
    println!(
        "Demo complete. Terrain range [{:.3}, {:.3}], mean {:.3}",
        stats.min, stats.max, stats.mean
    );
    Ok(())
}

fn load_config() -> Result<EngineConfig, ConfigError> {
    EngineConfig::load_from_file("config/engine.toml").or_else(|err| {
        eprintln!("Falling back to default config: {err}");
        Ok(EngineConfig::default())
    })
}
