use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod analysis_config;
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use analysis_config::{AnalysisSettings, MetricRange, RangeOverride};
pub use settings::{Config, ExecutionMode, GeneratorSettings};

/// Loads the application configuration.
///
/// With no path, the built-in defaults are used. Otherwise the TOML file is read,
/// deserialized into our strongly-typed `Config` struct (missing keys fall back to
/// their defaults), and validated.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        None => Config::default(),
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading configuration file");
            let load_error = |source| ConfigError::Load {
                path: path.to_path_buf(),
                source,
            };
            let builder = config::Config::builder()
                .add_source(
                    config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                        .required(true),
                )
                .build()
                .map_err(load_error)?;

            // Attempt to deserialize the entire configuration into our `Config` struct
            builder.try_deserialize::<Config>().map_err(load_error)?
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Rejects settings the generator or analyzer could not honor.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let generator = &config.generator;
    let invalid = |msg: String| Err(ConfigError::Invalid(msg));

    if generator.sequence_count == 0 {
        return invalid("generator.sequence_count must be at least 1".to_string());
    }
    if generator.min_length > generator.max_length {
        return invalid(format!(
            "generator.min_length ({}) exceeds generator.max_length ({})",
            generator.min_length, generator.max_length
        ));
    }
    let bounds = [
        ("generator.min_profit", generator.min_profit),
        ("generator.max_profit", generator.max_profit),
        ("generator.min_duration", generator.min_duration),
        ("generator.max_duration", generator.max_duration),
    ];
    if let Some((name, value)) = bounds.iter().find(|(_, v)| !v.is_finite()) {
        return invalid(format!("{} must be finite, got {}", name, value));
    }
    if generator.min_profit >= generator.max_profit {
        return invalid(format!(
            "generator.min_profit ({}) must be below generator.max_profit ({})",
            generator.min_profit, generator.max_profit
        ));
    }
    if generator.min_duration <= 0.0 {
        return invalid(format!(
            "generator.min_duration must be strictly positive, got {}",
            generator.min_duration
        ));
    }
    if generator.min_duration >= generator.max_duration {
        return invalid(format!(
            "generator.min_duration ({}) must be below generator.max_duration ({})",
            generator.min_duration, generator.max_duration
        ));
    }
    for (name, min, max) in [
        ("profit", generator.min_profit, generator.max_profit),
        ("duration", generator.min_duration, generator.max_duration),
    ] {
        if !(max - min).is_finite() {
            return invalid(format!(
                "generator {} range [{}, {}) is too wide to sample",
                name, min, max
            ));
        }
    }

    let analysis = &config.analysis;
    for (name, pct) in [
        ("analysis.suitable_good_pct", analysis.suitable_good_pct),
        ("analysis.max_bad_pct", analysis.max_bad_pct),
    ] {
        if !(0.0..=100.0).contains(&pct) {
            return invalid(format!("{} must be within [0, 100], got {}", name, pct));
        }
    }
    for entry in &analysis.overrides {
        for range in [entry.good, entry.medium].into_iter().flatten() {
            if range.min.is_nan() || range.max.is_nan() || range.min > range.max {
                return invalid(format!(
                    "range for '{}' is empty or malformed: [{}, {}]",
                    entry.metric, range.min, range.max
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(None).unwrap();

        assert_eq!(config.execution, ExecutionMode::Parallel);
        assert_eq!(config.generator.sequence_count, 100);
        assert_eq!(config.generator.min_length, 1);
        assert_eq!(config.generator.max_length, 1000);
        assert_eq!(config.generator.min_profit, -1000.0);
        assert_eq!(config.generator.max_profit, 1000.0);
        assert_eq!(config.generator.min_duration, 1.0);
        assert_eq!(config.generator.max_duration, 1200.0);
        assert_eq!(config.generator.seed, None);
        assert_eq!(config.analysis.suitable_good_pct, 70.0);
        assert_eq!(config.analysis.max_bad_pct, 30.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_toml(
            r#"
execution = "sequential"

[generator]
sequence_count = 5
seed = 42

[[analysis.overrides]]
metric = "Max Drawdown"
good = { min = 0.0, max = 500.0 }
"#,
        );

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.execution, ExecutionMode::Sequential);
        assert_eq!(config.generator.sequence_count, 5);
        assert_eq!(config.generator.seed, Some(42));
        assert_eq!(config.generator.max_length, 1000);
        assert_eq!(config.analysis.overrides.len(), 1);
        assert_eq!(config.analysis.overrides[0].metric, "Max Drawdown");
        assert_eq!(config.analysis.overrides[0].good, Some(MetricRange::new(0.0, 500.0)));
        assert_eq!(config.analysis.overrides[0].medium, None);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_config(Some(Path::new("/nonexistent/tradestat.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Load { .. }));
    }

    #[test]
    fn test_validation_rejects_inverted_bounds() {
        let file = write_toml(
            r#"
[generator]
min_profit = 10.0
max_profit = -10.0
"#,
        );

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("min_profit")));
    }

    #[test]
    fn test_validation_rejects_overflowing_span() {
        let mut config = Config::default();
        config.generator.min_profit = -1e308;
        config.generator.max_profit = 1e308;
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("profit")));

        let mut config = Config::default();
        config.generator.max_duration = f64::MAX;
        assert!(validate(&config).is_ok());

        let mut config = Config::default();
        config.generator.min_profit = -f64::MAX;
        config.generator.max_profit = f64::MAX;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validation_rules() {
        let mut config = Config::default();
        config.generator.sequence_count = 0;
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.generator.min_length = 10;
        config.generator.max_length = 9;
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.generator.min_duration = 0.0;
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.generator.max_profit = f64::INFINITY;
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.analysis.max_bad_pct = 120.0;
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.analysis.overrides.push(RangeOverride {
            metric: "Win Rate".to_string(),
            good: Some(MetricRange::new(1.0, 0.0)),
            medium: None,
        });
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.generator.min_length = 0;
        config.generator.max_length = 0;
        assert!(validate(&config).is_ok());
    }
}
