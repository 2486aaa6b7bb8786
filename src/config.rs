use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::fleet::Composition;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse scenario {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("fleet size must be positive")]
    ZeroFleet,
    #[error("charger count must be positive")]
    ZeroChargers,
    #[error("horizon must be positive, got {0}")]
    NonPositiveHorizon(f64),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub fleet_size: usize,
    pub num_chargers: usize,
    pub horizon_hours: f64,
    pub seed: Option<u64>,
    pub composition: Composition,
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            fleet_size: 20,
            num_chargers: 3,
            horizon_hours: 3.0,
            seed: None,
            composition: Composition::Random,
        }
    }
}

impl SimConfig {
    pub fn load_from_file(path: &Path) -> Result<SimConfig, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fleet_size == 0 {
            return Err(ConfigError::ZeroFleet);
        }
        if self.num_chargers == 0 {
            return Err(ConfigError::ZeroChargers);
        }
        // the negated comparison also rejects NaN
        if !(self.horizon_hours > 0.0) {
            return Err(ConfigError::NonPositiveHorizon(self.horizon_hours));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = SimConfig::default();
        assert_eq!(config.fleet_size, 20);
        assert_eq!(config.num_chargers, 3);
        assert_eq!(config.horizon_hours, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_configs() {
        let with = |f: fn(&mut SimConfig)| {
            let mut config = SimConfig::default();
            f(&mut config);
            config
        };

        assert!(matches!(
            with(|c| c.fleet_size = 0).validate(),
            Err(ConfigError::ZeroFleet)
        ));
        assert!(matches!(
            with(|c| c.num_chargers = 0).validate(),
            Err(ConfigError::ZeroChargers)
        ));
        assert!(matches!(
            with(|c| c.horizon_hours = 0.0).validate(),
            Err(ConfigError::NonPositiveHorizon(_))
        ));
        assert!(with(|c| c.horizon_hours = -2.5).validate().is_err());
        assert!(with(|c| c.horizon_hours = f64::NAN).validate().is_err());
    }

    #[test]
    fn scenario_file_round_trips() {
        let path = std::env::temp_dir().join("evtolsim_scenario_test.json");
        fs::write(
            &path,
            r#"{ "fleet_size": 5, "num_chargers": 2, "horizon_hours": 1.5,
                 "seed": 42, "composition": "round-robin" }"#,
        )
        .unwrap();
        let config = SimConfig::load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.fleet_size, 5);
        assert_eq!(config.num_chargers, 2);
        assert_eq!(config.horizon_hours, 1.5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.composition, Composition::RoundRobin);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let path = std::env::temp_dir().join("evtolsim_scenario_sparse.json");
        fs::write(&path, r#"{ "fleet_size": 3 }"#).unwrap();
        let config = SimConfig::load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.fleet_size, 3);
        assert_eq!(config.num_chargers, 3);
        assert_eq!(config.composition, Composition::Random);
    }
}
