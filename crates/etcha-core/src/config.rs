use std::{env, fs::File, path::Path};

use serde::Deserialize;

pub const CONFIG_ENV: &str = "ETCHA_CONFIG";
pub const CONFIG_FILE: &str = "etcha.yaml";

/// Fixed sketch parameters, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfig {
    /// Grid pitch in cells.
    pub pitch: u16,
    /// Marker radius in cells.
    pub weight: u16,
    /// Delay between program steps.
    pub step_delay_ms: u64,
    pub grid_color: String,
    pub path_color: String,
    pub cursor_color: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            pitch: 4,
            weight: 0,
            step_delay_ms: 200,
            grid_color: "dark-gray".to_string(),
            path_color: "red".to_string(),
            cursor_color: "blue".to_string(),
        }
    }
}

impl SketchConfig {
    pub fn from_yaml(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        let config = serde_yaml::from_reader(file)?;

        Ok(config)
    }

    /// Loads from `$ETCHA_CONFIG`, then `./etcha.yaml`, then defaults.
    pub fn discover() -> anyhow::Result<Self> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Self::from_yaml(path);
        }

        if Path::new(CONFIG_FILE).exists() {
            return Self::from_yaml(CONFIG_FILE);
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = SketchConfig::default();

        assert_eq!(config.pitch, 4);
        assert_eq!(config.weight, 0);
        assert_eq!(config.step_delay_ms, 200);
        assert_eq!(config.grid_color, "dark-gray");
        assert_eq!(config.path_color, "red");
        assert_eq!(config.cursor_color, "blue");
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: SketchConfig = serde_yaml::from_str("pitch: 25\npath_color: green\n").unwrap();

        assert_eq!(config.pitch, 25);
        assert_eq!(config.path_color, "green");
        assert_eq!(config.step_delay_ms, 200);
        assert_eq!(config.cursor_color, "blue");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_yaml::from_str::<SketchConfig>("pitch: 4\nspeed: 9\n");
        assert!(err.is_err());
    }
}
