/// Engine configuration, loaded from RON.
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid text speed: {0}")]
    InvalidSpeed(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Multiplier on every reveal delay. Higher is slower.
    pub text_speed: f64,
    /// Placeholder name used until the player types one.
    pub default_player_name: String,
    /// How long the emphasis pulse lasts.
    pub emphasis_ms: u64,
    pub confetti_particles: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            text_speed: 1.7,
            default_player_name: "Name".to_string(),
            emphasis_ms: 450,
            confetti_particles: 80,
        }
    }
}

impl EngineConfig {
    pub fn load_from_ron(path: &Path) -> Result<EngineConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.text_speed.is_finite() || self.text_speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.text_speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = EngineConfig::parse_ron("(text_speed: 0.5)").unwrap();
        assert_eq!(config.text_speed, 0.5);
        assert_eq!(config.default_player_name, "Name");
        assert_eq!(config.confetti_particles, 80);
    }

    #[test]
    fn negative_speed_rejected() {
        let err = EngineConfig::parse_ron("(text_speed: -1.0)").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpeed(_)));
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(matches!(
            EngineConfig::parse_ron("(text_speed: "),
            Err(ConfigError::Ron(_))
        ));
    }

    #[test]
    fn shipped_defaults_match() {
        let config = EngineConfig::load_from_ron(Path::new("data/engine.ron")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
