use std::f64::consts::FRAC_PI_3;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::math::EulerOrder;

pub const DEFAULT_MOVEMENT_SPEED: f64 = 5.0;
pub const DEFAULT_ROLL_SPEED: f64 = FRAC_PI_3;

/// Fly controller tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Linear speed, units per second
    pub movement_speed: f64,
    /// Angular rate, radians per second
    pub roll_speed: f64,
    /// Keep moving forward unless back is held
    pub auto_forward: bool,
    /// Reserved for the input binding layer, the tick ignores it
    pub drag_to_look: bool,
    /// Order used for the Euler debug view
    pub euler_order: EulerOrder,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            roll_speed: DEFAULT_ROLL_SPEED,
            auto_forward: false,
            drag_to_look: false,
            euler_order: EulerOrder::default(),
        }
    }
}

impl ControllerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse controller config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read controller config: {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("Invalid controller config: {}", path.display()))?;
        log::debug!("Loaded controller config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Speeds must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        if !self.movement_speed.is_finite() || self.movement_speed < 0.0 {
            bail!("movement_speed must be finite and >= 0, got {}", self.movement_speed);
        }
        if !self.roll_speed.is_finite() || self.roll_speed < 0.0 {
            bail!("roll_speed must be finite and >= 0, got {}", self.roll_speed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.movement_speed, 5.0);
        assert_eq!(config.roll_speed, FRAC_PI_3);
        assert!(!config.auto_forward);
        assert!(!config.drag_to_look);
        assert_eq!(config.euler_order, EulerOrder::XYZ);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ControllerConfig::from_json_str(r#"{ "auto_forward": true, "euler_order": "YXZ" }"#).unwrap();
        assert!(config.auto_forward);
        assert_eq!(config.euler_order, EulerOrder::YXZ);
        assert_eq!(config.movement_speed, DEFAULT_MOVEMENT_SPEED);
        assert_eq!(config.roll_speed, DEFAULT_ROLL_SPEED);
    }

    #[test]
    fn test_rejects_negative_speed() {
        let err = ControllerConfig::from_json_str(r#"{ "movement_speed": -1.0 }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("movement_speed"));
    }

    #[test]
    fn test_rejects_non_finite_roll_speed() {
        let config = ControllerConfig {
            roll_speed: f64::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(ControllerConfig::from_json_str("{ movement_speed: ").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("controls.json");
        std::fs::write(&path, r#"{ "movement_speed": 12.5, "drag_to_look": true }"#).unwrap();

        let config = ControllerConfig::from_json_file(&path).unwrap();
        assert_eq!(config.movement_speed, 12.5);
        assert!(config.drag_to_look);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = ControllerConfig::from_json_file("/nonexistent/controls.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/controls.json"));
    }
}
