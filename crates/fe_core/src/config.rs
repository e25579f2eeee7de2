//! Encoder Configuration
//!
//! Centralizes every threshold and scale factor the encoder uses. Defaults
//! reproduce the trained feature layout exactly; overriding them changes
//! the numbers a trained policy sees, so only do that together with a retrain.
//!
//! ## Threshold Categories
//!
//! | Category | Description |
//! |----------|-------------|
//! | Zones | Pitch region boundaries for the ball-zone one-hot |
//! | Avail | Shot range box, contested-ball radius, set-piece lines |
//! | Scales | Multipliers applied to positions, directions, speeds |
//!
//! ## Usage
//!
//! ```rust
//! use fe_core::config::EncoderConfig;
//!
//! let config = EncoderConfig::default();
//! assert_eq!(config.zones.penalty_x, 0.64);
//!
//! // Partial JSON overrides fall back to defaults for missing keys
//! let tuned = EncoderConfig::from_json_str(r#"{"scales": {"ball_direction": 10.0}}"#).unwrap();
//! assert_eq!(tuned.scales.ball_direction, 10.0);
//! assert_eq!(tuned.scales.player_direction, 100.0);
//! ```
//!
//! ## Environment Variables
//!
//! - `FE_ENCODER_CONFIG`: path to a JSON config file

use std::env;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EncodeError, Result};

/// Environment variable holding a config file path
pub const CONFIG_ENV_VAR: &str = "FE_ENCODER_CONFIG";

/// Full encoder configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EncoderConfig {
    /// Ball-zone boundaries
    pub zones: ZoneThresholds,
    /// Action availability thresholds
    pub avail: AvailThresholds,
    /// Feature scale factors
    pub scales: FeatureScales,
}

impl EncoderConfig {
    /// Parse a (possibly partial) JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EncodeError::Config {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        debug!(path = %path.display(), "loaded encoder config");
        Ok(config)
    }

    /// Load from the file named by `FE_ENCODER_CONFIG`, or use defaults
    ///
    /// A broken config file is logged and ignored rather than aborting the caller.
    pub fn from_env_or_default() -> Self {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => match Self::load(&path) {
                Ok(config) => config,
                Err(err) => {
                    warn!(%path, error = %err, "falling back to default encoder config");
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

/// Ball-zone boundaries (pitch coordinates, x in [-1, 1], y in [-0.42, 0.42])
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ZoneThresholds {
    pub middle_x: f32,
    pub penalty_x: f32,
    pub end_x: f32,
    pub penalty_y: f32,
    pub end_y: f32,
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        Self { middle_x: 0.2, penalty_x: 0.64, end_x: 1.0, penalty_y: 0.27, end_y: 0.42 }
    }
}

/// Action availability thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AvailThresholds {
    /// A loose ball farther than this from the active player cannot be played
    pub contested_ball_distance: f32,
    /// Shot box: minimum ball x
    pub shot_min_x: f32,
    /// Shot box: maximum ball x
    pub shot_max_x: f32,
    /// Shot box: maximum |ball y|
    pub shot_max_abs_y: f32,
    /// Goal kick override applies when ball x is below this
    pub goal_kick_max_x: f32,
    /// Corner override applies when ball x is above this
    pub corner_min_x: f32,
    /// Penalty override applies when ball x is above this
    pub penalty_min_x: f32,
}

impl Default for AvailThresholds {
    fn default() -> Self {
        Self {
            contested_ball_distance: 0.03,
            shot_min_x: 0.64,
            shot_max_x: 1.0,
            shot_max_abs_y: 0.27,
            goal_kick_max_x: -0.7,
            corner_min_x: 0.9,
            penalty_min_x: 0.6,
        }
    }
}

/// Multipliers applied to raw observation values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FeatureScales {
    /// Active player and team row directions
    pub player_direction: f32,
    /// Active player and team row speeds
    pub player_speed: f32,
    /// Team row positions
    pub team_position: f32,
    /// Team row distance to the active player
    pub team_distance: f32,
    pub ball_direction: f32,
    pub ball_speed: f32,
}

impl Default for FeatureScales {
    fn default() -> Self {
        Self {
            player_direction: 100.0,
            player_speed: 100.0,
            team_position: 2.0,
            team_distance: 2.0,
            ball_direction: 20.0,
            ball_speed: 20.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
