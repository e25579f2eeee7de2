//! # fe_core - Football Observation Feature Encoder
//!
//! Turns one raw environment observation (11 vs 11 positions, directions,
//! ball state, game mode, sticky actions) into the fixed-shape feature
//! bundle a policy network consumes.
//!
//! ## Features
//! - Pure per-step encoding, no state carried between calls
//! - Legal action mask with set-piece overrides
//! - Ball zone and role one-hot encodings
//! - Teammate / opponent rows with closest-player selection
//! - Parallel batch encoding
//! - JSON in, JSON out (plus JSON Schema for both)

pub mod config;
pub mod encoder;
pub mod error;
pub mod observation;

pub use config::EncoderConfig;
pub use encoder::{Action, ActionMask, BallZone, FeatureBundle, FeatureDims, FeatureEncoder, PlayerRole};
pub use error::{EncodeError, Result};
pub use observation::{BallOwner, Flag, GameMode, RawObservation};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON Schema of the observation record
pub fn observation_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(RawObservation)
}

/// JSON Schema of the encoded bundle
pub fn bundle_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(FeatureBundle)
}
