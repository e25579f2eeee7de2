//! Encoder Module - observation record to policy features
//!
//! ## Pipeline
//!
//! 1. Validate the observation shape (11 players per side, role ids, active index)
//! 2. Ball offset from the active player and its planar distance
//! 3. Legal action mask (`avail`)
//! 4. Player / ball vectors and team rows with closest-player selection
//!
//! Every step is a pure function of the observation and [`EncoderConfig`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fe_core::{FeatureEncoder, RawObservation};
//!
//! let encoder = FeatureEncoder::default();
//! let obs = RawObservation::from_json_str(&line)?;
//! let bundle = encoder.encode(&obs)?;
//! let flat = bundle.to_flat_vector(); // 290 floats
//! ```

pub mod avail;
pub mod ball;
pub mod bundle;
mod common;
pub mod player;
pub mod role;
pub mod team;
pub mod zone;

pub use avail::{infer_avail, Action, ActionMask, SetPiece};
pub use bundle::{FeatureBundle, FeatureDims, LEFT_TEAM_ROWS, RIGHT_TEAM_ROWS};
pub use role::PlayerRole;
pub use team::{TeamRow, TEAM_ROW_WIDTH};
pub use zone::BallZone;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::EncoderConfig;
use crate::error::Result;
use crate::observation::RawObservation;
use common::indices_without;
use team::{encode_team, TeamSide};

/// Stateless feature encoder; holds only its configuration
#[derive(Debug, Clone, Default)]
pub struct FeatureEncoder {
    config: EncoderConfig,
}

impl FeatureEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Group sizes for buffer pre-allocation on the consumer side
    pub fn feature_dims(&self) -> FeatureDims {
        FeatureDims::STANDARD
    }

    /// Encode one observation
    pub fn encode(&self, obs: &RawObservation) -> Result<FeatureBundle> {
        obs.validate()?;

        let anchor = obs.active_position();
        let offset = ball::ball_offset(obs);
        let ball_distance = ball::planar_distance(&offset);

        let mask = infer_avail(obs, ball_distance, &self.config.avail);
        trace!(active = obs.active, ball_distance, legal = mask.legal_count(), "encoding step");

        let player = player::encode_player(obs, &mask, &self.config.scales)?;
        let ball = ball::encode_ball(obs, &offset, &self.config);

        let (left_team, left_closest) = encode_team(
            &TeamSide::left(obs),
            indices_without::<LEFT_TEAM_ROWS>(obs.active),
            &anchor,
            &self.config.scales,
        );
        let (right_team, right_closest) = encode_team(
            &TeamSide::right(obs),
            std::array::from_fn::<usize, RIGHT_TEAM_ROWS, _>(|i| i),
            &anchor,
            &self.config.scales,
        );

        Ok(FeatureBundle {
            player,
            ball,
            left_team,
            left_closest,
            right_team,
            right_closest,
            avail: mask.to_f32_array(),
        })
    }

    /// Parse, validate and encode one JSON observation
    pub fn encode_json(&self, json: &str) -> Result<FeatureBundle> {
        let obs = RawObservation::from_json_str(json)?;
        self.encode(&obs)
    }

    /// Encode many observations in parallel; results keep input order
    pub fn encode_batch(&self, observations: &[RawObservation]) -> Vec<Result<FeatureBundle>> {
        observations
            .par_iter()
            .enumerate()
            .map(|(index, obs)| {
                self.encode(obs).inspect_err(|err| {
                    debug!(index, error = %err, "observation rejected");
                })
            })
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
