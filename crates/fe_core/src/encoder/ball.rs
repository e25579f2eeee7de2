//! Ball features
//!
//! ## Layout (18 floats)
//! ```text
//! [0-2]   Position (x, y, z)
//! [3-8]   Zone one-hot
//! [9-11]  Offset from active player (dx, dy, dz), player z taken as 0
//! [12-14] Direction x ball_direction scale
//! [15]    Speed x ball_speed scale
//! [16]    Owned by anyone
//! [17]    Owned by us
//! ```

use nalgebra::Vector3;

use super::common::FeatureWriter;
use super::zone::BallZone;
use crate::config::EncoderConfig;
use crate::observation::{BallOwner, RawObservation};

pub const BALL_DIM: usize = 18;

/// Ball position relative to the active player (player stands at z = 0)
pub(crate) fn ball_offset(obs: &RawObservation) -> Vector3<f32> {
    let player = obs.active_position();
    obs.ball_position() - Vector3::new(player.x, player.y, 0.0)
}

/// Planar (x, y) distance between active player and ball
pub(crate) fn planar_distance(offset: &Vector3<f32>) -> f32 {
    offset.xy().norm()
}

pub(crate) fn encode_ball(
    obs: &RawObservation,
    offset: &Vector3<f32>,
    config: &EncoderConfig,
) -> [f32; BALL_DIM] {
    let [x, y, _] = obs.ball;
    let zone = BallZone::classify(x, y, &config.zones);
    let speed = Vector3::from(obs.ball_direction).norm();
    let owned = if obs.ball_owned_team.is_owned() { 1.0 } else { 0.0 };
    let owned_by_us = if obs.ball_owned_team == BallOwner::Us { 1.0 } else { 0.0 };

    let mut out = [0.0; BALL_DIM];
    let mut w = FeatureWriter::new(&mut out);
    w.extend(&obs.ball);
    w.extend(&zone.one_hot());
    w.extend(offset.as_slice());
    w.extend_scaled(&obs.ball_direction, config.scales.ball_direction);
    w.push(speed * config.scales.ball_speed);
    w.push(owned);
    w.push(owned_by_us);
    w.finish();

    out
}
