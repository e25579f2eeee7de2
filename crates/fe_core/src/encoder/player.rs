//! Active player features
//!
//! ## Layout (30 floats)
//! ```text
//! [0-9]   Legal actions without NO_OP and MOVE (avail[2..])
//! [10-11] Position (x, y)
//! [12-13] Direction (dx, dy) x player_direction scale
//! [14-23] Role one-hot
//! [24]    Speed x player_speed scale
//! [25]    Tired factor
//! [26]    Yellow card
//! [27]    On pitch
//! [28]    Dribbling (sticky)
//! [29]    Sprinting (sticky)
//! ```

use nalgebra::Vector2;

use super::avail::ActionMask;
use super::common::FeatureWriter;
use super::role::PlayerRole;
use crate::config::FeatureScales;
use crate::error::Result;
use crate::observation::RawObservation;

pub const PLAYER_DIM: usize = 30;

/// First avail index copied into the player vector
const AVAIL_OFFSET: usize = 2;

pub(crate) fn encode_player(
    obs: &RawObservation,
    avail: &ActionMask,
    scales: &FeatureScales,
) -> Result<[f32; PLAYER_DIM]> {
    let i = obs.active;
    let direction = obs.left_team_direction[i];
    let speed = Vector2::from(direction).norm();
    let role = PlayerRole::try_from(obs.left_team_roles[i])?;
    let flag = |b: bool| if b { 1.0 } else { 0.0 };

    let mut out = [0.0; PLAYER_DIM];
    let mut w = FeatureWriter::new(&mut out);
    w.extend(&avail.to_f32_array()[AVAIL_OFFSET..]);
    w.extend(&obs.left_team[i]);
    w.extend_scaled(&direction, scales.player_direction);
    w.extend(&role.one_hot());
    w.push(speed * scales.player_speed);
    w.push(obs.left_team_tired_factor[i]);
    w.push(obs.left_team_yellow_card[i].as_f32());
    w.push(obs.left_team_active[i].as_f32());
    w.push(flag(obs.is_dribbling()));
    w.push(flag(obs.is_sprinting()));
    w.finish();

    Ok(out)
}
