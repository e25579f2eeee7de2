//! Raw observation record as emitted by the environment each step

use nalgebra::{Vector2, Vector3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{BallOwner, Flag, GameMode};
use crate::encoder::role::PlayerRole;
use crate::error::{EncodeError, Result};

/// Players per side
pub const PLAYERS_PER_TEAM: usize = 11;

/// Sticky action slots: 0-7 movement directions, 8 sprint, 9 dribble
pub const STICKY_ACTION_COUNT: usize = 10;

pub const STICKY_SPRINT: usize = 8;
pub const STICKY_DRIBBLE: usize = 9;

/// One environment step, left team = controlled side
///
/// Coordinates follow the environment convention: x in [-1, 1] toward the
/// opponent goal, y in [-0.42, 0.42]. Keys the encoder does not read (score,
/// steps_left, right_team_roles, ...) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RawObservation {
    /// Index of the controlled player in the left team
    pub active: usize,

    pub left_team: Vec<[f32; 2]>,
    pub left_team_direction: Vec<[f32; 2]>,
    pub left_team_tired_factor: Vec<f32>,
    pub left_team_yellow_card: Vec<Flag>,
    pub left_team_active: Vec<Flag>,
    /// Role ids in [0, 9]
    pub left_team_roles: Vec<u8>,

    pub right_team: Vec<[f32; 2]>,
    pub right_team_direction: Vec<[f32; 2]>,
    pub right_team_tired_factor: Vec<f32>,
    pub right_team_yellow_card: Vec<Flag>,
    pub right_team_active: Vec<Flag>,

    pub ball: [f32; 3],
    pub ball_direction: [f32; 3],
    #[schemars(with = "i8")]
    pub ball_owned_team: BallOwner,
    #[schemars(with = "u8")]
    pub game_mode: GameMode,

    pub sticky_actions: [Flag; STICKY_ACTION_COUNT],
}

impl RawObservation {
    /// Parse and validate one observation
    pub fn from_json_str(json: &str) -> Result<Self> {
        let obs: RawObservation = serde_json::from_str(json)?;
        obs.validate()?;
        Ok(obs)
    }

    /// Check every shape and range precondition the encoder relies on
    pub fn validate(&self) -> Result<()> {
        check_len("left_team", self.left_team.len())?;
        check_len("left_team_direction", self.left_team_direction.len())?;
        check_len("left_team_tired_factor", self.left_team_tired_factor.len())?;
        check_len("left_team_yellow_card", self.left_team_yellow_card.len())?;
        check_len("left_team_active", self.left_team_active.len())?;
        check_len("left_team_roles", self.left_team_roles.len())?;
        check_len("right_team", self.right_team.len())?;
        check_len("right_team_direction", self.right_team_direction.len())?;
        check_len("right_team_tired_factor", self.right_team_tired_factor.len())?;
        check_len("right_team_yellow_card", self.right_team_yellow_card.len())?;
        check_len("right_team_active", self.right_team_active.len())?;

        if self.active >= PLAYERS_PER_TEAM {
            return Err(EncodeError::invalid(
                "active",
                format!("index {} out of range for {} players", self.active, PLAYERS_PER_TEAM),
            ));
        }

        for &role in &self.left_team_roles {
            PlayerRole::try_from(role)?;
        }

        Ok(())
    }

    pub fn active_position(&self) -> Vector2<f32> {
        Vector2::from(self.left_team[self.active])
    }

    pub fn ball_position(&self) -> Vector3<f32> {
        Vector3::from(self.ball)
    }

    pub fn is_sprinting(&self) -> bool {
        self.sticky_actions[STICKY_SPRINT].is_set()
    }

    pub fn is_dribbling(&self) -> bool {
        self.sticky_actions[STICKY_DRIBBLE].is_set()
    }

    /// Any of the eight movement directions held
    pub fn is_moving(&self) -> bool {
        self.sticky_actions[..STICKY_SPRINT].iter().any(|f| f.is_set())
    }
}

fn check_len(field: &'static str, len: usize) -> Result<()> {
    if len == PLAYERS_PER_TEAM {
        Ok(())
    } else {
        Err(EncodeError::invalid(
            field,
            format!("expected {} entries, found {}", PLAYERS_PER_TEAM, len),
        ))
    }
}

/// Deterministic mid-game observation shared by unit tests
#[cfg(test)]
pub(crate) fn sample_observation() -> RawObservation {
    RawObservation {
        active: 5,
        left_team: (0..PLAYERS_PER_TEAM)
            .map(|i| [-0.9 + 0.15 * i as f32, -0.2 + 0.04 * i as f32])
            .collect(),
        left_team_direction: (0..PLAYERS_PER_TEAM)
            .map(|i| [0.001 * i as f32, -0.002])
            .collect(),
        left_team_tired_factor: (0..PLAYERS_PER_TEAM).map(|i| 0.01 * i as f32).collect(),
        left_team_yellow_card: (0..PLAYERS_PER_TEAM).map(|i| Flag::Bool(i == 3)).collect(),
        left_team_active: vec![Flag::Bool(true); PLAYERS_PER_TEAM],
        left_team_roles: vec![0, 1, 1, 2, 3, 5, 5, 6, 7, 9, 9],
        right_team: (0..PLAYERS_PER_TEAM)
            .map(|i| [0.9 - 0.15 * i as f32, 0.2 - 0.04 * i as f32])
            .collect(),
        right_team_direction: (0..PLAYERS_PER_TEAM)
            .map(|i| [-0.001 * i as f32, 0.003])
            .collect(),
        right_team_tired_factor: vec![0.05; PLAYERS_PER_TEAM],
        right_team_yellow_card: vec![Flag::Number(0.0); PLAYERS_PER_TEAM],
        right_team_active: (0..PLAYERS_PER_TEAM).map(|i| Flag::Number((i != 10) as u8 as f32)).collect(),
        ball: [-0.1, 0.01, 0.1],
        ball_direction: [0.01, 0.0, -0.005],
        ball_owned_team: BallOwner::Us,
        game_mode: GameMode::Normal,
        sticky_actions: [Flag::Bool(false); STICKY_ACTION_COUNT],
    }
}

// =============================================================================
// Tests
// =============================================================================
