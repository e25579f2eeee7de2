//! Small typed values carried by the raw observation

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EncodeError;

// =============================================================================
// GameMode
// =============================================================================

/// Restart type reported by the environment (wire value = discriminant)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum GameMode {
    /// Open play
    #[default]
    Normal = 0,
    KickOff = 1,
    GoalKick = 2,
    FreeKick = 3,
    Corner = 4,
    ThrowIn = 5,
    Penalty = 6,
}

impl GameMode {
    pub const COUNT: usize = 7;
}

impl TryFrom<u8> for GameMode {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => GameMode::Normal,
            1 => GameMode::KickOff,
            2 => GameMode::GoalKick,
            3 => GameMode::FreeKick,
            4 => GameMode::Corner,
            5 => GameMode::ThrowIn,
            6 => GameMode::Penalty,
            other => {
                return Err(EncodeError::invalid("game_mode", format!("unknown game mode {other}")))
            }
        })
    }
}

impl From<GameMode> for u8 {
    fn from(mode: GameMode) -> Self {
        mode as u8
    }
}

// =============================================================================
// BallOwner
// =============================================================================

/// Which team holds the ball (wire values -1 / 0 / 1)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum BallOwner {
    /// Loose or in flight
    #[default]
    Nobody,
    /// Left team (the controlled side)
    Us,
    /// Right team
    Opponent,
}

impl BallOwner {
    pub fn is_owned(self) -> bool {
        self != BallOwner::Nobody
    }
}

impl TryFrom<i8> for BallOwner {
    type Error = EncodeError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(BallOwner::Nobody),
            0 => Ok(BallOwner::Us),
            1 => Ok(BallOwner::Opponent),
            other => {
                Err(EncodeError::invalid("ball_owned_team", format!("expected -1, 0 or 1, got {other}")))
            }
        }
    }
}

impl From<BallOwner> for i8 {
    fn from(owner: BallOwner) -> Self {
        match owner {
            BallOwner::Nobody => -1,
            BallOwner::Us => 0,
            BallOwner::Opponent => 1,
        }
    }
}

// =============================================================================
// Flag
// =============================================================================

/// Binary flag that environments emit either as a bool or as 0/1
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Number(f32),
}

impl Flag {
    pub fn is_set(self) -> bool {
        match self {
            Flag::Bool(b) => b,
            Flag::Number(n) => n != 0.0,
        }
    }

    pub fn as_f32(self) -> f32 {
        if self.is_set() {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for Flag {
    fn default() -> Self {
        Flag::Bool(false)
    }
}

impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        Flag::Bool(b)
    }
}
