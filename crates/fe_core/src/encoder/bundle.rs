//! Output bundle and dimension descriptor

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::avail::Action;
use super::ball::BALL_DIM;
use super::player::PLAYER_DIM;
use super::team::{TeamRow, TEAM_ROW_WIDTH};
use crate::observation::PLAYERS_PER_TEAM;

/// Teammate rows (active player removed)
pub const LEFT_TEAM_ROWS: usize = PLAYERS_PER_TEAM - 1;
/// Opponent rows
pub const RIGHT_TEAM_ROWS: usize = PLAYERS_PER_TEAM;

// =============================================================================
// FeatureBundle
// =============================================================================

/// Encoded features for one step
///
/// ## Flat Vector Layout (290 floats)
/// ```text
/// [0-29]    player
/// [30-47]   ball
/// [48-147]  left_team (10 rows x 10)
/// [148-157] left_closest
/// [158-267] right_team (11 rows x 10)
/// [268-277] right_closest
/// [278-289] avail
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeatureBundle {
    pub player: [f32; PLAYER_DIM],
    pub ball: [f32; BALL_DIM],
    pub left_team: [TeamRow; LEFT_TEAM_ROWS],
    pub left_closest: TeamRow,
    pub right_team: [TeamRow; RIGHT_TEAM_ROWS],
    pub right_closest: TeamRow,
    pub avail: [f32; Action::COUNT],
}

impl FeatureBundle {
    /// Total size of flat vector output
    pub const FLAT_SIZE: usize = PLAYER_DIM
        + BALL_DIM
        + LEFT_TEAM_ROWS * TEAM_ROW_WIDTH
        + TEAM_ROW_WIDTH
        + RIGHT_TEAM_ROWS * TEAM_ROW_WIDTH
        + TEAM_ROW_WIDTH
        + Action::COUNT;

    /// Concatenate every group in key order
    pub fn to_flat_vector(&self) -> Vec<f32> {
        let mut v = Vec::with_capacity(Self::FLAT_SIZE);
        v.extend_from_slice(&self.player);
        v.extend_from_slice(&self.ball);
        self.left_team.iter().for_each(|row| v.extend_from_slice(row));
        v.extend_from_slice(&self.left_closest);
        self.right_team.iter().for_each(|row| v.extend_from_slice(row));
        v.extend_from_slice(&self.right_closest);
        v.extend_from_slice(&self.avail);

        debug_assert_eq!(v.len(), Self::FLAT_SIZE);
        v
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// =============================================================================
// FeatureDims
// =============================================================================

/// Group sizes advertised to the policy network
///
/// These are the consumer's contractual constants, including the
/// `*_team_closest` key names, and are not derived from array lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FeatureDims {
    pub player: usize,
    pub ball: usize,
    pub left_team: usize,
    pub left_team_closest: usize,
    pub right_team: usize,
    pub right_team_closest: usize,
}

impl FeatureDims {
    pub const STANDARD: FeatureDims = FeatureDims {
        player: 30,
        ball: 18,
        left_team: 10,
        left_team_closest: 10,
        right_team: 10,
        right_team_closest: 10,
    };

    /// (name, size) pairs in declaration order
    pub fn entries(&self) -> [(&'static str, usize); 6] {
        [
            ("player", self.player),
            ("ball", self.ball),
            ("left_team", self.left_team),
            ("left_team_closest", self.left_team_closest),
            ("right_team", self.right_team),
            ("right_team_closest", self.right_team_closest),
        ]
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries().into_iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }
}

impl Default for FeatureDims {
    fn default() -> Self {
        Self::STANDARD
    }
}
