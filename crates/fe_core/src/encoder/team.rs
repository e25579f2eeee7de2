//! Team rows and closest-player selection
//!
//! ## Row Layout (10 floats)
//! ```text
//! [0-1] Position (x, y) x team_position scale (absolute, not player-relative)
//! [2-3] Direction (dx, dy) x player_direction scale
//! [4]   Tired factor
//! [5]   Yellow card
//! [6]   On pitch
//! [7]   Speed x player_speed scale
//! [8]   Distance to active player x team_distance scale
//! [9]   Cosine term (always 0)
//! ```

use nalgebra::Vector2;

use super::common::FeatureWriter;
use crate::config::FeatureScales;
use crate::observation::{Flag, RawObservation};

pub const TEAM_ROW_WIDTH: usize = 10;

pub const COL_POSITION: usize = 0;
pub const COL_DIRECTION: usize = 2;
pub const COL_TIRED: usize = 4;
pub const COL_YELLOW: usize = 5;
pub const COL_ACTIVE: usize = 6;
pub const COL_SPEED: usize = 7;
pub const COL_DISTANCE: usize = 8;
pub const COL_COSINE: usize = 9;

pub type TeamRow = [f32; TEAM_ROW_WIDTH];

/// Borrowed per-player columns of one side of the observation
pub(crate) struct TeamSide<'a> {
    positions: &'a [[f32; 2]],
    directions: &'a [[f32; 2]],
    tired: &'a [f32],
    yellow: &'a [Flag],
    active: &'a [Flag],
}

impl<'a> TeamSide<'a> {
    pub(crate) fn left(obs: &'a RawObservation) -> Self {
        Self {
            positions: &obs.left_team,
            directions: &obs.left_team_direction,
            tired: &obs.left_team_tired_factor,
            yellow: &obs.left_team_yellow_card,
            active: &obs.left_team_active,
        }
    }

    pub(crate) fn right(obs: &'a RawObservation) -> Self {
        Self {
            positions: &obs.right_team,
            directions: &obs.right_team_direction,
            tired: &obs.right_team_tired_factor,
            yellow: &obs.right_team_yellow_card,
            active: &obs.right_team_active,
        }
    }

    /// Row for player `i` plus its unscaled distance to `anchor`
    fn row(&self, i: usize, anchor: &Vector2<f32>, scales: &FeatureScales) -> (TeamRow, f32) {
        let pos = Vector2::from(self.positions[i]);
        let dir = Vector2::from(self.directions[i]);
        let distance = (pos - anchor).norm();

        let mut row = [0.0; TEAM_ROW_WIDTH];
        let mut w = FeatureWriter::new(&mut row);
        w.extend_scaled(&self.positions[i], scales.team_position);
        w.extend_scaled(&self.directions[i], scales.player_direction);
        w.push(self.tired[i]);
        w.push(self.yellow[i].as_f32());
        w.push(self.active[i].as_f32());
        w.push(dir.norm() * scales.player_speed);
        w.push(distance * scales.team_distance);
        w.push(0.0);
        w.finish();

        (row, distance)
    }
}

/// Rows for the players at `indices`, in that order, plus the closest row
pub(crate) fn encode_team<const N: usize>(
    side: &TeamSide<'_>,
    indices: [usize; N],
    anchor: &Vector2<f32>,
    scales: &FeatureScales,
) -> ([TeamRow; N], TeamRow) {
    let mut distances = [0.0f32; N];
    let rows: [TeamRow; N] = std::array::from_fn(|k| {
        let (row, distance) = side.row(indices[k], anchor, scales);
        distances[k] = distance;
        row
    });
    let closest = rows[closest_index(&distances)];
    (rows, closest)
}

/// Stable argmin: the first minimum wins ties
pub fn closest_index(distances: &[f32]) -> usize {
    let mut best = 0;
    for (i, &d) in distances.iter().enumerate().skip(1) {
        if d < distances[best] {
            best = i;
        }
    }
    best
}
