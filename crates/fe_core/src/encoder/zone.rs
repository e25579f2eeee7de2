//! Ball zone classification
//!
//! Six mutually exclusive pitch regions, checked in a fixed order so the
//! half-open boundaries below decide ties:
//!
//! ```text
//! LeftPenaltyBox   -end_x <= x <  -penalty_x   -penalty_y < y < penalty_y
//! LeftThird        -end_x <= x <  -middle_x    -end_y     < y < end_y
//! MiddleThird   -middle_x <= x <=  middle_x    -end_y     < y < end_y
//! RightPenaltyBox penalty_x < x <= end_x       -penalty_y < y < penalty_y
//! RightThird       middle_x < x <= end_x       -end_y     < y < end_y
//! Other            everything else
//! ```

use crate::config::ZoneThresholds;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BallZone {
    LeftPenaltyBox,
    LeftThird,
    MiddleThird,
    RightPenaltyBox,
    RightThird,
    Other,
}

impl BallZone {
    pub const COUNT: usize = 6;

    pub fn classify(x: f32, y: f32, t: &ZoneThresholds) -> Self {
        let in_box_y = -t.penalty_y < y && y < t.penalty_y;
        let in_pitch_y = -t.end_y < y && y < t.end_y;

        if (-t.end_x <= x && x < -t.penalty_x) && in_box_y {
            BallZone::LeftPenaltyBox
        } else if (-t.end_x <= x && x < -t.middle_x) && in_pitch_y {
            BallZone::LeftThird
        } else if (-t.middle_x <= x && x <= t.middle_x) && in_pitch_y {
            BallZone::MiddleThird
        } else if (t.penalty_x < x && x <= t.end_x) && in_box_y {
            BallZone::RightPenaltyBox
        } else if (t.middle_x < x && x <= t.end_x) && in_pitch_y {
            BallZone::RightThird
        } else {
            BallZone::Other
        }
    }

    pub fn one_hot(self) -> [f32; Self::COUNT] {
        let mut v = [0.0; Self::COUNT];
        v[self as usize] = 1.0;
        v
    }
}
