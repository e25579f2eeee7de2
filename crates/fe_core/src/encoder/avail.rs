//! Legal action inference
//!
//! Open play starts from "everything legal" and strips actions that cannot
//! apply given possession, held sticky actions and shot range. Set pieces
//! replace the open-play mask entirely, so they are resolved first.

use tracing::trace;

use crate::config::AvailThresholds;
use crate::observation::{BallOwner, GameMode, RawObservation};

// =============================================================================
// Action
// =============================================================================

/// Discrete action set, discriminant = policy output index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    NoOp = 0,
    Move = 1,
    LongPass = 2,
    HighPass = 3,
    ShortPass = 4,
    Shot = 5,
    Sprint = 6,
    ReleaseMove = 7,
    ReleaseSprint = 8,
    Slide = 9,
    Dribble = 10,
    ReleaseDribble = 11,
}

impl Action {
    pub const COUNT: usize = 12;

    pub const ALL: [Action; Self::COUNT] = [
        Action::NoOp,
        Action::Move,
        Action::LongPass,
        Action::HighPass,
        Action::ShortPass,
        Action::Shot,
        Action::Sprint,
        Action::ReleaseMove,
        Action::ReleaseSprint,
        Action::Slide,
        Action::Dribble,
        Action::ReleaseDribble,
    ];

    /// Actions that need the ball at the player's feet
    pub const ON_BALL: [Action; 5] =
        [Action::LongPass, Action::HighPass, Action::ShortPass, Action::Shot, Action::Dribble];

    pub fn index(self) -> usize {
        self as usize
    }
}

// =============================================================================
// ActionMask
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionMask([bool; Action::COUNT]);

impl ActionMask {
    pub fn all() -> Self {
        Self([true; Action::COUNT])
    }

    pub fn only(actions: &[Action]) -> Self {
        let mut mask = [false; Action::COUNT];
        for &a in actions {
            mask[a.index()] = true;
        }
        Self(mask)
    }

    pub fn allows(&self, action: Action) -> bool {
        self.0[action.index()]
    }

    pub fn disallow(&mut self, actions: &[Action]) {
        for &a in actions {
            self.0[a.index()] = false;
        }
    }

    pub fn legal_count(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    pub fn to_f32_array(&self) -> [f32; Action::COUNT] {
        self.0.map(|b| if b { 1.0 } else { 0.0 })
    }
}

// =============================================================================
// SetPiece
// =============================================================================

/// Restart situations whose mask overrides open-play rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetPiece {
    /// Our goal kick, ball deep in our half
    GoalKick,
    /// Our corner, ball at the opponent goal line
    Corner,
    /// Our penalty, ball at the opponent spot
    Penalty,
}

impl SetPiece {
    pub fn detect(mode: GameMode, ball_x: f32, t: &AvailThresholds) -> Option<Self> {
        match mode {
            GameMode::GoalKick if ball_x < t.goal_kick_max_x => Some(SetPiece::GoalKick),
            GameMode::Corner if ball_x > t.corner_min_x => Some(SetPiece::Corner),
            GameMode::Penalty if ball_x > t.penalty_min_x => Some(SetPiece::Penalty),
            _ => None,
        }
    }

    pub fn mask(self) -> ActionMask {
        match self {
            SetPiece::GoalKick | SetPiece::Corner => ActionMask::only(&[
                Action::NoOp,
                Action::LongPass,
                Action::HighPass,
                Action::ShortPass,
            ]),
            SetPiece::Penalty => ActionMask::only(&[Action::NoOp, Action::Shot]),
        }
    }
}

// =============================================================================
// Inference
// =============================================================================

/// Legal actions for the active player
///
/// `ball_distance` is the planar distance from the active player to the ball.
pub fn infer_avail(obs: &RawObservation, ball_distance: f32, t: &AvailThresholds) -> ActionMask {
    let [ball_x, ball_y, _] = obs.ball;

    if let Some(set_piece) = SetPiece::detect(obs.game_mode, ball_x, t) {
        trace!(?set_piece, ball_x, "set piece mask override");
        return set_piece.mask();
    }

    let mut mask = ActionMask::all();

    let loose_out_of_reach = obs.ball_owned_team == BallOwner::Nobody
        && ball_distance > t.contested_ball_distance
        && obs.game_mode == GameMode::Normal;
    if obs.ball_owned_team == BallOwner::Opponent || loose_out_of_reach {
        mask.disallow(&Action::ON_BALL);
    } else {
        mask.disallow(&[Action::Slide]);
    }

    if !obs.is_sprinting() {
        mask.disallow(&[Action::ReleaseSprint]);
    }

    if obs.is_dribbling() {
        mask.disallow(&[Action::Slide]);
    } else {
        mask.disallow(&[Action::ReleaseDribble]);
    }

    if !obs.is_moving() {
        mask.disallow(&[Action::ReleaseMove]);
    }

    let y = t.shot_max_abs_y;
    if ball_x < t.shot_min_x || ball_y < -y || y < ball_y {
        mask.disallow(&[Action::Shot]);
    } else if (t.shot_min_x <= ball_x && ball_x <= t.shot_max_x) && (-y <= ball_y && ball_y <= y) {
        // Inside the shot box
        mask.disallow(&[Action::HighPass, Action::LongPass]);
    }

    mask
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::{sample_observation, Flag, STICKY_DRIBBLE, STICKY_SPRINT};

    fn avail(obs: &RawObservation, ball_distance: f32) -> [f32; Action::COUNT] {
        infer_avail(obs, ball_distance, &AvailThresholds::default()).to_f32_array()
    }

    fn with_ball(x: f32, y: f32) -> RawObservation {
        let mut obs = sample_observation();
        obs.ball = [x, y, 0.0];
        obs
    }

    // ========== Set pieces ==========

    #[test]
    fn test_penalty_override() {
        let mut obs = with_ball(0.7, 0.0);
        obs.game_mode = GameMode::Penalty;
        assert_eq!(avail(&obs, 0.5), [1., 0., 0., 0., 0., 1., 0., 0., 0., 0., 0., 0.]);
    }

    #[test]
    fn test_goal_kick_override() {
        let mut obs = with_ball(-0.8, 0.0);
        obs.game_mode = GameMode::GoalKick;
        assert_eq!(avail(&obs, 0.5), [1., 0., 1., 1., 1., 0., 0., 0., 0., 0., 0., 0.]);
    }

    #[test]
    fn test_corner_override() {
        let mut obs = with_ball(0.95, 0.4);
        obs.game_mode = GameMode::Corner;
        obs.ball_owned_team = BallOwner::Opponent;
        obs.sticky_actions[STICKY_SPRINT] = Flag::Bool(true);
        assert_eq!(avail(&obs, 0.5), [1., 0., 1., 1., 1., 0., 0., 0., 0., 0., 0., 0.]);
    }

    #[test]
    fn test_set_piece_needs_ball_position() {
        let t = AvailThresholds::default();
        assert_eq!(SetPiece::detect(GameMode::GoalKick, -0.7, &t), None);
        assert_eq!(SetPiece::detect(GameMode::Corner, 0.9, &t), None);
        assert_eq!(SetPiece::detect(GameMode::Penalty, 0.6, &t), None);
        assert_eq!(SetPiece::detect(GameMode::Penalty, 0.61, &t), Some(SetPiece::Penalty));
        assert_eq!(SetPiece::detect(GameMode::FreeKick, 0.95, &t), None);
    }

    // ========== Possession ==========

    #[test]
    fn test_opponent_possession_blocks_on_ball_actions() {
        let mut obs = with_ball(0.0, 0.0);
        obs.ball_owned_team = BallOwner::Opponent;
        let mask = infer_avail(&obs, 0.0, &AvailThresholds::default());
        for a in Action::ON_BALL {
            assert!(!mask.allows(a), "{a:?} should be illegal");
        }
        assert!(mask.allows(Action::Slide));
    }

    #[test]
    fn test_loose_ball_far_away_blocks_on_ball_actions() {
        let mut obs = with_ball(0.0, 0.0);
        obs.ball_owned_team = BallOwner::Nobody;
        let mask = infer_avail(&obs, 0.05, &AvailThresholds::default());
        assert!(!mask.allows(Action::ShortPass));
        assert!(mask.allows(Action::Slide));
    }

    #[test]
    fn test_loose_ball_within_reach_allows_passing() {
        let mut obs = with_ball(0.0, 0.0);
        obs.ball_owned_team = BallOwner::Nobody;
        let mask = infer_avail(&obs, 0.03, &AvailThresholds::default());
        assert!(mask.allows(Action::ShortPass));
        assert!(!mask.allows(Action::Slide));
    }

    #[test]
    fn test_loose_ball_outside_normal_play_allows_passing() {
        let mut obs = with_ball(0.0, 0.0);
        obs.ball_owned_team = BallOwner::Nobody;
        obs.game_mode = GameMode::ThrowIn;
        let mask = infer_avail(&obs, 0.5, &AvailThresholds::default());
        assert!(mask.allows(Action::LongPass));
        assert!(!mask.allows(Action::Slide));
    }

    #[test]
    fn test_our_possession_blocks_slide() {
        let obs = with_ball(0.0, 0.0);
        let mask = infer_avail(&obs, 0.5, &AvailThresholds::default());
        assert!(!mask.allows(Action::Slide));
        assert!(mask.allows(Action::Dribble));
    }

    // ========== Sticky actions ==========

    #[test]
    fn test_release_actions_need_held_state() {
        let obs = with_ball(0.0, 0.0);
        let mask = infer_avail(&obs, 0.0, &AvailThresholds::default());
        assert!(!mask.allows(Action::ReleaseSprint));
        assert!(!mask.allows(Action::ReleaseDribble));
        assert!(!mask.allows(Action::ReleaseMove));

        let mut held = obs.clone();
        held.sticky_actions[STICKY_SPRINT] = Flag::Bool(true);
        held.sticky_actions[STICKY_DRIBBLE] = Flag::Bool(true);
        held.sticky_actions[0] = Flag::Number(1.0);
        let mask = infer_avail(&held, 0.0, &AvailThresholds::default());
        assert!(mask.allows(Action::ReleaseSprint));
        assert!(mask.allows(Action::ReleaseDribble));
        assert!(mask.allows(Action::ReleaseMove));
    }

    #[test]
    fn test_dribbling_blocks_slide_even_without_possession() {
        let mut obs = with_ball(0.0, 0.0);
        obs.ball_owned_team = BallOwner::Opponent;
        obs.sticky_actions[STICKY_DRIBBLE] = Flag::Bool(true);
        let mask = infer_avail(&obs, 0.0, &AvailThresholds::default());
        assert!(!mask.allows(Action::Slide));
        assert!(mask.allows(Action::ReleaseDribble));
    }

    // ========== Shot range ==========

    #[test]
    fn test_shot_only_inside_box() {
        let t = AvailThresholds::default();
        assert!(!infer_avail(&with_ball(0.5, 0.0), 0.0, &t).allows(Action::Shot));
        assert!(!infer_avail(&with_ball(0.8, 0.3), 0.0, &t).allows(Action::Shot));
        assert!(!infer_avail(&with_ball(0.8, -0.3), 0.0, &t).allows(Action::Shot));

        let in_box = infer_avail(&with_ball(0.64, 0.27), 0.0, &t);
        assert!(in_box.allows(Action::Shot));
        assert!(!in_box.allows(Action::HighPass));
        assert!(!in_box.allows(Action::LongPass));
        assert!(in_box.allows(Action::ShortPass));
    }

    #[test]
    fn test_beyond_goal_line_keeps_shot_and_high_pass() {
        let mask = infer_avail(&with_ball(1.05, 0.0), 0.0, &AvailThresholds::default());
        assert!(mask.allows(Action::Shot));
        assert!(mask.allows(Action::HighPass));
    }

    #[test]
    fn test_mask_values_are_binary() {
        let mut obs = with_ball(0.3, 0.1);
        obs.ball_owned_team = BallOwner::Nobody;
        for v in avail(&obs, 0.2) {
            assert!(v == 0.0 || v == 1.0);
        }
    }

    #[test]
    fn test_mask_helpers() {
        let mask = ActionMask::only(&[Action::NoOp, Action::Shot]);
        assert_eq!(mask.legal_count(), 2);
        assert_eq!(ActionMask::all().legal_count(), Action::COUNT);
        for (i, a) in Action::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
        }
    }
}
