//! Observation Module - the per-step environment record
//!
//! The encoder reads only from [`RawObservation`]; nothing about the
//! environment that produced it leaks into feature computation.

mod raw;
mod types;

pub use raw::{RawObservation, PLAYERS_PER_TEAM, STICKY_ACTION_COUNT, STICKY_DRIBBLE, STICKY_SPRINT};
pub use types::{BallOwner, Flag, GameMode};

#[cfg(test)]
pub(crate) use raw::sample_observation;
