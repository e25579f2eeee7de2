//! Shared observation fixtures for integration tests

#![allow(dead_code)]

use fe_core::RawObservation;
use serde_json::{json, Value};

/// Kick-off-like layout: left team in own half, right team mirrored
pub fn base_observation_json() -> Value {
    let left: Vec<[f32; 2]> = (0..11)
        .map(|i| [-0.95 + 0.085 * i as f32, -0.3 + 0.06 * i as f32])
        .collect();
    let right: Vec<[f32; 2]> = left.iter().map(|[x, y]| [-x, -y]).collect();

    json!({
        "active": 6,
        "left_team": left,
        "left_team_direction": vec![[0.001, -0.0005]; 11],
        "left_team_tired_factor": vec![0.0; 11],
        "left_team_yellow_card": vec![false; 11],
        "left_team_active": vec![true; 11],
        "left_team_roles": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 9],
        "right_team": right,
        "right_team_direction": vec![[-0.001, 0.0]; 11],
        "right_team_tired_factor": vec![0.02; 11],
        "right_team_yellow_card": vec![0; 11],
        "right_team_active": vec![1; 11],
        "right_team_roles": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 9],
        "ball": [0.0, 0.0, 0.11],
        "ball_direction": [0.0, 0.0, 0.0],
        "ball_owned_team": -1,
        "ball_owned_player": -1,
        "game_mode": 0,
        "score": [0, 0],
        "steps_left": 3001,
        "sticky_actions": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
    })
}

pub fn parse(value: &Value) -> RawObservation {
    RawObservation::from_json_str(&value.to_string()).expect("fixture should be valid")
}

pub fn base_observation() -> RawObservation {
    parse(&base_observation_json())
}
