//! Player role one-hot

use crate::error::EncodeError;

/// Environment role ids, discriminant = wire value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PlayerRole {
    Goalkeeper = 0,
    CentreBack = 1,
    LeftBack = 2,
    RightBack = 3,
    DefensiveMidfield = 4,
    CentralMidfield = 5,
    LeftMidfield = 6,
    RightMidfield = 7,
    AttackingMidfield = 8,
    CentreForward = 9,
}

impl PlayerRole {
    /// Number of roles (one-hot width)
    pub const COUNT: usize = 10;

    pub fn one_hot(self) -> [f32; Self::COUNT] {
        let mut v = [0.0; Self::COUNT];
        v[self as usize] = 1.0;
        v
    }
}

impl TryFrom<u8> for PlayerRole {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use PlayerRole::*;
        const ALL: [PlayerRole; PlayerRole::COUNT] = [
            Goalkeeper,
            CentreBack,
            LeftBack,
            RightBack,
            DefensiveMidfield,
            CentralMidfield,
            LeftMidfield,
            RightMidfield,
            AttackingMidfield,
            CentreForward,
        ];
        ALL.get(value as usize).copied().ok_or_else(|| {
            EncodeError::invalid("left_team_roles", format!("role id {value} outside [0, 9]"))
        })
    }
}
