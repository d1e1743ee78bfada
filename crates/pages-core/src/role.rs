//! Project membership roles.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WireError;

/// A user's permission level within a project.
///
/// Ordering goes through [`Role::rank`] rather than the declaration order or
/// the wire value, so reordering variants cannot change who may do what.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Role {
    Guest,
    Viewer,
    Member,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Guest, Role::Viewer, Role::Member, Role::Admin];

    /// Position in the permission order, lowest first.
    pub const fn rank(self) -> u8 {
        match self {
            Role::Guest => 0,
            Role::Viewer => 1,
            Role::Member => 2,
            Role::Admin => 3,
        }
    }

    pub fn at_least(self, other: Role) -> bool {
        self >= other
    }

    /// Value used by the API for this role.
    pub const fn wire_value(self) -> u8 {
        match self {
            Role::Guest => 5,
            Role::Viewer => 10,
            Role::Member => 15,
            Role::Admin => 20,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Viewer => "Viewer",
            Role::Member => "Member",
            Role::Admin => "Admin",
        }
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Role {
    type Error = WireError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Role::ALL
            .into_iter()
            .find(|role| role.wire_value() == value)
            .ok_or(WireError::UnknownRole(value))
    }
}

impl From<Role> for u8 {
    fn from(value: Role) -> Self {
        value.wire_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(Role::Guest < Role::Viewer);
        assert!(Role::Viewer < Role::Member);
        assert!(Role::Member < Role::Admin);
        assert_eq!(Role::ALL.iter().max(), Some(&Role::Admin));
    }

    #[test]
    fn test_at_least() {
        assert!(Role::Admin.at_least(Role::Member));
        assert!(Role::Member.at_least(Role::Member));
        assert!(!Role::Viewer.at_least(Role::Member));
        assert!(!Role::Guest.at_least(Role::Member));
    }

    #[test]
    fn test_wire_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::try_from(role.wire_value()), Ok(role));
        }
        assert_eq!(Role::try_from(7), Err(WireError::UnknownRole(7)));
        let parsed: Role = serde_json::from_str("15").unwrap();
        assert_eq!(parsed, Role::Member);
    }
}
