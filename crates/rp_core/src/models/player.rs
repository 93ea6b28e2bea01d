use serde::{Deserialize, Serialize};

/// Skill rank bounds. Rank 5 is the strongest player on the roster.
pub const MIN_RANK: u8 = 1;
pub const MAX_RANK: u8 = 5;

/// Roster entry for rotation scheduling.
///
/// # Boundary Contract
/// - `id` is the stable identity; everything downstream (play-time counters,
///   substitution diffs, report rows) is keyed on it.
/// - `name` is display-only and never used for identity.
/// - `present` is owned by the attendance collaborator; the engine only ever
///   sees the filtered present subset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub name: String,

    /// Skill rank (1..=5, higher is stronger).
    pub rank: u8,

    /// Attendance flag, toggled externally before scheduling.
    /// Default: false for backward-compat deserialization only.
    #[serde(default)]
    pub present: bool,
}

pub fn is_valid_rank(rank: u8) -> bool {
    (MIN_RANK..=MAX_RANK).contains(&rank)
}

impl Player {
    pub fn new(id: u32, name: impl Into<String>, rank: u8) -> Self {
        Self { id, name: name.into(), rank, present: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_bounds() {
        assert!(!is_valid_rank(0));
        assert!(is_valid_rank(1));
        assert!(is_valid_rank(5));
        assert!(!is_valid_rank(6));
    }

    #[test]
    fn present_defaults_to_false_on_deserialize() {
        let player: Player =
            serde_json::from_str(r#"{"id": 1, "name": "Luca", "rank": 5}"#).unwrap();
        assert!(!player.present);
        assert_eq!(player.rank, 5);
    }

    #[test]
    fn serde_round_trip_keeps_attendance() {
        let mut player = Player::new(3, "Arjun", 5);
        player.present = true;
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, player);
    }
}
