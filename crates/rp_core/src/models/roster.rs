use super::player::{is_valid_rank, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Caller-owned roster with attendance state.
///
/// The roster is configured once and then only its `present` flags change.
/// Attendance lives here, in an explicitly passed value, never in module
/// state; the scheduler receives the filtered present subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn validate(&self) -> Result<(), String> {
        let mut seen_ids = HashSet::new();
        for player in &self.players {
            if player.id == 0 {
                return Err(format!("Player id must be a positive integer: {}", player.name));
            }
            if !seen_ids.insert(player.id) {
                return Err(format!("Duplicate player id in roster: {}", player.id));
            }
            if player.name.trim().is_empty() {
                return Err(format!("Player {} has an empty name", player.id));
            }
            if !is_valid_rank(player.rank) {
                return Err(format!(
                    "Player {} has rank {} outside 1..=5",
                    player.name, player.rank
                ));
            }
        }
        Ok(())
    }

    /// The filtered present subset, in roster order.
    pub fn present_players(&self) -> Vec<Player> {
        self.players.iter().filter(|p| p.present).cloned().collect()
    }

    /// Returns false if no player has this id.
    pub fn set_present(&mut self, id: u32, present: bool) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.present = present;
                true
            }
            None => false,
        }
    }

    /// Returns false if no player has this id.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.present = !player.present;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        Roster::new(vec![
            Player::new(1, "Luca", 5),
            Player::new(2, "Johnathan", 5),
            Player::new(3, "Arjun", 5),
            Player::new(4, "Trax", 4),
        ])
    }

    #[test]
    fn validate_accepts_sample() {
        assert!(sample_roster().validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut roster = sample_roster();
        roster.players.push(Player::new(1, "Clone", 3));
        let err = roster.validate().unwrap_err();
        assert!(err.contains("Duplicate player id"), "{err}");
    }

    #[test]
    fn validate_rejects_zero_id() {
        let roster = Roster::new(vec![Player::new(0, "Ghost", 3)]);
        assert!(roster.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_name_and_bad_rank() {
        let roster = Roster::new(vec![Player::new(1, "  ", 3)]);
        assert!(roster.validate().is_err());

        let roster = Roster::new(vec![Player::new(1, "Nishtha", 0)]);
        assert!(roster.validate().is_err());
    }

    #[test]
    fn attendance_toggling_filters_present_subset() {
        let mut roster = sample_roster();
        assert!(roster.present_players().is_empty());

        assert!(roster.set_present(1, true));
        assert!(roster.toggle(3));
        assert!(!roster.set_present(99, true));

        let present = roster.present_players();
        assert_eq!(present.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

        roster.toggle(3);
        assert_eq!(roster.present_players().len(), 1);
    }
}
