use super::player::Player;
use crate::error::{Result, ScheduleError};
use serde::{Deserialize, Serialize};

/// Default game length in minutes.
pub const DEFAULT_TOTAL_MINUTES: u32 = 40;
/// Default rotation period length in minutes.
pub const DEFAULT_ROTATION_MINUTES: u32 = 5;

/// Game timing configuration.
///
/// The defaults (40-minute game, 5-minute rotations, 8 slots) match the
/// standard youth-game setup, but both values are accepted generically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameFormat {
    pub total_minutes: u32,
    pub rotation_minutes: u32,
}

impl Default for GameFormat {
    fn default() -> Self {
        Self {
            total_minutes: DEFAULT_TOTAL_MINUTES,
            rotation_minutes: DEFAULT_ROTATION_MINUTES,
        }
    }
}

impl GameFormat {
    pub fn new(total_minutes: u32, rotation_minutes: u32) -> Self {
        Self { total_minutes, rotation_minutes }
    }

    /// The rotation length must evenly divide the game length; a fractional
    /// final slot has no defined selection semantics.
    pub fn validate(&self) -> Result<()> {
        if self.total_minutes == 0
            || self.rotation_minutes == 0
            || self.total_minutes % self.rotation_minutes != 0
        {
            return Err(ScheduleError::InvalidFormat {
                total_minutes: self.total_minutes,
                rotation_minutes: self.rotation_minutes,
            });
        }
        Ok(())
    }

    pub fn slot_count(&self) -> usize {
        (self.total_minutes / self.rotation_minutes) as usize
    }

    /// Quarter length used by the minute-label formatter.
    pub fn quarter_minutes(&self) -> u32 {
        (self.total_minutes / 4).max(1)
    }
}

/// Structurally notable point of the game, derived from slot position.
///
/// Carried on each slot as display metadata. Selection never consults it:
/// forcing full-strength lineups at key moments is behavior the planner does
/// not exhibit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyMoment {
    Opening,
    Midpoint,
    Closing,
}

impl KeyMoment {
    pub fn of(slot_index: usize, slot_count: usize) -> Option<Self> {
        if slot_index == 0 {
            Some(KeyMoment::Opening)
        } else if slot_count > 0 && slot_index == slot_count - 1 {
            Some(KeyMoment::Closing)
        } else if slot_index == slot_count / 2 {
            Some(KeyMoment::Midpoint)
        } else {
            None
        }
    }
}

/// One rotation period and the players on the field for it.
///
/// Player order is selection order (highest combined score first), which is
/// what the substitution diff pairs on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slot {
    pub index: usize,
    pub key_moment: Option<KeyMoment>,
    pub players: Vec<Player>,
}

impl Slot {
    pub fn contains(&self, player_id: u32) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn start_minute(&self, format: &GameFormat) -> u32 {
        self.index as u32 * format.rotation_minutes
    }

    pub fn end_minute(&self, format: &GameFormat) -> u32 {
        ((self.index as u32 + 1) * format.rotation_minutes).min(format.total_minutes)
    }
}

/// A finished scheduling run: the format it was generated for, the present
/// players it was fed, and the time-ordered slot sequence.
///
/// Immutable once returned; reports and substitution diffs are derived views
/// recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    pub format: GameFormat,
    pub players: Vec<Player>,
    pub slots: Vec<Slot>,
}
