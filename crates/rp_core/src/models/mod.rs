pub mod game;
pub mod player;
pub mod roster;

pub use game::{
    GameFormat, KeyMoment, Schedule, Slot, DEFAULT_ROTATION_MINUTES, DEFAULT_TOTAL_MINUTES,
};
pub use player::{is_valid_rank, Player, MAX_RANK, MIN_RANK};
pub use roster::Roster;
