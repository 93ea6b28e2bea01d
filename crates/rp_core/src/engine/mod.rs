pub mod scheduler;
pub mod selector;
pub mod substitutions;

pub use scheduler::{PlayTimeCounter, RotationScheduler, MIN_PRESENT_PLAYERS};
pub use selector::{MAX_PLAY_TIME_DIFFERENCE, PLAYERS_NEEDED};
pub use substitutions::{substitutions, Substitution};
