//! # rp_core - Deterministic Play-Time Rotation Scheduler
//!
//! This library assigns players from a roster to fixed-length rotation slots
//! of a fixed-duration game, balancing equal play time against field strength
//! by skill rank with a single 0..=100 knob, and derives per-player
//! play/sideline-time reports from the result.
//!
//! ## Features
//! - 100% deterministic scheduling (same inputs = same slot sequence)
//! - Merged field/sideline minute intervals per player
//! - Substitution diffs between adjacent slots
//! - JSON API for easy integration

pub mod analysis;
pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod planner;

// Re-export main API functions
pub use api::{generate_schedule_json, play_time_report_json};
pub use error::{Result, ScheduleError};

// Re-export core model types
pub use models::{GameFormat, KeyMoment, Player, Roster, Schedule, Slot};

// Re-export engine and analysis entry points
pub use analysis::{build_play_time_report, minute_label, Interval, PlayerReport};
pub use engine::{substitutions, RotationScheduler, Substitution};
pub use planner::RotationPlanner;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
