//! Derived views over a finished schedule.
//!
//! Everything here is a pure function of an immutable `Schedule`: the
//! play-time report and the minute-label formatter. Nothing mutates or
//! caches.

pub mod format;
pub mod report;


pub use format::minute_label;
pub use report::{build_play_time_report, Interval, PlayerReport};
