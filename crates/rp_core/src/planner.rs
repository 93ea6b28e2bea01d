//! Stateful planning façade: generate-then-report flow.

use crate::analysis::report::{build_play_time_report, PlayerReport};
use crate::engine::RotationScheduler;
use crate::error::{Result, ScheduleError};
use crate::models::{GameFormat, Player, Schedule};

/// Owns the game format and the most recently generated schedule.
///
/// Mirrors the generate/report flow of a match-day session: a report can only
/// be produced once a schedule exists, and regenerating replaces the retained
/// schedule along with anything derived from the old one.
pub struct RotationPlanner {
    scheduler: RotationScheduler,
    schedule: Option<Schedule>,
}

impl RotationPlanner {
    pub fn new(format: GameFormat) -> Result<Self> {
        Ok(Self { scheduler: RotationScheduler::new(format)?, schedule: None })
    }

    pub fn format(&self) -> &GameFormat {
        self.scheduler.format()
    }

    /// Run the scheduler and retain the result.
    pub fn generate(
        &mut self,
        present_players: &[Player],
        competitive_balance: u8,
    ) -> Result<&Schedule> {
        let schedule = self.scheduler.generate(present_players, competitive_balance)?;
        Ok(self.schedule.insert(schedule))
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Build the play-time report from the retained schedule.
    pub fn report(&self) -> Result<Vec<PlayerReport>> {
        let schedule = self.schedule.as_ref().ok_or(ScheduleError::NoSchedule)?;
        Ok(build_play_time_report(schedule))
    }
}
