//! String-in/string-out JSON boundary for embedding hosts.
//!
//! Requests are fully validated (schema version, balance range, roster,
//! format) before any scheduling runs; a call either succeeds with a complete
//! response or returns an error with no partial output.

use serde::{Deserialize, Serialize};

use crate::analysis::format::minute_label;
use crate::analysis::report::build_play_time_report;
use crate::engine::{substitutions, RotationScheduler};
use crate::error::{Result, ScheduleError};
use crate::models::{
    GameFormat, KeyMoment, Player, Roster, Schedule, DEFAULT_ROTATION_MINUTES,
    DEFAULT_TOTAL_MINUTES,
};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub schema_version: u8,
    pub players: Vec<PlayerData>,
    /// 0 = pure fairness, 100 = pure skill ranking.
    pub competitive_balance: u8,
    #[serde(default = "default_total_minutes")]
    pub total_minutes: u32,
    #[serde(default = "default_rotation_minutes")]
    pub rotation_minutes: u32,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    pub id: u32,
    pub name: String,
    pub rank: u8,
    /// Defaults to true: requests usually list exactly who showed up.
    #[serde(default = "default_present")]
    pub present: bool,
}

fn default_present() -> bool {
    true
}

fn default_total_minutes() -> u32 {
    DEFAULT_TOTAL_MINUTES
}

fn default_rotation_minutes() -> u32 {
    DEFAULT_ROTATION_MINUTES
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub schema_version: u8,
    pub total_minutes: u32,
    pub rotation_minutes: u32,
    pub slots: Vec<SlotView>,
}

#[derive(Debug, Serialize)]
pub struct SlotView {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_moment: Option<KeyMoment>,
    pub start_minute: u32,
    pub end_minute: u32,
    pub start_label: String,
    pub end_label: String,
    pub players: Vec<PlayerView>,
    pub substitutions: Vec<SubstitutionView>,
}

#[derive(Debug, Serialize)]
pub struct PlayerView {
    pub id: u32,
    pub name: String,
    pub rank: u8,
}

#[derive(Debug, Serialize)]
pub struct SubstitutionView {
    pub player_in: PlayerView,
    pub player_out: PlayerView,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub schema_version: u8,
    pub total_minutes: u32,
    pub reports: Vec<PlayerReportView>,
}

#[derive(Debug, Serialize)]
pub struct PlayerReportView {
    pub id: u32,
    pub name: String,
    pub rank: u8,
    pub total_play_time: u32,
    pub field_times: Vec<IntervalView>,
    pub sideline_times: Vec<IntervalView>,
}

#[derive(Debug, Serialize)]
pub struct IntervalView {
    pub start_minute: u32,
    pub end_minute: u32,
    pub start_label: String,
    pub end_label: String,
}

impl PlayerView {
    fn from_player(player: &Player) -> Self {
        Self { id: player.id, name: player.name.clone(), rank: player.rank }
    }
}

/// Generate a rotation schedule from a JSON request.
///
/// The response carries one entry per slot with its minute bounds, labels,
/// lineup, and the substitution diff against the previous slot.
pub fn generate_schedule_json(request_json: &str) -> Result<String> {
    let schedule = schedule_from_request(request_json)?;
    let format = schedule.format;

    let slots: Vec<SlotView> = schedule
        .slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let previous = index.checked_sub(1).map(|i| &schedule.slots[i]);
            let start = slot.start_minute(&format);
            let end = slot.end_minute(&format);
            SlotView {
                index: slot.index,
                key_moment: slot.key_moment,
                start_minute: start,
                end_minute: end,
                start_label: minute_label(start, &format),
                end_label: minute_label(end, &format),
                players: slot.players.iter().map(PlayerView::from_player).collect(),
                substitutions: substitutions(slot, previous)
                    .iter()
                    .map(|sub| SubstitutionView {
                        player_in: PlayerView::from_player(&sub.player_in),
                        player_out: PlayerView::from_player(&sub.player_out),
                    })
                    .collect(),
            }
        })
        .collect();

    let response = ScheduleResponse {
        schema_version: SCHEMA_VERSION,
        total_minutes: format.total_minutes,
        rotation_minutes: format.rotation_minutes,
        slots,
    };
    Ok(serde_json::to_string(&response)?)
}

/// Build the play-time report for a JSON request.
///
/// Scheduling is deterministic, so the schedule is regenerated from the same
/// request rather than carried between calls.
pub fn play_time_report_json(request_json: &str) -> Result<String> {
    let schedule = schedule_from_request(request_json)?;
    let format = schedule.format;

    let reports: Vec<PlayerReportView> = build_play_time_report(&schedule)
        .into_iter()
        .map(|report| PlayerReportView {
            id: report.player.id,
            name: report.player.name.clone(),
            rank: report.player.rank,
            total_play_time: report.total_play_time,
            field_times: report.field_times.iter().map(|i| interval_view(i, &format)).collect(),
            sideline_times: report
                .sideline_times
                .iter()
                .map(|i| interval_view(i, &format))
                .collect(),
        })
        .collect();

    let response = ReportResponse {
        schema_version: SCHEMA_VERSION,
        total_minutes: format.total_minutes,
        reports,
    };
    Ok(serde_json::to_string(&response)?)
}

fn interval_view(interval: &crate::analysis::report::Interval, format: &GameFormat) -> IntervalView {
    IntervalView {
        start_minute: interval.start,
        end_minute: interval.end,
        start_label: minute_label(interval.start, format),
        end_label: minute_label(interval.end, format),
    }
}

fn schedule_from_request(request_json: &str) -> Result<Schedule> {
    let request: ScheduleRequest = serde_json::from_str(request_json)?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(ScheduleError::UnsupportedSchemaVersion { found: request.schema_version });
    }
    if request.competitive_balance > 100 {
        return Err(ScheduleError::BalanceOutOfRange { value: request.competitive_balance });
    }

    let roster = Roster::new(
        request
            .players
            .into_iter()
            .map(|data| Player {
                id: data.id,
                name: data.name,
                rank: data.rank,
                present: data.present,
            })
            .collect(),
    );
    roster.validate().map_err(ScheduleError::InvalidRoster)?;

    let format = GameFormat::new(request.total_minutes, request.rotation_minutes);
    let scheduler = RotationScheduler::new(format)?;
    scheduler.generate(&roster.present_players(), request.competitive_balance)
}
