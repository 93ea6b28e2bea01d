//! Play-time report built from a finished schedule.
//!
//! Pure derived view: walks the slot list once and produces merged field and
//! sideline minute intervals plus totals per player. Recomputed on demand,
//! never cached.

use crate::models::{Player, Schedule};
use serde::{Deserialize, Serialize};

/// Half-open minute range `[start, end)` relative to game start.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }
}

/// Per-player game report: identity plus the derived play-time fields, kept
/// as named members rather than a dynamic merge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerReport {
    pub player: Player,
    pub total_play_time: u32,
    pub field_times: Vec<Interval>,
    pub sideline_times: Vec<Interval>,
}

/// Build the per-player report, sorted by descending total play time
/// (ties break by ascending player id).
///
/// The two merge rules are deliberately asymmetric and must stay that way:
/// field intervals extend on slot-membership continuity (was the player in
/// the previous slot), sideline intervals extend on literal bound adjacency
/// (does the last interval end where this slot starts). Unifying them would
/// change observable report output.
pub fn build_play_time_report(schedule: &Schedule) -> Vec<PlayerReport> {
    let rotation = schedule.format.rotation_minutes;
    let total = schedule.format.total_minutes;

    let mut reports: Vec<PlayerReport> = schedule
        .players
        .iter()
        .map(|player| PlayerReport {
            player: player.clone(),
            total_play_time: 0,
            field_times: Vec::new(),
            sideline_times: Vec::new(),
        })
        .collect();

    for (index, slot) in schedule.slots.iter().enumerate() {
        let start = index as u32 * rotation;
        let end = ((index as u32 + 1) * rotation).min(total);

        for report in &mut reports {
            let id = report.player.id;
            if slot.contains(id) {
                report.total_play_time += end - start;
                let continued =
                    index > 0 && schedule.slots[index - 1].contains(id);
                if continued {
                    if let Some(last) = report.field_times.last_mut() {
                        last.end = end;
                    }
                } else {
                    report.field_times.push(Interval { start, end });
                }
            } else {
                let adjacent =
                    report.sideline_times.last().map(|last| last.end == start).unwrap_or(false);
                if adjacent {
                    if let Some(last) = report.sideline_times.last_mut() {
                        last.end = end;
                    }
                } else {
                    report.sideline_times.push(Interval { start, end });
                }
            }
        }
    }

    reports.sort_by(|a, b| {
        b.total_play_time.cmp(&a.total_play_time).then(a.player.id.cmp(&b.player.id))
    });
    reports
}
