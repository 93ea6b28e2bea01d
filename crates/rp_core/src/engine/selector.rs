//! Slot selection: the fairness/skill scoring pass.
//!
//! Two-pass shape: a greedy scan that respects the fairness cap (with the top
//! two scorers forced in regardless), then an unconditional backfill from the
//! remaining candidates when the cap left the slot short.

use super::scheduler::PlayTimeCounter;
use crate::models::{KeyMoment, Player, Slot, MAX_RANK};

/// Players on the field simultaneously.
pub const PLAYERS_NEEDED: usize = 4;

/// Fairness cap: a player may be at most one rotation ahead of the
/// least-played player and still pass the greedy scan.
pub const MAX_PLAY_TIME_DIFFERENCE: u32 = 1;

struct Candidate {
    player: Player,
    play_count: u32,
    score: f64,
}

/// Choose the players for one slot.
///
/// Score blends equal-play-time pressure against skill rank:
/// `fair_weight * 1/(count+1) + rank_weight * rank/5`, with the weights split
/// by the 0..=100 balance knob. Candidates sort by descending score; equal
/// scores break by ascending player id, which makes the ordering total and
/// the selection deterministic.
pub(crate) fn select(
    players: &[Player],
    counter: &PlayTimeCounter,
    slot_index: usize,
    slot_count: usize,
    competitive_balance: u8,
) -> Slot {
    // Carried on the slot for display; selection below never consults it.
    let key_moment = KeyMoment::of(slot_index, slot_count);

    let fair_weight = f64::from(100 - competitive_balance.min(100)) / 100.0;
    let rank_weight = f64::from(competitive_balance.min(100)) / 100.0;

    let mut candidates: Vec<Candidate> = players
        .iter()
        .map(|player| {
            let play_count = counter.count_for(player.id);
            let score = fair_weight * (1.0 / f64::from(play_count + 1))
                + rank_weight * (f64::from(player.rank) / f64::from(MAX_RANK));
            Candidate { player: player.clone(), play_count, score }
        })
        .collect();
    candidates
        .sort_by(|a, b| b.score.total_cmp(&a.score).then(a.player.id.cmp(&b.player.id)));

    // Cap at availability so the backfill scan below cannot spin when fewer
    // than a full slot's worth of players attend.
    let players_needed = PLAYERS_NEEDED.min(players.len());
    let min_play_time = counter.min();

    let mut selected: Vec<Player> = Vec::with_capacity(players_needed);
    for candidate in &candidates {
        if selected.len() < players_needed
            && (candidate.play_count - min_play_time <= MAX_PLAY_TIME_DIFFERENCE
                || selected.len() < 2)
        {
            selected.push(candidate.player.clone());
        }
        if selected.len() == players_needed {
            break;
        }
    }

    // Backfill: the fairness cap was too strict for the remaining candidates,
    // so take the next-highest scorers unconditionally. The scheduler's
    // present-player precondition guarantees the candidate list covers the
    // (availability-capped) slot size.
    debug_assert!(candidates.len() >= players_needed);
    if selected.len() < players_needed {
        for candidate in &candidates {
            if selected.len() == players_needed {
                break;
            }
            if !selected.iter().any(|p| p.id == candidate.player.id) {
                selected.push(candidate.player.clone());
            }
        }
    }

    Slot { index: slot_index, key_moment, players: selected }
}
