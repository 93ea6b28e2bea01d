//! Substitution diff between adjacent slots.

use crate::models::{Player, Slot};
use serde::{Deserialize, Serialize};

/// One bench swap between two adjacent slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Substitution {
    pub player_in: Player,
    pub player_out: Player,
}

/// Compare a slot against the one before it and report who entered and left.
///
/// Pairing is positional in order of discovery (slot order), purely for
/// display. With equal slot sizes the in/out lists always match in length;
/// any surplus from unequal sizes is dropped.
pub fn substitutions(current: &Slot, previous: Option<&Slot>) -> Vec<Substitution> {
    let Some(previous) = previous else {
        return Vec::new();
    };
    if previous.players.is_empty() {
        return Vec::new();
    }

    let players_in = current.players.iter().filter(|p| !previous.contains(p.id));
    let players_out = previous.players.iter().filter(|p| !current.contains(p.id));

    players_in
        .zip(players_out)
        .map(|(incoming, outgoing)| Substitution {
            player_in: incoming.clone(),
            player_out: outgoing.clone(),
        })
        .collect()
}
