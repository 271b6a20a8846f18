//! The match roster.
//!
//! Ordered, fixed-membership sequence of every player in the match.
//! Seating order is the authoritative tie-break for "first matching
//! opponent" scans and is stable for the whole match: effects may
//! rearrange the values players hold, never the membership order.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::player::{Player, PlayerId};

/// All players in the active match, in seating order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster from players in seating order.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "Roster needs at least 1 player");
        assert!(players.len() <= 255, "At most 255 players supported");
        Self { players }
    }

    /// Number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// A roster is never empty; kept for idiomatic `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether `player` names a seat in this roster.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.players.len()
    }

    /// Get a player by ID. Panics on an out-of-range ID.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    /// Get a player mutably. Panics on an out-of-range ID.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player.index()]
    }

    /// All player IDs in seating order.
    ///
    /// The iterator captures only the roster length, so callers may
    /// mutate the roster while iterating the IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    /// All opponents of `player`, in seating order.
    ///
    /// Like `player_ids`, this borrows nothing from the roster.
    pub fn opponents_of(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len()).filter(move |id| *id != player)
    }

    /// Iterate over `(PlayerId, &Player)` pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Iterate over `(PlayerId, &mut Player)` pairs in seating order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut Player)> {
        self.players
            .iter_mut()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Split-borrow two distinct players mutably.
    ///
    /// Panics if `a == b` or either ID is out of range.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> (&mut Player, &mut Player) {
        assert_ne!(a, b, "pair_mut needs two distinct players");
        let (i, j) = (a.index(), b.index());
        if i < j {
            let (left, right) = self.players.split_at_mut(j);
            (&mut left[i], &mut right[0])
        } else {
            let (left, right) = self.players.split_at_mut(i);
            (&mut right[0], &mut left[j])
        }
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
