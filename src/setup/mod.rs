//! Match construction helpers.
//!
//! Which characters exist and what their decks contain is catalog policy
//! outside this crate. `MatchBuilder` is the constructor that policy
//! uses: it seats players, deals shuffled decks deterministically from a
//! seed, and hands back the roster plus a fresh mediator.

use crate::core::{Card, MatchRng, Player, Roster};
use crate::mediator::ShieldMediator;

/// Builder for a match roster.
///
/// ## Example
///
/// ```
/// use mayhem_engine::{Card, MatchBuilder, PlayerId};
///
/// let deck: Vec<Card> = (0..10).map(|i| Card::new(format!("card {i}"))).collect();
/// let (roster, _mediator) = MatchBuilder::new()
///     .seat("Azzan", deck.clone())
///     .seat("Lia", deck)
///     .starting_health(10)
///     .starting_hand(3)
///     .seed(7)
///     .build();
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster[PlayerId::new(0)].hand().len(), 3);
/// assert_eq!(roster[PlayerId::new(0)].deck().len(), 7);
/// ```
pub struct MatchBuilder {
    seats: Vec<(String, Vec<Card>)>,
    starting_health: i64,
    starting_shields: u32,
    starting_hand: usize,
    seed: u64,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            seats: Vec::new(),
            starting_health: 10,
            starting_shields: 0,
            starting_hand: 3,
            seed: 0,
        }
    }
}

impl MatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player with their (unshuffled) deck. Seating order is the
    /// match's authoritative roster order.
    #[must_use]
    pub fn seat(mut self, name: impl Into<String>, deck: Vec<Card>) -> Self {
        self.seats.push((name.into(), deck));
        self
    }

    /// Starting (and maximum) health for every player. Default 10.
    #[must_use]
    pub fn starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    /// Starting shields for every player. Default 0.
    #[must_use]
    pub fn starting_shields(mut self, shields: u32) -> Self {
        self.starting_shields = shields;
        self
    }

    /// Cards each player draws at setup. Default 3.
    #[must_use]
    pub fn starting_hand(mut self, cards: usize) -> Self {
        self.starting_hand = cards;
        self
    }

    /// Seed for the deck shuffle. The same seed deals the same decks.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the roster and a fresh mediator.
    ///
    /// Panics if fewer than 2 players are seated.
    #[must_use]
    pub fn build(self) -> (Roster, ShieldMediator) {
        assert!(self.seats.len() >= 2, "A match needs at least 2 players");

        let mut rng = MatchRng::new(self.seed);
        let mut players = Vec::with_capacity(self.seats.len());
        for (name, mut deck) in self.seats {
            rng.shuffle(&mut deck);
            let mut player = Player::new(name, self.starting_health).with_deck(deck);
            if self.starting_shields > 0 {
                player.gain_shields(self.starting_shields);
            }
            player.draw(self.starting_hand);
            players.push(player);
        }

        (Roster::new(players), ShieldMediator::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn deck(count: usize) -> Vec<Card> {
        (0..count).map(|i| Card::new(format!("card {i}"))).collect()
    }

    fn build(seed: u64) -> (Roster, ShieldMediator) {
        MatchBuilder::new()
            .seat("Azzan", deck(10))
            .seat("Lia", deck(10))
            .seat("Sutha", deck(10))
            .starting_shields(1)
            .seed(seed)
            .build()
    }

    #[test]
    fn test_seating_order_and_defaults() {
        let (roster, _) = build(0);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[PlayerId::new(0)].name(), "Azzan");
        assert_eq!(roster[PlayerId::new(2)].name(), "Sutha");
        for (_, player) in roster.iter() {
            assert_eq!(player.health(), 10);
            assert_eq!(player.shields(), 1);
            assert_eq!(player.hand().len(), 3);
            assert_eq!(player.deck().len(), 7);
            assert!(player.discard().is_empty());
        }
    }

    #[test]
    fn test_same_seed_deals_same_hands() {
        let (a, _) = build(42);
        let (b, _) = build(42);
        for id in a.player_ids() {
            assert_eq!(a[id].hand(), b[id].hand());
            assert_eq!(a[id].deck(), b[id].deck());
        }
    }

    #[test]
    #[should_panic(expected = "at least 2 players")]
    fn test_solo_match_rejected() {
        let _ = MatchBuilder::new().seat("Azzan", deck(5)).build();
    }
}
