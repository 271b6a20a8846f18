//! Players and their turn-scoped modifiers.
//!
//! ## PlayerId
//!
//! Type-safe index into the match roster, supporting 1-255 players.
//! Roster order is seating order and never changes during a match.
//!
//! ## TurnModifiers
//!
//! Flags an ability sets that outlive the ability call. They are consumed
//! by later combat or turn events and cleared explicitly at turn
//! boundaries: never by implicit decay, and never by the ability that
//! set them.
//!
//! ## Player
//!
//! Health, shields, and the three card piles, plus the safe mutation
//! primitives the ability set builds on. Shields never go below zero.
//! Health may go negative transiently; the defeat check belongs to the
//! turn loop, not to this type.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// Player identifier: a 0-based seat index into the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a match with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Turn-scoped modifier state.
///
/// The attack flags are cleared by `turn::end_turn`. The delegation field
/// mirrors the mediator's grant table and is cleared by the mediator when
/// the grant is revoked; `TurnModifiers` never clears it on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnModifiers {
    /// This player's attacks bypass shield absorption entirely.
    pub ignore_shields: bool,

    /// Breaking a target's last shield grants an immediate second strike.
    pub double_attack_on_shield_break: bool,

    /// Who currently holds write-authority over this player's shields,
    /// if anyone. Kept in sync by the `ShieldMediator`.
    pub shields_controlled_by: Option<PlayerId>,
}

impl TurnModifiers {
    /// Clear the attack flags at the end of the owner's turn.
    ///
    /// Delegation is the mediator's to revoke, so it is left alone here.
    pub fn clear_attack_flags(&mut self) {
        self.ignore_shields = false;
        self.double_attack_on_shield_break = false;
    }
}

/// A seated player: shared combat resources plus turn-modifier state.
///
/// Shield mutation has two layers: the unchecked primitives here
/// (`gain_shields`/`lose_shields`) and the mediator-authorized operations
/// in `crate::mediator` that abilities and combat must use. Pile
/// transfers are atomic single-card moves.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    health: i64,
    max_health: i64,
    shields: u32,
    hand: Vector<Card>,
    deck: Vector<Card>,
    discard: Vector<Card>,
    /// Turn-scoped flags; public because abilities write them directly.
    pub modifiers: TurnModifiers,
}

impl Player {
    /// Create a player at full health with empty piles.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: i64) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            shields: 0,
            hand: Vector::new(),
            deck: Vector::new(),
            discard: Vector::new(),
            modifiers: TurnModifiers::default(),
        }
    }

    /// Set the deck contents (front of the sequence is drawn first).
    #[must_use]
    pub fn with_deck(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck = cards.into_iter().collect();
        self
    }

    /// The player's name, unique within a match.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health. May be negative until the external defeat check runs.
    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }

    /// Health cap that `heal` respects.
    #[must_use]
    pub fn max_health(&self) -> i64 {
        self.max_health
    }

    /// Current shield count.
    #[must_use]
    pub fn shields(&self) -> u32 {
        self.shields
    }

    /// Cards currently usable.
    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    /// Undrawn cards; the front is drawn next.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// Spent cards; the front is the first discarded and the first recovered.
    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    // === Health ===

    /// Reduce health by `amount`. Health is allowed to go negative; the
    /// defeat check is an external-collaborator responsibility.
    pub fn take_damage(&mut self, amount: i64) {
        self.health -= amount;
    }

    /// Increase health by `amount`, capped at `max_health`.
    pub fn heal(&mut self, amount: i64) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Overwrite health directly. Used by redistribution effects, which
    /// reassign snapshot values rather than applying damage or healing.
    pub fn set_health(&mut self, value: i64) {
        self.health = value;
    }

    // === Shields (unchecked primitives) ===

    /// Add shield points.
    pub fn gain_shields(&mut self, amount: u32) {
        self.shields += amount;
    }

    /// Remove up to `amount` shield points, saturating at zero.
    /// Returns the number of points actually removed.
    pub fn lose_shields(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.shields);
        self.shields -= removed;
        removed
    }

    // === Card piles ===

    /// Draw up to `count` cards from the front of the deck into hand.
    ///
    /// An exhausted deck is a quiet stop, not an error; the return value
    /// is the number of cards actually drawn.
    pub fn draw(&mut self, count: usize) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            match self.deck.pop_front() {
                Some(card) => {
                    self.hand.push_back(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Move one hand card (by index) to the back of the discard pile.
    /// Returns the discarded card's name, or `None` if the index is out
    /// of range.
    pub fn discard_from_hand(&mut self, index: usize) -> Option<String> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        let name = card.name().to_string();
        self.discard.push_back(card);
        Some(name)
    }

    /// Move the entire hand to the discard pile, preserving hand order.
    /// Returns the number of cards discarded.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        while let Some(card) = self.hand.pop_front() {
            self.discard.push_back(card);
        }
        count
    }

    /// Move the front card of the discard pile back into hand.
    /// Returns the recovered card's name, or `None` if the pile is empty.
    pub fn recover_discard(&mut self) -> Option<String> {
        let card = self.discard.pop_front()?;
        let name = card.name().to_string();
        self.hand.push_back(card);
        Some(name)
    }

    /// Remove and return the top (front) card of the deck, if any.
    pub fn take_top_of_deck(&mut self) -> Option<Card> {
        self.deck.pop_front()
    }

    /// Put a card into this player's hand.
    pub fn add_to_hand(&mut self, card: Card) {
        self.hand.push_back(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(names: &[&str]) -> Vec<Card> {
        names.iter().map(|n| Card::new(*n)).collect()
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
        assert_eq!(format!("{}", players[1]), "Player 1");
    }

    #[test]
    fn test_damage_may_go_negative() {
        let mut player = Player::new("Azzan", 10);
        player.take_damage(12);
        assert_eq!(player.health(), -2);
    }

    #[test]
    fn test_heal_caps_at_max_health() {
        let mut player = Player::new("Azzan", 10);
        player.take_damage(3);
        player.heal(100);
        assert_eq!(player.health(), 10);
    }

    #[test]
    fn test_shields_saturate_at_zero() {
        let mut player = Player::new("Delilah", 10);
        player.gain_shields(2);
        assert_eq!(player.lose_shields(5), 2);
        assert_eq!(player.shields(), 0);
        assert_eq!(player.lose_shields(1), 0);
    }

    #[test]
    fn test_draw_stops_quietly_on_empty_deck() {
        let mut player = Player::new("Sutha", 10).with_deck(cards(&["a", "b"]));
        assert_eq!(player.draw(5), 2);
        assert_eq!(player.hand().len(), 2);
        assert!(player.deck().is_empty());
        assert_eq!(player.draw(1), 0);
    }

    #[test]
    fn test_draw_takes_from_deck_front() {
        let mut player = Player::new("Sutha", 10).with_deck(cards(&["a", "b", "c"]));
        player.draw(1);
        assert_eq!(player.hand()[0].name(), "a");
        assert_eq!(player.deck()[0].name(), "b");
    }

    #[test]
    fn test_discard_and_recover_are_moves() {
        let mut player = Player::new("Lia", 10).with_deck(cards(&["a", "b"]));
        player.draw(2);

        assert_eq!(player.discard_from_hand(0).as_deref(), Some("a"));
        assert_eq!(player.discard_from_hand(0).as_deref(), Some("b"));
        assert!(player.hand().is_empty());
        assert_eq!(player.discard().len(), 2);

        // Recovery takes the front (first-discarded) card.
        assert_eq!(player.recover_discard().as_deref(), Some("a"));
        assert_eq!(player.hand().len(), 1);
        assert_eq!(player.discard().len(), 1);
        assert_eq!(player.discard()[0].name(), "b");
    }

    #[test]
    fn test_recover_from_empty_discard_is_noop() {
        let mut player = Player::new("Lia", 10);
        assert_eq!(player.recover_discard(), None);
        assert!(player.hand().is_empty());
    }

    #[test]
    fn test_discard_hand_preserves_order() {
        let mut player = Player::new("Sutha", 10).with_deck(cards(&["a", "b", "c"]));
        player.draw(3);
        assert_eq!(player.discard_hand(), 3);
        assert!(player.hand().is_empty());
        let names: Vec<_> = player.discard().iter().map(Card::name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_discard_from_hand_out_of_range() {
        let mut player = Player::new("Lia", 10);
        assert_eq!(player.discard_from_hand(0), None);
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new("Azzan", 10).with_deck(cards(&["a", "b"]));
        player.gain_shields(1);
        player.draw(1);

        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(), "Azzan");
        assert_eq!(back.shields(), 1);
        assert_eq!(back.hand(), player.hand());
        assert_eq!(back.deck(), player.deck());
    }

    #[test]
    fn test_clear_attack_flags_leaves_delegation() {
        let mut modifiers = TurnModifiers {
            ignore_shields: true,
            double_attack_on_shield_break: true,
            shields_controlled_by: Some(PlayerId::new(2)),
        };
        modifiers.clear_attack_flags();
        assert!(!modifiers.ignore_shields);
        assert!(!modifiers.double_attack_on_shield_break);
        assert_eq!(modifiers.shields_controlled_by, Some(PlayerId::new(2)));
    }
}
