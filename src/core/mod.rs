//! Core types: cards, players, turn modifiers, the roster, setup RNG.
//!
//! These are passive data holders with safe mutation primitives and no
//! game logic beyond their bookkeeping invariants. Abilities and combat
//! build on them.

pub mod card;
pub mod player;
pub mod roster;
pub mod rng;

pub use card::Card;
pub use player::{Player, PlayerId, TurnModifiers};
pub use roster::Roster;
pub use rng::MatchRng;
