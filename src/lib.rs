//! # mayhem-engine
//!
//! Ability resolution core for a turn-based multiplayer card brawler.
//!
//! Each player controls a character whose abilities mutate shared combat
//! resources: health, shields, and the three card piles (deck, hand,
//! discard). This crate is the part that makes those mutations compose:
//!
//! - **Abilities** are free-form mutations over the shared roster, behind
//!   a single `apply(roster, mediator, invoker)` contract. A missing
//!   target is a defined no-op, never an error.
//!
//! - **Turn modifiers** are flags an ability sets on a player that outlive
//!   the call ("ignore shields this turn", "second strike on shield
//!   break"). They are consumed by later combat events and cleared
//!   explicitly at turn boundaries, never by implicit decay.
//!
//! - The **mediator** brokers delegated write-authority over shields, so
//!   one player can temporarily control another's shields without the
//!   abilities needing a reference-holding protocol between players.
//!
//! - **Combat resolution** is the single damage pipeline; it consults the
//!   turn modifiers and the mediator so effects compose the same way
//!   regardless of which ability installed them.
//!
//! The turn loop itself, the card catalog, and all presentation are
//! external collaborators. Execution is single-threaded and strictly
//! sequential: one ability resolves fully before control returns to the
//! turn loop, and roster seating order is the authoritative tie-break for
//! "first matching opponent" scans.
//!
//! ## Modules
//!
//! - `core`: cards, players, turn modifiers, the roster, setup RNG
//! - `abilities`: the `Ability` trait, outcome type, registry, catalog
//! - `mediator`: delegated shield control and authorized shield mutation
//! - `combat`: the damage pipeline
//! - `turn`: required turn-boundary cleanup calls
//! - `setup`: match construction helpers

pub mod core;
pub mod mediator;
pub mod combat;
pub mod abilities;
pub mod turn;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{Card, MatchRng, Player, PlayerId, Roster, TurnModifiers};

pub use crate::mediator::ShieldMediator;

pub use crate::combat::{resolve_attack, AttackReport};

pub use crate::abilities::{
    standard_catalog, Ability, AbilityOutcome, AbilityRegistry,
};

pub use crate::turn::{begin_turn, end_turn};

pub use crate::setup::MatchBuilder;
