//! Ability system: contract, registry, and the standard catalog.
//!
//! An ability is a named unit of game logic invoked on a player's turn:
//! - `Ability`: the `apply(roster, mediator, invoker)` contract
//! - `AbilityOutcome`: resolved / no-target / not-allowed, with advisory
//!   messages
//! - `AbilityRegistry`: maps ability names to boxed implementations
//! - `catalog`: the concrete ability set and `standard_catalog()`
//!
//! ## Design notes
//!
//! Abilities are stateless. Anything that must outlive the call is
//! written into a player's `TurnModifiers` or the mediator, never kept on
//! the ability value, so implementations can be invoked fresh or reused
//! across many turns interchangeably.
//!
//! A missing target is a defined no-op, not an error: no ability call
//! propagates a hard failure that could abort the turn loop. Partial
//! mutations stand: there is no rollback across multiple targets.

mod ability;
mod registry;
mod catalog;

pub use ability::{Ability, AbilityOutcome};
pub use registry::AbilityRegistry;
pub use catalog::{
    standard_catalog, ArcaneBarrage, BattleFrenzy, DeckRaid, HealthCarousel, LifeLeech,
    MassMulligan, PiercingStance, RecoverDiscard, ShatterAll, ShieldDrain, ShieldSmash,
    ShieldSteal, ShieldWard,
};
