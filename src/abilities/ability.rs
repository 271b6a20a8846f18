//! The ability contract and its outcome type.

use crate::core::{PlayerId, Roster};
use crate::mediator::ShieldMediator;

/// Result of applying an ability.
///
/// Abilities never hard-fail. A missing target is a defined no-op and a
/// role mismatch is informational; in both cases the match continues.
/// Messages are advisory one-liners for presentation: tests should
/// assert on roster state, not on message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbilityOutcome {
    /// The ability ran; the message narrates what happened.
    Resolved(String),
    /// No valid target existed; nothing was mutated.
    NoTarget,
    /// The invoker cannot use this ability in its current role.
    NotAllowed(String),
}

impl AbilityOutcome {
    /// Whether the ability ran (even if its net effect was small).
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The advisory message, if this outcome carries one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Resolved(msg) | Self::NotAllowed(msg) => Some(msg),
            Self::NoTarget => None,
        }
    }
}

/// A named unit of game logic invoked on a player's turn.
///
/// The invoker is always a member of the roster; no other roster-size
/// assumption is allowed. Roster seating order is the authoritative
/// tie-break for "first matching opponent" scans.
///
/// Implementations must be stateless: state that outlives the call goes
/// into a player's `TurnModifiers` or the mediator.
pub trait Ability {
    /// The registry name of this ability.
    fn name(&self) -> &'static str;

    /// Apply the ability's effect to the roster.
    fn apply(
        &self,
        roster: &mut Roster,
        mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome;
}
