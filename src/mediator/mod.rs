//! Delegated shield control.
//!
//! Some abilities hand one player temporary write-authority over other
//! players' shields. `ShieldMediator` is the match-scoped broker for that
//! authority: it holds only the authorization table (owner -> delegate),
//! never the shield counters themselves: the `Player` counters stay the
//! single source of truth.
//!
//! Every shield-mutating operation in the engine goes through
//! `decrease_shields` / `increase_shields`, which consult the table
//! before touching the owner. An unauthorized attempt is a silent no-op.
//!
//! Delegation is scoped to "until the delegate's next turn begins". The
//! mediator never expires a grant on its own; the turn loop revokes it
//! through `turn::begin_turn`, which is a required collaborator call.

use rustc_hash::FxHashMap;

use crate::core::{PlayerId, Roster};

/// Match-scoped authorization table for shield mutations.
///
/// At most one delegate per owner; a new grant replaces an existing one.
#[derive(Clone, Debug, Default)]
pub struct ShieldMediator {
    /// owner -> the delegate currently authorized to change the owner's
    /// shields.
    grants: FxHashMap<PlayerId, PlayerId>,
}

impl ShieldMediator {
    /// Create a mediator with no delegations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant or revoke `delegate`'s control over every other player's
    /// shields.
    ///
    /// While a grant is active, an owner's shields may only be changed by
    /// the delegate, including by the owner's own incoming combat. Each
    /// owner's `shields_controlled_by` modifier is kept in sync with the
    /// table.
    ///
    /// Revocation (`active == false`) drops every grant held by
    /// `delegate`. The turn loop calls this when the delegate's next turn
    /// begins.
    pub fn set_shields_controlled_by_player(
        &mut self,
        roster: &mut Roster,
        delegate: PlayerId,
        active: bool,
    ) {
        if active {
            for owner in PlayerId::all(roster.len()) {
                if owner == delegate {
                    continue;
                }
                self.grants.insert(owner, delegate);
                roster[owner].modifiers.shields_controlled_by = Some(delegate);
            }
        } else {
            self.grants.retain(|_, holder| *holder != delegate);
            for (_, player) in roster.iter_mut() {
                if player.modifiers.shields_controlled_by == Some(delegate) {
                    player.modifiers.shields_controlled_by = None;
                }
            }
        }
    }

    /// Is `actor` currently allowed to change `owner`'s shields?
    ///
    /// True when no grant exists for `owner`, or when `actor` is the
    /// recorded delegate.
    #[must_use]
    pub fn authorizes(&self, actor: PlayerId, owner: PlayerId) -> bool {
        match self.grants.get(&owner) {
            Some(delegate) => *delegate == actor,
            None => true,
        }
    }

    /// Whether `delegate` currently holds any shield grant.
    #[must_use]
    pub fn holds_delegation(&self, delegate: PlayerId) -> bool {
        self.grants.values().any(|holder| *holder == delegate)
    }

    /// Authorized shield decrease on behalf of `actor`.
    ///
    /// Removes up to `amount` points from `owner`, saturating at zero.
    /// Returns the number of points actually removed; an unauthorized
    /// attempt removes nothing.
    pub fn decrease_shields(
        &self,
        roster: &mut Roster,
        actor: PlayerId,
        owner: PlayerId,
        amount: u32,
    ) -> u32 {
        if !self.authorizes(actor, owner) {
            return 0;
        }
        roster[owner].lose_shields(amount)
    }

    /// Authorized shield increase on behalf of `actor`.
    ///
    /// Returns the number of points actually added (zero when
    /// unauthorized).
    pub fn increase_shields(
        &self,
        roster: &mut Roster,
        actor: PlayerId,
        owner: PlayerId,
        amount: u32,
    ) -> u32 {
        if !self.authorizes(actor, owner) {
            return 0;
        }
        roster[owner].gain_shields(amount);
        amount
    }
}
