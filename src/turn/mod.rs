//! Turn-boundary bookkeeping.
//!
//! The turn loop itself (whose turn it is, which ability gets invoked,
//! defeat checks) lives outside this crate. These are the calls the loop
//! is *required* to make so turn-scoped state expires on schedule;
//! nothing in the engine decays implicitly.

use crate::core::{PlayerId, Roster};
use crate::mediator::ShieldMediator;

/// Must be called when `player`'s turn begins.
///
/// Shield delegations are scoped to "until the delegate's next turn
/// begins": any grant `player` holds lapses here and must be re-granted
/// to apply again.
pub fn begin_turn(roster: &mut Roster, mediator: &mut ShieldMediator, player: PlayerId) {
    if mediator.holds_delegation(player) {
        mediator.set_shields_controlled_by_player(roster, player, false);
    }
}

/// Must be called when `player`'s turn ends.
///
/// Clears the attack flags (`ignore_shields`,
/// `double_attack_on_shield_break`) that abilities set during the turn.
pub fn end_turn(roster: &mut Roster, player: PlayerId) {
    roster[player].modifiers.clear_attack_flags();
}
