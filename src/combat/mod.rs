//! Damage resolution.
//!
//! `resolve_attack` is the single damage pipeline in the engine. Shields
//! absorb first unless the attacker ignores them, and taking a target's
//! shields from above zero to zero can grant the attacker an immediate
//! second strike. The pipeline consumes turn-scoped flags but never
//! clears them: that is the turn boundary's job.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roster};
use crate::mediator::ShieldMediator;

/// What a single `resolve_attack` call did to the target.
///
/// Advisory, for presentation and tests; the roster is the authoritative
/// state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    /// Shield points consumed by absorption (across both strikes when a
    /// double attack triggers).
    pub shields_destroyed: u32,
    /// Health actually lost.
    pub health_damage: i64,
    /// Whether breaking the target's last shield triggered a second
    /// strike.
    pub double_attack_triggered: bool,
}

/// Apply `damage` from `attacker` to `target`.
///
/// Sequence:
/// 1. An attacker with `ignore_shields` set deals full damage to health
///    and leaves the target's shields untouched.
/// 2. Otherwise shields absorb first, one point per damage unit. The
///    decrement goes through the mediator: against a protected target the
///    shields are not consumed and the damage passes straight through.
///    If this strike took the target's shields from above zero to zero
///    and the attacker has `double_attack_on_shield_break`, one extra
///    full application runs immediately against the same target (with
///    zero shields left it cannot re-trigger).
/// 3. Any remainder reduces health. Health may go negative; the defeat
///    check belongs to the turn loop.
pub fn resolve_attack(
    roster: &mut Roster,
    mediator: &ShieldMediator,
    attacker: PlayerId,
    target: PlayerId,
    damage: i64,
) -> AttackReport {
    debug_assert_ne!(attacker, target, "a player cannot attack themselves");

    let mut report = AttackReport::default();
    if damage <= 0 {
        return report;
    }

    if roster[attacker].modifiers.ignore_shields {
        roster[target].take_damage(damage);
        report.health_damage = damage;
        return report;
    }

    let shields_before = roster[target].shields();
    let wanted = damage.min(i64::from(shields_before)) as u32;
    let absorbed = mediator.decrease_shields(roster, attacker, target, wanted);
    report.shields_destroyed = absorbed;

    let broke_last_shield = shields_before > 0 && absorbed == shields_before;
    if broke_last_shield && roster[attacker].modifiers.double_attack_on_shield_break {
        report.double_attack_triggered = true;
        let second = resolve_attack(roster, mediator, attacker, target, damage);
        report.shields_destroyed += second.shields_destroyed;
        report.health_damage += second.health_damage;
    }

    let pass_through = damage - i64::from(absorbed);
    if pass_through > 0 {
        roster[target].take_damage(pass_through);
        report.health_damage += pass_through;
    }

    report
}
