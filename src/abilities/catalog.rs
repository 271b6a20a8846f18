//! The standard ability catalog.
//!
//! One unit struct per named ability, mirroring the recurring effect
//! patterns:
//!
//! - uniform damage: `ArcaneBarrage`
//! - steal-one-resource: `ShieldSteal`, `ShieldSmash`, `ShieldDrain`
//! - self-buff flags: `PiercingStance`, `BattleFrenzy`
//! - mass reset: `ShatterAll`, `MassMulligan`
//! - resource recovery: `RecoverDiscard`
//! - multi-steal: `DeckRaid`
//! - redistribution: `HealthCarousel`
//! - trade-off: `LifeLeech`
//! - delegated control: `ShieldWard`
//!
//! Single-target scans pick the *first* opponent in seating order that
//! matches the predicate and stop there: never the lowest or highest
//! value, never randomized. An opponent whose shields the invoker is not
//! authorized to change simply does not match.

use smallvec::SmallVec;

use crate::combat::resolve_attack;
use crate::core::{PlayerId, Roster};
use crate::mediator::ShieldMediator;

use super::ability::{Ability, AbilityOutcome};
use super::registry::AbilityRegistry;

/// Build a registry holding the full standard catalog.
#[must_use]
pub fn standard_catalog() -> AbilityRegistry {
    let mut registry = AbilityRegistry::new();
    registry.register(Box::new(ArcaneBarrage));
    registry.register(Box::new(ShieldSteal));
    registry.register(Box::new(ShieldSmash));
    registry.register(Box::new(ShieldDrain));
    registry.register(Box::new(ShatterAll));
    registry.register(Box::new(MassMulligan));
    registry.register(Box::new(LifeLeech));
    registry.register(Box::new(PiercingStance));
    registry.register(Box::new(BattleFrenzy));
    registry.register(Box::new(RecoverDiscard));
    registry.register(Box::new(DeckRaid));
    registry.register(Box::new(HealthCarousel));
    registry.register(Box::new(ShieldWard));
    registry
}

/// 3 damage to every opponent, through the combat pipeline (so the
/// invoker's `ignore_shields` and double-attack flags apply per target).
/// Always resolves: damage application tolerates zero-shield targets.
pub struct ArcaneBarrage;

impl Ability for ArcaneBarrage {
    fn name(&self) -> &'static str {
        "arcane_barrage"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome {
        for target in roster.opponents_of(invoker) {
            resolve_attack(roster, mediator, invoker, target, 3);
        }
        AbilityOutcome::Resolved("every opponent took 3 damage".into())
    }
}

/// Take 1 shield from the first shielded opponent and keep it.
pub struct ShieldSteal;

impl Ability for ShieldSteal {
    fn name(&self) -> &'static str {
        "shield_steal"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome {
        for target in roster.opponents_of(invoker) {
            if roster[target].shields() > 0 && mediator.authorizes(invoker, target) {
                mediator.decrease_shields(roster, invoker, target, 1);
                mediator.increase_shields(roster, invoker, invoker, 1);
                let msg = format!("stole a shield from {}", roster[target].name());
                return AbilityOutcome::Resolved(msg);
            }
        }
        AbilityOutcome::NoTarget
    }
}

/// Destroy 1 shield of the first shielded opponent.
pub struct ShieldSmash;

impl Ability for ShieldSmash {
    fn name(&self) -> &'static str {
        "shield_smash"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome {
        for target in roster.opponents_of(invoker) {
            if roster[target].shields() > 0 && mediator.authorizes(invoker, target) {
                mediator.decrease_shields(roster, invoker, target, 1);
                let msg = format!("smashed one of {}'s shields", roster[target].name());
                return AbilityOutcome::Resolved(msg);
            }
        }
        AbilityOutcome::NoTarget
    }
}

/// Zero the first shielded opponent's shields and heal the invoker by
/// the amount destroyed.
pub struct ShieldDrain;

impl Ability for ShieldDrain {
    fn name(&self) -> &'static str {
        "shield_drain"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome {
        for target in roster.opponents_of(invoker) {
            if roster[target].shields() > 0 && mediator.authorizes(invoker, target) {
                let all = roster[target].shields();
                let drained = mediator.decrease_shields(roster, invoker, target, all);
                roster[invoker].heal(i64::from(drained));
                let msg = format!(
                    "drained {drained} shields from {} into health",
                    roster[target].name()
                );
                return AbilityOutcome::Resolved(msg);
            }
        }
        AbilityOutcome::NoTarget
    }
}

/// Zero every player's shields, the invoker's included. Protected
/// shields (delegated to another player) hold.
pub struct ShatterAll;

impl Ability for ShatterAll {
    fn name(&self) -> &'static str {
        "shatter_all"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome {
        let mut shattered = 0;
        for owner in roster.player_ids() {
            let all = roster[owner].shields();
            shattered += mediator.decrease_shields(roster, invoker, owner, all);
        }
        AbilityOutcome::Resolved(format!("shattered {shattered} shields"))
    }
}

/// Every player (invoker included) moves their whole hand to the discard
/// pile and draws 3.
pub struct MassMulligan;

impl Ability for MassMulligan {
    fn name(&self) -> &'static str {
        "mass_mulligan"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        _mediator: &mut ShieldMediator,
        _invoker: PlayerId,
    ) -> AbilityOutcome {
        for (_, player) in roster.iter_mut() {
            player.discard_hand();
            player.draw(3);
        }
        AbilityOutcome::Resolved("everyone discarded their hand and drew 3".into())
    }
}

/// Per opponent: the invoker heals 1 and the opponent takes 1 damage
/// through the combat pipeline. Reports how many times it healed.
pub struct LifeLeech;

impl Ability for LifeLeech {
    fn name(&self) -> &'static str {
        "life_leech"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome {
        let mut healed = 0;
        for target in roster.opponents_of(invoker) {
            roster[invoker].heal(1);
            resolve_attack(roster, mediator, invoker, target, 1);
            healed += 1;
        }
        AbilityOutcome::Resolved(format!("healed {healed} and hit every opponent for 1"))
    }
}

/// This turn the invoker's attacks bypass shields entirely. Realized by
/// combat resolution, cleared at end of turn.
pub struct PiercingStance;

impl Ability for PiercingStance {
    fn name(&self) -> &'static str {
        "piercing_stance"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        _mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome {
        roster[invoker].modifiers.ignore_shields = true;
        AbilityOutcome::Resolved("attacks ignore shields this turn".into())
    }
}

/// This turn, breaking a target's last shield grants the invoker an
/// immediate second strike.
pub struct BattleFrenzy;

impl Ability for BattleFrenzy {
    fn name(&self) -> &'static str {
        "battle_frenzy"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        _mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome {
        roster[invoker].modifiers.double_attack_on_shield_break = true;
        AbilityOutcome::Resolved("shield breaks grant a second strike this turn".into())
    }
}

/// Return the front card of the invoker's discard pile to hand.
pub struct RecoverDiscard;

impl Ability for RecoverDiscard {
    fn name(&self) -> &'static str {
        "recover_discard"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        _mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome {
        match roster[invoker].recover_discard() {
            Some(name) => {
                AbilityOutcome::Resolved(format!("recovered {name} from the discard pile"))
            }
            None => AbilityOutcome::NoTarget,
        }
    }
}

/// Take the top card of every opponent's deck into the invoker's hand.
/// Opponents with empty decks are skipped.
pub struct DeckRaid;

impl Ability for DeckRaid {
    fn name(&self) -> &'static str {
        "deck_raid"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        _mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome {
        let mut taken = 0;
        for target in roster.opponents_of(invoker) {
            let (raider, victim) = roster.pair_mut(invoker, target);
            if let Some(card) = victim.take_top_of_deck() {
                raider.add_to_hand(card);
                taken += 1;
            }
        }
        if taken == 0 {
            AbilityOutcome::NoTarget
        } else {
            AbilityOutcome::Resolved(format!("raided the top card of {taken} decks"))
        }
    }
}

/// Rotate everyone's health one seat forward: player i ends up with
/// player i-1's pre-call health, with wraparound. Seating order itself
/// never changes, and the health total is conserved.
pub struct HealthCarousel;

impl Ability for HealthCarousel {
    fn name(&self) -> &'static str {
        "health_carousel"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        _mediator: &mut ShieldMediator,
        _invoker: PlayerId,
    ) -> AbilityOutcome {
        let mut healths: SmallVec<[i64; 8]> = roster.iter().map(|(_, p)| p.health()).collect();
        debug_assert_eq!(healths.len(), roster.len());
        healths.rotate_right(1);
        for (i, (_, player)) in roster.iter_mut().enumerate() {
            player.set_health(healths[i]);
        }
        AbilityOutcome::Resolved("every player's health moved one seat over".into())
    }
}

/// Grant the invoker control over every other player's shields until the
/// invoker's next turn begins (revoked by `turn::begin_turn`).
pub struct ShieldWard;

impl Ability for ShieldWard {
    fn name(&self) -> &'static str {
        "shield_ward"
    }

    fn apply(
        &self,
        roster: &mut Roster,
        mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> AbilityOutcome {
        if !roster.contains(invoker) {
            return AbilityOutcome::NotAllowed(
                "only a seated player can hold shield delegation".into(),
            );
        }
        if roster.len() < 2 {
            return AbilityOutcome::NoTarget;
        }
        mediator.set_shields_controlled_by_player(roster, invoker, true);
        let msg = format!(
            "{} controls all shields until their next turn",
            roster[invoker].name()
        );
        AbilityOutcome::Resolved(msg)
    }
}
