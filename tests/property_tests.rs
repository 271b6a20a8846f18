//! Algebraic properties of the ability set, checked over generated
//! rosters.

use proptest::prelude::*;

use mayhem_engine::{standard_catalog, Player, PlayerId, Roster, ShieldMediator};

/// Roster of `healths.len()` players with the given healths and shields.
fn roster_from(healths: &[i64], shields: &[u32]) -> Roster {
    let players = healths
        .iter()
        .zip(shields)
        .enumerate()
        .map(|(i, (&h, &s))| {
            let mut p = Player::new(format!("P{i}"), 50);
            p.set_health(h);
            p.gain_shields(s);
            p
        })
        .collect();
    Roster::new(players)
}

proptest! {
    /// Uniform damage: every non-invoker loses exactly 3 (no shields in
    /// play here), the invoker is untouched.
    #[test]
    fn test_uniform_damage_is_exact(
        healths in prop::collection::vec(1i64..40, 2..8),
        invoker_seat in 0usize..8,
    ) {
        let invoker_seat = invoker_seat % healths.len();
        let shields = vec![0u32; healths.len()];
        let mut roster = roster_from(&healths, &shields);
        let mut mediator = ShieldMediator::new();
        let invoker = PlayerId::new(invoker_seat as u8);

        standard_catalog()
            .invoke("arcane_barrage", &mut roster, &mut mediator, invoker)
            .unwrap();

        for (i, (id, player)) in roster.iter().enumerate() {
            if id == invoker {
                prop_assert_eq!(player.health(), healths[i]);
            } else {
                prop_assert_eq!(player.health(), healths[i] - 3);
            }
        }
    }

    /// Steal-one: at most one opponent is affected, and it is the first
    /// shielded one in seating order.
    #[test]
    fn test_shield_steal_affects_first_match_only(
        shields in prop::collection::vec(0u32..4, 2..8),
        invoker_seat in 0usize..8,
    ) {
        let invoker_seat = invoker_seat % shields.len();
        let healths = vec![10i64; shields.len()];
        let mut roster = roster_from(&healths, &shields);
        let mut mediator = ShieldMediator::new();
        let invoker = PlayerId::new(invoker_seat as u8);

        standard_catalog()
            .invoke("shield_steal", &mut roster, &mut mediator, invoker)
            .unwrap();

        let expected_target = shields
            .iter()
            .enumerate()
            .find(|(i, &s)| *i != invoker_seat && s > 0)
            .map(|(i, _)| i);

        for (i, (id, player)) in roster.iter().enumerate() {
            let expected = if Some(i) == expected_target {
                shields[i] - 1
            } else if id == invoker && expected_target.is_some() {
                shields[i] + 1
            } else {
                shields[i]
            };
            prop_assert_eq!(player.shields(), expected);
        }
    }

    /// Carousel: player i receives player (i-1) mod n's health; the
    /// health total is conserved and seating order is untouched.
    #[test]
    fn test_health_carousel_rotates_and_conserves_sum(
        healths in prop::collection::vec(-5i64..40, 2..8),
    ) {
        let n = healths.len();
        let shields = vec![0u32; n];
        let mut roster = roster_from(&healths, &shields);
        let mut mediator = ShieldMediator::new();

        standard_catalog()
            .invoke("health_carousel", &mut roster, &mut mediator, PlayerId::new(0))
            .unwrap();

        let after: Vec<i64> = roster.iter().map(|(_, p)| p.health()).collect();
        for i in 0..n {
            prop_assert_eq!(after[i], healths[(i + n - 1) % n]);
        }
        prop_assert_eq!(
            after.iter().sum::<i64>(),
            healths.iter().sum::<i64>()
        );
    }

    /// Mass reset always ends with zero shields everywhere (no
    /// delegation in play).
    #[test]
    fn test_shatter_all_zeroes_everything(
        shields in prop::collection::vec(0u32..6, 2..8),
    ) {
        let healths = vec![10i64; shields.len()];
        let mut roster = roster_from(&healths, &shields);
        let mut mediator = ShieldMediator::new();

        standard_catalog()
            .invoke("shatter_all", &mut roster, &mut mediator, PlayerId::new(0))
            .unwrap();

        for (_, player) in roster.iter() {
            prop_assert_eq!(player.shields(), 0);
        }
    }
}
