//! Ability registry for name-based dispatch.
//!
//! The turn loop knows abilities by name ("which ability did the active
//! player pick"); the registry maps those names to implementations so the
//! loop never matches on concrete types.

use rustc_hash::FxHashMap;

use crate::core::{PlayerId, Roster};
use crate::mediator::ShieldMediator;

use super::ability::{Ability, AbilityOutcome};

/// Registry of named abilities.
///
/// ## Example
///
/// ```
/// use mayhem_engine::abilities::{AbilityRegistry, PiercingStance};
///
/// let mut registry = AbilityRegistry::new();
/// registry.register(Box::new(PiercingStance));
/// assert!(registry.contains("piercing_stance"));
/// ```
#[derive(Default)]
pub struct AbilityRegistry {
    abilities: FxHashMap<&'static str, Box<dyn Ability>>,
}

impl AbilityRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ability under its own name.
    ///
    /// Panics if an ability with the same name already exists.
    pub fn register(&mut self, ability: Box<dyn Ability>) {
        let name = ability.name();
        if self.abilities.insert(name, ability).is_some() {
            panic!("Ability {name:?} already registered");
        }
    }

    /// Look up an ability by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Ability> {
        self.abilities.get(name).map(Box::as_ref)
    }

    /// Apply the named ability, or return `None` for an unknown name.
    pub fn invoke(
        &self,
        name: &str,
        roster: &mut Roster,
        mediator: &mut ShieldMediator,
        invoker: PlayerId,
    ) -> Option<AbilityOutcome> {
        self.get(name)
            .map(|ability| ability.apply(roster, mediator, invoker))
    }

    /// Check whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.abilities.contains_key(name)
    }

    /// Number of registered abilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Iterate over registered ability names (unordered).
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.abilities.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    struct Ping;

    impl Ability for Ping {
        fn name(&self) -> &'static str {
            "ping"
        }

        fn apply(
            &self,
            roster: &mut Roster,
            _mediator: &mut ShieldMediator,
            invoker: PlayerId,
        ) -> AbilityOutcome {
            roster[invoker].take_damage(1);
            AbilityOutcome::Resolved("pinged self".into())
        }
    }

    fn duo() -> (Roster, ShieldMediator) {
        let roster = Roster::new(vec![Player::new("a", 10), Player::new("b", 10)]);
        (roster, ShieldMediator::new())
    }

    #[test]
    fn test_register_and_invoke() {
        let mut registry = AbilityRegistry::new();
        registry.register(Box::new(Ping));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("ping"));

        let (mut roster, mut mediator) = duo();
        let outcome = registry.invoke("ping", &mut roster, &mut mediator, PlayerId::new(0));
        assert!(outcome.expect("ping is registered").is_resolved());
        assert_eq!(roster[PlayerId::new(0)].health(), 9);
    }

    #[test]
    fn test_unknown_name_is_none() {
        let registry = AbilityRegistry::new();
        let (mut roster, mut mediator) = duo();
        assert!(registry
            .invoke("nope", &mut roster, &mut mediator, PlayerId::new(0))
            .is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut registry = AbilityRegistry::new();
        registry.register(Box::new(Ping));
        registry.register(Box::new(Ping));
    }
}
