//! Card value type.
//!
//! A card's identity is its name; it is immutable once created. Every
//! card lives in exactly one of a single player's three piles (deck,
//! hand, discard) at any time: pile transfers move the card, never copy
//! it. What the catalog puts on a card beyond its name is not this
//! crate's concern.

use serde::{Deserialize, Serialize};

/// A single card, identified by its name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    name: String,
}

impl Card {
    /// Create a card with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The card's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
