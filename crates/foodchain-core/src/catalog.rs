//! The ecosystem catalog.
//!
//! A [`Catalog`] is an ordered, immutable set of [`Ecosystem`]s, each holding
//! its food chain from producer to apex predator. It is built once at startup
//! (usually via [`Catalog::builtin`]) and shared read-only between requests.
//!
//! # Usage
//!
//! ```rust
//! use foodchain_core::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.list_ecosystem_names(), vec!["Forest", "Ocean"]);
//! assert_eq!(catalog.get_chain("Forest").len(), 5);
//! assert!(catalog.get_chain("Desert").is_empty());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Species / Ecosystem
// ============================================================================

/// One trophic level in a food chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    /// Common name of the species (e.g. "Grasshopper").
    pub name: String,
    /// Trophic role (e.g. "Primary Consumer").
    pub role: String,
}

impl Species {
    /// Create a species entry.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// A named ecosystem and its ordered food chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ecosystem {
    /// Catalog key, e.g. "Forest".
    pub name: String,
    /// Species ordered from producer to apex predator.
    pub chain: Vec<Species>,
}

impl Ecosystem {
    /// Create an ecosystem from its name and chain.
    pub fn new(name: impl Into<String>, chain: Vec<Species>) -> Self {
        Self {
            name: name.into(),
            chain,
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered, read-only collection of ecosystems.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    ecosystems: Vec<Ecosystem>,
}

impl Catalog {
    /// Build a catalog from ecosystems in their display order.
    ///
    /// Later entries with a name already present are ignored, so lookups
    /// always resolve to the first definition.
    pub fn new(ecosystems: impl IntoIterator<Item = Ecosystem>) -> Self {
        let mut unique: Vec<Ecosystem> = Vec::new();
        for eco in ecosystems {
            if !unique.iter().any(|e| e.name == eco.name) {
                unique.push(eco);
            }
        }
        Self { ecosystems: unique }
    }

    /// The catalog shipped with the application: Forest, then Ocean.
    pub fn builtin() -> Self {
        Self::new([
            Ecosystem::new(
                "Forest",
                vec![
                    Species::new("Grass", "Producer"),
                    Species::new("Grasshopper", "Primary Consumer"),
                    Species::new("Frog", "Secondary Consumer"),
                    Species::new("Snake", "Tertiary Consumer"),
                    Species::new("Eagle", "Apex Predator"),
                ],
            ),
            Ecosystem::new(
                "Ocean",
                vec![
                    Species::new("Phytoplankton", "Producer"),
                    Species::new("Zooplankton", "Primary Consumer"),
                    Species::new("Small Fish", "Secondary Consumer"),
                    Species::new("Tuna", "Tertiary Consumer"),
                    Species::new("Shark", "Apex Predator"),
                ],
            ),
        ])
    }

    /// All ecosystem names, in catalog order.
    pub fn list_ecosystem_names(&self) -> Vec<&str> {
        self.ecosystems.iter().map(|e| e.name.as_str()).collect()
    }

    /// The chain for `name`, or an empty slice when the name is unknown.
    ///
    /// Lookup is exact and case-sensitive.
    pub fn get_chain(&self, name: &str) -> &[Species] {
        self.get(name).map(|e| e.chain.as_slice()).unwrap_or(&[])
    }

    /// Look up an ecosystem by name.
    pub fn get(&self, name: &str) -> Option<&Ecosystem> {
        self.ecosystems.iter().find(|e| e.name == name)
    }

    /// Iterate over ecosystems in catalog order.
    pub fn ecosystems(&self) -> impl Iterator<Item = &Ecosystem> {
        self.ecosystems.iter()
    }

    /// Number of ecosystems.
    pub fn len(&self) -> usize {
        self.ecosystems.len()
    }

    /// Whether the catalog has no ecosystems.
    pub fn is_empty(&self) -> bool {
        self.ecosystems.is_empty()
    }

    /// The catalog as `{ "<name>": { "chain": [...] }, ... }`.
    ///
    /// This is the shape the visualization page script consumes.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for eco in self.ecosystems() {
            let chain = serde_json::to_value(&eco.chain).unwrap_or(Value::Array(Vec::new()));
            let mut entry = Map::new();
            entry.insert("chain".to_string(), chain);
            map.insert(eco.name.clone(), Value::Object(entry));
        }
        Value::Object(map)
    }
}
