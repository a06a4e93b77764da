//! Celebrity definitions - static roster data.
//!
//! `Celebrity` holds the immutable data for one roster entry: the
//! answer name and the clue shown to the player. The registry provides
//! id allocation and fast lookup; draw order lives in `CelebrityGame`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for a celebrity in a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CelebrityId(pub u32);

impl CelebrityId {
    /// Create a new celebrity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CelebrityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Celebrity({})", self.0)
    }
}

/// One roster entry: the answer and its clue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Celebrity {
    /// Unique identifier within the roster.
    pub id: CelebrityId,

    /// The answer the player must guess.
    pub name: String,

    /// The clue shown to the player.
    pub clue: String,
}

impl Celebrity {
    /// Create a new celebrity entry.
    pub fn new(id: CelebrityId, name: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            clue: clue.into(),
        }
    }
}

/// Registry of celebrity definitions.
///
/// Stores the roster and provides lookup by id.
///
/// ## Example
///
/// ```
/// use rust_trivia::games::celebrity::CelebrityRegistry;
///
/// let mut registry = CelebrityRegistry::new();
/// let id = registry.add("Amelia Earhart", "First woman to fly the Atlantic solo");
///
/// assert_eq!(registry.get(id).unwrap().name, "Amelia Earhart");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CelebrityRegistry {
    entries: FxHashMap<CelebrityId, Celebrity>,
    next_id: u32,
}

impl CelebrityRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, allocating the next id.
    pub fn add(&mut self, name: impl Into<String>, clue: impl Into<String>) -> CelebrityId {
        let id = CelebrityId::new(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, Celebrity::new(id, name, clue));
        id
    }

    /// Get an entry by id.
    #[must_use]
    pub fn get(&self, id: CelebrityId) -> Option<&Celebrity> {
        self.entries.get(&id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Celebrity> {
        self.entries.values()
    }

    /// All ids, sorted by allocation order.
    #[must_use]
    pub fn ids(&self) -> Vec<CelebrityId> {
        let mut ids: Vec<CelebrityId> = self.entries.keys().copied().collect();
        ids.sort_by_key(|id| id.raw());
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celebrity_id_display() {
        assert_eq!(format!("{}", CelebrityId::new(5)), "Celebrity(5)");
        assert_eq!(CelebrityId::new(5).raw(), 5);
    }

    #[test]
    fn test_registry_allocates_sequential_ids() {
        let mut registry = CelebrityRegistry::new();

        let a = registry.add("Ada Lovelace", "Wrote the first published algorithm");
        let b = registry.add("Grace Hopper", "Coined the term computer bug");

        assert_eq!(a, CelebrityId::new(0));
        assert_eq!(b, CelebrityId::new(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = CelebrityRegistry::new();
        let id = registry.add("Ada Lovelace", "Wrote the first published algorithm");

        let entry = registry.get(id).unwrap();
        assert_eq!(entry.name, "Ada Lovelace");
        assert!(entry.clue.contains("algorithm"));
        assert!(registry.get(CelebrityId::new(99)).is_none());
    }

    #[test]
    fn test_ids_sorted_by_allocation() {
        let mut registry = CelebrityRegistry::new();
        registry.add("A", "clue a");
        registry.add("B", "clue b");
        registry.add("C", "clue c");

        assert_eq!(
            registry.ids(),
            vec![CelebrityId::new(0), CelebrityId::new(1), CelebrityId::new(2)]
        );
    }

    #[test]
    fn test_registry_serialization() {
        let mut registry = CelebrityRegistry::new();
        registry.add("Ada Lovelace", "Wrote the first published algorithm");

        let json = serde_json::to_string(&registry).unwrap();
        let back: CelebrityRegistry = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back.get(CelebrityId::new(0)).unwrap().name, "Ada Lovelace");
    }
}
