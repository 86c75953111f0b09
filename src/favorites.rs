// File: src/favorites.rs
use crate::core::types::StyleId;
use crate::error::{Result, StyleError};
use crate::persistence::{KeyValueStore, LIKED_KEY};
use std::collections::BTreeSet;

/// Identifiers the user has liked. Entries for styles that no longer exist are
/// kept; they simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedSet {
    ids: BTreeSet<StyleId>,
}

impl LikedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns `true` if the id was not liked before.
    pub fn like(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Returns `true` if the id was liked before.
    pub fn unlike(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flips membership and returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.unlike(id) {
            false
        } else {
            self.like(id)
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Reads `likedStylesV1`. Missing or corrupt data gives an empty set.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get(LIKED_KEY) else {
            return Self::new();
        };
        match serde_json::from_str::<Vec<StyleId>>(&raw) {
            Ok(ids) => Self { ids: ids.into_iter().collect() },
            Err(e) => {
                log::warn!("Discarding corrupt {}: {}", LIKED_KEY, e);
                Self::new()
            }
        }
    }

    /// Writes the set as a JSON array of identifiers.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        let ids: Vec<&str> = self.iter().collect();
        let raw = serde_json::to_string(&ids).map_err(|source| StyleError::Json {
            origin: LIKED_KEY.to_string(),
            source,
        })?;
        store.set(LIKED_KEY, raw)
    }
}
