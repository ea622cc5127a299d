//! Pokedex entries, unique by name

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use pokedex_protocol::normalize_name;

use super::{RecordBacking, unavailable};
use crate::error::{Error, Result};
use crate::query::MAX_TYPES;
use crate::types::{Keyed, PokedexEntry};

/// Result of [`EntryStore::upsert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    /// An entry with the same name already exists; nothing was written
    Skipped,
}

struct EntryState<B> {
    backing: B,
    entries: Vec<PokedexEntry>,
    keys: HashSet<String>,
}

/// Insert-if-absent store of resolved creatures
pub struct EntryStore<B> {
    state: Mutex<EntryState<B>>,
}

impl<B: RecordBacking<PokedexEntry>> EntryStore<B> {
    /// Load existing rows. Duplicate names already in the backing keep their first row.
    pub fn open(backing: B) -> Result<Self> {
        let mut entries = Vec::new();
        let mut keys = HashSet::new();

        for entry in backing.read_all().map_err(unavailable)? {
            if keys.insert(entry.key().to_string()) {
                entries.push(entry);
            } else {
                tracing::warn!(name = %entry.name, "ignoring duplicate stored entry");
            }
        }

        Ok(Self {
            state: Mutex::new(EntryState {
                backing,
                entries,
                keys,
            }),
        })
    }

    pub fn exists(&self, name: &str) -> bool {
        self.lock().keys.contains(&normalize_name(name))
    }

    /// Insert `entry` unless its name is already stored.
    ///
    /// The existence check and the write happen under one lock. The entry
    /// only becomes visible once the backing accepted it.
    pub fn upsert(&self, mut entry: PokedexEntry) -> Result<UpsertOutcome> {
        entry.name = normalize_name(&entry.name);
        validate(&entry)?;

        let mut state = self.lock();
        if state.keys.contains(&entry.name) {
            tracing::debug!(name = %entry.name, "entry already saved, skipping");
            return Ok(UpsertOutcome::Skipped);
        }

        state.backing.append_row(&entry).map_err(|e| {
            tracing::warn!(name = %entry.name, error = %e, "failed to persist entry");
            unavailable(e)
        })?;

        state.keys.insert(entry.name.clone());
        state.entries.push(entry);
        Ok(UpsertOutcome::Inserted)
    }

    /// Every entry in insertion order
    pub fn list_all(&self) -> Vec<PokedexEntry> {
        self.lock().entries.clone()
    }

    pub fn get(&self, name: &str) -> Option<PokedexEntry> {
        let key = normalize_name(name);
        self.lock().entries.iter().find(|e| e.name == key).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, EntryState<B>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn validate(entry: &PokedexEntry) -> Result<()> {
    if entry.name.is_empty() {
        return Err(Error::InvalidInput("entry name is empty".to_string()));
    }
    if entry.types.is_empty() || entry.types.len() > MAX_TYPES {
        return Err(Error::InvalidInput(format!(
            "entry {} has {} types",
            entry.name,
            entry.types.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::store::MemoryBacking;

    fn entry(name: &str, types: &[&str]) -> PokedexEntry {
        PokedexEntry {
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            weakness: BTreeSet::from(["rock".to_string()]),
            resistance: BTreeSet::new(),
            advantage: BTreeSet::new(),
        }
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let store = EntryStore::open(MemoryBacking::new()).unwrap();

        assert_eq!(
            store.upsert(entry("Charizard", &["fire", "flying"])).unwrap(),
            UpsertOutcome::Inserted
        );
        assert_eq!(
            store.upsert(entry("charizard", &["fire", "flying"])).unwrap(),
            UpsertOutcome::Skipped
        );

        assert_eq!(store.len(), 1);
        assert!(store.exists("CHARIZARD"));
        assert_eq!(store.list_all()[0].name, "charizard");
    }

    #[test]
    fn test_list_all_in_insertion_order() {
        let store = EntryStore::open(MemoryBacking::new()).unwrap();
        for name in ["pikachu", "bulbasaur", "eevee"] {
            store.upsert(entry(name, &["normal"])).unwrap();
        }
        let names: Vec<String> = store.list_all().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["pikachu", "bulbasaur", "eevee"]);
    }

    #[test]
    fn test_open_loads_and_dedups_existing_rows() {
        let backing = MemoryBacking::with_rows(vec![
            entry("pikachu", &["electric"]),
            entry("pikachu", &["normal"]),
            entry("onix", &["rock", "ground"]),
        ]);
        let store = EntryStore::open(backing).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("pikachu").unwrap().types, vec!["electric"]);
        assert_eq!(store.upsert(entry("onix", &["rock"])).unwrap(), UpsertOutcome::Skipped);
    }

    #[test]
    fn test_failed_write_inserts_nothing() {
        let store = EntryStore::open(MemoryBacking::read_only(Vec::new())).unwrap();

        let err = store.upsert(entry("mew", &["psychic"])).unwrap_err();
        assert!(matches!(err, Error::StoreUnavailable(_)));
        assert!(!store.exists("mew"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejects_malformed_entries() {
        let store = EntryStore::open(MemoryBacking::new()).unwrap();
        assert!(matches!(store.upsert(entry(" ", &["fire"])), Err(Error::InvalidInput(_))));
        assert!(matches!(store.upsert(entry("missingno", &[])), Err(Error::InvalidInput(_))));
        assert!(matches!(
            store.upsert(entry("chimera", &["fire", "water", "grass"])),
            Err(Error::InvalidInput(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_upserts_of_same_name_insert_once() {
        let store = Arc::new(EntryStore::open(MemoryBacking::new()).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.upsert(entry("snorlax", &["normal"])).unwrap())
            })
            .collect();

        let inserted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|outcome| *outcome == UpsertOutcome::Inserted)
            .count();

        assert_eq!(inserted, 1);
        assert_eq!(store.len(), 1);
    }
}
