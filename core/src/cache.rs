//! Memoizing front of a [`TypeDataProvider`]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use pokedex_protocol::normalize_name;
use tokio::sync::OnceCell;

use crate::error::{Error, Result};
use crate::provider::{FetchError, TypeDataProvider};
use crate::types::TypeRelations;

type Slot = Arc<OnceCell<Arc<TypeRelations>>>;

/// Process-lifetime cache of type relations.
///
/// Each distinct type name reaches the provider at most once while a fetch
/// succeeds; concurrent callers asking for the same uncached name wait on the
/// first fetch instead of issuing their own. Failed fetches are not cached.
pub struct TypeRelationCache<P> {
    provider: P,
    slots: Mutex<HashMap<String, Slot>>,
}

impl<P: TypeDataProvider> TypeRelationCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Relations for `name`, fetching them on first use
    pub async fn get(&self, name: &str) -> Result<Arc<TypeRelations>> {
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(Error::InvalidInput("empty type name".to_string()));
        }

        let slot = self.slot(&key);
        if let Some(cached) = slot.get() {
            tracing::debug!(type_name = %key, "type relations cache hit");
            return Ok(Arc::clone(cached));
        }

        let relations = slot
            .get_or_try_init(|| async {
                tracing::debug!(type_name = %key, "type relations cache miss, fetching");
                match self.provider.fetch_type_relations(&key).await {
                    Ok(relations) => Ok(Arc::new(relations)),
                    Err(FetchError::NotFound(_)) => Err(Error::TypeNotFound(key.clone())),
                    Err(FetchError::Unavailable(reason)) => {
                        tracing::warn!(type_name = %key, error = %reason, "type fetch failed");
                        Err(Error::ProviderUnavailable(reason))
                    }
                }
            })
            .await?;

        Ok(Arc::clone(relations))
    }

    /// Whether `name` has already been fetched
    pub fn contains(&self, name: &str) -> bool {
        let key = normalize_name(name);
        self.lock_slots()
            .get(&key)
            .is_some_and(|slot| slot.initialized())
    }

    /// Number of types fetched so far
    pub fn len(&self) -> usize {
        self.lock_slots()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn slot(&self, key: &str) -> Slot {
        let mut slots = self.lock_slots();
        Arc::clone(slots.entry(key.to_string()).or_default())
    }

    fn lock_slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
