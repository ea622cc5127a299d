//! Combining per-type relations into a creature profile

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::cache::TypeRelationCache;
use crate::error::{Error, Result};
use crate::provider::TypeDataProvider;
use crate::types::TypeRelations;

/// Creatures carry one or two types
pub const MAX_TYPES: usize = 2;

/// Net matchups of a creature
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivenessProfile {
    /// Types in the order the creature declares them
    pub types: Vec<String>,
    pub weakness: BTreeSet<String>,
    pub resistance: BTreeSet<String>,
    pub advantage: BTreeSet<String>,
}

impl EffectivenessProfile {
    /// Union the relation sets, then cancel every type that is both a
    /// weakness and a resistance. Advantages are a plain union.
    pub fn combine(types: Vec<String>, relations: &[Arc<TypeRelations>]) -> Self {
        let mut weakness = BTreeSet::new();
        let mut resistance = BTreeSet::new();
        let mut advantage = BTreeSet::new();

        for rel in relations {
            weakness.extend(rel.weakness_sources.iter().cloned());
            resistance.extend(rel.resistance_sources.iter().cloned());
            advantage.extend(rel.advantage_targets.iter().cloned());
        }

        let neutral: BTreeSet<String> = weakness.intersection(&resistance).cloned().collect();
        weakness.retain(|t| !neutral.contains(t));
        resistance.retain(|t| !neutral.contains(t));

        Self {
            types,
            weakness,
            resistance,
            advantage,
        }
    }

    pub fn is_weak_to(&self, attacking: &str) -> bool {
        self.weakness.contains(attacking)
    }

    pub fn resists(&self, attacking: &str) -> bool {
        self.resistance.contains(attacking)
    }

    pub fn has_advantage_over(&self, defending: &str) -> bool {
        self.advantage.contains(defending)
    }
}

/// Resolves a creature's types into an [`EffectivenessProfile`]
pub struct Resolver<P> {
    cache: Arc<TypeRelationCache<P>>,
}

impl<P: TypeDataProvider> Resolver<P> {
    pub fn new(cache: Arc<TypeRelationCache<P>>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<TypeRelationCache<P>> {
        &self.cache
    }

    /// Resolve one or two type names.
    ///
    /// Any unknown type fails the whole resolution; no partial profile is
    /// ever returned.
    pub async fn resolve<S: AsRef<str> + Sync>(&self, types: &[S]) -> Result<EffectivenessProfile> {
        if types.is_empty() || types.len() > MAX_TYPES {
            return Err(Error::InvalidInput(format!(
                "expected 1 to {} types, got {}",
                MAX_TYPES,
                types.len()
            )));
        }

        let mut relations = Vec::with_capacity(types.len());
        for name in types {
            relations.push(self.cache.get(name.as_ref()).await?);
        }

        let declared = relations.iter().map(|r| r.name.clone()).collect();
        Ok(EffectivenessProfile::combine(declared, &relations))
    }
}
