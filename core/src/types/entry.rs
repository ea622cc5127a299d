//! Rows kept by the record stores

use std::collections::BTreeSet;

use pokedex_protocol::normalize_name;

use crate::query::EffectivenessProfile;
use crate::types::BaseStats;

/// Rows addressable by a name key
pub trait Keyed {
    fn key(&self) -> &str;
}

/// A resolved creature as saved in the Pokedex
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PokedexEntry {
    pub name: String,
    pub types: Vec<String>,
    pub weakness: BTreeSet<String>,
    pub resistance: BTreeSet<String>,
    pub advantage: BTreeSet<String>,
}

impl PokedexEntry {
    /// Build the entry for `name` from its resolved profile
    pub fn from_profile(name: &str, profile: EffectivenessProfile) -> Self {
        Self {
            name: normalize_name(name),
            types: profile.types,
            weakness: profile.weakness,
            resistance: profile.resistance,
            advantage: profile.advantage,
        }
    }
}

impl Keyed for PokedexEntry {
    fn key(&self) -> &str {
        &self.name
    }
}

/// One recorded stats fetch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsEntry {
    pub name: String,
    pub stats: BaseStats,
}

impl StatsEntry {
    pub fn new(name: &str, stats: BaseStats) -> Self {
        Self {
            name: normalize_name(name),
            stats,
        }
    }

    pub fn total(&self) -> u32 {
        self.stats.total()
    }
}

impl Keyed for StatsEntry {
    fn key(&self) -> &str {
        &self.name
    }
}
