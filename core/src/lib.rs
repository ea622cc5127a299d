//! Type-effectiveness resolution and record keeping for a Pokedex client.
//!
//! # Overview
//!
//! ```text
//! TypeDataProvider (HTTP, CSV table, built-in chart)
//!        │
//!        ▼
//! TypeRelationCache ──► Resolver ──► EffectivenessProfile
//!                                         │
//!                                         ▼
//!                        EntryStore / StatsAggregator ──► RecordBacking
//! ```
//!
//! # Main Types
//!
//! - [`TypeRelations`] - Raw damage relations of one type
//! - [`TypeRelationCache`] - Memoizes a provider, one fetch per type name
//! - [`Resolver`] - Combines a creature's types, cancelling opposing relations
//! - [`EffectivenessProfile`] - Net weaknesses, resistances and advantages
//! - [`EntryStore`] - Insert-if-absent table of [`PokedexEntry`] rows
//! - [`StatsAggregator`] - Append-only [`BaseStats`] rows ranked by total
//!
//! # Example Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use pokedex_core::{ChartProvider, Resolver, TypeRelationCache};
//!
//! let resolver = Resolver::new(Arc::new(TypeRelationCache::new(ChartProvider)));
//! let profile = resolver.resolve(&["fire", "water"]).await?;
//! assert!(profile.is_weak_to("electric"));
//! ```

pub mod cache;
pub mod error;
pub mod provider;
pub mod query;
pub mod store;
pub mod types;

pub use cache::TypeRelationCache;
pub use error::{Error, Result};
pub use provider::{ChartProvider, FetchError, TypeDataProvider};
pub use query::{EffectivenessProfile, MAX_TYPES, Resolver};
pub use store::{EntryStore, MemoryBacking, RecordBacking, StatsAggregator, UpsertOutcome};
pub use types::{BaseStats, Element, Keyed, PokedexEntry, StatsEntry, TypeRelations};

pub use pokedex_protocol::{StatName, normalize_name};
