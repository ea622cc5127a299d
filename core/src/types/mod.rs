//! Domain types shared by the resolver and the record stores

mod element;
mod entry;
mod relations;
mod stats;

pub use element::{Element, TYPE_CHART};
pub use entry::{Keyed, PokedexEntry, StatsEntry};
pub use relations::TypeRelations;
pub use stats::BaseStats;
