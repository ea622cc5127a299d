//! Effectiveness queries over a creature's types
//!
//! A creature's weaknesses, resistances and advantages are derived from the
//! damage relations of its one or two types.

mod resolver;

pub use resolver::{EffectivenessProfile, MAX_TYPES, Resolver};
