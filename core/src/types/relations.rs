//! Per-type damage relations

use std::collections::BTreeSet;

use pokedex_protocol::normalize_name;

/// The three relation sets of one elemental type.
///
/// Sets are ordered and deduplicated; names are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRelations {
    pub name: String,
    /// Types this type takes double damage from
    pub weakness_sources: BTreeSet<String>,
    /// Types this type takes half damage from
    pub resistance_sources: BTreeSet<String>,
    /// Types this type deals double damage to
    pub advantage_targets: BTreeSet<String>,
}

impl TypeRelations {
    pub fn new(
        name: &str,
        weakness_sources: impl IntoIterator<Item = impl AsRef<str>>,
        resistance_sources: impl IntoIterator<Item = impl AsRef<str>>,
        advantage_targets: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self {
            name: normalize_name(name),
            weakness_sources: name_set(weakness_sources),
            resistance_sources: name_set(resistance_sources),
            advantage_targets: name_set(advantage_targets),
        }
    }
}

fn name_set(names: impl IntoIterator<Item = impl AsRef<str>>) -> BTreeSet<String> {
    names
        .into_iter()
        .map(|n| normalize_name(n.as_ref()))
        .filter(|n| !n.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_and_dedups() {
        let rel = TypeRelations::new(
            "Fire",
            ["Water", "water", " rock "],
            ["fire", ""],
            Vec::<&str>::new(),
        );
        assert_eq!(rel.name, "fire");
        assert_eq!(rel.weakness_sources.len(), 2);
        assert!(rel.weakness_sources.contains("rock"));
        assert_eq!(rel.resistance_sources.len(), 1);
        assert!(rel.advantage_targets.is_empty());
    }
}
