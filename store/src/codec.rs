//! Text form of name sets inside a single CSV cell

use std::collections::BTreeSet;

use pokedex_core::normalize_name;

/// Separator between names in a cell
pub const DELIMITER: &str = ", ";

/// Join names with [`DELIMITER`], keeping the given order.
///
/// Pass a `BTreeSet` to get the canonical sorted form.
pub fn join_names<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// Names of a cell in written order.
///
/// Also accepts the bracketed, quoted list form (`['water', 'rock']`).
pub fn split_ordered(text: &str) -> Vec<String> {
    let text = text.trim();
    let text = text
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text);

    text.split(',')
        .map(|piece| normalize_name(piece.trim().trim_matches(|c| c == '\'' || c == '"')))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Names of a cell as a set
pub fn split_names(text: &str) -> BTreeSet<String> {
    split_ordered(text).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_set_is_sorted() {
        let set: BTreeSet<String> = ["rock", "ground", "electric"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(join_names(&set), "electric, ground, rock");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_names(BTreeSet::<String>::new()), "");
        assert!(split_names("").is_empty());
        assert!(split_names("  ").is_empty());
    }

    #[test]
    fn test_split_round_trips_join() {
        let set: BTreeSet<String> = ["bug", "fairy", "fire", "ice", "steel"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(split_names(&join_names(&set)), set);
    }

    #[test]
    fn test_split_ordered_keeps_order() {
        assert_eq!(split_ordered("water, ground"), vec!["water", "ground"]);
    }

    #[test]
    fn test_split_bracketed_list() {
        assert_eq!(split_ordered("['water', 'Ground', \"rock\"]"), vec!["water", "ground", "rock"]);
        assert!(split_ordered("[]").is_empty());
    }
}
