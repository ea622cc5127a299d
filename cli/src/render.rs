//! Plain-text output

use pokedex_core::{BaseStats, EffectivenessProfile, PokedexEntry, StatName};
use pokedex_store::codec::join_names;

use crate::app::CreatureInfo;

/// `pikachu` -> `Pikachu`
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn or_none(list: String) -> String {
    if list.is_empty() {
        "-".to_string()
    } else {
        list
    }
}

pub fn profile(profile: &EffectivenessProfile) -> String {
    format!(
        "Types:       {}\nWeaknesses:  {}\nResistances: {}\nAdvantages:  {}\n",
        or_none(join_names(&profile.types)),
        or_none(join_names(&profile.weakness)),
        or_none(join_names(&profile.resistance)),
        or_none(join_names(&profile.advantage)),
    )
}

pub fn info(info: &CreatureInfo) -> String {
    let mut out = format!("{}\n", display_name(&info.creature.name));
    out.push_str(&profile(&info.profile));
    if let Some(sprite) = &info.creature.sprite {
        out.push_str(&format!("Sprite:      {}\n", sprite));
    }
    out
}

pub fn entries(entries: &[PokedexEntry]) -> String {
    if entries.is_empty() {
        return "No Pokémon saved yet.\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{} [{}]\n  weak to:   {}\n  resists:   {}\n  strong vs: {}\n",
            display_name(&entry.name),
            join_names(&entry.types),
            or_none(join_names(&entry.weakness)),
            or_none(join_names(&entry.resistance)),
            or_none(join_names(&entry.advantage)),
        ));
    }
    out
}

pub fn base_stats(name: &str, stats: &BaseStats) -> String {
    let mut out = format!("{}'s statistics\n", display_name(name));
    for (stat, value) in stats.iter() {
        out.push_str(&format!("  {:<16}{:>4}\n", stat_label(stat), value));
    }
    out.push_str(&format!("  {:<16}{:>4}\n", "total", stats.total()));
    out
}

pub fn ranking(ranked: &[(String, u32)]) -> String {
    if ranked.is_empty() {
        return "No Pokémon stats recorded yet.\n".to_string();
    }
    let mut out = String::new();
    for (i, (name, total)) in ranked.iter().enumerate() {
        out.push_str(&format!("{:>3}. {:<20}{:>5}\n", i + 1, display_name(name), total));
    }
    out
}

fn stat_label(stat: StatName) -> &'static str {
    match stat {
        StatName::Hp => "hp",
        StatName::Attack => "attack",
        StatName::Defense => "defense",
        StatName::SpecialAttack => "special attack",
        StatName::SpecialDefense => "special defense",
        StatName::Speed => "speed",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("mr-mime"), "Mr-mime");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_profile_marks_empty_sets() {
        let p = EffectivenessProfile {
            types: vec!["normal".to_string()],
            weakness: BTreeSet::from(["fighting".to_string()]),
            resistance: BTreeSet::new(),
            advantage: BTreeSet::new(),
        };
        let text = profile(&p);
        assert!(text.contains("Types:       normal\n"));
        assert!(text.contains("Weaknesses:  fighting\n"));
        assert!(text.contains("Resistances: -\n"));
    }

    #[test]
    fn test_ranking_lines() {
        let text = ranking(&[("mew".to_string(), 600), ("onix".to_string(), 385)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. Mew"));
        assert!(lines[0].ends_with("600"));
        assert!(lines[1].starts_with("  2. Onix"));
        assert_eq!(ranking(&[]), "No Pokémon stats recorded yet.\n");
    }

    #[test]
    fn test_base_stats_total_line() {
        let text = base_stats("onix", &BaseStats::new(35, 45, 160, 30, 45, 70));
        assert!(text.starts_with("Onix's statistics\n"));
        assert!(text.lines().last().unwrap().ends_with("385"));
    }
}
