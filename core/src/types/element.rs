//! Built-in type chart (Gen 6+) used when no network provider is available

use crate::types::TypeRelations;

/// The 18 elemental types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Element {
    pub const ALL: [Element; 18] = [
        Element::Normal,
        Element::Fire,
        Element::Water,
        Element::Electric,
        Element::Grass,
        Element::Ice,
        Element::Fighting,
        Element::Poison,
        Element::Ground,
        Element::Flying,
        Element::Psychic,
        Element::Bug,
        Element::Rock,
        Element::Ghost,
        Element::Dragon,
        Element::Dark,
        Element::Steel,
        Element::Fairy,
    ];

    /// Multiplier of this attacking type against one defending type
    pub fn effectiveness(&self, defender: Element) -> f32 {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Look up by API name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        let name = pokedex_protocol::normalize_name(s);
        Element::ALL.into_iter().find(|e| e.as_str() == name)
    }

    /// Canonical lowercase name, as PokeAPI spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Normal => "normal",
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Electric => "electric",
            Element::Grass => "grass",
            Element::Ice => "ice",
            Element::Fighting => "fighting",
            Element::Poison => "poison",
            Element::Ground => "ground",
            Element::Flying => "flying",
            Element::Psychic => "psychic",
            Element::Bug => "bug",
            Element::Rock => "rock",
            Element::Ghost => "ghost",
            Element::Dragon => "dragon",
            Element::Dark => "dark",
            Element::Steel => "steel",
            Element::Fairy => "fairy",
        }
    }

    /// Damage relations of this type read off the chart.
    ///
    /// Only the 2x and 0.5x cells count; immunities belong to none of the sets.
    pub fn relations(&self) -> TypeRelations {
        let attackers_at = |mult: f32| {
            Element::ALL
                .into_iter()
                .filter(move |a| a.effectiveness(*self) == mult)
                .map(|a| a.as_str())
        };
        let advantage = Element::ALL
            .into_iter()
            .filter(|d| self.effectiveness(*d) == 2.0)
            .map(|d| d.as_str());

        TypeRelations::new(self.as_str(), attackers_at(2.0), attackers_at(0.5), advantage)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Damage multipliers backing [`Element::relations`] and the offline
/// provider. `TYPE_CHART[attacker][defender]`, indexed in [`Element::ALL`]
/// order. Only the 2.0 and 0.5 cells feed the relation sets.
#[rustfmt::skip]
pub static TYPE_CHART: [[f32; 18]; 18] = [
    // normal ->
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
    // fire ->
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
    // water ->
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // electric ->
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // grass ->
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
    // ice ->
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
    // fighting ->
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
    // poison ->
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
    // ground ->
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
    // flying ->
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
    // psychic ->
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
    // bug ->
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
    // rock ->
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
    // ghost ->
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
    // dragon ->
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
    // dark ->
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
    // steel ->
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
    // fairy ->
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
];
