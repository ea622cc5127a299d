//! `/pokemon/{name}` documents

use serde::{Deserialize, Serialize};

use crate::types::NamedResource;
use crate::{ParseError, non_empty_body, normalize_name};

/// The six base stats, named as the API names them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatName {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatName {
    pub const ALL: [StatName; 6] = [
        StatName::Hp,
        StatName::Attack,
        StatName::Defense,
        StatName::SpecialAttack,
        StatName::SpecialDefense,
        StatName::Speed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatName::Hp => "hp",
            StatName::Attack => "attack",
            StatName::Defense => "defense",
            StatName::SpecialAttack => "special-attack",
            StatName::SpecialDefense => "special-defense",
            StatName::Speed => "speed",
        }
    }

    pub fn from_api(s: &str) -> Option<Self> {
        StatName::ALL.into_iter().find(|stat| stat.as_str() == s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Document returned by `GET /pokemon/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonDocument {
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl PokemonDocument {
    /// Type names in slot order
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.iter().map(|s| normalize_name(&s.kind.name)).collect()
    }

    pub fn base_stat(&self, stat: StatName) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| StatName::from_api(&s.stat.name) == Some(stat))
            .map(|s| s.base_stat)
    }

    pub fn sprite(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }
}

/// Parse the body of `GET /pokemon/{name}`
///
/// Rejects documents without any type or missing one of the six base stats.
pub fn parse_pokemon(body: &str) -> Result<PokemonDocument, ParseError> {
    let mut doc: PokemonDocument = serde_json::from_str(non_empty_body(body)?)?;
    doc.name = normalize_name(&doc.name);

    if doc.name.is_empty() {
        return Err(ParseError::MissingField("name".to_string()));
    }
    if doc.types.is_empty() {
        return Err(ParseError::MissingField("types".to_string()));
    }
    if let Some(missing) = StatName::ALL.iter().find(|s| doc.base_stat(**s).is_none()) {
        return Err(ParseError::MissingField(format!("stat {}", missing.as_str())));
    }

    Ok(doc)
}
