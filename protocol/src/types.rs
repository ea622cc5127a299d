//! `/type` and `/type/{name}` documents

use serde::{Deserialize, Serialize};

use crate::{ParseError, non_empty_body, normalize_name};

/// Pseudo-types PokeAPI lists that no creature can have
pub const EXCLUDED_TYPES: [&str; 2] = ["unknown", "shadow"];

/// A `{ "name", "url" }` reference to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Paginated listing returned by `GET /type`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeList {
    #[serde(default)]
    pub count: Option<u32>,
    pub results: Vec<NamedResource>,
}

impl TypeList {
    /// Type names a creature can actually carry, in listing order
    pub fn usable_names(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|r| normalize_name(&r.name))
            .filter(|name| !EXCLUDED_TYPES.contains(&name.as_str()))
            .collect()
    }
}

/// Damage multipliers of one type, as grouped by the API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}

impl DamageRelations {
    /// Normalized names of a relation list
    pub fn names(list: &[NamedResource]) -> Vec<String> {
        list.iter().map(|r| normalize_name(&r.name)).collect()
    }
}

/// Document returned by `GET /type/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDocument {
    pub name: String,
    pub damage_relations: DamageRelations,
}

/// Parse the body of `GET /type`
pub fn parse_type_list(body: &str) -> Result<TypeList, ParseError> {
    let list: TypeList = serde_json::from_str(non_empty_body(body)?)?;
    if list.results.iter().any(|r| r.name.trim().is_empty()) {
        return Err(ParseError::InvalidFormat("type listing entry without a name".to_string()));
    }
    Ok(list)
}

/// Parse the body of `GET /type/{name}`
pub fn parse_type(body: &str) -> Result<TypeDocument, ParseError> {
    let mut doc: TypeDocument = serde_json::from_str(non_empty_body(body)?)?;
    doc.name = normalize_name(&doc.name);
    if doc.name.is_empty() {
        return Err(ParseError::MissingField("name".to_string()));
    }
    Ok(doc)
}
