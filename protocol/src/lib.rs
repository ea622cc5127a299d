use thiserror::Error;

pub mod pokemon;
pub mod types;

pub use pokemon::{PokemonDocument, Sprites, StatName, StatSlot, TypeSlot, parse_pokemon};
pub use types::{
    DamageRelations, EXCLUDED_TYPES, NamedResource, TypeDocument, TypeList, parse_type,
    parse_type_list,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid document format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty document")]
    EmptyDocument,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Canonical form of a creature or type name as used in URLs and table keys
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn non_empty_body(body: &str) -> Result<&str, ParseError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ParseError::EmptyDocument);
    }
    Ok(body)
}
