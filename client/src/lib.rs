//! PokeAPI client
//!
//! Fetches creatures and type damage relations over HTTP and turns the JSON
//! documents into core domain types. Every request is logged with its URL and
//! status.

mod error;
mod tests;

use std::time::Duration;

use pokedex_core::{BaseStats, FetchError, TypeDataProvider, TypeRelations};
use pokedex_protocol::{
    DamageRelations, StatName, TypeDocument, normalize_name, parse_pokemon, parse_type,
    parse_type_list,
};
use reqwest::StatusCode;

pub use error::ClientError;

pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2/";

/// What the client needs to know about one creature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureSummary {
    pub name: String,
    /// Type names in slot order
    pub types: Vec<String>,
    pub stats: BaseStats,
    pub sprite: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http(http, base_url))
    }

    fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a creature by name
    pub async fn pokemon(&self, name: &str) -> Result<CreatureSummary, ClientError> {
        let name = checked_name(name)?;
        let body = self.get_text(&format!("pokemon/{}", name), &name).await?;
        let doc = parse_pokemon(&body)?;

        let mut stats = BaseStats::default();
        for stat in StatName::ALL {
            // parse_pokemon guarantees all six are present
            stats.set(stat, doc.base_stat(stat).unwrap_or_default());
        }

        Ok(CreatureSummary {
            types: doc.type_names(),
            sprite: doc.sprite().map(str::to_string),
            name: doc.name,
            stats,
        })
    }

    pub async fn type_document(&self, name: &str) -> Result<TypeDocument, ClientError> {
        let name = checked_name(name)?;
        let body = self.get_text(&format!("type/{}", name), &name).await?;
        Ok(parse_type(&body)?)
    }

    /// Damage relations of one type
    pub async fn type_relations(&self, name: &str) -> Result<TypeRelations, ClientError> {
        let doc = self.type_document(name).await?;
        let relations = &doc.damage_relations;
        Ok(TypeRelations::new(
            &doc.name,
            DamageRelations::names(&relations.double_damage_from),
            DamageRelations::names(&relations.half_damage_from),
            DamageRelations::names(&relations.double_damage_to),
        ))
    }

    /// Names of every type a creature can have
    pub async fn type_names(&self) -> Result<Vec<String>, ClientError> {
        let body = self.get_text("type?limit=100", "type listing").await?;
        Ok(parse_type_list(&body)?.usable_names())
    }

    /// Relations of every usable type, in listing order
    pub async fn all_type_relations(&self) -> Result<Vec<TypeRelations>, ClientError> {
        let mut all = Vec::new();
        for name in self.type_names().await? {
            all.push(self.type_relations(&name).await?);
        }
        Ok(all)
    }

    async fn get_text(&self, path: &str, resource: &str) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        tracing::info!(url = %response.url(), status = status.as_u16(), "PokeAPI request");

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(resource.to_string()));
        }
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(POKEAPI_URL)
    }
}

impl TypeDataProvider for PokeApiClient {
    async fn fetch_type_relations(&self, name: &str) -> Result<TypeRelations, FetchError> {
        Ok(self.type_relations(name).await?)
    }
}

fn checked_name(name: &str) -> Result<String, ClientError> {
    let normalized = normalize_name(name);
    let valid = !normalized.is_empty()
        && normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(normalized)
    } else {
        Err(ClientError::InvalidName(name.to_string()))
    }
}
