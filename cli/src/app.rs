//! Wiring between the PokeAPI client, the resolver and the CSV stores

use std::sync::Arc;

use anyhow::{Context, Result};
use pokedex_client::{ClientError, CreatureSummary, PokeApiClient};
use pokedex_core::{
    ChartProvider, EffectivenessProfile, EntryStore, FetchError, PokedexEntry, Resolver,
    StatsAggregator, TypeDataProvider, TypeRelationCache, TypeRelations, UpsertOutcome,
};
use pokedex_store::{DataDir, EntryTable, StatsTable, TypeTable};

/// Where type relations come from
pub enum TypeSource {
    /// The synced `types.csv`
    Table(TypeTable),
    /// The built-in chart, no network needed
    Chart(ChartProvider),
}

impl TypeSource {
    pub async fn prepare(client: &PokeApiClient, data: &DataDir, offline: bool) -> Result<Self> {
        if offline {
            return Ok(TypeSource::Chart(ChartProvider));
        }
        Ok(TypeSource::Table(sync_types(client, data, false).await?))
    }
}

impl TypeDataProvider for TypeSource {
    async fn fetch_type_relations(&self, name: &str) -> Result<TypeRelations, FetchError> {
        match self {
            TypeSource::Table(table) => table.fetch_type_relations(name).await,
            TypeSource::Chart(chart) => chart.fetch_type_relations(name).await,
        }
    }
}

/// Load `types.csv`, fetching every type from the API when it is missing or `force` is set
pub async fn sync_types(client: &PokeApiClient, data: &DataDir, force: bool) -> Result<TypeTable> {
    if !force && let Some(table) = data.load_type_table()? {
        tracing::debug!(types = table.len(), "using existing type table");
        return Ok(table);
    }

    tracing::info!(url = client.base_url(), "fetching type table");
    let relations = client
        .all_type_relations()
        .await
        .context("Failed to fetch type data")?;
    Ok(data.save_type_table(relations)?)
}

/// Fetch one creature. Needs no type data, so nothing is synced.
pub async fn lookup_creature(
    client: &PokeApiClient,
    name: &str,
) -> pokedex_core::Result<CreatureSummary> {
    client
        .pokemon(name)
        .await
        .map_err(ClientError::into_creature_error)
}

/// A looked-up creature with its resolved matchups
#[derive(Debug, Clone)]
pub struct CreatureInfo {
    pub creature: CreatureSummary,
    pub profile: EffectivenessProfile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReport {
    pub name: String,
    pub outcome: UpsertOutcome,
    pub total: u32,
}

pub struct Pokedex {
    client: PokeApiClient,
    resolver: Resolver<TypeSource>,
    entries: EntryStore<EntryTable>,
    stats: StatsAggregator<StatsTable>,
}

impl Pokedex {
    pub fn new(
        client: PokeApiClient,
        source: TypeSource,
        data: &DataDir,
    ) -> pokedex_core::Result<Self> {
        Ok(Self {
            client,
            resolver: Resolver::new(Arc::new(TypeRelationCache::new(source))),
            entries: data.open_entries()?,
            stats: data.open_stats()?,
        })
    }

    pub async fn creature(&self, name: &str) -> pokedex_core::Result<CreatureSummary> {
        lookup_creature(&self.client, name).await
    }

    pub async fn info(&self, name: &str) -> pokedex_core::Result<CreatureInfo> {
        let creature = self.creature(name).await?;
        let profile = self.resolver.resolve(creature.types.as_slice()).await?;
        Ok(CreatureInfo { creature, profile })
    }

    pub async fn matchup(&self, types: &[String]) -> pokedex_core::Result<EffectivenessProfile> {
        self.resolver.resolve(types).await
    }

    /// Resolve and save a creature, then record its stats.
    ///
    /// Nothing is written if the lookup or the resolution fails. Stats are
    /// recorded even when the entry was already saved.
    pub async fn add(&self, name: &str) -> pokedex_core::Result<AddReport> {
        let CreatureInfo { creature, profile } = self.info(name).await?;

        let outcome = self
            .entries
            .upsert(PokedexEntry::from_profile(&creature.name, profile))?;
        if outcome == UpsertOutcome::Skipped {
            tracing::info!(name = %creature.name, "already in the pokedex");
        }
        self.stats.record_stats(&creature.name, creature.stats)?;

        Ok(AddReport {
            total: creature.stats.total(),
            name: creature.name,
            outcome,
        })
    }

    pub fn entries(&self) -> &EntryStore<EntryTable> {
        &self.entries
    }

    pub fn stats(&self) -> &StatsAggregator<StatsTable> {
        &self.stats
    }
}
