//! CSV row layouts

use pokedex_core::{BaseStats, PokedexEntry, StatsEntry, TypeRelations, normalize_name};
use serde::{Deserialize, Serialize};

use crate::codec::{join_names, split_names, split_ordered};
use crate::table::TableRow;

/// `pokemons.csv`: `name,type,weakness,resistance,advantage`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRow {
    pub name: String,
    #[serde(rename = "type")]
    pub types: String,
    pub weakness: String,
    pub resistance: String,
    pub advantage: String,
}

impl TableRow for EntryRow {
    type Record = PokedexEntry;

    fn from_record(entry: &PokedexEntry) -> Self {
        Self {
            name: entry.name.clone(),
            types: join_names(&entry.types),
            weakness: join_names(&entry.weakness),
            resistance: join_names(&entry.resistance),
            advantage: join_names(&entry.advantage),
        }
    }

    fn into_record(self) -> Result<PokedexEntry, String> {
        let name = normalize_name(&self.name);
        if name.is_empty() {
            return Err("entry without a name".to_string());
        }
        Ok(PokedexEntry {
            name,
            types: split_ordered(&self.types),
            weakness: split_names(&self.weakness),
            resistance: split_names(&self.resistance),
            advantage: split_names(&self.advantage),
        })
    }
}

/// `pokemons_stats.csv`: name followed by the six base stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRow {
    pub name: String,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl TableRow for StatsRow {
    type Record = StatsEntry;

    fn from_record(entry: &StatsEntry) -> Self {
        let s = entry.stats;
        Self {
            name: entry.name.clone(),
            hp: s.hp,
            attack: s.attack,
            defense: s.defense,
            special_attack: s.special_attack,
            special_defense: s.special_defense,
            speed: s.speed,
        }
    }

    fn into_record(self) -> Result<StatsEntry, String> {
        let entry = StatsEntry::new(
            &self.name,
            BaseStats::new(
                self.hp,
                self.attack,
                self.defense,
                self.special_attack,
                self.special_defense,
                self.speed,
            ),
        );
        if entry.name.is_empty() {
            return Err("stats row without a name".to_string());
        }
        Ok(entry)
    }
}

/// `types.csv`: `Type,Weaknesses,Resistances,Advantages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRow {
    #[serde(rename = "Type")]
    pub name: String,
    #[serde(rename = "Weaknesses")]
    pub weaknesses: String,
    #[serde(rename = "Resistances")]
    pub resistances: String,
    #[serde(rename = "Advantages")]
    pub advantages: String,
}

impl TableRow for TypeRow {
    type Record = TypeRelations;

    fn from_record(rel: &TypeRelations) -> Self {
        Self {
            name: rel.name.clone(),
            weaknesses: join_names(&rel.weakness_sources),
            resistances: join_names(&rel.resistance_sources),
            advantages: join_names(&rel.advantage_targets),
        }
    }

    fn into_record(self) -> Result<TypeRelations, String> {
        if normalize_name(&self.name).is_empty() {
            return Err("type row without a name".to_string());
        }
        Ok(TypeRelations::new(
            &self.name,
            split_ordered(&self.weaknesses),
            split_ordered(&self.resistances),
            split_ordered(&self.advantages),
        ))
    }
}
