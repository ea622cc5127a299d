//! Flat-file storage for the Pokedex.
//!
//! Three CSV tables live in one data directory:
//!
//! - `pokemons.csv` - saved [`PokedexEntry`](pokedex_core::PokedexEntry) rows
//! - `pokemons_stats.csv` - recorded base stats
//! - `types.csv` - the synced [`TypeTable`]
//!
//! Set-valued cells are written with [`codec::join_names`] and read back with
//! [`codec::split_names`].

pub mod codec;
mod rows;
mod table;
mod type_table;

use std::path::{Path, PathBuf};

use pokedex_core::{EntryStore, StatsAggregator, TypeRelations};

pub use rows::{EntryRow, StatsRow, TypeRow};
pub use table::{CsvTable, TableError, TableRow};
pub use type_table::TypeTable;

pub const ENTRIES_FILE: &str = "pokemons.csv";
pub const STATS_FILE: &str = "pokemons_stats.csv";
pub const TYPES_FILE: &str = "types.csv";

pub type EntryTable = CsvTable<EntryRow>;
pub type StatsTable = CsvTable<StatsRow>;
pub type TypeFile = CsvTable<TypeRow>;

/// Directory holding the three tables
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries_table(&self) -> EntryTable {
        CsvTable::new(self.root.join(ENTRIES_FILE))
    }

    pub fn stats_table(&self) -> StatsTable {
        CsvTable::new(self.root.join(STATS_FILE))
    }

    pub fn types_file(&self) -> TypeFile {
        CsvTable::new(self.root.join(TYPES_FILE))
    }

    pub fn open_entries(&self) -> pokedex_core::Result<EntryStore<EntryTable>> {
        EntryStore::open(self.entries_table())
    }

    pub fn open_stats(&self) -> pokedex_core::Result<StatsAggregator<StatsTable>> {
        StatsAggregator::open(self.stats_table())
    }

    /// The synced type table, if `types.csv` exists
    pub fn load_type_table(&self) -> Result<Option<TypeTable>, TableError> {
        TypeTable::load(&self.types_file())
    }

    /// Write `relations` as the new `types.csv`
    pub fn save_type_table(&self, relations: Vec<TypeRelations>) -> Result<TypeTable, TableError> {
        let table = TypeTable::from_relations(relations);
        table.save(&mut self.types_file())?;
        tracing::info!(
            types = table.len(),
            path = %self.types_file().path().display(),
            "type table saved"
        );
        Ok(table)
    }

    /// Delete all three tables. Returns the files that existed.
    pub fn clear(&self) -> Result<Vec<PathBuf>, TableError> {
        let mut removed = Vec::new();

        let mut entries = self.entries_table();
        if entries.remove()? {
            removed.push(entries.path().to_path_buf());
        }
        let mut stats = self.stats_table();
        if stats.remove()? {
            removed.push(stats.path().to_path_buf());
        }
        let mut types = self.types_file();
        if types.remove()? {
            removed.push(types.path().to_path_buf());
        }

        Ok(removed)
    }
}
