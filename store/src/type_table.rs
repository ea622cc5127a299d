//! Persisted side table of type relations

use std::collections::BTreeMap;

use pokedex_core::{FetchError, TypeDataProvider, TypeRelations, normalize_name};

use crate::table::{CsvTable, TableError, TableRow};
use crate::rows::TypeRow;

/// Every known type's relations, loaded from `types.csv`.
///
/// Serves as a [`TypeDataProvider`] so resolution can run without the network
/// once the table has been synced.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    relations: BTreeMap<String, TypeRelations>,
}

impl TypeTable {
    pub fn from_relations(relations: impl IntoIterator<Item = TypeRelations>) -> Self {
        Self {
            relations: relations
                .into_iter()
                .map(|rel| (rel.name.clone(), rel))
                .collect(),
        }
    }

    /// Read the table; a missing file gives `None`
    pub fn load(file: &CsvTable<TypeRow>) -> Result<Option<Self>, TableError> {
        if !file.exists() {
            return Ok(None);
        }
        let rows = file.read_rows()?;
        let mut relations = Vec::with_capacity(rows.len());
        for row in rows {
            let rel = row.into_record().map_err(|reason| TableError::InvalidRow {
                path: file.path().to_path_buf(),
                reason,
            })?;
            relations.push(rel);
        }
        Ok(Some(Self::from_relations(relations)))
    }

    /// Overwrite `file` with this table
    pub fn save(&self, file: &mut CsvTable<TypeRow>) -> Result<(), TableError> {
        let rows: Vec<TypeRow> = self.relations.values().map(TypeRow::from_record).collect();
        file.write_all(&rows)
    }

    pub fn get(&self, name: &str) -> Option<&TypeRelations> {
        self.relations.get(&normalize_name(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.relations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

impl TypeDataProvider for TypeTable {
    async fn fetch_type_relations(&self, name: &str) -> Result<TypeRelations, FetchError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(name.to_string()))
    }
}
