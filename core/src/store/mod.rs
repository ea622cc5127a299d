//! Keyed record stores over a durable backing
//!
//! The stores keep an in-memory view loaded from their [`RecordBacking`] at
//! open time and write through to it on every successful insert.

mod entries;
mod stats;

use std::fmt::Display;

use thiserror::Error;

use crate::error::Error as CoreError;

pub use entries::{EntryStore, UpsertOutcome};
pub use stats::StatsAggregator;

/// Durable sink behind a record store
pub trait RecordBacking<R>: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every stored row, in insertion order
    fn read_all(&self) -> Result<Vec<R>, Self::Error>;

    /// Append one complete row. A failed append must leave no partial row behind.
    fn append_row(&mut self, row: &R) -> Result<(), Self::Error>;
}

#[derive(Error, Debug)]
#[error("memory backing is read-only")]
pub struct ReadOnlyError;

/// In-process backing, used when nothing needs to outlive the run
#[derive(Debug, Clone)]
pub struct MemoryBacking<R> {
    rows: Vec<R>,
    read_only: bool,
}

impl<R> MemoryBacking<R> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<R>) -> Self {
        Self {
            rows,
            read_only: false,
        }
    }

    /// A backing that rejects every append
    pub fn read_only(rows: Vec<R>) -> Self {
        Self {
            rows,
            read_only: true,
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }
}

impl<R> Default for MemoryBacking<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone + Send> RecordBacking<R> for MemoryBacking<R> {
    type Error = ReadOnlyError;

    fn read_all(&self) -> Result<Vec<R>, Self::Error> {
        Ok(self.rows.clone())
    }

    fn append_row(&mut self, row: &R) -> Result<(), Self::Error> {
        if self.read_only {
            return Err(ReadOnlyError);
        }
        self.rows.push(row.clone());
        Ok(())
    }
}

fn unavailable(err: impl Display) -> CoreError {
    CoreError::StoreUnavailable(err.to_string())
}
