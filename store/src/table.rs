//! Append-only CSV file holding one row type

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use pokedex_core::RecordBacking;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid row in {}: {reason}", .path.display())]
    InvalidRow { path: PathBuf, reason: String },
}

/// A CSV row and the domain record it stands for
pub trait TableRow: Serialize + DeserializeOwned + Send {
    type Record;

    fn from_record(record: &Self::Record) -> Self;

    fn into_record(self) -> Result<Self::Record, String>;
}

/// CSV file with a header line and one `R` per line
#[derive(Debug)]
pub struct CsvTable<R> {
    path: PathBuf,
    _row: PhantomData<fn() -> R>,
}

impl<R: TableRow> CsvTable<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _row: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// All rows; a missing file reads as empty
    pub fn read_rows(&self) -> Result<Vec<R>, TableError> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| self.csv_error(e))?;
        reader
            .deserialize()
            .collect::<Result<Vec<R>, _>>()
            .map_err(|e| self.csv_error(e))
    }

    /// Append one row, writing the header first if the file is new.
    ///
    /// The row is encoded in memory and written in one call; if the write
    /// fails the file is cut back to its previous length.
    pub fn append(&mut self, row: &R) -> Result<(), TableError> {
        self.ensure_parent()?;

        let previous_len = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => return Err(self.io_error(e)),
        };
        let bytes = self.encode(std::slice::from_ref(row), previous_len == 0)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        if let Err(e) = file.write_all(&bytes).and_then(|_| file.flush()) {
            if let Err(truncate_err) = file.set_len(previous_len) {
                tracing::error!(
                    path = %self.path.display(),
                    error = %truncate_err,
                    "failed to roll back partial row"
                );
            }
            return Err(self.io_error(e));
        }
        Ok(())
    }

    /// Replace the whole file with `rows`, through a temporary file and a rename
    pub fn write_all(&mut self, rows: &[R]) -> Result<(), TableError> {
        self.ensure_parent()?;

        let bytes = self.encode(rows, true)?;
        let tmp = self.path.with_extension("csv.tmp");
        fs::write(&tmp, &bytes).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }

    /// Delete the file. Returns whether it existed.
    pub fn remove(&mut self) -> Result<bool, TableError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn encode(&self, rows: &[R], with_header: bool) -> Result<Vec<u8>, TableError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(with_header)
            .from_writer(Vec::new());
        for row in rows {
            writer.serialize(row).map_err(|e| self.csv_error(e))?;
        }
        writer.into_inner().map_err(|e| self.io_error(e.into_error()))
    }

    fn ensure_parent(&self) -> Result<(), TableError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))
            }
            _ => Ok(()),
        }
    }

    fn io_error(&self, source: io::Error) -> TableError {
        TableError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, source: csv::Error) -> TableError {
        TableError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

impl<R: TableRow> RecordBacking<R::Record> for CsvTable<R> {
    type Error = TableError;

    fn read_all(&self) -> Result<Vec<R::Record>, Self::Error> {
        self.read_rows()?
            .into_iter()
            .map(|row| {
                row.into_record().map_err(|reason| TableError::InvalidRow {
                    path: self.path.clone(),
                    reason,
                })
            })
            .collect()
    }

    fn append_row(&mut self, row: &R::Record) -> Result<(), Self::Error> {
        self.append(&R::from_record(row))
    }
}
