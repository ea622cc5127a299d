//! Base stat records and total rankings

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{RecordBacking, unavailable};
use crate::error::{Error, Result};
use crate::types::{BaseStats, StatsEntry};

struct StatsState<B> {
    backing: B,
    entries: Vec<StatsEntry>,
}

/// Append-only stats table.
///
/// Names are not unique: every recorded fetch becomes its own row.
pub struct StatsAggregator<B> {
    state: Mutex<StatsState<B>>,
}

impl<B: RecordBacking<StatsEntry>> StatsAggregator<B> {
    pub fn open(backing: B) -> Result<Self> {
        let entries = backing.read_all().map_err(unavailable)?;
        Ok(Self {
            state: Mutex::new(StatsState { backing, entries }),
        })
    }

    /// Append a row for `name`
    pub fn record_stats(&self, name: &str, stats: BaseStats) -> Result<()> {
        let entry = StatsEntry::new(name, stats);
        if entry.name.is_empty() {
            return Err(Error::InvalidInput("stats name is empty".to_string()));
        }

        let mut state = self.lock();
        state.backing.append_row(&entry).map_err(|e| {
            tracing::warn!(name = %entry.name, error = %e, "failed to persist stats");
            unavailable(e)
        })?;
        state.entries.push(entry);
        Ok(())
    }

    /// `(name, total)` pairs, highest total first; equal totals keep insertion order
    pub fn ranked_totals(&self) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> = self
            .lock()
            .entries
            .iter()
            .map(|e| (e.name.clone(), e.total()))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Every row in insertion order
    pub fn entries(&self) -> Vec<StatsEntry> {
        self.lock().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, StatsState<B>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBacking;

    fn stats_with_total(total: u32) -> BaseStats {
        BaseStats::new(total, 0, 0, 0, 0, 0)
    }

    #[test]
    fn test_ranking_is_stable_descending() {
        let aggregator = StatsAggregator::open(MemoryBacking::new()).unwrap();
        aggregator.record_stats("first", stats_with_total(300)).unwrap();
        aggregator.record_stats("best", stats_with_total(500)).unwrap();
        aggregator.record_stats("second", stats_with_total(300)).unwrap();

        assert_eq!(
            aggregator.ranked_totals(),
            vec![
                ("best".to_string(), 500),
                ("first".to_string(), 300),
                ("second".to_string(), 300),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_appended() {
        let aggregator = StatsAggregator::open(MemoryBacking::new()).unwrap();
        let stats = BaseStats::new(35, 55, 40, 50, 50, 90);
        aggregator.record_stats("Pikachu", stats).unwrap();
        aggregator.record_stats("pikachu", stats).unwrap();

        assert_eq!(aggregator.len(), 2);
        assert!(aggregator.entries().iter().all(|e| e.name == "pikachu"));
        assert!(aggregator.ranked_totals().iter().all(|(_, total)| *total == 320));
    }

    #[test]
    fn test_open_reads_existing_rows() {
        let backing =
            MemoryBacking::with_rows(vec![StatsEntry::new("onix", stats_with_total(385))]);
        let aggregator = StatsAggregator::open(backing).unwrap();
        aggregator.record_stats("mew", stats_with_total(600)).unwrap();

        assert_eq!(aggregator.ranked_totals()[0], ("mew".to_string(), 600));
        assert_eq!(aggregator.ranked_totals()[1], ("onix".to_string(), 385));
    }

    #[test]
    fn test_failed_write_records_nothing() {
        let aggregator = StatsAggregator::open(MemoryBacking::read_only(Vec::new())).unwrap();
        let err = aggregator.record_stats("mew", stats_with_total(600)).unwrap_err();
        assert!(matches!(err, Error::StoreUnavailable(_)));
        assert!(aggregator.is_empty());
        assert!(aggregator.ranked_totals().is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let aggregator = StatsAggregator::open(MemoryBacking::new()).unwrap();
        assert!(matches!(
            aggregator.record_stats("", BaseStats::default()),
            Err(Error::InvalidInput(_))
        ));
    }
}
