use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Ascending percentile boundaries for one metric in one season. Built
/// upstream, fetched once, never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdTable {
    pub metric: String,
    pub season: String,
    pub bounds: Vec<f64>,
}

/// Band index (1-based) of `value` against ascending `bounds`.
///
/// Scans from the highest boundary down; meeting a boundary (inclusive)
/// puts the value in the band above it, capped at the table length, so the
/// index equals one plus the number of boundaries met. Anything below every
/// boundary lands in band 1. `None` means "no data" (empty table or
/// non-finite value) and renders as "–".
pub fn percentile_of(value: f64, bounds: &[f64]) -> Option<usize> {
    if bounds.is_empty() || !value.is_finite() {
        return None;
    }
    for (idx, bound) in bounds.iter().enumerate().rev() {
        if value >= *bound {
            return Some((idx + 2).min(bounds.len()));
        }
    }
    Some(1)
}

/// Session cache of threshold tables keyed by metric.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdBook {
    tables: HashMap<String, ThresholdTable>,
}

impl ThresholdBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tables(tables: Vec<ThresholdTable>) -> Self {
        let mut book = Self::new();
        for table in tables {
            book.insert(table);
        }
        book
    }

    pub fn insert(&mut self, table: ThresholdTable) {
        self.tables.insert(table.metric.clone(), table);
    }

    pub fn table(&self, metric: &str) -> Option<&ThresholdTable> {
        self.tables.get(metric)
    }

    pub fn percentile(&self, metric: &str, value: f64) -> Option<usize> {
        percentile_of(value, &self.table(metric)?.bounds)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }
}
