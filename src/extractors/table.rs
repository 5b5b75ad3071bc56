// src/extractors/table.rs
use crate::config::MissingPolicy;
use crate::document::models::{CleanTable, RawTable};
use serde_json::Value;

/// Cleans backend tables into compact `CleanTable`s.
///
/// Rows and columns made only of missing cells are dropped, string cells are trimmed
/// and empty strings count as missing. What a surviving missing cell looks like in the
/// output is decided by the `MissingPolicy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableNormalizer {
    policy: MissingPolicy,
}

impl TableNormalizer {
    pub fn new(policy: MissingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MissingPolicy {
        self.policy
    }

    /// Returns `None` when nothing survives cleaning. Never fails: jagged rows are padded
    /// and non-string cells are stringified.
    pub fn normalize(&self, table: &RawTable) -> Option<CleanTable> {
        let width = table.rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            tracing::debug!("Skipping table with no cells");
            return None;
        }

        let data = table
            .rows
            .iter()
            .map(|row| {
                let mut cells: Vec<Option<String>> = row.iter().map(coerce_cell).collect();
                cells.resize(width, None);
                cells
            })
            .collect();

        self.clean((0..table.rows.len()).collect(), (0..width).collect(), data)
    }

    /// Cleans an already-clean table again, keeping its original labels.
    /// For any output of `normalize` this returns an identical table.
    pub fn renormalize(&self, table: &CleanTable) -> Option<CleanTable> {
        self.clean(table.index.clone(), table.columns.clone(), table.data.clone())
    }

    /// Normalizes every table independently, leaving out the ones that come back empty.
    pub fn normalize_all(&self, tables: &[RawTable]) -> Vec<CleanTable> {
        let cleaned: Vec<CleanTable> = tables.iter().filter_map(|t| self.normalize(t)).collect();
        tracing::debug!(
            "Normalized {} raw tables into {} clean tables ({:?} policy)",
            tables.len(),
            cleaned.len(),
            self.policy
        );
        cleaned
    }

    fn clean(
        &self,
        index: Vec<usize>,
        columns: Vec<usize>,
        data: Vec<Vec<Option<String>>>,
    ) -> Option<CleanTable> {
        // Trim, then treat empty strings as missing before any drop decision
        let data: Vec<Vec<Option<String>>> = data
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        cell.map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                    })
                    .collect()
            })
            .collect();

        let (index, data): (Vec<usize>, Vec<Vec<Option<String>>>) = index
            .into_iter()
            .zip(data)
            .filter(|(_, row)| row.iter().any(Option::is_some))
            .unzip();

        let keep: Vec<bool> = (0..columns.len())
            .map(|col| data.iter().any(|row| matches!(row.get(col), Some(Some(_)))))
            .collect();

        let columns: Vec<usize> = columns
            .into_iter()
            .zip(&keep)
            .filter_map(|(label, &kept)| kept.then_some(label))
            .collect();

        if index.is_empty() || columns.is_empty() {
            tracing::trace!("Table empty after cleaning");
            return None;
        }

        let data = data
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&keep)
                    .filter_map(|(cell, &kept)| kept.then_some(cell))
                    .map(|cell| match self.policy {
                        MissingPolicy::Null => cell,
                        MissingPolicy::EmptyString => Some(cell.unwrap_or_default()),
                    })
                    .collect()
            })
            .collect();

        Some(CleanTable { columns, index, data })
    }
}

fn coerce_cell(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
