//! Validation of raw rows into a word set.

use crate::error::{LoadError, Result};
use crate::types::{Entity, RawRow, WordSet, FIELD_COUNT};
use std::collections::HashSet;

/// Validate plain rows, numbering them from 1 in order.
pub fn validate(rows: Vec<Vec<String>>) -> Result<WordSet> {
    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(idx, fields)| RawRow {
            line: idx + 1,
            fields,
        })
        .collect();
    validate_rows(rows)
}

/// Validate rows read from a set file and build a word set.
///
/// Checks run in this order: field count per row (first offending row wins,
/// reported with its source line), trimming, duplicate keys (all of them
/// reported at once), emptiness.
pub fn validate_rows(rows: Vec<RawRow>) -> Result<WordSet> {
    for row in &rows {
        if row.fields.len() != FIELD_COUNT {
            return Err(LoadError::Schema {
                line: row.line,
                found: row.fields.len(),
                expected: FIELD_COUNT,
                content: row.fields.clone(),
            });
        }
    }

    let entities: Vec<Entity> = rows.into_iter().map(|row| trim_row(row.fields)).collect();

    let duplicates = find_duplicates(&entities);
    if !duplicates.is_empty() {
        return Err(LoadError::Duplicate { keys: duplicates });
    }

    if entities.is_empty() {
        return Err(LoadError::Empty);
    }

    tracing::debug!(words = entities.len(), "validated study set");
    Ok(WordSet::new(entities))
}

fn trim_row(row: Vec<String>) -> Entity {
    let mut fields: [String; FIELD_COUNT] = Default::default();
    for (slot, value) in fields.iter_mut().zip(row) {
        *slot = value.trim().to_string();
    }
    Entity::new(fields)
}

/// Keys that occur more than once, each listed once in first-repeat order.
fn find_duplicates(entities: &[Entity]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for entity in entities {
        let key = entity.key();
        if !seen.insert(key) && reported.insert(key) {
            duplicates.push(key.to_string());
        }
    }

    duplicates
}
