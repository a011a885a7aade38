use anyhow::{anyhow, Result};
use std::collections::HashMap;
use tracing::debug;

use crate::table::{Record, Table};

/// Reduce `table.records` to at most one record per distinct value of the
/// unique-key column.
///
/// Among records sharing a key, the one with the lexicographically greater
/// sort-key field wins; on a tie the first-seen record is kept. The
/// `ascending` flag on the table is not consulted. Output order is
/// unspecified (records are collected from a hash map).
///
/// Fails with an invalid-index error when a record is actually indexed
/// through an unresolved or out-of-range column; on failure the record
/// list is left untouched.
pub fn distinct(table: &mut Table) -> Result<()> {
    let unique_idx = table.unique_key_index();
    let sort_idx = table.sort_key_index();

    let mut best: HashMap<String, Record> = HashMap::new();
    for record in &table.records {
        let key = field(record, unique_idx, &table.unique_key)?.to_string();
        match best.get(&key) {
            None => {
                best.insert(key, record.clone());
            }
            Some(incumbent) => {
                let challenger = field(record, sort_idx, &table.sort_key)?;
                if challenger > field(incumbent, sort_idx, &table.sort_key)? {
                    best.insert(key, record.clone());
                }
            }
        }
    }

    debug!(
        before = table.records.len(),
        after = best.len(),
        "distinct pass complete"
    );
    table.records = best.into_values().collect();
    Ok(())
}

/// Field of `record` at a resolved column position. An unresolved column or
/// a record too short for the position is the same invalid-index failure.
fn field<'a>(record: &'a Record, index: Option<usize>, column: &str) -> Result<&'a str> {
    let index = index.ok_or_else(|| {
        anyhow!("column `{}` not found in header, field index out of range", column)
    })?;
    record.get(index).map(String::as_str).ok_or_else(|| {
        anyhow!(
            "field index {} out of range for record with {} fields (column `{}`)",
            index,
            record.len(),
            column
        )
    })
}
