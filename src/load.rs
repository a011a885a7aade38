use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::table::Table;

/// Split one line into fields on a literal delimiter. No quote or escape
/// handling: a field containing the delimiter will be mis-split.
pub fn split_fields(line: &str, delimiter: &str) -> Vec<String> {
    line.split(delimiter).map(str::to_string).collect()
}

/// Read a delimited text file into a `Table`. The first line becomes the
/// header, every subsequent line a record. An unreadable source is a
/// recoverable error, with no records loaded.
pub fn load_csv<P: AsRef<Path>>(path: P, delimiter: &str) -> Result<Table> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("opening `{}`", path.display()))?;

    let mut table = Table::new();
    table.delimiter = delimiter.to_string();

    let mut is_header = true;
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("reading `{}`", path.display()))?;
        let fields = split_fields(&line, &table.delimiter);
        if is_header {
            is_header = false;
            table.header = fields;
        } else {
            table.records.push(fields);
        }
    }

    debug!(
        columns = table.header.len(),
        records = table.records.len(),
        "loaded {}",
        path.display()
    );
    Ok(table)
}
