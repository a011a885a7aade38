use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::table::Table;

/// Write the header line and one line per record, fields joined with the
/// table's delimiter. The exact inverse of the loader's split.
pub fn write_csv<W: Write>(table: &Table, out: &mut W) -> Result<()> {
    writeln!(out, "{}", table.header.join(&table.delimiter))?;
    for record in &table.records {
        writeln!(out, "{}", record.join(&table.delimiter))?;
    }
    Ok(())
}

/// Write the table to `path`, buffered.
pub fn write_csv_file<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("creating `{}`", path.display()))?;
    let mut out = BufWriter::new(file);
    write_csv(table, &mut out)?;
    out.flush()
        .with_context(|| format!("flushing `{}`", path.display()))?;
    Ok(())
}
