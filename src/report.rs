// src/report.rs

use anyhow::{Context, Result};
use std::io::Write;

use crate::store::StoredRow;

/// Write each stored row on its own line, values exactly as stored.
pub fn print_rows<W: Write>(rows: &[StoredRow], mut out: W) -> Result<()> {
    for row in rows {
        writeln!(out, "{}", row).context("writing report line")?;
    }
    out.flush().context("flushing report")?;
    Ok(())
}
