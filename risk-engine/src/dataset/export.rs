//! Account feature file
//!
//! `id,pagerank,degree,betweenness,community`, one row per account.

use std::io::Write;

use crate::error::EngineResult;
use crate::features::AccountFeatureRow;

/// Write account rows with a header line; returns the number of rows written
pub fn write_account_features<W: Write>(rows: &[AccountFeatureRow], writer: W) -> EngineResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(rows.len())
}
