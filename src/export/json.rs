use crate::errors::{AppError, AppResult};
use crate::export::model::DayExport;
use std::fs::File;
use std::io::BufWriter;

/// Write the merged timeline rows as pretty-printed JSON.
pub fn write_json(path: &str, rows: &[DayExport]) -> AppResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, rows).map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
