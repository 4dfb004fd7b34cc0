use crate::export::model::DayExport;
use csv::Writer;

/// Write the merged timeline rows as CSV.
pub fn write_csv(path: &str, rows: &[DayExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "date", "day_type", "office", "remote", "total", "expected", "balance", "memo",
    ])?;

    for row in rows {
        wtr.write_record(&[
            row.date.clone(),
            row.day_type.to_string(),
            row.office.clone(),
            row.remote.clone(),
            row.total.clone(),
            row.expected.clone(),
            row.balance.clone(),
            row.memo.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
