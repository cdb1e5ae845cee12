use std::collections::HashSet;
use std::path::Path;

use crate::error::ExportError;

use super::record::ResultRecord;

/// Writes `records` as CSV to `path`, replacing any existing file.
///
/// The header comes from the first record. All records are checked against
/// it before the file is created, so a mismatch leaves no partial table.
pub fn write_csv(path: impl AsRef<Path>, records: &[ResultRecord]) -> Result<(), ExportError> {
    let header = validate(records)?;
    let path = path.as_ref();

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&header)?;
    for record in records {
        writer.write_record(record.values())?;
    }
    writer.flush()?;

    log::info!("Wrote {} result rows to {}", records.len(), path.display());
    Ok(())
}

fn validate(records: &[ResultRecord]) -> Result<Vec<String>, ExportError> {
    let first = records.first().ok_or(ExportError::NoRecords)?;
    let header = first.columns();

    let mut seen = HashSet::with_capacity(header.len());
    if let Some(dup) = header.iter().find(|column| !seen.insert(column.as_str())) {
        return Err(ExportError::DuplicateColumn(dup.clone()));
    }

    for (row, record) in records.iter().enumerate().skip(1) {
        let columns = record.columns();
        if columns != header {
            return Err(ExportError::ShapeMismatch {
                row,
                expected: header,
                found: columns,
            });
        }
    }
    Ok(header)
}
