use crate::errors::AppError;
use crate::model::RadioRecord;
use csv::Writer;
use log::info;
use std::path::Path;

/// CSV export of the catalog; the header row comes from the record field names.
pub fn write_csv(records: &[RadioRecord], out_path: &Path) -> Result<(), AppError> {
    let mut wtr = Writer::from_path(out_path)
        .map_err(|e| AppError::IO(format!("open out csv '{}': {}", out_path.display(), e)))?;

    for r in records {
        wtr.serialize(r)
            .map_err(|e| AppError::IO(format!("csv write row: {}", e)))?;
    }

    wtr.flush().map_err(|e| AppError::IO(format!("csv flush: {}", e)))?;
    info!("CSV wrote {} rows to {}", records.len(), out_path.display());
    Ok(())
}
