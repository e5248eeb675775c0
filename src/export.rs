use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::AppError;

/// Ask for a destination and write the rows there. `Ok(None)` when the
/// user cancelled the file dialog.
pub fn export_to_csv(
    headers: &[String],
    rows: &[Vec<String>],
    table_name: &str,
) -> Result<Option<PathBuf>, AppError> {
    let file_dialog = rfd::FileDialog::new()
        .add_filter("CSV files", &["csv"])
        .set_file_name(format!("{}.csv", table_name.replace(' ', "_")));

    let Some(path) = file_dialog.save_file() else {
        debug!("CSV export cancelled");
        return Ok(None);
    };
    write_csv_file(&path, headers, rows)?;
    info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(Some(path))
}

pub fn write_csv_file(path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<(), AppError> {
    let file = std::fs::File::create(path)?;
    write_csv(file, headers, rows)
}

pub fn write_csv<W: Write>(out: W, headers: &[String], rows: &[Vec<String>]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
