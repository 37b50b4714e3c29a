// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::SurveyRecord;
use crate::query;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, keys named after the store columns.
pub(crate) fn export_json(records: &[SurveyRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: the exact bytes the backing store would hold for `records`.
pub(crate) fn export_csv(records: &[SurveyRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let bytes = query::export_csv(records)?;

    let mut file = File::create(path)?;
    file.write_all(&bytes)?;

    notify_export_success("CSV", path);
    Ok(())
}
