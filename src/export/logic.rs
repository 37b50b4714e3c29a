// src/export/logic.rs

use crate::core::view::SurveyView;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export della vista filtrata.
    ///
    /// - `format`: `None` → dedotto dall'estensione di `file`
    /// - `title`: intestazione del PDF
    ///
    /// Returns the written path and the format used, or `None` when the
    /// view had no rows.
    pub fn export(
        view: &SurveyView,
        format: Option<ExportFormat>,
        file: &str,
        title: &str,
        force: bool,
    ) -> AppResult<Option<(PathBuf, ExportFormat)>> {
        let path = expand_tilde(file);

        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(&path)?,
        };

        if view.records.is_empty() {
            warning("No records found for the selected filters.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Csv => export_csv(&view.records, &path)?,
            ExportFormat::Json => export_json(&view.records, &path)?,
            ExportFormat::Xlsx => export_xlsx(&view.records, &view.species, &path)?,
            ExportFormat::Pdf => export_pdf(&view.records, &view.species, &path, title)?,
        }

        Ok(Some((path, format)))
    }
}
