// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, records_to_table, species_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::{SpeciesTotal, SurveyRecord};
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF: tabella dei record, poi i totali per specie.
pub(crate) fn export_pdf(
    records: &[SurveyRecord],
    species: &[SpeciesTotal],
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &get_headers(), &records_to_table(records));
    pdf.write_table(
        &format!("{title} - Counts by Species"),
        &["Species", "Total"],
        &species_to_table(species),
    );

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
