// src/export/model.rs

use crate::models::schema::COLUMNS;
use crate::models::{SpeciesTotal, SurveyRecord};

/// Header per XLSX / PDF: the store columns, unchanged.
pub(crate) fn get_headers() -> Vec<&'static str> {
    COLUMNS.to_vec()
}

/// Records in una tabella di stringhe (per PDF).
pub(crate) fn records_to_table(records: &[SurveyRecord]) -> Vec<Vec<String>> {
    records.iter().map(SurveyRecord::to_row).collect()
}

pub(crate) fn species_to_table(species: &[SpeciesTotal]) -> Vec<Vec<String>> {
    species
        .iter()
        .map(|s| vec![s.species.clone(), s.total.to_string()])
        .collect()
}
