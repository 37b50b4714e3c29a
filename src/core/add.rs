use crate::errors::{AppError, AppResult};
use crate::models::{FieldConditions, SpeciesCatalog, SpeciesEntry, SurveyRecord};
use crate::store::RecordStore;
use regex::Regex;

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `species` rows appended; the store now holds `total_rows`.
    Saved { species: usize, total_rows: usize },
    /// No entry had a positive count: nothing was written.
    NothingToSave,
}

const ENTRY_PATTERN: &str = r"^\s*(?P<name>[^:]*?)\s*:\s*(?P<le>\d+)\s*:\s*(?P<gt>\d+)\s*:\s*(?P<fly>\d+)\s*(?::(?P<notes>.*))?$";

/// Parse `NAME:LE:GT:FLY[:NOTES]` from the command line.
///
/// NAME is matched against the catalogue by full name or AOU code; when it
/// matches, the catalogue spelling is stored. Anything else is kept as typed
/// (an "other species").
pub fn parse_species_entry(raw: &str, catalog: &SpeciesCatalog) -> AppResult<SpeciesEntry> {
    let re = Regex::new(ENTRY_PATTERN).map_err(|e| AppError::Other(e.to_string()))?;

    let caps = re.captures(raw).ok_or_else(|| {
        AppError::InvalidSpeciesEntry(format!(
            "'{raw}'. Expected NAME:LE:GT:FLY[:NOTES], e.g. 'PAWA:2:0:1:foraging'"
        ))
    })?;

    let count = |key: &str| -> AppResult<u32> {
        caps[key].parse::<u32>().map_err(|_| {
            AppError::InvalidSpeciesEntry(format!("'{raw}': count '{}' out of range", &caps[key]))
        })
    };

    let name = caps["name"].trim();
    let species = catalog
        .resolve(name)
        .map(str::to_string)
        .unwrap_or_else(|| name.to_string());

    Ok(SpeciesEntry {
        species,
        count_le_50m: count("le")?,
        count_gt_50m: count("gt")?,
        flythrough: count("fly")?,
        notes: caps
            .name("notes")
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}

/// Rows to persist for one submission, in entry order.
///
/// Entries with all three counts at zero are dropped (notes alone do not
/// keep a row), and so are entries without a species name.
pub fn build_batch(conditions: &FieldConditions, entries: &[SpeciesEntry]) -> Vec<SurveyRecord> {
    entries
        .iter()
        .filter(|e| e.has_counts() && !e.species.trim().is_empty())
        .map(|e| SurveyRecord::from_parts(conditions, e))
        .collect()
}

pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        store: &RecordStore,
        conditions: &FieldConditions,
        entries: &[SpeciesEntry],
    ) -> AppResult<SubmitOutcome> {
        let batch = build_batch(conditions, entries);

        if batch.is_empty() {
            return Ok(SubmitOutcome::NothingToSave);
        }

        let total_rows = store.append(&batch)?;

        Ok(SubmitOutcome::Saved {
            species: batch.len(),
            total_rows,
        })
    }
}
