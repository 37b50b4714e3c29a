use crate::errors::AppResult;
use crate::models::{KnownLocations, MapPoint, SpeciesTotal, SurveyRecord};
use crate::query::{self, RecordFilter};
use crate::store::RecordStore;

/// Everything the report screens show for one filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyView {
    /// Rows in the whole store, before filtering.
    pub store_rows: usize,
    pub records: Vec<SurveyRecord>,
    pub map: Vec<MapPoint>,
    pub total: u64,
    pub species: Vec<SpeciesTotal>,
}

impl SurveyView {
    pub fn build(all: &[SurveyRecord], filter: &RecordFilter, known: &KnownLocations) -> Self {
        let records = filter.apply(all);
        let map = query::map_summary(&records, known);
        let total = query::total_count(&records);
        let species = query::species_summary(&records);

        Self {
            store_rows: all.len(),
            records,
            map,
            total,
            species,
        }
    }

    /// Load the store and build the view in one go.
    pub fn load(
        store: &RecordStore,
        filter: &RecordFilter,
        known: &KnownLocations,
    ) -> AppResult<Self> {
        let all = store.load()?;
        Ok(Self::build(&all, filter, known))
    }

    pub fn store_is_empty(&self) -> bool {
        self.store_rows == 0
    }
}
