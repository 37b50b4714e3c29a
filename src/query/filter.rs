use crate::models::SurveyRecord;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Rows whose location is in `locations`. An empty set keeps everything.
pub fn filter_by_location(
    records: &[SurveyRecord],
    locations: &BTreeSet<String>,
) -> Vec<SurveyRecord> {
    if locations.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| locations.contains(&r.location))
        .cloned()
        .collect()
}

/// Rows surveyed on one of `dates`. An empty set keeps everything.
/// Only the calendar date is compared, never the time columns.
pub fn filter_by_date(records: &[SurveyRecord], dates: &BTreeSet<NaiveDate>) -> Vec<SurveyRecord> {
    if dates.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| dates.contains(&r.date))
        .cloned()
        .collect()
}

/// Location + date selection, both optional, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub locations: BTreeSet<String>,
    pub dates: BTreeSet<NaiveDate>,
}

impl RecordFilter {
    pub fn new<L, D>(locations: L, dates: D) -> Self
    where
        L: IntoIterator<Item = String>,
        D: IntoIterator<Item = NaiveDate>,
    {
        Self {
            locations: locations.into_iter().collect(),
            dates: dates.into_iter().collect(),
        }
    }

    pub fn apply(&self, records: &[SurveyRecord]) -> Vec<SurveyRecord> {
        let by_location = filter_by_location(records, &self.locations);
        filter_by_date(&by_location, &self.dates)
    }
}
