use super::conditions::FieldConditions;
use super::species::SpeciesEntry;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One row of the backing store: a single species observed during one visit.
///
/// Field names are mapped onto the schema column names (see
/// [`crate::models::schema::COLUMNS`]); the declaration order below is the
/// column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD"
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Recorder")]
    pub recorder: String,
    #[serde(rename = "Start Time")]
    pub start_time: NaiveTime, // ⇔ "HH:MM:SS[.f]"
    #[serde(rename = "End Time")]
    pub end_time: NaiveTime,
    #[serde(rename = "Wind")]
    pub wind: String,
    #[serde(rename = "Precipitation")]
    pub precipitation: String,
    #[serde(rename = "Tide")]
    pub tide: String,
    #[serde(rename = "Temperature")]
    pub temperature: String,
    #[serde(rename = "Species")]
    pub species: String,
    #[serde(rename = "Count_le_50m")]
    pub count_le_50m: u32,
    #[serde(rename = "Count_gt_50m")]
    pub count_gt_50m: u32,
    #[serde(rename = "Flythrough")]
    pub flythrough: u32,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl SurveyRecord {
    /// Build a row from the visit conditions and one species entry.
    pub fn from_parts(conditions: &FieldConditions, entry: &SpeciesEntry) -> Self {
        Self {
            date: conditions.date,
            location: conditions.location.clone(),
            recorder: conditions.recorder.clone(),
            start_time: conditions.start_time,
            end_time: conditions.end_time,
            wind: conditions.wind.clone(),
            precipitation: conditions.precipitation.clone(),
            tide: conditions.tide.clone(),
            temperature: conditions.temperature.clone(),
            species: entry.species.clone(),
            count_le_50m: entry.count_le_50m,
            count_gt_50m: entry.count_gt_50m,
            flythrough: entry.flythrough,
            notes: entry.notes.clone(),
        }
    }

    /// Birds counted on this row, all three distance bands together.
    pub fn total(&self) -> u64 {
        u64::from(self.count_le_50m) + u64::from(self.count_gt_50m) + u64::from(self.flythrough)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_range_str(&self) -> String {
        format!(
            "{}-{}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }

    /// Cell values in schema order, as written to the store.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date_str(),
            self.location.clone(),
            self.recorder.clone(),
            self.start_time.to_string(),
            self.end_time.to_string(),
            self.wind.clone(),
            self.precipitation.clone(),
            self.tide.clone(),
            self.temperature.clone(),
            self.species.clone(),
            self.count_le_50m.to_string(),
            self.count_gt_50m.to_string(),
            self.flythrough.to_string(),
            self.notes.clone(),
        ]
    }
}
