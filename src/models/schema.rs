//! Fixed column layout of the backing store.
//!
//! Load, persist and export all go through these constants, so a store
//! written by one version can be checked column by column on reload.

/// Bumped whenever a column is added, renamed or moved.
pub const SCHEMA_VERSION: u32 = 1;

pub const COL_DATE: &str = "Date";
pub const COL_LOCATION: &str = "Location";
pub const COL_RECORDER: &str = "Recorder";
pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_WIND: &str = "Wind";
pub const COL_PRECIPITATION: &str = "Precipitation";
pub const COL_TIDE: &str = "Tide";
pub const COL_TEMPERATURE: &str = "Temperature";
pub const COL_SPECIES: &str = "Species";
pub const COL_COUNT_LE_50M: &str = "Count_le_50m";
pub const COL_COUNT_GT_50M: &str = "Count_gt_50m";
pub const COL_FLYTHROUGH: &str = "Flythrough";
pub const COL_NOTES: &str = "Notes";

/// Exact header row, in file order.
pub const COLUMNS: [&str; 14] = [
    COL_DATE,
    COL_LOCATION,
    COL_RECORDER,
    COL_START_TIME,
    COL_END_TIME,
    COL_WIND,
    COL_PRECIPITATION,
    COL_TIDE,
    COL_TEMPERATURE,
    COL_SPECIES,
    COL_COUNT_LE_50M,
    COL_COUNT_GT_50M,
    COL_FLYTHROUGH,
    COL_NOTES,
];

/// True when `header` matches [`COLUMNS`] by name and position.
pub fn matches_header<'a, I>(header: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    header.into_iter().eq(COLUMNS.iter().copied())
}
