use chrono::{NaiveDate, NaiveTime};

/// Field conditions shared by every row of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConditions {
    pub date: NaiveDate,
    pub location: String,
    pub recorder: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub wind: String,
    pub precipitation: String,
    pub tide: String,
    pub temperature: String,
}
