use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a list of `YYYY-MM-DD` strings, reporting the first bad one.
pub fn parse_dates(values: &[String]) -> Result<Vec<NaiveDate>, String> {
    values
        .iter()
        .map(|v| parse_date(v).ok_or_else(|| v.clone()))
        .collect()
}
