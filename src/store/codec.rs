//! CSV encoding of survey rows, shared by the store and the export.

use crate::errors::{AppError, AppResult};
use crate::models::SurveyRecord;
use crate::models::schema::{COLUMNS, matches_header};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::io::{Read, Write};

/// Write header + rows to `out`. Always emits the header, even for no rows.
pub fn write_records<W: Write>(out: W, records: &[SurveyRecord]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    wtr.write_record(COLUMNS)?;

    for rec in records {
        wtr.serialize(rec)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Serialize rows to UTF-8 CSV bytes, no index column.
///
/// Pure: the same input always gives the same bytes.
pub fn encode(records: &[SurveyRecord]) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    Ok(buf)
}

/// Parse a store/export CSV. The header must match the schema exactly.
pub fn decode<R: Read>(input: R) -> AppResult<Vec<SurveyRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(input);

    let header = rdr.headers()?.clone();
    if !matches_header(header.iter()) {
        return Err(AppError::SchemaMismatch {
            expected: COLUMNS.iter().map(|c| c.to_string()).collect(),
            found: header.iter().map(|c| c.to_string()).collect(),
        });
    }

    let mut records = Vec::new();
    for row in rdr.deserialize::<SurveyRecord>() {
        records.push(row?);
    }

    Ok(records)
}
