//! Query & aggregate engine over an in-memory record set.
//!
//! Every function here is a pure transformation: records and lookup tables
//! come in as arguments, nothing is read from the config or the disk.

pub mod aggregate;
pub mod filter;

pub use aggregate::{
    distinct_dates, distinct_locations, export_csv, map_summary, species_summary, total_count,
};
pub use filter::{RecordFilter, filter_by_date, filter_by_location};
