//! Record Store: the CSV file that holds every survey row ever saved.

pub mod codec;
pub mod record_store;

pub use record_store::RecordStore;
