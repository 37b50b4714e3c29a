pub mod add;
pub mod backup;
pub mod log;
pub mod view;
