pub mod add;
pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod report;
pub mod tables;
