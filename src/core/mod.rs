pub mod attendance;
pub mod calculator;
pub mod config;
pub mod log;
pub mod summary;
