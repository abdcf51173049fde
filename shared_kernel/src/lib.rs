pub mod configuration;
pub mod date_time;
pub mod tracing;
