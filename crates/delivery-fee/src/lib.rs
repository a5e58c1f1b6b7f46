pub mod config;
pub mod error;
pub mod fees;
pub mod telemetry;
