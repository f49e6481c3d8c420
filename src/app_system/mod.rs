//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod punch_system;
pub mod telemetry;

pub use config::*;
pub use punch_system::*;
pub use telemetry::*;
