pub mod config;
pub mod telemetry;
pub mod tracing;

pub use self::config::*;
pub use self::telemetry::*;
pub use self::tracing::*;
