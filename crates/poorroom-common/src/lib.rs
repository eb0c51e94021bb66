//! # poorroom-common
//!
//! Shared utilities including client configuration, error taxonomy, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{ApiConfig, AppSettings, ClientConfig, ConfigError, Environment, QueryConfig};
pub use error::{ClientError, ClientResult};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
