//! Pawnlink runtime
//!
//! Plumbing around the marshaling engine: bridge configuration, the
//! timestamped diagnostics file log, the managed-host lifecycle trait,
//! and [`Bridge`] — the owner of the dispatcher with an explicit
//! load/unload lifecycle.

pub mod bridge;
pub mod config;
pub mod diag;
pub mod host;

pub use bridge::Bridge;
pub use config::{BridgeConfig, ConfigError};
pub use diag::FileDiagLog;
pub use host::{AssemblyId, ClassId, RuntimeHost};
