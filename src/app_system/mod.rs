//! System orchestration, startup, and shutdown logic.

pub mod registry_system;
pub mod tracing;

pub use registry_system::*;
pub use self::tracing::*;
