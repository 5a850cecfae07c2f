//! User-specific domain logic: creation rules and the falsy-skip update rule.

pub mod entity;
pub mod error;

pub use error::*;
