//! CLI command implementations.

pub mod common;
pub mod recognize;
pub mod simulate;
pub mod version;
