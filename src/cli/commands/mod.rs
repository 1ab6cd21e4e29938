//! CLI command implementations.

pub mod fetch;
pub mod files;
pub mod indicators;
pub mod validate;
