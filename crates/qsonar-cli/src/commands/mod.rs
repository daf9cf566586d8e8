//! CLI command implementations.

pub mod check;
pub mod common;
pub mod play;
pub mod ping;
pub mod scan;
pub mod version;
