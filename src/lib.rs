//! Workspace umbrella crate: re-exports `geospace-core` for the demos.
pub use geospace_core::*;
