//! Prelude module for range_calendar crate.
//!
//! Re-exports the derive_more macros used for value types and render models.

#[allow(unused_imports)]
pub use derive_more::{Display, From};
