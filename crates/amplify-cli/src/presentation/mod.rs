//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: handlers decide what to show.

pub mod tables;

pub use tables::{format_row, separator};
