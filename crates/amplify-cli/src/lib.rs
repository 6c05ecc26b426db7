//! Operator CLI for Amplify model documents.
//!
//! Lists and describes the modelled shapes, decodes JSON documents against
//! them, reports constraint violations and resolves request routes.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
