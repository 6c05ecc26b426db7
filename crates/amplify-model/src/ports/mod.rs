//! Service port: the async boundary a transport implements.

mod client;
mod error;

pub use client::AmplifyClientPort;
#[cfg(test)]
pub use client::MockAmplifyClientPort;
pub use error::{AmplifyResult, AmplifyServiceError};
