//! Typed request, result and value shapes for the Amplify app-hosting API.
//!
//! Every shape is a plain value with optional fields, fluent `with_*`
//! builders, `set_*` setters and getters. On top of that each shape offers:
//!
//! - a deterministic render, `{field1: value1,field2: value2}`, via `Display`
//! - structural equality and an SDK-compatible structural hash
//! - static field metadata ([`FieldDescriptor`]) carrying the service's
//!   documented length, range, pattern and enum constraints
//!
//! Constraints are advisory. A [`JsonCodec`] in [`ValidationMode::Strict`]
//! refuses shapes that break them; the default mode logs and proceeds.
//!
//! Nothing here performs I/O. Transports implement [`AmplifyClientPort`].

#![deny(unused_crate_dependencies)]

#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio as _;

pub mod constraints;
pub mod enums;
pub mod error;
pub mod model;
pub mod operation;
pub mod operations;
pub mod pagination;
pub mod ports;
pub mod registry;
pub mod request;
pub mod settings;
pub mod shapes;
pub mod wire;

pub use constraints::{ConstraintRule, ConstraintViolation, check_shape};
pub use enums::{DomainStatus, JobStatus, JobType, Platform, Stage};
pub use error::{ModelError, ModelResult};
pub use model::{Field, FieldDescriptor, FieldLocation, FieldValue, Shape};
pub use operation::{DEFAULT_ENDPOINT, ENDPOINT_PREFIX, HttpMethod, Operation, Route};
pub use operations::*;
pub use pagination::{PageRequest, Paginated};
pub use ports::{AmplifyClientPort, AmplifyResult, AmplifyServiceError};
pub use registry::{OPERATIONS, OperationInfo, SHAPE_NAMES};
pub use request::{AmplifyRequest, RequestMetadata};
pub use settings::{Settings, SettingsError, ValidationMode, validate_settings};
pub use shapes::*;
pub use wire::JsonCodec;
