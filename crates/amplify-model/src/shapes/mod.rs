//! Value shapes nested inside requests and results.

mod app;
mod artifact;
mod backend_environment;
mod branch;
mod domain_association;
mod job;
mod webhook;

pub use app::{App, AutoBranchCreationConfig, CustomRule, ProductionBranch};
pub use artifact::Artifact;
pub use backend_environment::BackendEnvironment;
pub use branch::Branch;
pub use domain_association::{DomainAssociation, SubDomain, SubDomainSetting};
pub use job::{Job, JobSummary, Step};
pub use webhook::Webhook;
