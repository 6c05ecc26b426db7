//! Service enumerations.
//!
//! Enum-valued fields are stored as their wire strings, so values the service
//! adds later still round-trip. These types give typed construction and
//! parsing on top of that.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl $name {
            /// Every wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(ModelError::UnknownEnumValue {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

string_enum! {
    /// The stage of a branch.
    Stage {
        Production => "PRODUCTION",
        Beta => "BETA",
        Development => "DEVELOPMENT",
        Experimental => "EXPERIMENTAL",
        PullRequest => "PULL_REQUEST",
    }
}

string_enum! {
    /// The platform of an Amplify app.
    Platform {
        Web => "WEB",
    }
}

string_enum! {
    /// The status of a job or of one of its steps.
    JobStatus {
        Pending => "PENDING",
        Provisioning => "PROVISIONING",
        Running => "RUNNING",
        Failed => "FAILED",
        Succeed => "SUCCEED",
        Cancelling => "CANCELLING",
        Cancelled => "CANCELLED",
    }
}

string_enum! {
    /// The type of a job.
    JobType {
        /// Deploy the latest commit.
        Release => "RELEASE",
        /// Re-run a previous job; requires its job ID.
        Retry => "RETRY",
        Manual => "MANUAL",
        WebHook => "WEB_HOOK",
    }
}

string_enum! {
    /// The status of a domain association.
    DomainStatus {
        PendingVerification => "PENDING_VERIFICATION",
        InProgress => "IN_PROGRESS",
        Available => "AVAILABLE",
        PendingDeployment => "PENDING_DEPLOYMENT",
        Failed => "FAILED",
        Creating => "CREATING",
        RequestingCertificate => "REQUESTING_CERTIFICATE",
        Updating => "UPDATING",
    }
}

impl JobStatus {
    /// Whether the job has stopped running.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Failed | Self::Succeed | Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("PULL_REQUEST".parse::<Stage>().unwrap(), Stage::PullRequest);
        assert_eq!(Stage::PullRequest.to_string(), "PULL_REQUEST");
        assert_eq!(String::from(JobType::WebHook), "WEB_HOOK");
    }

    #[test]
    fn test_unknown_value() {
        let err = "beta".parse::<Stage>().unwrap_err();
        assert!(matches!(
            err,
            ModelError::UnknownEnumValue { kind: "Stage", ref value } if value == "beta"
        ));
    }

    #[test]
    fn test_values_follow_declaration_order() {
        assert_eq!(Platform::VALUES, &["WEB"]);
        assert_eq!(DomainStatus::VALUES.len(), 8);
        assert_eq!(DomainStatus::VALUES[0], "PENDING_VERIFICATION");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&JobStatus::Succeed).unwrap();
        assert_eq!(json, "\"SUCCEED\"");
        let parsed: DomainStatus = serde_json::from_str("\"REQUESTING_CERTIFICATE\"").unwrap();
        assert_eq!(parsed, DomainStatus::RequestingCertificate);
    }

    #[test]
    fn test_terminal_job_status() {
        assert!(JobStatus::Cancelled.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
    }
}
