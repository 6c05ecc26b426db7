//! Build artifacts.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldDescriptor, Shape, model_traits, same_model};

/// An artifact produced by a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Artifact {
    #[serde(skip_serializing_if = "Option::is_none")]
    artifact_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artifact_id: Option<String>,
}

impl Artifact {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("artifactFileName").max_length(1000),
        FieldDescriptor::new("artifactId").max_length(255),
    ];

    /// The file name for the artifact.
    pub fn artifact_file_name(&self) -> Option<&str> {
        self.artifact_file_name.as_deref()
    }

    pub fn set_artifact_file_name(&mut self, artifact_file_name: Option<String>) {
        self.artifact_file_name = artifact_file_name;
    }

    #[must_use]
    pub fn with_artifact_file_name(mut self, artifact_file_name: impl Into<String>) -> Self {
        self.artifact_file_name = Some(artifact_file_name.into());
        self
    }

    /// The unique ID for the artifact.
    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    pub fn set_artifact_id(&mut self, artifact_id: Option<String>) {
        self.artifact_id = artifact_id;
    }

    #[must_use]
    pub fn with_artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }
}

impl Shape for Artifact {
    fn shape_name(&self) -> &'static str {
        "Artifact"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.artifact_file_name.as_ref()),
            Field::of(&d[1], self.artifact_id.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(Artifact);
