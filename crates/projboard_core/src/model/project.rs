//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical record for one tracked project.
//! - Provide the entity-invariant check used by store write paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `status` is the only field that changes after creation.
//! - `title` and `description` are non-blank after trimming.
//! - `people` is at least 1.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every tracked project.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Lane a project currently belongs to.
///
/// Both transitions are permitted; moving to the current status is a no-op
/// handled by the store, so the enum itself carries no transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Work is ongoing.
    Active,
    /// Work is done.
    Finished,
}

impl ProjectStatus {
    /// Stable string id used on the wire and in log events.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parses one status from its stable string form.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "active" => Some(Self::Active),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity-invariant violations for one project record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// `id` is the nil UUID.
    NilId,
    /// `title` is blank after trimming.
    BlankTitle,
    /// `description` is blank after trimming.
    BlankDescription,
    /// `people` is zero.
    NoHeadcount,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "project id must not be nil"),
            Self::BlankTitle => write!(f, "project title must not be blank"),
            Self::BlankDescription => write!(f, "project description must not be blank"),
            Self::NoHeadcount => write!(f, "project headcount must be at least 1"),
        }
    }
}

impl Error for ProjectValidationError {}

/// Canonical record for one tracked project.
///
/// Field-level form policy (description length, headcount cap) lives with
/// the caller; this record only carries the invariants that must hold for
/// any stored project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    /// Stable global ID used for move commands and auditing.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Headcount assigned to the project.
    pub people: u32,
    /// Lane membership; mutated only through the store.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new active project with a generated stable ID.
    ///
    /// Performs no validation; store write paths call [`Project::validate`]
    /// before accepting the record.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by import/test paths where identity already exists externally.
    ///
    /// # Errors
    /// Returns the first violated entity invariant.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        status: ProjectStatus,
    ) -> Result<Self, ProjectValidationError> {
        let project = Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status,
        };
        project.validate()?;
        Ok(project)
    }

    /// Checks entity invariants.
    ///
    /// # Errors
    /// Returns the first violated invariant in field order.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.is_nil() {
            return Err(ProjectValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::BlankTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ProjectValidationError::BlankDescription);
        }
        if self.people == 0 {
            return Err(ProjectValidationError::NoHeadcount);
        }
        Ok(())
    }

    /// Returns whether this project sits in the active lane.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    /// Returns whether this project sits in the finished lane.
    pub fn is_finished(&self) -> bool {
        self.status == ProjectStatus::Finished
    }
}

/// Raw wire shape; promoted to [`Project`] only after invariant checks.
#[derive(Deserialize)]
struct ProjectRecord {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ProjectValidationError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        Self::with_id(
            record.id,
            record.title,
            record.description,
            record.people,
            record.status,
        )
    }
}
