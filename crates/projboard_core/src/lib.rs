//! Core domain logic for the project board.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod store;
pub mod validate;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectStatus, ProjectValidationError};
pub use store::project_store::{Listener, ProjectStore};
pub use validate::{validate, FieldConstraints, FieldValue};
pub use view::{mount, View};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
