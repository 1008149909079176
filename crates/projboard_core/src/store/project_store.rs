//! Observable project store.
//!
//! # Responsibility
//! - Own the project sequence and the registered listener list.
//! - Apply create/move commands and notify listeners synchronously.
//!
//! # Invariants
//! - Exactly one store per process, owned by the composition root and
//!   passed explicitly to collaborators; the store is never reached through
//!   hidden global state.
//! - Notification order is listener registration order.
//! - A listener must not mutate the store from within its own invocation;
//!   dispatch is synchronous and not guarded against reentry.

use crate::model::project::{Project, ProjectId, ProjectStatus, ProjectValidationError};
use log::{debug, info};

/// Snapshot callback registered by one view.
///
/// Receives an owned copy of the full sequence on every accepted mutation.
pub type Listener = Box<dyn FnMut(Vec<Project>)>;

/// Observable in-memory store for tracked projects.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one snapshot listener.
    ///
    /// Listeners are kept for the store lifetime; there is no
    /// de-duplication and no unsubscribe.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Creates one active project and appends it to the sequence.
    ///
    /// Entity invariants are checked before the sequence is touched, so a
    /// caller that skipped field validation can never store a corrupt
    /// record. Field policy (description length, headcount cap) stays with
    /// the caller.
    ///
    /// # Errors
    /// Returns the violated entity invariant; the sequence is unchanged and
    /// no notification fires.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Result<ProjectId, ProjectValidationError> {
        let project = Project::new(title, description, people);
        project.validate()?;

        let id = project.id;
        let people = project.people;
        self.projects.push(project);
        info!("event=project_created module=store status=ok id={id} people={people}");
        self.notify_listeners();
        Ok(id)
    }

    /// Moves one project to another lane.
    ///
    /// An unknown id or an unchanged status is a silent no-op, observable
    /// only by the absence of a notification.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) {
        match self.projects.iter_mut().find(|project| project.id == id) {
            Some(project) if project.status != new_status => {
                project.status = new_status;
                info!("event=project_moved module=store status=ok id={id} to={new_status}");
                self.notify_listeners();
            }
            _ => {
                debug!("event=project_move_noop module=store status=skip id={id} to={new_status}");
            }
        }
    }

    /// Returns an owned copy of the current sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn notify_listeners(&mut self) {
        let projects = &self.projects;
        for listener in &mut self.listeners {
            listener(projects.clone());
        }
    }
}
