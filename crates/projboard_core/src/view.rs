//! Mountable view contract for renderer integration.
//!
//! # Responsibility
//! - Define the seam through which renderers observe the store.
//! - Bind shared view handles to the store with plain closures.
//!
//! # Invariants
//! - `configure` runs exactly once per mount, before any snapshot arrives.
//! - A mounted view must not mutate the store from inside `render`.

use crate::model::project::Project;
use crate::store::project_store::ProjectStore;
use std::cell::RefCell;
use std::rc::Rc;

/// Render target observing the project store.
///
/// Composition replaces inheritance here: a concrete view implements this
/// trait and is wired by [`mount`] instead of extending a shared base type.
pub trait View {
    /// One-time setup before the first snapshot arrives.
    fn configure(&mut self);

    /// Redraws from one full-sequence snapshot.
    ///
    /// The slice covers every project in creation order; the view decides
    /// what to show from it. Full re-render per call is acceptable.
    fn render(&mut self, projects: &[Project]);
}

/// Subscribes one shared view handle to the store.
///
/// The registered closure captures a clone of the handle, binding the
/// callback to its view at registration time. The first `render` fires with
/// the next accepted mutation; callers that want an immediate draw can call
/// `render` with a `ProjectStore::snapshot` themselves.
pub fn mount<V: View + 'static>(store: &mut ProjectStore, view: &Rc<RefCell<V>>) {
    view.borrow_mut().configure();
    let handle = Rc::clone(view);
    store.subscribe(Box::new(move |projects| {
        handle.borrow_mut().render(&projects);
    }));
}
