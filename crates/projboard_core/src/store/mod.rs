//! Observable in-memory project storage.
//!
//! # Responsibility
//! - Hold the authoritative ordered project sequence for one process.
//! - Fan out full-list snapshots to registered listeners after every
//!   accepted mutation.
//!
//! # Invariants
//! - Store write paths must call `Project::validate()` before mutating.
//! - The sequence keeps creation order; status moves never reorder it.
//! - Listeners receive owned snapshots and can never reach the
//!   authoritative sequence through them.

pub mod project_store;
