//! Role manager interface exposed to policy evaluators
//!
//! An evaluator holds a `Box<dyn RoleManager>` and calls it for every
//! `g(actor, role, time)` check. Mutation and reads must be serialized by the
//! caller; implementations carry no internal locking.

use crate::types::{RoleName, Timestamp, ValidityWindow};

/// Role hierarchy queried at a point in time
pub trait RoleManager {
    /// Remove every role and link
    fn clear(&mut self);

    /// Record that `name1` inherits `name2` while `window` is active
    ///
    /// Every call appends a new edge; existing edges between the same pair
    /// are kept, so parallel windows accumulate.
    fn add_link(&mut self, name1: &str, name2: &str, window: ValidityWindow);

    /// Remove every edge from `name1` to `name2`, whatever its window
    ///
    /// Returns `false` when there was nothing to remove. Unknown names are
    /// not an error.
    fn delete_link(&mut self, name1: &str, name2: &str) -> bool;

    /// Whether `name1` inherits `name2` at `at`
    ///
    /// Without a time only reflexive identity holds.
    fn has_link(&self, name1: &str, name2: &str, at: Option<Timestamp>) -> bool;

    /// Roles `name` inherits at `at`, directly or transitively
    ///
    /// `None` when no time is given or `name` has never been linked.
    fn get_roles(&self, name: &str, at: Option<Timestamp>) -> Option<Vec<RoleName>>;

    /// Roles and actors that inherit `name` at `at`, directly or transitively
    ///
    /// `None` when no time is given or `name` has never been linked.
    fn get_users(&self, name: &str, at: Option<Timestamp>) -> Option<Vec<RoleName>>;

    /// Log every stored link
    fn print_roles(&self);
}
