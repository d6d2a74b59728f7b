//! Time-windowed role graph
//!
//! Stores every `AddLink` call as its own [`TimeEdge`] and answers
//! reachability questions at a given instant. A path counts only if every
//! edge on it is active at that instant and it spans no more than
//! `max_hierarchy_level` roles.

use super::node::{Direction, RoleNode};
use super::search::Traversal;
use crate::config::{RoleGraphConfig, DEFAULT_MAX_HIERARCHY_LEVEL};
use crate::manager::RoleManager;
use crate::types::{RoleName, TimeEdge, Timestamp, ValidityWindow};
use indexmap::IndexMap;
use tracing::{debug, info};

/// Role hierarchy whose edges carry validity windows
///
/// # Example
///
/// ```rust
/// use chrono::Duration;
/// use sessionrbac_rolegraph::{TemporalRoleGraph, Timestamp, ValidityWindow};
///
/// let now = Timestamp::now();
/// let mut graph = TemporalRoleGraph::new(3);
///
/// graph.add_link(
///     "alice",
///     "on_call",
///     ValidityWindow::between(now - Duration::hours(1), now + Duration::hours(1)),
/// );
/// graph.add_link("on_call", "pager_admin", ValidityWindow::starting(now - Duration::days(30)));
///
/// assert!(graph.has_link("alice", "pager_admin", Some(now)));
/// assert!(!graph.has_link("alice", "pager_admin", Some(now + Duration::hours(2))));
/// assert!(!graph.has_link("alice", "on_call", None));
/// ```
#[derive(Debug, Clone)]
pub struct TemporalRoleGraph {
    /// Nodes in order of first appearance
    nodes: IndexMap<RoleName, RoleNode>,

    /// Maximum number of roles on a path, start included
    max_hierarchy_level: usize,
}

impl TemporalRoleGraph {
    /// Create an empty graph
    ///
    /// `max_hierarchy_level` bounds how many roles an inheritance path may
    /// span, the querying role included. With a level of 2 only direct links
    /// are honored.
    pub fn new(max_hierarchy_level: usize) -> Self {
        info!("TemporalRoleGraph initialized with max_hierarchy_level={}", max_hierarchy_level);

        Self {
            nodes: IndexMap::new(),
            max_hierarchy_level,
        }
    }

    /// Create an empty graph from configuration
    pub fn with_config(config: &RoleGraphConfig) -> Self {
        Self::new(config.max_hierarchy_level)
    }

    /// Configured hierarchy level
    pub fn max_hierarchy_level(&self) -> usize {
        self.max_hierarchy_level
    }

    /// Number of roles and actors known to the graph
    pub fn role_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored edges, parallel windows counted separately
    pub fn link_count(&self) -> usize {
        self.nodes.values().map(|node| node.outgoing().count()).sum()
    }

    /// Whether `name` has ever been linked since the last clear
    pub fn contains_role(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Every stored edge, grouped by inheriting node
    pub fn links(&self) -> impl Iterator<Item = &TimeEdge> {
        self.nodes.values().flat_map(|node| node.outgoing())
    }

    /// Remove every role and link
    pub fn clear(&mut self) {
        debug!("Clearing role graph ({} roles)", self.nodes.len());
        self.nodes.clear();
    }

    /// Record that `name1` inherits `name2` while `window` is active
    pub fn add_link(&mut self, name1: &str, name2: &str, window: ValidityWindow) {
        let edge = TimeEdge::new(name1, name2, window);
        debug!("Adding link {}", edge);

        self.node_mut(name1).add_parent(edge.clone());
        self.node_mut(name2).add_child(edge);
    }

    /// Remove every edge from `name1` to `name2`
    pub fn delete_link(&mut self, name1: &str, name2: &str) -> bool {
        if !self.nodes.contains_key(name1) || !self.nodes.contains_key(name2) {
            debug!("Ignoring delete of unknown link {} < {}", name1, name2);
            return false;
        }

        let removed = self
            .nodes
            .get_mut(name1)
            .map_or(0, |node| node.remove_parent(name2));
        if let Some(node) = self.nodes.get_mut(name2) {
            node.remove_child(name1);
        }

        debug!("Deleted {} link(s) {} < {}", removed, name1, name2);
        removed > 0
    }

    /// Whether `name1` inherits `name2` at `at`
    pub fn has_link(&self, name1: &str, name2: &str, at: Option<Timestamp>) -> bool {
        if name1 == name2 {
            return true;
        }

        let Some(at) = at else {
            return false;
        };

        if !self.nodes.contains_key(name1) || !self.nodes.contains_key(name2) {
            return false;
        }

        self.traversal(Direction::Parents, at).reaches(name1, name2)
    }

    /// Roles `name` inherits at `at`, in discovery order
    pub fn get_roles(&self, name: &str, at: Option<Timestamp>) -> Option<Vec<RoleName>> {
        self.enumerate(name, at, Direction::Parents)
    }

    /// Roles and actors inheriting `name` at `at`, in discovery order
    pub fn get_users(&self, name: &str, at: Option<Timestamp>) -> Option<Vec<RoleName>> {
        self.enumerate(name, at, Direction::Children)
    }

    /// Log every stored link
    pub fn print_roles(&self) {
        info!(
            "Role graph: {} roles, {} links, max_hierarchy_level={}",
            self.role_count(),
            self.link_count(),
            self.max_hierarchy_level
        );
        for node in self.nodes.values() {
            for edge in node.outgoing() {
                info!(role = node.name(), "{}", edge);
            }
        }
    }

    fn enumerate(&self, name: &str, at: Option<Timestamp>, direction: Direction) -> Option<Vec<RoleName>> {
        let at = at?;
        if !self.nodes.contains_key(name) {
            return None;
        }

        Some(self.traversal(direction, at).collect(name))
    }

    fn traversal(&self, direction: Direction, at: Timestamp) -> Traversal<'_> {
        // A path of N roles uses N - 1 edges.
        let max_edges = self.max_hierarchy_level.saturating_sub(1);
        Traversal::new(&self.nodes, direction, at, max_edges)
    }

    fn node_mut(&mut self, name: &str) -> &mut RoleNode {
        self.nodes
            .entry(name.to_string())
            .or_insert_with(|| RoleNode::new(name))
    }
}

impl Default for TemporalRoleGraph {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HIERARCHY_LEVEL)
    }
}

impl RoleManager for TemporalRoleGraph {
    fn clear(&mut self) {
        TemporalRoleGraph::clear(self)
    }

    fn add_link(&mut self, name1: &str, name2: &str, window: ValidityWindow) {
        TemporalRoleGraph::add_link(self, name1, name2, window)
    }

    fn delete_link(&mut self, name1: &str, name2: &str) -> bool {
        TemporalRoleGraph::delete_link(self, name1, name2)
    }

    fn has_link(&self, name1: &str, name2: &str, at: Option<Timestamp>) -> bool {
        TemporalRoleGraph::has_link(self, name1, name2, at)
    }

    fn get_roles(&self, name: &str, at: Option<Timestamp>) -> Option<Vec<RoleName>> {
        TemporalRoleGraph::get_roles(self, name, at)
    }

    fn get_users(&self, name: &str, at: Option<Timestamp>) -> Option<Vec<RoleName>> {
        TemporalRoleGraph::get_users(self, name, at)
    }

    fn print_roles(&self) {
        TemporalRoleGraph::print_roles(self)
    }
}
