//! Role node with per-neighbour edge lists

use crate::types::{RoleName, TimeEdge};
use indexmap::IndexMap;

/// Direction of travel through the role graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Towards inherited roles (`GetRoles`, `HasLink`)
    Parents,
    /// Towards inheriting roles and actors (`GetUsers`)
    Children,
}

/// A role or actor in the graph
///
/// Neighbours keep insertion order so enumeration reports roles in the order
/// they were first linked.
#[derive(Debug, Clone)]
pub(crate) struct RoleNode {
    /// Role name
    name: RoleName,

    /// Roles this node inherits from, keyed by role name
    parents: IndexMap<RoleName, Vec<TimeEdge>>,

    /// Nodes inheriting this role, keyed by their name
    children: IndexMap<RoleName, Vec<TimeEdge>>,
}

impl RoleNode {
    pub(crate) fn new(name: impl Into<RoleName>) -> Self {
        Self {
            name: name.into(),
            parents: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Append an edge towards an inherited role
    pub(crate) fn add_parent(&mut self, edge: TimeEdge) {
        self.parents.entry(edge.to.clone()).or_default().push(edge);
    }

    /// Append an edge from an inheriting node
    pub(crate) fn add_child(&mut self, edge: TimeEdge) {
        self.children.entry(edge.from.clone()).or_default().push(edge);
    }

    /// Drop every edge towards `parent`, returning how many were removed
    pub(crate) fn remove_parent(&mut self, parent: &str) -> usize {
        self.parents.shift_remove(parent).map_or(0, |edges| edges.len())
    }

    /// Drop every edge from `child`, returning how many were removed
    pub(crate) fn remove_child(&mut self, child: &str) -> usize {
        self.children.shift_remove(child).map_or(0, |edges| edges.len())
    }

    /// Neighbours in the given direction with the edges leading to them
    pub(crate) fn edges(&self, direction: Direction) -> &IndexMap<RoleName, Vec<TimeEdge>> {
        match direction {
            Direction::Parents => &self.parents,
            Direction::Children => &self.children,
        }
    }

    /// Outgoing edges, in insertion order per parent
    pub(crate) fn outgoing(&self) -> impl Iterator<Item = &TimeEdge> {
        self.parents.values().flatten()
    }
}
