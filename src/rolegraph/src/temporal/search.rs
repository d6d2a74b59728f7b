//! Time-qualified, depth-bounded breadth-first search
//!
//! Each level of the search follows exactly one edge. Edges not active at the
//! query instant are pruned before descending, and a visited set keeps cyclic
//! graphs from being expanded twice. The edge budget is the hard stop.

use super::node::{Direction, RoleNode};
use crate::types::{RoleName, Timestamp};
use indexmap::{IndexMap, IndexSet};

/// A single search over the role graph at one instant
pub(crate) struct Traversal<'g> {
    nodes: &'g IndexMap<RoleName, RoleNode>,
    direction: Direction,
    at: Timestamp,
    max_edges: usize,
}

impl<'g> Traversal<'g> {
    pub(crate) fn new(
        nodes: &'g IndexMap<RoleName, RoleNode>,
        direction: Direction,
        at: Timestamp,
        max_edges: usize,
    ) -> Self {
        Self {
            nodes,
            direction,
            at,
            max_edges,
        }
    }

    /// Neighbours of `name` joined by at least one edge active at `self.at`
    fn active_neighbours(&self, name: &str) -> impl Iterator<Item = &'g str> + '_ {
        let nodes: &'g IndexMap<RoleName, RoleNode> = self.nodes;
        nodes
            .get(name)
            .into_iter()
            .flat_map(move |node| node.edges(self.direction).iter())
            .filter(move |(_, edges)| edges.iter().any(|edge| edge.is_active_at(self.at)))
            .map(|(neighbour, _)| neighbour.as_str())
    }

    /// Whether `target` lies within the edge budget of `start`
    pub(crate) fn reaches(&self, start: &str, target: &str) -> bool {
        let mut found = false;
        self.walk(start, |name| {
            found = name == target;
            found
        });
        found
    }

    /// Every node within the edge budget of `start`, in discovery order,
    /// `start` itself excluded
    pub(crate) fn collect(&self, start: &str) -> Vec<RoleName> {
        let mut discovered = Vec::new();
        self.walk(start, |name| {
            discovered.push(name.to_string());
            false
        });
        discovered
    }

    /// Visit each newly discovered node once; `visit` returns `true` to stop
    fn walk<F>(&self, start: &str, mut visit: F)
    where
        F: FnMut(&'g str) -> bool,
    {
        let nodes: &'g IndexMap<RoleName, RoleNode> = self.nodes;
        let Some((start, _)) = nodes.get_key_value(start) else {
            return;
        };
        let start = start.as_str();

        let mut visited: IndexSet<&'g str> = IndexSet::new();
        visited.insert(start);

        let mut frontier = vec![start];
        for _ in 0..self.max_edges {
            if frontier.is_empty() {
                break;
            }

            let mut next = Vec::new();
            for name in frontier {
                for neighbour in self.active_neighbours(name) {
                    if visited.insert(neighbour) {
                        if visit(neighbour) {
                            return;
                        }
                        next.push(neighbour);
                    }
                }
            }
            frontier = next;
        }
    }
}
