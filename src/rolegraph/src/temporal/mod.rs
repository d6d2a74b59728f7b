//! Temporal role graph module
//!
//! Role inheritance where every assignment is valid only inside its own time
//! window, queried at a caller-supplied instant.
//!
//! # Features
//!
//! - **Parallel windows**: Each `add_link` appends an edge; overlapping or
//!   disjoint windows between the same pair coexist
//! - **Open intervals**: An edge is active strictly between its bounds
//! - **Bounded depth**: Paths longer than the configured hierarchy level are
//!   never followed
//! - **Cycle safe**: Cyclic role graphs terminate via a visited set
//!
//! # Example
//!
//! ```rust
//! use sessionrbac_rolegraph::temporal::TemporalRoleGraph;
//! use sessionrbac_rolegraph::{Timestamp, ValidityWindow};
//!
//! let mut graph = TemporalRoleGraph::new(3);
//! let t = Timestamp::from_nanos;
//!
//! graph.add_link("alpha", "bravo", ValidityWindow::between(t(0), t(10)));
//! graph.add_link("alpha", "charlie", ValidityWindow::between(t(5), t(15)));
//!
//! let mut roles = graph.get_roles("alpha", Some(t(7))).unwrap();
//! roles.sort();
//! assert_eq!(roles, vec!["bravo", "charlie"]);
//!
//! assert_eq!(graph.get_roles("alpha", Some(t(12))).unwrap(), vec!["charlie"]);
//! assert!(graph.get_roles("alpha", None).is_none());
//! ```

pub mod graph;
mod node;
mod search;


pub use graph::TemporalRoleGraph;
