//! # Session RBAC Role Graph
//!
//! Time-windowed role hierarchy for role-based access control.
//!
//! ## Features
//!
//! - **Temporal edges** - every role assignment carries its own validity window
//! - **As-of queries** - `has_link`, `get_roles` and `get_users` evaluated at a
//!   caller-supplied instant
//! - **Bounded depth** - inheritance chains are honored up to a fixed hierarchy level
//! - **Pluggable** - exposed through the [`RoleManager`] trait so any policy
//!   evaluator can hold it as `Box<dyn RoleManager>`
//!
//! ## Example
//!
//! ```rust
//! use sessionrbac_rolegraph::{RoleGraphConfig, RoleManager, TemporalRoleGraph, Timestamp, ValidityWindow};
//!
//! let config = RoleGraphConfig::from_toml_str("max_hierarchy_level = 3").unwrap();
//! let mut roles: Box<dyn RoleManager> = Box::new(TemporalRoleGraph::with_config(&config));
//!
//! // Host timestamps arrive as decimal nanosecond strings
//! let start: Timestamp = "1508503308708903372".parse().unwrap();
//! let end: Timestamp = "1508506908708903907".parse().unwrap();
//! roles.add_link("alice", "auditor", ValidityWindow::between(start, end));
//!
//! let during: Timestamp = "1508504000000000000".parse().unwrap();
//! assert!(roles.has_link("alice", "auditor", Some(during)));
//! assert!(!roles.has_link("alice", "auditor", Some(end)));
//! ```

pub mod config;
pub mod error;
pub mod manager;
pub mod temporal;
pub mod types;

// Re-export commonly used types
pub use config::{RoleGraphConfig, DEFAULT_MAX_HIERARCHY_LEVEL};
pub use error::{Result, RoleGraphError};
pub use manager::RoleManager;
pub use temporal::TemporalRoleGraph;
pub use types::{RoleName, TimeEdge, Timestamp, ValidityWindow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
