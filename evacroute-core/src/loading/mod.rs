//! This module builds the routing network from already collected data.
//! Collectors hand over a [`NetworkDocument`]; defaults for missing edge
//! attributes are resolved here, at the boundary.

mod builder;
mod document;

pub use builder::{build_graph, graph_from_json};
pub use document::{EdgeRecord, NetworkDocument, NodeRecord};
