use itertools::Itertools;
use serde::Serialize;

use crate::{Cost, NodeId};

/// Node sequence from start to end (inclusive) with its total cost.
///
/// An empty path with infinite cost means no route was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPath {
    nodes: Vec<NodeId>,
    cost: Cost,
}

impl ScoredPath {
    pub(crate) fn new(nodes: Vec<NodeId>, cost: Cost) -> Self {
        Self { nodes, cost }
    }

    /// The "no route" sentinel
    pub fn not_found() -> Self {
        Self {
            nodes: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of nodes on the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consecutive node pairs traversed by the path
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().copied().tuple_windows()
    }

    pub fn into_parts(self) -> (Vec<NodeId>, Cost) {
        (self.nodes, self.cost)
    }
}
