mod state;

use std::collections::BinaryHeap;

use log::trace;
use petgraph::graph::NodeIndex;

use self::state::State;
use super::{heuristic::straight_line_hours, path::ScoredPath};
use crate::{CostModel, Error, EvacGraph, NodeId, RoadEdge, Weights};

/// Risk-aware route search over an [`EvacGraph`].
///
/// The pathfinder is a pure computation over a graph snapshot: edge costs are
/// evaluated from the current attributes with its [`CostModel`], stored edge
/// costs are never read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pathfinder {
    cost_model: CostModel,
}

impl Pathfinder {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for invalid weights
    pub fn new(risk_weight: f64, time_weight: f64) -> Result<Self, Error> {
        Ok(Self::with_cost_model(CostModel::with_weights(Weights::new(
            risk_weight,
            time_weight,
        )?)))
    }

    pub fn with_cost_model(cost_model: CostModel) -> Self {
        Self { cost_model }
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    pub fn edge_cost(&self, edge: &RoadEdge) -> f64 {
        self.cost_model.edge_cost(edge)
    }

    /// Estimated cost between two nodes, `None` if either is missing
    pub fn heuristic(&self, graph: &EvacGraph, from: NodeId, to: NodeId) -> Option<f64> {
        let from = graph.node(from)?;
        let to = graph.node(to)?;
        Some(straight_line_hours(&from.geometry, &to.geometry))
    }

    /// A* search for the least-cost path from `start` to `end`.
    ///
    /// Parallel edges are relaxed individually, so the cheapest one wins.
    /// Returns [`ScoredPath::not_found`] if an endpoint is missing or `end`
    /// is unreachable.
    pub fn find_path(&self, graph: &EvacGraph, start: NodeId, end: NodeId) -> ScoredPath {
        let (Some(source), Some(target)) = (graph.index_of(start), graph.index_of(end)) else {
            trace!("Endpoint missing from network: {start} -> {end}");
            return ScoredPath::not_found();
        };

        let node_count = graph.node_count();
        let target_point = graph.graph[target].geometry;
        let estimate = |node: NodeIndex| {
            straight_line_hours(&graph.graph[node].geometry, &target_point)
        };

        let mut best: Vec<f64> = vec![f64::INFINITY; node_count];
        let mut predecessors: Vec<Option<NodeIndex>> = vec![None; node_count];
        let mut heap = BinaryHeap::with_capacity(node_count.min(1024));

        best[source.index()] = 0.0;
        heap.push(State {
            estimate: estimate(source),
            cost: 0.0,
            node: source,
        });

        while let Some(State { cost, node, .. }) = heap.pop() {
            if node == target {
                return ScoredPath::new(trace_back(graph, &predecessors, source, target), cost);
            }

            // Skip entries superseded by a cheaper path
            if cost > best[node.index()] {
                continue;
            }

            for (edge, next) in graph.incident_edges(node) {
                let next_cost = cost + self.cost_model.edge_cost(&graph.graph[edge]);
                if next_cost < best[next.index()] {
                    best[next.index()] = next_cost;
                    predecessors[next.index()] = Some(node);
                    heap.push(State {
                        estimate: next_cost + estimate(next),
                        cost: next_cost,
                        node: next,
                    });
                }
            }
        }

        trace!("No path from {start} to {end}");
        ScoredPath::not_found()
    }
}

fn trace_back(
    graph: &EvacGraph,
    predecessors: &[Option<NodeIndex>],
    source: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeId> {
    let mut nodes = vec![graph.graph[target].id];
    let mut current = target;
    while current != source {
        match predecessors[current.index()] {
            Some(prev) => {
                nodes.push(graph.graph[prev].id);
                current = prev;
            }
            None => break,
        }
    }
    nodes.reverse();
    nodes
}
