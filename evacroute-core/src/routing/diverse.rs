//! Several alternative routes via iterative penalization.
//!
//! After the first route is found, a private copy of the network is made and
//! every edge used by an already-found route has its risk raised by the
//! diversity factor before the next search. Penalties accumulate from round
//! to round on that copy. Reuse of an edge is discouraged, never forbidden,
//! so routes may still overlap.

use log::{debug, trace};

use super::{Pathfinder, ScoredPath};
use crate::{EvacGraph, NodeId};

/// Risk penalty applied to already-used edges unless configured otherwise
pub const DEFAULT_DIVERSITY_FACTOR: f64 = 0.3;

impl Pathfinder {
    /// Finds up to `num_paths` distinct routes from `start` to `end`.
    ///
    /// The caller's graph is left untouched. Routes after the first report
    /// the cost computed on the penalized copy. Fewer routes are returned
    /// when the search runs out of new ones; an unreachable destination
    /// yields an empty list.
    pub fn find_multiple_paths(
        &self,
        graph: &EvacGraph,
        start: NodeId,
        end: NodeId,
        num_paths: usize,
        diversity_factor: f64,
    ) -> Vec<ScoredPath> {
        let mut paths: Vec<ScoredPath> = Vec::with_capacity(num_paths);
        if num_paths == 0 {
            return paths;
        }

        let first = self.find_path(graph, start, end);
        if !first.is_found() {
            debug!("No evacuation path from {start} to {end}");
            return paths;
        }
        paths.push(first);

        let mut working = graph.clone();
        for round in 1..num_paths {
            penalize_used_edges(&mut working, &paths, diversity_factor);

            let candidate = self.find_path(&working, start, end);
            if !candidate.is_found() {
                debug!("Stopping after {} paths: round {round} found none", paths.len());
                break;
            }
            if paths.iter().any(|path| path.nodes() == candidate.nodes()) {
                trace!("Round {round} repeated an earlier path");
                continue;
            }
            paths.push(candidate);
        }

        debug!(
            "Found {} of {num_paths} requested paths from {start} to {end}",
            paths.len()
        );
        paths
    }
}

/// Raises the risk of every edge (all parallel edges of each traversed pair)
/// on the given paths
fn penalize_used_edges(graph: &mut EvacGraph, paths: &[ScoredPath], diversity_factor: f64) {
    for path in paths {
        for (u, v) in path.edges() {
            for edge in graph.parallel_edges(u, v) {
                graph.edge_mut(edge).penalize(diversity_factor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        RoadEdge,
        test_support::{diamond_graph, sample_graph},
    };

    fn snapshot(graph: &EvacGraph) -> Vec<(NodeId, NodeId, RoadEdge)> {
        graph.edges().map(|(u, v, e)| (u, v, e.clone())).collect()
    }

    #[test]
    fn second_path_avoids_used_edges() {
        let graph = diamond_graph();
        let paths = Pathfinder::default().find_multiple_paths(&graph, 0, 3, 3, 0.3);

        let nodes: Vec<&[NodeId]> = paths.iter().map(ScoredPath::nodes).collect();
        assert_eq!(nodes, vec![&[0, 1, 3][..], &[0, 2, 3][..]]);
    }

    #[test]
    fn caller_graph_is_not_modified() {
        let graph = diamond_graph();
        let before = snapshot(&graph);

        let paths = Pathfinder::default().find_multiple_paths(&graph, 0, 3, 4, 0.5);

        assert!(!paths.is_empty());
        assert_eq!(snapshot(&graph), before);
    }

    #[test]
    fn single_route_network_returns_one_path() {
        let graph = sample_graph();
        let paths = Pathfinder::default().find_multiple_paths(&graph, 1, 3, 3, DEFAULT_DIVERSITY_FACTOR);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes(), &[1, 2, 3]);
    }

    #[test]
    fn unreachable_or_zero_requested_gives_empty() {
        let graph = sample_graph();
        let pathfinder = Pathfinder::default();
        assert!(pathfinder.find_multiple_paths(&graph, 1, 42, 3, 0.3).is_empty());
        assert!(pathfinder.find_multiple_paths(&graph, 1, 3, 0, 0.3).is_empty());
    }

    #[test]
    fn unrated_edges_take_the_factor_as_risk() {
        let mut graph = EvacGraph::undirected();
        graph.add_node(crate::EvacNode::new(0, 0.0, 0.0)).unwrap();
        graph.add_node(crate::EvacNode::new(1, 0.0, 0.001)).unwrap();
        graph.add_edge(0, 1, RoadEdge::new(100.0)).unwrap();

        penalize_used_edges(
            &mut graph,
            &[ScoredPath::new(vec![0, 1], 0.0)],
            0.3,
        );

        assert_eq!(graph.edge_attributes(0, 1).unwrap().risk(), Some(0.3));
    }
}
