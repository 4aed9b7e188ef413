//! Shared fixtures for unit tests

use crate::{EvacGraph, EvacNode, RoadEdge};

/// Four-node chain `0 - 1 - 2 - 3` with safe zones at both ends
pub(crate) fn sample_graph() -> EvacGraph {
    let mut graph = EvacGraph::undirected();
    for node in [
        EvacNode::new(0, 0.0, 0.0).safe_zone(),
        EvacNode::new(1, 1.0, 2.0).with_risk(0.5),
        EvacNode::new(2, 3.0, 3.0).with_risk(0.8),
        EvacNode::new(3, 5.0, 5.0).safe_zone(),
    ] {
        graph.add_node(node).unwrap();
    }
    graph.add_edge(0, 1, RoadEdge::new(100.0).with_risk(0.5)).unwrap();
    graph.add_edge(1, 2, RoadEdge::new(150.0).with_risk(0.7)).unwrap();
    graph.add_edge(2, 3, RoadEdge::new(200.0).with_risk(0.6)).unwrap();
    graph
}

/// Two routes from 0 to 3: a safer one over 1 and a riskier one over 2
pub(crate) fn diamond_graph() -> EvacGraph {
    let mut graph = EvacGraph::undirected();
    for node in [
        EvacNode::new(0, 0.0, 0.0),
        EvacNode::new(1, 0.001, 0.001),
        EvacNode::new(2, 0.001, -0.001),
        EvacNode::new(3, 0.002, 0.0).safe_zone(),
    ] {
        graph.add_node(node).unwrap();
    }
    graph.add_edge(0, 1, RoadEdge::new(100.0).with_risk(0.2)).unwrap();
    graph.add_edge(1, 3, RoadEdge::new(100.0).with_risk(0.2)).unwrap();
    graph.add_edge(0, 2, RoadEdge::new(100.0).with_risk(0.3)).unwrap();
    graph.add_edge(2, 3, RoadEdge::new(100.0).with_risk(0.3)).unwrap();
    graph
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
