use evacroute_core::prelude::*;

/// Example network: a chain with safe zones at both ends plus a
/// high-risk spur beyond the second safe zone
fn example_network() -> EvacGraph {
    graph_from_json(
        r#"{
            "nodes": [
                {"id": 0, "x": 0, "y": 0, "safe_zone": true},
                {"id": 1, "x": 1, "y": 2, "risk": 0.5},
                {"id": 2, "x": 3, "y": 3, "risk": 0.8},
                {"id": 3, "x": 5, "y": 5, "safe_zone": true},
                {"id": 4, "x": 6, "y": 7, "risk": 0.9}
            ],
            "edges": [
                {"source": 0, "target": 1, "length": 100, "risk": 0.5},
                {"source": 1, "target": 2, "length": 150, "risk": 0.7},
                {"source": 2, "target": 3, "length": 200, "risk": 0.6},
                {"source": 3, "target": 4, "length": 250, "risk": 0.9}
            ]
        }"#,
    )
    .expect("example network is valid")
}

fn edge_cost(risk: f64, length: f64) -> f64 {
    0.7 * risk + 0.3 * (length / 8.33 / 3600.0)
}

#[test]
fn end_to_end_route_and_cost() {
    let graph = example_network();
    let pathfinder = Pathfinder::new(0.7, 0.3).unwrap();

    let path = pathfinder.find_path(&graph, 1, 3);

    assert_eq!(path.nodes(), &[1, 2, 3]);
    let expected = edge_cost(0.7, 150.0) + edge_cost(0.6, 200.0);
    assert!((path.cost() - expected).abs() < 1e-9);
}

#[test]
fn critical_zones_and_simulation() {
    let graph = example_network();
    let planner = EvacuationPlanner::new(&graph, RoutingConfig::default()).unwrap();

    assert_eq!(planner.critical_zones(), vec![2, 4]);

    let routes = planner.simulate_evacuations(1, 3).unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path, vec![1, 0]);
    assert_eq!(routes[0].safe_zones_reached, vec![0]);
    assert!(routes[0].critical_zones_crossed.is_empty());
}

/// Same layout at city-block scale with a detour over node 5 between 1 and 2
fn city_blocks(detour_risk: f64) -> EvacGraph {
    let mut graph = EvacGraph::undirected();
    for node in [
        EvacNode::new(0, 0.0, 0.0).safe_zone(),
        EvacNode::new(1, 0.001, 0.002).with_risk(0.5),
        EvacNode::new(2, 0.003, 0.003).with_risk(0.8),
        EvacNode::new(3, 0.005, 0.005).safe_zone(),
        EvacNode::new(5, 0.002, 0.002),
    ] {
        graph.add_node(node).unwrap();
    }
    for (u, v, length, risk) in [
        (0, 1, 100.0, 0.5),
        (1, 2, 150.0, 0.7),
        (2, 3, 200.0, 0.6),
        (1, 5, 120.0, detour_risk),
        (5, 2, 120.0, detour_risk),
    ] {
        graph.add_edge(u, v, RoadEdge::new(length).with_risk(risk)).unwrap();
    }
    graph
}

#[test]
fn updates_change_subsequent_plans() {
    let mut weighting = GraphWeighting::new(city_blocks(0.8), CostModel::default());
    weighting.refresh_all_edge_weights();

    let pathfinder = Pathfinder::default();
    assert_eq!(pathfinder.find_path(weighting.graph(), 1, 3).nodes(), &[1, 2, 3]);

    // a hazard closes in on the direct segment while the detour clears up
    weighting.apply_risk_updates(&[RiskUpdate { source: 1, target: 2, risk: 1.0 }]);
    weighting.apply_risk_updates(&[
        RiskUpdate { source: 1, target: 5, risk: 0.05 },
        RiskUpdate { source: 5, target: 2, risk: 0.05 },
    ]);

    let path = pathfinder.find_path(weighting.graph(), 1, 3);
    assert_eq!(path.nodes(), &[1, 5, 2, 3]);
    let expected = 2.0 * edge_cost(0.05, 120.0) + edge_cost(0.6, 200.0);
    assert!((path.cost() - expected).abs() < 1e-9);
    for (_, _, edge) in weighting.graph().edges() {
        assert!(edge.cost().is_some());
    }
}

#[test]
fn diverse_plans_leave_network_untouched() {
    let graph = city_blocks(0.4);
    let before: Vec<RoadEdge> = graph.edges().map(|(_, _, e)| e.clone()).collect();

    let planner = EvacuationPlanner::new(&graph, RoutingConfig::default()).unwrap();
    let routes = planner.plan_evacuations(1, 3, 3);

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].path, vec![1, 2, 3]);
    assert_eq!(routes[1].path, vec![1, 5, 2, 3]);
    assert_eq!(routes[1].critical_zones_crossed, vec![2]);
    let after: Vec<RoadEdge> = graph.edges().map(|(_, _, e)| e.clone()).collect();
    assert_eq!(before, after);

    let collection = routes_to_geojson(&routes, &graph).unwrap();
    assert_eq!(collection.features.len(), 2);
}
