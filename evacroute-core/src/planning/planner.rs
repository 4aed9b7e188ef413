use log::{info, warn};

use super::{DestinationPolicy, EvacuationRoute, LogNotifier, Notifier};
use crate::{Error, EvacGraph, NodeId, Pathfinder, RoutingConfig};

/// Turns pathfinder output into annotated evacuation plans for one network
pub struct EvacuationPlanner<'a> {
    graph: &'a EvacGraph,
    pathfinder: Pathfinder,
    config: RoutingConfig,
    notifier: Box<dyn Notifier>,
}

impl<'a> EvacuationPlanner<'a> {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `config` does not validate
    pub fn new(graph: &'a EvacGraph, config: RoutingConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            graph,
            pathfinder: Pathfinder::with_cost_model(config.cost_model()?),
            config,
            notifier: Box::new(LogNotifier),
        })
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn graph(&self) -> &EvacGraph {
        self.graph
    }

    pub fn pathfinder(&self) -> &Pathfinder {
        &self.pathfinder
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    pub fn safe_zones(&self) -> Vec<NodeId> {
        self.graph.safe_zones()
    }

    /// Nodes whose risk exceeds the configured critical threshold
    pub fn critical_zones(&self) -> Vec<NodeId> {
        self.critical_zones_with(self.config.critical_threshold)
    }

    /// Nodes whose risk exceeds `threshold`; unknown risk counts as neutral
    pub fn critical_zones_with(&self, threshold: f64) -> Vec<NodeId> {
        self.graph
            .nodes()
            .filter(|node| node.is_critical(threshold))
            .map(|node| node.id)
            .collect()
    }

    /// Up to `num_paths` diverse routes from `start` to `end`, each annotated
    /// with the critical and safe zones it passes
    pub fn plan_evacuations(
        &self,
        start: NodeId,
        end: NodeId,
        num_paths: usize,
    ) -> Vec<EvacuationRoute> {
        self.pathfinder
            .find_multiple_paths(
                self.graph,
                start,
                end,
                num_paths,
                self.config.diversity_factor,
            )
            .into_iter()
            .map(|path| EvacuationRoute::from_path(path, self.graph, self.config.critical_threshold))
            .collect()
    }

    /// Plans an evacuation from `start` to the safe zone chosen by the
    /// configured [`DestinationPolicy`], then raises alerts and resource checks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSafeZone`] if the network has no safe zone at all
    pub fn simulate_evacuations(
        &self,
        start: NodeId,
        num_paths: usize,
    ) -> Result<Vec<EvacuationRoute>, Error> {
        self.simulate_with_policy(start, num_paths, self.config.destination_policy)
    }

    /// Same as [`simulate_evacuations`](Self::simulate_evacuations) with an
    /// explicit destination policy
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSafeZone`] if the network has no safe zone at all
    pub fn simulate_with_policy(
        &self,
        start: NodeId,
        num_paths: usize,
        policy: DestinationPolicy,
    ) -> Result<Vec<EvacuationRoute>, Error> {
        if self.graph.safe_zones().is_empty() {
            return Err(Error::NoSafeZone);
        }

        let routes = match policy.select(self.graph, &self.pathfinder, start) {
            Some(destination) => {
                info!("Simulating evacuation from {start} to safe zone {destination} ({policy:?})");
                self.plan_evacuations(start, destination, num_paths)
            }
            None => {
                warn!("No safe zone selected for evacuation from {start} ({policy:?})");
                Vec::new()
            }
        };

        self.alert_residents(&routes);
        self.manage_resources();
        Ok(routes)
    }

    /// Sends one alert per route through the notifier
    pub fn alert_residents(&self, routes: &[EvacuationRoute]) {
        for route in routes {
            self.notifier.alert(route);
        }
    }

    /// Requests a resource check at every safe zone
    pub fn manage_resources(&self) {
        for zone in self.graph.safe_zones() {
            self.notifier.resource_check(zone);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{EvacNode, RoadEdge, test_support::sample_graph};

    #[derive(Default, Clone)]
    struct Recorder {
        alerts: Arc<Mutex<Vec<Vec<NodeId>>>>,
        checks: Arc<Mutex<Vec<NodeId>>>,
    }

    impl Notifier for Recorder {
        fn alert(&self, route: &EvacuationRoute) {
            self.alerts.lock().unwrap().push(route.path.clone());
        }

        fn resource_check(&self, safe_zone: NodeId) {
            self.checks.lock().unwrap().push(safe_zone);
        }
    }

    fn planner(graph: &EvacGraph) -> EvacuationPlanner<'_> {
        EvacuationPlanner::new(graph, RoutingConfig::default()).unwrap()
    }

    #[test]
    fn zone_queries() {
        let graph = sample_graph();
        let planner = planner(&graph);

        assert_eq!(planner.safe_zones(), vec![0, 3]);
        assert_eq!(planner.critical_zones(), vec![2]);
        assert!(planner.critical_zones_with(0.8).is_empty());
        // unknown node risk counts as 0.5
        assert_eq!(planner.critical_zones_with(0.4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn plans_are_annotated() {
        let graph = sample_graph();
        let routes = planner(&graph).plan_evacuations(1, 3, 3);

        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.path, vec![1, 2, 3]);
        assert_eq!(route.path_length, 3);
        assert_eq!(route.critical_zones_crossed, vec![2]);
        assert_eq!(route.safe_zones_reached, vec![3]);
    }

    #[test]
    fn simulation_uses_first_safe_zone_and_notifies() {
        let graph = sample_graph();
        let recorder = Recorder::default();
        let planner = planner(&graph).with_notifier(Box::new(recorder.clone()));

        let routes = planner.simulate_evacuations(2, 3).unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, vec![2, 1, 0]);
        assert_eq!(*recorder.alerts.lock().unwrap(), vec![vec![2, 1, 0]]);
        assert_eq!(*recorder.checks.lock().unwrap(), vec![0, 3]);
    }

    #[test]
    fn simulation_with_nearest_policy() {
        let graph = sample_graph();
        let routes = planner(&graph)
            .with_notifier(Box::new(Recorder::default()))
            .simulate_with_policy(2, 3, DestinationPolicy::NearestByDistance)
            .unwrap();
        assert_eq!(routes[0].path, vec![2, 3]);
    }

    #[test]
    fn network_without_safe_zones_is_an_error() {
        let mut graph = EvacGraph::undirected();
        graph.add_node(EvacNode::new(1, 0.0, 0.0)).unwrap();
        graph.add_node(EvacNode::new(2, 0.0, 0.001)).unwrap();
        graph.add_edge(1, 2, RoadEdge::default()).unwrap();

        let result = planner(&graph).simulate_evacuations(1, 3);
        assert!(matches!(result, Err(Error::NoSafeZone)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let graph = sample_graph();
        let config = RoutingConfig {
            risk_weight: 0.0,
            time_weight: 0.0,
            ..RoutingConfig::default()
        };
        assert!(EvacuationPlanner::new(&graph, config).is_err());
    }
}
