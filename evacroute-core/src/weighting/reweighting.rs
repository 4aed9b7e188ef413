//! Applies hazard and traffic updates to the network and keeps stored edge
//! costs consistent with the current attributes.

use log::{debug, info, warn};
use serde::Deserialize;

use super::cost::{CostModel, Weights};
use crate::{EdgeUpdate, Error, EvacGraph, NodeId};

/// New risk level for one edge
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RiskUpdate {
    pub source: NodeId,
    pub target: NodeId,
    pub risk: f64,
}

/// New traffic-implied travel time (seconds) for one edge
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TrafficUpdate {
    pub source: NodeId,
    pub target: NodeId,
    pub travel_time: f64,
}

/// Owner of the network while updates are streaming in.
///
/// Every single-edge update recomputes the cost of that edge only.
/// Updates for edges the network does not model are ignored.
#[derive(Debug, Clone)]
pub struct GraphWeighting {
    graph: EvacGraph,
    cost_model: CostModel,
}

impl GraphWeighting {
    pub fn new(graph: EvacGraph, cost_model: CostModel) -> Self {
        Self { graph, cost_model }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for invalid weights
    pub fn with_weights(
        graph: EvacGraph,
        risk_factor: f64,
        time_factor: f64,
    ) -> Result<Self, Error> {
        Ok(Self::new(
            graph,
            CostModel::with_weights(Weights::new(risk_factor, time_factor)?),
        ))
    }

    pub fn graph(&self) -> &EvacGraph {
        &self.graph
    }

    pub fn into_graph(self) -> EvacGraph {
        self.graph
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// Applies a partial attribute update to the edge and stores its new cost.
    ///
    /// Returns `false` if the edge does not exist.
    pub fn update_edge(&mut self, source: NodeId, target: NodeId, update: EdgeUpdate) -> bool {
        let Some(edge) = self.graph.representative_edge(source, target) else {
            debug!("Ignoring update for unknown edge ({source}, {target})");
            return false;
        };

        let weight = self.graph.edge_mut(edge);
        weight.apply(&update);
        let cost = self.cost_model.edge_cost(weight);
        weight.store_cost(cost);
        true
    }

    /// Sets the edge risk (clamped to [0, 1]) and recomputes its cost
    pub fn apply_risk_update(&mut self, source: NodeId, target: NodeId, risk: f64) -> bool {
        if !risk.is_finite() {
            warn!("Rejecting non-finite risk {risk} for edge ({source}, {target})");
            return false;
        }
        self.update_edge(source, target, EdgeUpdate::risk(risk.clamp(0.0, 1.0)))
    }

    /// Derives an equivalent length from the travel time at the reference
    /// speed, stores it and recomputes the edge cost
    pub fn apply_traffic_update(
        &mut self,
        source: NodeId,
        target: NodeId,
        travel_time: f64,
    ) -> bool {
        if !travel_time.is_finite() || travel_time < 0.0 {
            warn!("Rejecting travel time {travel_time}s for edge ({source}, {target})");
            return false;
        }
        let length = self.cost_model.length_for_travel_time(travel_time);
        self.update_edge(source, target, EdgeUpdate::length(length))
    }

    /// Applies updates in slice order and returns how many hit an edge
    pub fn apply_risk_updates(&mut self, updates: &[RiskUpdate]) -> usize {
        let applied = updates
            .iter()
            .filter(|u| self.apply_risk_update(u.source, u.target, u.risk))
            .count();
        info!("Applied {applied} of {} risk updates", updates.len());
        applied
    }

    /// Applies updates in slice order and returns how many hit an edge
    pub fn apply_traffic_updates(&mut self, updates: &[TrafficUpdate]) -> usize {
        let applied = updates
            .iter()
            .filter(|u| self.apply_traffic_update(u.source, u.target, u.travel_time))
            .count();
        info!("Applied {applied} of {} traffic updates", updates.len());
        applied
    }

    /// Sets the hazard level of a node. Edge costs do not depend on node risk.
    pub fn apply_node_risk_update(&mut self, node: NodeId, risk: f64) -> bool {
        if !risk.is_finite() {
            warn!("Rejecting non-finite risk {risk} for node {node}");
            return false;
        }
        let applied = self.graph.set_node_risk(node, risk.clamp(0.0, 1.0));
        if !applied {
            debug!("Ignoring risk update for unknown node {node}");
        }
        applied
    }

    /// Recomputes the stored cost of every edge, parallel edges included
    pub fn refresh_all_edge_weights(&mut self) {
        let cost_model = self.cost_model;
        for edge in self.graph.edge_weights_mut() {
            let cost = cost_model.edge_cost(edge);
            edge.store_cost(cost);
        }
        debug!("Refreshed costs of {} edges", self.graph.edge_count());
    }
}
