use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{EvacGraph, NodeId, Pathfinder};

/// How a simulated evacuation picks its safe zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationPolicy {
    /// First safe zone in network insertion order, regardless of distance
    #[default]
    FirstDiscovered,
    /// Safe zone closest to the start by straight-line distance
    NearestByDistance,
    /// Reachable safe zone with the lowest route cost
    LowestCost,
}

impl DestinationPolicy {
    /// Picks a destination for an evacuation from `start`, `None` if no
    /// safe zone qualifies
    pub fn select(
        self,
        graph: &EvacGraph,
        pathfinder: &Pathfinder,
        start: NodeId,
    ) -> Option<NodeId> {
        match self {
            Self::FirstDiscovered => graph.safe_zones().first().copied(),
            Self::NearestByDistance => {
                let origin = graph.node(start)?.geometry;
                graph.nearest_safe_zone(&origin)
            }
            Self::LowestCost => lowest_cost_safe_zone(graph, pathfinder, start),
        }
    }
}

/// Routes to every safe zone in parallel; ties go to the earlier zone
fn lowest_cost_safe_zone(graph: &EvacGraph, pathfinder: &Pathfinder, start: NodeId) -> Option<NodeId> {
    let zones = graph.safe_zones();
    debug!("Evaluating {} candidate safe zones from {start}", zones.len());

    zones
        .par_iter()
        .enumerate()
        .map(|(order, &zone)| (order, zone, pathfinder.find_path(graph, start, zone).cost()))
        .filter(|(_, _, cost)| cost.is_finite())
        .min_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(&b.0)))
        .map(|(_, zone, _)| zone)
}
