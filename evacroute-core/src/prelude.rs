pub use crate::{
    Cost, DEFAULT_CRITICAL_THRESHOLD, DEFAULT_EDGE_LENGTH, DEFAULT_EDGE_RISK, DEFAULT_NODE_RISK,
    NodeId,
};

// Re-export key components
pub use crate::config::RoutingConfig;
pub use crate::error::Error;
pub use crate::loading::{NetworkDocument, build_graph, graph_from_json};
pub use crate::model::{Directionality, EdgeUpdate, EvacGraph, EvacNode, RoadEdge};
pub use crate::planning::{
    DestinationPolicy, EvacuationPlanner, EvacuationRoute, LogNotifier, Notifier,
    routes_to_geojson,
};
pub use crate::routing::{Pathfinder, ScoredPath};
pub use crate::shared::SharedNetwork;
pub use crate::weighting::{
    CostModel, GraphWeighting, REFERENCE_SPEED_MPS, RiskUpdate, TrafficUpdate, Weights,
};
