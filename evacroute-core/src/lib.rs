//! Risk- and time-aware evacuation routing over road networks.
//!
//! The crate holds a single in-memory road graph ([`EvacGraph`]), a blended
//! risk/time edge cost ([`CostModel`]), an A* pathfinder able to produce
//! several diverse routes ([`Pathfinder`]), a live re-weighting service
//! ([`GraphWeighting`]) and a planning facade ([`EvacuationPlanner`]) that
//! turns paths into annotated evacuation routes.

pub mod config;
pub mod error;
pub mod loading;
pub mod model;
pub mod planning;
pub mod prelude;
pub mod routing;
pub mod shared;
pub mod weighting;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::RoutingConfig;
pub use error::Error;
pub use model::{Directionality, EdgeUpdate, EvacGraph, EvacNode, RoadEdge};
pub use planning::{DestinationPolicy, EvacuationPlanner, EvacuationRoute, LogNotifier, Notifier};
pub use routing::{Pathfinder, ScoredPath};
pub use shared::SharedNetwork;
pub use weighting::{CostModel, GraphWeighting, RiskUpdate, TrafficUpdate, Weights};

/// External, stable identifier of a network node
pub type NodeId = u64;
/// Blended risk/time scalar used as edge weight
pub type Cost = f64;

/// Edge length in metres assumed when the source data has none
pub const DEFAULT_EDGE_LENGTH: f64 = 100.0;
/// Edge risk assumed when the source data has none
pub const DEFAULT_EDGE_RISK: f64 = 0.5;
/// Neutral risk of a node whose hazard level is unknown
pub const DEFAULT_NODE_RISK: f64 = 0.5;
/// Node risk above which a node counts as a critical zone
pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 0.7;
