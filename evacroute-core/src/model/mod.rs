//! Road network model for evacuation routing
//!
//! Contains typed nodes and edges and the graph that owns them.

pub mod components;
pub mod network;

pub use components::{EdgeUpdate, EvacNode, RoadEdge};
pub use network::{Directionality, EvacGraph, IndexedPoint};
