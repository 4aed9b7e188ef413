//! Evacuation planning on top of the pathfinder

pub mod destination;
pub mod notify;
pub mod planner;
pub mod route;

pub use destination::DestinationPolicy;
pub use notify::{LogNotifier, Notifier};
pub use planner::EvacuationPlanner;
pub use route::{EvacuationRoute, routes_to_geojson};
