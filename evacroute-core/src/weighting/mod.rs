//! Edge cost function and live re-weighting of the network

pub mod cost;
pub mod reweighting;

pub use cost::{CostModel, REFERENCE_SPEED_MPS, Weights};
pub use reweighting::{GraphWeighting, RiskUpdate, TrafficUpdate};
