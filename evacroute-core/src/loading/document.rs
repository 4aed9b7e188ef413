use serde::{Deserialize, Serialize};

use crate::{Directionality, NodeId};

/// Serialized network as delivered by data ingestion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    #[serde(default)]
    pub directionality: Directionality,
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub safe_zone: bool,
    #[serde(default)]
    pub risk: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    /// Metres
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub risk: Option<f64>,
    /// Seconds
    #[serde(default)]
    pub travel_time: Option<f64>,
}
