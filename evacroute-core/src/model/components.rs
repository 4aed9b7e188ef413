//! Network components - locations and road segments

use geo::Point;
use serde::Deserialize;

use crate::{DEFAULT_EDGE_LENGTH, DEFAULT_EDGE_RISK, DEFAULT_NODE_RISK, NodeId};

/// Evacuation-relevant location
#[derive(Debug, Clone, PartialEq)]
pub struct EvacNode {
    /// Stable external identifier
    pub id: NodeId,
    /// Node coordinates (x = longitude, y = latitude)
    pub geometry: Point<f64>,
    /// Whether the node is an evacuation destination
    pub is_safe_zone: bool,
    /// Hazard level in [0, 1], `None` when unknown
    pub risk: Option<f64>,
}

impl EvacNode {
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self {
            id,
            geometry: Point::new(x, y),
            is_safe_zone: false,
            risk: None,
        }
    }

    #[must_use]
    pub fn safe_zone(mut self) -> Self {
        self.is_safe_zone = true;
        self
    }

    #[must_use]
    pub fn with_risk(mut self, risk: f64) -> Self {
        self.risk = Some(risk);
        self
    }

    /// Risk with unknown values resolved to [`DEFAULT_NODE_RISK`]
    pub fn effective_risk(&self) -> f64 {
        self.risk.unwrap_or(DEFAULT_NODE_RISK)
    }

    pub fn is_critical(&self, threshold: f64) -> bool {
        self.effective_risk() > threshold
    }
}

/// Road segment between two nodes.
///
/// Attributes are private so that every mutation goes through [`RoadEdge::apply`],
/// which drops the stored cost. A cost is only observable after the cost
/// function has stored it for the current attribute values.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge {
    length: f64,
    risk: Option<f64>,
    travel_time: Option<f64>,
    cost: Option<f64>,
}

impl RoadEdge {
    /// Edge of `length` metres with no recorded risk
    pub fn new(length: f64) -> Self {
        Self {
            length,
            risk: None,
            travel_time: None,
            cost: None,
        }
    }

    /// Builds an edge from partially attributed source data,
    /// resolving a missing length to [`DEFAULT_EDGE_LENGTH`]
    pub fn from_parts(length: Option<f64>, risk: Option<f64>, travel_time: Option<f64>) -> Self {
        Self {
            length: length.unwrap_or(DEFAULT_EDGE_LENGTH),
            risk,
            travel_time,
            cost: None,
        }
    }

    #[must_use]
    pub fn with_risk(mut self, risk: f64) -> Self {
        self.risk = Some(risk);
        self.cost = None;
        self
    }

    #[must_use]
    pub fn with_travel_time(mut self, seconds: f64) -> Self {
        self.travel_time = Some(seconds);
        self.cost = None;
        self
    }

    /// Length in metres
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Recorded risk, `None` if the source never provided one
    pub fn risk(&self) -> Option<f64> {
        self.risk
    }

    /// Risk with a missing value resolved to [`DEFAULT_EDGE_RISK`]
    pub fn effective_risk(&self) -> f64 {
        self.risk.unwrap_or(DEFAULT_EDGE_RISK)
    }

    /// Explicit travel time in seconds, if one was set
    pub fn travel_time(&self) -> Option<f64> {
        self.travel_time
    }

    /// Last stored cost. `None` until the cost function has run
    /// after the latest attribute change.
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    /// Overwrites the supplied fields and leaves the rest untouched.
    /// A new length without a travel time drops the old explicit time,
    /// which would otherwise shadow the length in the cost.
    pub fn apply(&mut self, update: &EdgeUpdate) {
        if let Some(length) = update.length {
            self.length = length;
            self.travel_time = None;
        }
        if let Some(risk) = update.risk {
            self.risk = Some(risk);
        }
        if let Some(travel_time) = update.travel_time {
            self.travel_time = Some(travel_time);
        }
        self.cost = None;
    }

    pub(crate) fn store_cost(&mut self, cost: f64) {
        self.cost = Some(cost);
    }

    /// Raises risk by `factor`, capped at 1. An edge with no recorded
    /// risk gets `factor` itself.
    pub(crate) fn penalize(&mut self, factor: f64) {
        self.risk = Some(match self.risk {
            Some(risk) => (risk + factor).min(1.0),
            None => factor,
        });
        self.cost = None;
    }
}

impl Default for RoadEdge {
    fn default() -> Self {
        Self::new(DEFAULT_EDGE_LENGTH)
    }
}

/// Partial edge update; `None` fields are left as they are
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EdgeUpdate {
    pub length: Option<f64>,
    pub risk: Option<f64>,
    pub travel_time: Option<f64>,
}

impl EdgeUpdate {
    pub fn risk(risk: f64) -> Self {
        Self {
            risk: Some(risk),
            ..Self::default()
        }
    }

    pub fn length(length: f64) -> Self {
        Self {
            length: Some(length),
            ..Self::default()
        }
    }
}
