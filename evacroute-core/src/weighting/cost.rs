//! Blended risk/time edge cost.
//!
//! `cost = risk_weight * risk + time_weight * travel_time_hours`, where the
//! travel time comes from an explicit edge time or from `length / reference_speed`.
//! Risk lives in [0, 1] and travel times of urban segments are a small
//! fraction of an hour, so the two terms end up on comparable scales.

use crate::{Error, RoadEdge, RoutingConfig};

/// Assumed average speed, about 30 km/h
pub const REFERENCE_SPEED_MPS: f64 = 8.33;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Relative importance of risk and travel time, normalized to sum to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    risk: f64,
    time: f64,
}

impl Weights {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if a weight is negative or not finite,
    /// or if both are zero
    pub fn new(risk_weight: f64, time_weight: f64) -> Result<Self, Error> {
        if !risk_weight.is_finite() || !time_weight.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "weights must be finite, got risk={risk_weight} time={time_weight}"
            )));
        }
        if risk_weight < 0.0 || time_weight < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "weights must be non-negative, got risk={risk_weight} time={time_weight}"
            )));
        }
        let total = risk_weight + time_weight;
        if total <= 0.0 {
            return Err(Error::InvalidConfig(
                "risk and time weights cannot both be zero".to_string(),
            ));
        }
        Ok(Self {
            risk: risk_weight / total,
            time: time_weight / total,
        })
    }

    pub fn risk_weight(&self) -> f64 {
        self.risk
    }

    pub fn time_weight(&self) -> f64 {
        self.time
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            risk: 0.7,
            time: 0.3,
        }
    }
}

/// Maps edge attributes to a scalar cost under a fixed weight configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    weights: Weights,
    reference_speed: f64,
}

impl CostModel {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the reference speed is not a
    /// positive finite number
    pub fn new(weights: Weights, reference_speed: f64) -> Result<Self, Error> {
        if !reference_speed.is_finite() || reference_speed <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "reference speed must be positive, got {reference_speed}"
            )));
        }
        Ok(Self {
            weights,
            reference_speed,
        })
    }

    /// Cost model at the default reference speed
    pub fn with_weights(weights: Weights) -> Self {
        Self {
            weights,
            reference_speed: REFERENCE_SPEED_MPS,
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for invalid weights or speed
    pub fn from_config(config: &RoutingConfig) -> Result<Self, Error> {
        Self::new(
            Weights::new(config.risk_weight, config.time_weight)?,
            config.reference_speed,
        )
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// Reference speed in metres per second
    pub fn reference_speed(&self) -> f64 {
        self.reference_speed
    }

    pub fn travel_time_seconds(&self, edge: &RoadEdge) -> f64 {
        edge.travel_time()
            .unwrap_or_else(|| edge.length() / self.reference_speed)
    }

    pub fn travel_time_hours(&self, edge: &RoadEdge) -> f64 {
        self.travel_time_seconds(edge) / SECONDS_PER_HOUR
    }

    /// Length that takes `seconds` to drive at the reference speed
    pub fn length_for_travel_time(&self, seconds: f64) -> f64 {
        seconds * self.reference_speed
    }

    pub fn edge_cost(&self, edge: &RoadEdge) -> f64 {
        self.weights.risk * edge.effective_risk()
            + self.weights.time * self.travel_time_hours(edge)
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::with_weights(Weights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_close;

    #[test]
    fn weights_are_normalized() {
        for (risk, time) in [(0.7, 0.3), (7.0, 3.0), (1.0, 0.0), (0.0, 2.5), (0.2, 0.2)] {
            let weights = Weights::new(risk, time).unwrap();
            assert_close(weights.risk_weight() + weights.time_weight(), 1.0);
            if time > 0.0 {
                assert_close(
                    weights.risk_weight() / weights.time_weight(),
                    risk / time,
                );
            }
        }
    }

    #[test]
    fn degenerate_weights_are_rejected() {
        assert!(matches!(Weights::new(0.0, 0.0), Err(Error::InvalidConfig(_))));
        assert!(matches!(Weights::new(-1.0, 2.0), Err(Error::InvalidConfig(_))));
        assert!(matches!(Weights::new(f64::NAN, 1.0), Err(Error::InvalidConfig(_))));
        assert!(CostModel::new(Weights::default(), 0.0).is_err());
    }

    #[test]
    fn cost_follows_blend_formula() {
        let model = CostModel::default();
        let edge = RoadEdge::new(150.0).with_risk(0.7);
        assert_close(model.edge_cost(&edge), 0.7 * 0.7 + 0.3 * (150.0 / 8.33 / 3600.0));

        // unknown risk and length resolve to 0.5 and 100 m
        let bare = RoadEdge::from_parts(None, None, None);
        assert_close(model.edge_cost(&bare), 0.7 * 0.5 + 0.3 * (100.0 / 8.33 / 3600.0));
    }

    #[test]
    fn explicit_travel_time_overrides_length() {
        let model = CostModel::default();
        let edge = RoadEdge::new(10_000.0).with_risk(0.0).with_travel_time(360.0);
        assert_close(model.edge_cost(&edge), 0.3 * 0.1);
    }

    #[test]
    fn cost_is_monotone_in_risk_and_length() {
        let model = CostModel::new(Weights::new(0.4, 0.6).unwrap(), REFERENCE_SPEED_MPS).unwrap();
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=10 {
            let risk = f64::from(step) / 10.0;
            let cost = model.edge_cost(&RoadEdge::new(250.0).with_risk(risk));
            assert!(cost >= previous);
            previous = cost;
        }

        let mut previous = f64::NEG_INFINITY;
        for length in [0.0, 1.0, 50.0, 100.0, 1_000.0, 25_000.0] {
            let cost = model.edge_cost(&RoadEdge::new(length).with_risk(0.3));
            assert!(cost >= previous);
            previous = cost;
        }
    }
}
