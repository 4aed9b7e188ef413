use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_CRITICAL_THRESHOLD, Error,
    planning::DestinationPolicy,
    routing::diverse::DEFAULT_DIVERSITY_FACTOR,
    weighting::{CostModel, REFERENCE_SPEED_MPS, Weights},
};

/// Settings for one routing session. They are fixed at construction time;
/// changing them means building new engine components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutingConfig {
    pub risk_weight: f64,
    pub time_weight: f64,
    /// Risk penalty added to already-used edges when looking for alternatives
    pub diversity_factor: f64,
    /// Number of alternative routes to plan
    pub num_paths: usize,
    /// Node risk above which a node is a critical zone
    pub critical_threshold: f64,
    /// Metres per second used to turn length into travel time
    pub reference_speed: f64,
    pub destination_policy: DestinationPolicy,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            risk_weight: 0.7,
            time_weight: 0.3,
            diversity_factor: DEFAULT_DIVERSITY_FACTOR,
            num_paths: 3,
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
            reference_speed: REFERENCE_SPEED_MPS,
            destination_policy: DestinationPolicy::default(),
        }
    }
}

impl RoutingConfig {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first invalid setting
    pub fn validate(&self) -> Result<(), Error> {
        self.cost_model()?;

        if !self.diversity_factor.is_finite() || self.diversity_factor < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "diversity factor must be non-negative, got {}",
                self.diversity_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.critical_threshold) {
            return Err(Error::InvalidConfig(format!(
                "critical threshold must lie in [0, 1], got {}",
                self.critical_threshold
            )));
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for invalid weights
    pub fn weights(&self) -> Result<Weights, Error> {
        Weights::new(self.risk_weight, self.time_weight)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for invalid weights or speed
    pub fn cost_model(&self) -> Result<CostModel, Error> {
        CostModel::from_config(self)
    }
}
