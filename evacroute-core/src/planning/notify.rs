//! Side channels of a simulated evacuation.
//!
//! Notifiers only observe finished routes; they cannot change routing results.

use log::info;

use super::EvacuationRoute;
use crate::NodeId;

pub trait Notifier: Send + Sync {
    /// Communicates one route to residents or staff
    fn alert(&self, route: &EvacuationRoute);

    /// Requests a supply check at a safe zone
    fn resource_check(&self, safe_zone: NodeId);
}

/// Writes alerts and resource checks to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, route: &EvacuationRoute) {
        info!(
            "Evacuation alert: follow path {:?} to safety (critical zones crossed: {:?}, \
             safe zones reached: {:?}, total cost: {:.2})",
            route.path, route.critical_zones_crossed, route.safe_zones_reached, route.cost
        );
    }

    fn resource_check(&self, safe_zone: NodeId) {
        info!(
            "Resource check at safe zone {safe_zone}: ensure medical kits, food and water are available"
        );
    }
}
