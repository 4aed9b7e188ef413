//! Sharing one network between concurrent planners and an update stream.
//!
//! Path searches never mutate the graph, so they can run under a read lock
//! while updates take the write lock. Callers that prefer not to hold a lock
//! during planning take an owned [`snapshot`](SharedNetwork::snapshot) instead.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Error, EvacGraph, GraphWeighting, NodeId, RiskUpdate, TrafficUpdate};

#[derive(Debug, Clone)]
pub struct SharedNetwork {
    inner: Arc<RwLock<GraphWeighting>>,
}

impl SharedNetwork {
    pub fn new(weighting: GraphWeighting) -> Self {
        Self {
            inner: Arc::new(RwLock::new(weighting)),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if a writer panicked
    pub fn read(&self) -> Result<RwLockReadGuard<'_, GraphWeighting>, Error> {
        self.inner.read().map_err(|_| Error::LockPoisoned)
    }

    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if a writer panicked
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, GraphWeighting>, Error> {
        self.inner.write().map_err(|_| Error::LockPoisoned)
    }

    /// Owned copy of the network as of now
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if a writer panicked
    pub fn snapshot(&self) -> Result<EvacGraph, Error> {
        Ok(self.read()?.graph().clone())
    }

    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if a writer panicked
    pub fn apply_risk_update(&self, source: NodeId, target: NodeId, risk: f64) -> Result<bool, Error> {
        Ok(self.write()?.apply_risk_update(source, target, risk))
    }

    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if a writer panicked
    pub fn apply_traffic_update(
        &self,
        source: NodeId,
        target: NodeId,
        travel_time: f64,
    ) -> Result<bool, Error> {
        Ok(self.write()?.apply_traffic_update(source, target, travel_time))
    }

    /// Applies a batch under a single write lock
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if a writer panicked
    pub fn apply_updates(
        &self,
        risk: &[RiskUpdate],
        traffic: &[TrafficUpdate],
    ) -> Result<usize, Error> {
        let mut weighting = self.write()?;
        Ok(weighting.apply_risk_updates(risk) + weighting.apply_traffic_updates(traffic))
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::{CostModel, Pathfinder, test_support::sample_graph};

    fn shared() -> SharedNetwork {
        SharedNetwork::new(GraphWeighting::new(sample_graph(), CostModel::default()))
    }

    #[test]
    fn snapshots_are_isolated_from_later_updates() {
        let network = shared();
        let snapshot = network.snapshot().unwrap();

        assert!(network.apply_risk_update(1, 2, 0.1).unwrap());

        assert_eq!(snapshot.edge_attributes(1, 2).unwrap().risk(), Some(0.7));
        let current = network.read().unwrap();
        assert_eq!(current.graph().edge_attributes(1, 2).unwrap().risk(), Some(0.1));
    }

    #[test]
    fn concurrent_readers_and_writer() {
        let network = shared();
        let pathfinder = Pathfinder::default();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let network = network.clone();
                thread::spawn(move || {
                    let guard = network.read().unwrap();
                    pathfinder.find_path(guard.graph(), 0, 3).nodes().to_vec()
                })
            })
            .collect();

        network
            .apply_updates(
                &[RiskUpdate { source: 0, target: 1, risk: 0.9 }],
                &[TrafficUpdate { source: 2, target: 3, travel_time: 60.0 }],
            )
            .unwrap();

        for reader in readers {
            assert_eq!(reader.join().unwrap(), vec![0, 1, 2, 3]);
        }
        assert_eq!(network.read().unwrap().graph().edge_attributes(0, 1).unwrap().risk(), Some(0.9));
    }
}
