use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Node {0} not found in network")]
    NodeNotFound(NodeId),
    #[error("Node {0} already exists in network")]
    DuplicateNode(NodeId),
    #[error("Network has no safe zones")]
    NoSafeZone,
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Network lock poisoned by a panicked writer")]
    LockPoisoned,
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
