use log::info;

use super::document::{EdgeRecord, NetworkDocument, NodeRecord};
use crate::{EvacGraph, EvacNode, Error, RoadEdge};

/// Builds the routing network from a document
///
/// # Errors
///
/// Returns an error for duplicate node ids, edges referencing unknown nodes,
/// non-finite coordinates, negative lengths or times, and risks outside [0, 1]
pub fn build_graph(document: &NetworkDocument) -> Result<EvacGraph, Error> {
    let mut graph = EvacGraph::new(document.directionality);

    for record in &document.nodes {
        graph.add_node(node_from_record(record)?)?;
    }
    for record in &document.edges {
        graph.add_edge(record.source, record.target, edge_from_record(record)?)?;
    }

    info!(
        "Built {:?} evacuation network with {} nodes ({} safe zones) and {} edges",
        graph.directionality(),
        graph.node_count(),
        graph.safe_zones().len(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parses a JSON [`NetworkDocument`] and builds the network from it
///
/// # Errors
///
/// Returns [`Error::InvalidData`] for malformed JSON, or any error of [`build_graph`]
pub fn graph_from_json(json: &str) -> Result<EvacGraph, Error> {
    let document: NetworkDocument = serde_json::from_str(json)
        .map_err(|e| Error::InvalidData(format!("Malformed network document: {e}")))?;
    build_graph(&document)
}

fn node_from_record(record: &NodeRecord) -> Result<EvacNode, Error> {
    if !record.x.is_finite() || !record.y.is_finite() {
        return Err(Error::InvalidData(format!(
            "Node {} has non-finite coordinates",
            record.id
        )));
    }
    validate_risk(record.risk, || format!("node {}", record.id))?;

    Ok(EvacNode {
        risk: record.risk,
        is_safe_zone: record.safe_zone,
        ..EvacNode::new(record.id, record.x, record.y)
    })
}

fn edge_from_record(record: &EdgeRecord) -> Result<RoadEdge, Error> {
    let name = || format!("edge ({}, {})", record.source, record.target);

    for (field, value) in [("length", record.length), ("travel_time", record.travel_time)] {
        if let Some(value) = value {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidData(format!(
                    "{} has invalid {field} {value}",
                    name()
                )));
            }
        }
    }
    validate_risk(record.risk, name)?;

    Ok(RoadEdge::from_parts(
        record.length,
        record.risk,
        record.travel_time,
    ))
}

fn validate_risk(risk: Option<f64>, name: impl FnOnce() -> String) -> Result<(), Error> {
    match risk {
        Some(risk) if !(0.0..=1.0).contains(&risk) => Err(Error::InvalidData(format!(
            "{} has risk {risk} outside [0, 1]",
            name()
        ))),
        _ => Ok(()),
    }
}
