use geo::{LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry};
use serde::Serialize;
use serde_json::json;

use crate::{Cost, Error, EvacGraph, NodeId, ScoredPath};

/// Path annotated for decision making
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvacuationRoute {
    pub path: Vec<NodeId>,
    pub cost: Cost,
    /// Number of nodes on the path
    pub path_length: usize,
    /// Path nodes whose risk exceeds the critical threshold, in path order
    pub critical_zones_crossed: Vec<NodeId>,
    /// Path nodes flagged as safe zones, in path order
    pub safe_zones_reached: Vec<NodeId>,
}

impl EvacuationRoute {
    pub fn from_path(path: ScoredPath, graph: &EvacGraph, critical_threshold: f64) -> Self {
        let (path, cost) = path.into_parts();
        let on_path = || path.iter().filter_map(|&id| graph.node(id));

        let critical_zones_crossed = on_path()
            .filter(|node| node.is_critical(critical_threshold))
            .map(|node| node.id)
            .collect();
        let safe_zones_reached = on_path()
            .filter(|node| node.is_safe_zone)
            .map(|node| node.id)
            .collect();

        Self {
            path_length: path.len(),
            path,
            cost,
            critical_zones_crossed,
            safe_zones_reached,
        }
    }

    /// Convert the route to a `GeoJSON` Feature
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if a path node is not in `graph`
    pub fn to_geojson(&self, graph: &EvacGraph) -> Result<Feature, Error> {
        let points = self
            .path
            .iter()
            .map(|&id| {
                graph
                    .node(id)
                    .map(|node| node.geometry)
                    .ok_or(Error::NodeNotFound(id))
            })
            .collect::<Result<Vec<Point<f64>>, Error>>()?;

        // A single-node route has no line to draw
        let geometry = match points.as_slice() {
            [single] => Geometry::new(single.into()),
            _ => Geometry::new((&LineString::from(points)).into()),
        };

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "path": self.path,
                "cost": self.cost,
                "path_length": self.path_length,
                "critical_zones_crossed": self.critical_zones_crossed,
                "safe_zones_reached": self.safe_zones_reached,
            }
        });

        serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

/// Converts routes into a `GeoJSON` `FeatureCollection`
///
/// # Errors
///
/// Returns an error if any route references nodes missing from `graph`
pub fn routes_to_geojson(
    routes: &[EvacuationRoute],
    graph: &EvacGraph,
) -> Result<FeatureCollection, Error> {
    let features = routes
        .iter()
        .map(|route| route.to_geojson(graph))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}
