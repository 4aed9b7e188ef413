use std::fmt;

use geo::Point;
use hashbrown::HashMap;
use itertools::Itertools;
use log::trace;
use petgraph::{
    Direction,
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
};
use rstar::{RTree, primitives::GeomWithData};
use serde::{Deserialize, Serialize};

use super::components::{EdgeUpdate, EvacNode, RoadEdge};
use crate::{Error, NodeId};

/// Node coordinates stored in the spatial index
pub type IndexedPoint = GeomWithData<[f64; 2], NodeIndex>;

/// Whether an edge `(u, v)` also connects `v` to `u`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directionality {
    Directed,
    #[default]
    Undirected,
}

/// Road network owned by one planning process.
///
/// Nodes are addressed by their external [`NodeId`]. Edges are stored once;
/// on an undirected network an edge is traversable from both endpoints.
/// Parallel edges are allowed, the earliest inserted one being the
/// representative edge addressed by attribute reads and writes.
#[derive(Clone)]
pub struct EvacGraph {
    pub(crate) graph: DiGraph<EvacNode, RoadEdge>,
    index: HashMap<NodeId, NodeIndex>,
    rtree: RTree<IndexedPoint>,
    directionality: Directionality,
}

impl EvacGraph {
    pub fn new(directionality: Directionality) -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            rtree: RTree::new(),
            directionality,
        }
    }

    pub fn directed() -> Self {
        Self::new(Directionality::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Directionality::Undirected)
    }

    pub fn directionality(&self) -> Directionality {
        self.directionality
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Adds a node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if a node with the same id exists
    pub fn add_node(&mut self, node: EvacNode) -> Result<NodeIndex, Error> {
        if self.index.contains_key(&node.id) {
            return Err(Error::DuplicateNode(node.id));
        }
        let id = node.id;
        let point = [node.geometry.x(), node.geometry.y()];
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        self.rtree.insert(IndexedPoint::new(point, idx));
        Ok(idx)
    }

    /// Adds a road segment between two existing nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either endpoint is missing
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        edge: RoadEdge,
    ) -> Result<EdgeIndex, Error> {
        let a = self.index_of(source).ok_or(Error::NodeNotFound(source))?;
        let b = self.index_of(target).ok_or(Error::NodeNotFound(target))?;
        Ok(self.graph.add_edge(a, b, edge))
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.representative_edge(source, target).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&EvacNode> {
        self.index_of(id).map(|idx| &self.graph[idx])
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &EvacNode> {
        self.graph.node_weights()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().map(|node| node.id)
    }

    /// All edges as `(source, target, attributes)` in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &RoadEdge)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id,
                self.graph[edge.target()].id,
                edge.weight(),
            )
        })
    }

    /// Neighbours reachable over one edge, each listed once, ordered by the
    /// insertion order of the first edge leading to them
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let Some(idx) = self.index_of(id) else {
            return Vec::new();
        };
        self.incident_edges(idx)
            .sorted_unstable_by_key(|&(edge, _)| edge)
            .map(|(_, next)| self.graph[next].id)
            .unique()
            .collect()
    }

    /// Every edge between the two nodes, ascending by insertion order.
    /// Undirected networks include edges stored in either orientation.
    pub fn parallel_edges(&self, source: NodeId, target: NodeId) -> Vec<EdgeIndex> {
        match (self.index_of(source), self.index_of(target)) {
            (Some(a), Some(b)) => self.edges_between(a, b),
            _ => Vec::new(),
        }
    }

    pub fn edge_attributes(&self, source: NodeId, target: NodeId) -> Option<&RoadEdge> {
        self.representative_edge(source, target)
            .map(|edge| &self.graph[edge])
    }

    /// Updates the supplied fields of the representative edge and clears
    /// its stored cost. Costs are not recomputed here.
    ///
    /// Returns `false` if there is no such edge.
    pub fn set_edge_attributes(
        &mut self,
        source: NodeId,
        target: NodeId,
        update: EdgeUpdate,
    ) -> bool {
        match self.representative_edge(source, target) {
            Some(edge) => {
                self.graph[edge].apply(&update);
                true
            }
            None => {
                trace!("No edge ({source}, {target}) to update");
                false
            }
        }
    }

    /// Returns `false` if the node does not exist
    pub fn set_node_risk(&mut self, id: NodeId, risk: f64) -> bool {
        match self.index_of(id) {
            Some(idx) => {
                self.graph[idx].risk = Some(risk);
                true
            }
            None => false,
        }
    }

    /// Safe zones in insertion order
    pub fn safe_zones(&self) -> Vec<NodeId> {
        self.nodes()
            .filter(|node| node.is_safe_zone)
            .map(|node| node.id)
            .collect()
    }

    /// Node closest to `point` by straight-line coordinate distance
    pub fn nearest_node(&self, point: &Point<f64>) -> Option<NodeId> {
        self.rtree
            .nearest_neighbor(&[point.x(), point.y()])
            .map(|entry| self.graph[entry.data].id)
    }

    /// Safe zone closest to `point` by straight-line coordinate distance
    pub fn nearest_safe_zone(&self, point: &Point<f64>) -> Option<NodeId> {
        self.rtree
            .nearest_neighbor_iter(&[point.x(), point.y()])
            .map(|entry| &self.graph[entry.data])
            .find(|node| node.is_safe_zone)
            .map(|node| node.id)
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub(crate) fn representative_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeIndex> {
        self.parallel_edges(source, target).first().copied()
    }

    pub(crate) fn edge_mut(&mut self, edge: EdgeIndex) -> &mut RoadEdge {
        &mut self.graph[edge]
    }

    pub(crate) fn edge_weights_mut(&mut self) -> impl Iterator<Item = &mut RoadEdge> {
        self.graph.edge_weights_mut()
    }

    /// `(edge, other endpoint)` pairs leaving `node`. Outgoing edges come
    /// first, then incoming ones when undirected, each in petgraph's fixed
    /// adjacency order.
    pub(crate) fn incident_edges(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, NodeIndex)> + '_ {
        let outgoing = self
            .graph
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| (edge.id(), edge.target()));

        let incoming = (self.directionality == Directionality::Undirected)
            .then(move || {
                self.graph
                    .edges_directed(node, Direction::Incoming)
                    // Self-loops are already listed as outgoing
                    .filter(move |edge| edge.source() != node)
                    .map(|edge| (edge.id(), edge.source()))
            })
            .into_iter()
            .flatten();

        outgoing.chain(incoming)
    }

    fn edges_between(&self, a: NodeIndex, b: NodeIndex) -> Vec<EdgeIndex> {
        let mut edges: Vec<EdgeIndex> = self.graph.edges_connecting(a, b).map(|e| e.id()).collect();
        if self.directionality == Directionality::Undirected && a != b {
            edges.extend(self.graph.edges_connecting(b, a).map(|e| e.id()));
        }
        edges.sort_unstable();
        edges
    }
}

impl Default for EvacGraph {
    fn default() -> Self {
        Self::new(Directionality::default())
    }
}

impl fmt::Debug for EvacGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvacGraph")
            .field("directionality", &self.directionality)
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .finish_non_exhaustive()
    }
}
