use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

/// Open-list entry: estimated total cost `f = g + h` and the cost `g`
/// accumulated so far
#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) estimate: f64,
    pub(super) cost: f64,
    pub(super) node: NodeIndex,
}

// Min-heap by estimate, ties broken towards the lower node index
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
