//! Least-cost and diverse route search

pub mod astar;
pub mod diverse;
pub mod heuristic;
pub mod path;

pub use astar::Pathfinder;
pub use path::ScoredPath;
