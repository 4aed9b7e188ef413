//! Straight-line estimate of the remaining cost.
//!
//! Coordinates are treated as planar degrees: one degree is taken as 111 km
//! and the distance is turned into hours at 30 km/h. The estimate only
//! bounds the true cost from below while the time term dominates edge costs.
//! Once risk makes a detour cheaper than the geometrically shorter road it
//! can overestimate, so search results are optimal under the heuristic's
//! guidance rather than provably shortest.

use geo::Point;

const METRES_PER_DEGREE: f64 = 111_000.0;
const HEURISTIC_SPEED_M_PER_HOUR: f64 = 30_000.0;

pub fn straight_line_hours(from: &Point<f64>, to: &Point<f64>) -> f64 {
    let delta = *from - *to;
    delta.x().hypot(delta.y()) * METRES_PER_DEGREE / HEURISTIC_SPEED_M_PER_HOUR
}
