// Heuristic board scorer
//
// A position's desirability is a weighted linear sum of distance-based
// features. Each feature can be switched off by omitting its weight, and a
// feature with no qualifying target (no food on the board, no opponent of
// the right size) contributes zero rather than a sentinel distance.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::types::{Battlesnake, Board, Coord};

/// Distance metric used by all scorer features
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    Manhattan,
    Euclidean,
}

impl DistanceMetric {
    /// Distance between two points; points are floating so the geometric
    /// board center can be measured against integer cells
    pub fn between(&self, a: (f64, f64), b: (f64, f64)) -> f64 {
        let dx = a.0 - b.0;
        let dy = a.1 - b.1;
        match self {
            DistanceMetric::Manhattan => dx.abs() + dy.abs(),
            DistanceMetric::Euclidean => dx.hypot(dy),
        }
    }

    pub fn between_coords(&self, a: &Coord, b: &Coord) -> f64 {
        self.between(point(a), point(b))
    }
}

fn point(coord: &Coord) -> (f64, f64) {
    (f64::from(coord.x), f64::from(coord.y))
}

/// Distance from `head` to the nearest food, if any food exists
fn nearest_food_distance(head: &Coord, board: &Board, metric: DistanceMetric) -> Option<f64> {
    board
        .food
        .iter()
        .map(|food| metric.between_coords(head, food))
        .reduce(f64::min)
}

/// Distance from `head` to the nearest opposing head whose body length
/// satisfies `qualifies(theirs, ours)`, if such a snake exists
fn nearest_rival_head_distance(
    head: &Coord,
    board: &Board,
    you: &Battlesnake,
    metric: DistanceMetric,
    qualifies: impl Fn(usize, usize) -> bool,
) -> Option<f64> {
    board
        .snakes
        .iter()
        .filter(|snake| snake.id != you.id && qualifies(snake.body.len(), you.body.len()))
        .map(|snake| metric.between_coords(head, &snake.head))
        .reduce(f64::min)
}

/// Scores a hypothetical head position on the given board.
///
/// Enabled terms:
/// - food attraction, scaled by missing health so hunger sharpens the pull
///   (the food distance enters negated: closer is better)
/// - centrality: distance to the geometric board center, sign of the weight
///   decides attraction vs repulsion
/// - predator avoidance: distance to the nearest opposing head at least as
///   long as us (farther is better under a positive weight)
/// - prey pursuit: distance to the nearest strictly shorter opposing head
pub fn score(head: &Coord, board: &Board, you: &Battlesnake, config: &EngineConfig) -> f64 {
    let metric = config.distance_metric;
    let mut value = 0.0;

    if let Some(weight) = config.weights.food {
        if let Some(dist) = nearest_food_distance(head, board, metric) {
            let missing_health = f64::from(100 - you.health);
            value += weight * missing_health * -dist;
        }
    }

    if let Some(weight) = config.weights.centrality {
        value += weight * metric.between(point(head), board.center());
    }

    if let Some(weight) = config.weights.predator {
        let rival =
            nearest_rival_head_distance(head, board, you, metric, |theirs, ours| theirs >= ours);
        if let Some(dist) = rival {
            value += weight * dist;
        }
    }

    if let Some(weight) = config.weights.prey {
        let rival =
            nearest_rival_head_distance(head, board, you, metric, |theirs, ours| theirs < ours);
        if let Some(dist) = rival {
            value += weight * dist;
        }
    }

    value
}
