// Integration tests for the heuristic scorer
//
// Each feature is exercised in isolation through a purpose-built config so
// expected values can be computed by hand.

use foresight_snake::config::{EngineConfig, Weights};
use foresight_snake::score::{score, DistanceMetric};
use foresight_snake::types::{Battlesnake, Board, Coord, Direction};

fn snake(id: &str, health: i32, segments: &[(i32, i32)]) -> Battlesnake {
    let body: Vec<Coord> = segments.iter().map(|&(x, y)| Coord { x, y }).collect();
    Battlesnake {
        id: id.to_string(),
        name: id.to_string(),
        health,
        head: body[0],
        length: body.len() as i32,
        body,
        latency: "0".to_string(),
        shout: None,
    }
}

fn board(food: &[(i32, i32)], snakes: Vec<Battlesnake>) -> Board {
    Board {
        width: 11,
        height: 11,
        food: food.iter().map(|&(x, y)| Coord { x, y }).collect(),
        snakes,
        hazards: vec![],
    }
}

fn engine(
    metric: DistanceMetric,
    food: Option<f64>,
    centrality: Option<f64>,
    predator: Option<f64>,
    prey: Option<f64>,
) -> EngineConfig {
    EngineConfig {
        distance_metric: metric,
        lookahead_depth: 0,
        cautious_moves: false,
        fallback_move: Direction::Up,
        weights: Weights {
            food,
            centrality,
            predator,
            prey,
        },
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}

#[test]
fn test_food_term_is_zero_when_board_has_no_food() {
    let us = snake("us", 10, &[(5, 5)]);
    let board = board(&[], vec![us.clone()]);
    let config = engine(DistanceMetric::Manhattan, Some(0.7), None, None, None);

    // no sentinel distance: an empty food set contributes nothing
    assert_close(score(&us.head, &board, &us, &config), 0.0);
}

#[test]
fn test_food_term_uses_nearest_food_scaled_by_missing_health() {
    let us = snake("us", 50, &[(1, 0)]);
    // nearest food is (5,5) at Manhattan distance 9, (9,9) is farther
    let board = board(&[(5, 5), (9, 9)], vec![us.clone()]);
    let config = engine(DistanceMetric::Manhattan, Some(0.7), None, None, None);

    // 0.7 * (100 - 50) * -9
    assert_close(score(&us.head, &board, &us, &config), -315.0);
}

#[test]
fn test_hunger_sharpens_the_food_penalty() {
    let hungry = snake("us", 10, &[(1, 0)]);
    let fed = snake("us", 90, &[(1, 0)]);
    let board = board(&[(5, 5)], vec![hungry.clone()]);
    let config = engine(DistanceMetric::Manhattan, Some(0.7), None, None, None);

    // the same far-from-food cell looks worse the hungrier we are
    let hungry_score = score(&hungry.head, &board, &hungry, &config);
    let fed_score = score(&fed.head, &board, &fed, &config);
    assert!(hungry_score < fed_score);
}

#[test]
fn test_centrality_measures_to_geometric_center() {
    let us = snake("us", 50, &[(1, 0)]);
    let board = board(&[], vec![us.clone()]);
    let config = engine(DistanceMetric::Manhattan, None, Some(-100.0), None, None);

    // center of an 11x11 board is (5.5, 5.5): distance 4.5 + 5.5 = 10
    assert_close(score(&us.head, &board, &us, &config), -1000.0);
}

#[test]
fn test_centrality_under_euclidean_metric() {
    let us = snake("us", 50, &[(2, 2)]);
    let board = board(&[], vec![us.clone()]);
    let config = engine(DistanceMetric::Euclidean, None, Some(-25.0), None, None);

    let expected = -25.0 * (3.5f64 * 3.5 + 3.5 * 3.5).sqrt();
    assert_close(score(&us.head, &board, &us, &config), expected);
}

#[test]
fn test_predator_term_rewards_distance_from_longer_rivals() {
    let us = snake("us", 50, &[(5, 5), (5, 4), (5, 3)]);
    // one longer rival 4 away, one shorter rival that must be ignored
    let longer = snake("longer", 50, &[(9, 5), (9, 4), (9, 3), (9, 2)]);
    let shorter = snake("shorter", 50, &[(5, 6)]);
    let board = board(&[], vec![us.clone(), longer, shorter]);
    let config = engine(DistanceMetric::Manhattan, None, None, Some(0.5), None);

    // 0.5 * distance(head, (9,5)) = 0.5 * 4
    assert_close(score(&us.head, &board, &us, &config), 2.0);
}

#[test]
fn test_prey_term_rewards_closing_on_shorter_rivals() {
    let us = snake("us", 50, &[(5, 5), (5, 4), (5, 3)]);
    let shorter = snake("shorter", 50, &[(5, 8)]);
    let board = board(&[], vec![us.clone(), shorter]);
    let config = engine(DistanceMetric::Manhattan, None, None, None, Some(-4.0));

    // -4 * distance(head, (5,8)) = -4 * 3
    assert_close(score(&us.head, &board, &us, &config), -12.0);
}

#[test]
fn test_rival_terms_are_zero_without_qualifying_rivals() {
    let us = snake("us", 50, &[(5, 5), (5, 4), (5, 3)]);
    let same_size = snake("rival", 50, &[(9, 5), (9, 4), (9, 3)]);
    let board = board(&[], vec![us.clone(), same_size]);

    // an equal-length rival qualifies as predator but never as prey
    let prey_only = engine(DistanceMetric::Manhattan, None, None, None, Some(-4.0));
    assert_close(score(&us.head, &board, &us, &prey_only), 0.0);

    let predator_only = engine(DistanceMetric::Manhattan, None, None, Some(0.5), None);
    assert_close(score(&us.head, &board, &us, &predator_only), 2.0);
}

#[test]
fn test_disabled_features_contribute_nothing() {
    let us = snake("us", 50, &[(1, 0)]);
    let board = board(&[(5, 5)], vec![us.clone()]);

    let all_disabled = engine(DistanceMetric::Manhattan, None, None, None, None);
    assert_close(score(&us.head, &board, &us, &all_disabled), 0.0);

    // enabling terms one at a time adds exactly their contribution
    let food_and_center = engine(
        DistanceMetric::Manhattan,
        Some(0.7),
        Some(-100.0),
        None,
        None,
    );
    assert_close(score(&us.head, &board, &us, &food_and_center), -315.0 - 1000.0);
}
