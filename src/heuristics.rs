// Heuristic estimators for informed search
//
// Both maze heuristics are built on the distance oracle and memoize oracle
// queries through the problem-owned cache slot. Neither is a proven lower
// bound for every grid topology: the corner tour is a greedy nearest-neighbor
// approximation and the food heuristic is an approximate combined bound.
// Treat admissibility as a known, inherited caveat, not a guarantee.

use crate::distance::UNREACHABLE_COST;
use crate::problems::{CornersProblem, CornersState, FoodSearchProblem, FoodState};
use crate::types::Coord;

/// Manhattan distance between two coordinates
pub fn manhattan(a: Coord, b: Coord) -> f64 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as f64
}

/// Greedy corner-tour estimate
///
/// Repeatedly walks to the nearest remaining corner by true maze distance,
/// pretends the agent is there, and accumulates the legs. Returns 0 when no
/// corners remain; an unreachable corner contributes `UNREACHABLE_COST` so
/// the search degrades instead of crashing.
pub fn corners_heuristic(state: &CornersState, problem: &CornersProblem) -> f64 {
    let mut cache = problem.cache().borrow_mut();
    let walls = problem.walls();

    let mut position = state.position;
    let mut remaining: Vec<Coord> = state.remaining.iter().copied().collect();
    let mut total = 0.0;

    while !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_distance = f64::INFINITY;

        for (index, &corner) in remaining.iter().enumerate() {
            let distance = cache
                .distance(walls, position, corner)
                .map_or(UNREACHABLE_COST, f64::from);
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }

        total += best_distance;
        position = remaining.swap_remove(best_index);
    }

    total
}

/// Nearest food plus the longest food-to-food stretch
///
/// `distance(position, nearest food) + max over pairs distance(foodA, foodB)`,
/// all by true maze distance. Returns 0 when the food grid is empty.
pub fn food_heuristic(state: &FoodState, problem: &FoodSearchProblem) -> f64 {
    let food = state.food.positions();
    if food.is_empty() {
        return 0.0;
    }

    let mut cache = problem.cache().borrow_mut();
    let walls = problem.walls();

    let mut nearest = f64::INFINITY;
    for &cell in &food {
        let distance = cache
            .distance(walls, state.position, cell)
            .map_or(UNREACHABLE_COST, f64::from);
        if distance < nearest {
            nearest = distance;
        }
    }

    let mut widest_pair = 0.0;
    for (i, &a) in food.iter().enumerate() {
        for &b in &food[i + 1..] {
            let distance = cache.distance(walls, a, b).map_or(UNREACHABLE_COST, f64::from);
            if distance > widest_pair {
                widest_pair = distance;
            }
        }
    }

    nearest + widest_pair
}
