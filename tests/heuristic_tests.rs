//! Heuristic estimator tests
//!
//! Zero-at-goal and non-negativity properties, exact values on small
//! layouts, and informed-search cost parity against uniform-cost search.

mod common;

use std::collections::BTreeSet;

use maze_agents::distance::UNREACHABLE_COST;
use maze_agents::heuristics::{corners_heuristic, food_heuristic};
use maze_agents::problem::SearchProblem;
use maze_agents::problems::{
    CornersProblem, CornersState, FoodSearchProblem, FoodState,
};
use maze_agents::search::{a_star_search, uniform_cost_search};
use maze_agents::types::{Coord, Grid};

/// 6x6 layout with a solid outer wall ring and an open interior
fn walled_6x6() -> Grid {
    let mut walls = Grid::new(6, 6);
    for x in 0..6 {
        walls.set(Coord::new(x, 0), true);
        walls.set(Coord::new(x, 5), true);
    }
    for y in 0..6 {
        walls.set(Coord::new(0, y), true);
        walls.set(Coord::new(5, y), true);
    }
    walls
}

fn corner_food(walls: &Grid) -> Grid {
    let mut food = Grid::new(walls.width(), walls.height());
    let top = walls.height() - 2;
    let right = walls.width() - 2;
    for corner in [Coord::new(1, 1), Coord::new(1, top), Coord::new(right, 1), Coord::new(right, top)] {
        food.set(corner, true);
    }
    food
}

#[test]
fn test_corners_heuristic_zero_at_goal() {
    let walls = walled_6x6();
    let food = corner_food(&walls);
    let problem = CornersProblem::new(walls, &food, Coord::new(2, 2));

    let goal = CornersState { position: Coord::new(1, 1), remaining: BTreeSet::new() };
    assert_eq!(corners_heuristic(&goal, &problem), 0.0);
}

#[test]
fn test_corners_heuristic_greedy_tour_value() {
    common::init_logging();
    let walls = walled_6x6();
    let food = corner_food(&walls);
    let problem = CornersProblem::new(walls, &food, Coord::new(1, 1));

    // From (1,1) with three corners left: 3 to (1,4), 3 on to (4,4), 3 on to (4,1)
    let remaining: BTreeSet<Coord> =
        [Coord::new(1, 4), Coord::new(4, 1), Coord::new(4, 4)].iter().copied().collect();
    let state = CornersState { position: Coord::new(1, 1), remaining };
    assert_eq!(corners_heuristic(&state, &problem), 9.0);
}

#[test]
fn test_corners_heuristic_non_negative() {
    let walls = walled_6x6();
    let food = corner_food(&walls);
    let problem = CornersProblem::new(walls.clone(), &food, Coord::new(3, 3));

    let state = problem.starting_state();
    assert!(corners_heuristic(&state, &problem) >= 0.0);
}

#[test]
fn test_corners_astar_matches_ucs_cost() {
    let walls = walled_6x6();
    let food = corner_food(&walls);

    let ucs_problem = CornersProblem::new(walls.clone(), &food, Coord::new(2, 2));
    let ucs_path = uniform_cost_search(&ucs_problem).expect("corner tour exists");

    let astar_problem = CornersProblem::new(walls, &food, Coord::new(2, 2));
    let astar_path = a_star_search(&astar_problem, &corners_heuristic).expect("corner tour exists");

    assert_eq!(ucs_path.len(), astar_path.len());
}

#[test]
fn test_food_heuristic_zero_with_no_food() {
    let walls = Grid::new(5, 1);
    let problem = FoodSearchProblem::new(walls.clone(), Grid::new(5, 1), Coord::new(2, 0));

    let state = FoodState { position: Coord::new(2, 0), food: Grid::new(5, 1) };
    assert_eq!(food_heuristic(&state, &problem), 0.0);
}

#[test]
fn test_food_heuristic_corridor_value() {
    // Open 5x1 corridor, food at both ends, agent in the middle:
    // nearest food 2 + widest pair 4
    let walls = Grid::new(5, 1);
    let mut food = Grid::new(5, 1);
    food.set(Coord::new(0, 0), true);
    food.set(Coord::new(4, 0), true);

    let problem = FoodSearchProblem::new(walls, food.clone(), Coord::new(2, 0));
    let state = FoodState { position: Coord::new(2, 0), food };
    assert_eq!(food_heuristic(&state, &problem), 6.0);
}

#[test]
fn test_food_heuristic_single_food_is_plain_distance() {
    let walls = Grid::new(4, 1);
    let mut food = Grid::new(4, 1);
    food.set(Coord::new(3, 0), true);

    let problem = FoodSearchProblem::new(walls, food.clone(), Coord::new(0, 0));
    let state = FoodState { position: Coord::new(0, 0), food };
    assert_eq!(food_heuristic(&state, &problem), 3.0);
}

#[test]
fn test_food_heuristic_unreachable_food_degrades_finitely() {
    // Food sealed behind a wall: large but finite, never a panic
    let walls = Grid::parse(&[
        ".#.",
    ], '#');
    let mut food = Grid::new(3, 1);
    food.set(Coord::new(2, 0), true);

    let problem = FoodSearchProblem::new(walls, food.clone(), Coord::new(0, 0));
    let state = FoodState { position: Coord::new(0, 0), food };

    let estimate = food_heuristic(&state, &problem);
    assert!(estimate >= UNREACHABLE_COST);
    assert!(estimate.is_finite());
}

#[test]
fn test_food_astar_matches_ucs_cost() {
    // Corridor with two foods: optimal plan goes near end first (cost 6)
    let walls = Grid::new(5, 1);
    let mut food = Grid::new(5, 1);
    food.set(Coord::new(0, 0), true);
    food.set(Coord::new(4, 0), true);

    let ucs_problem = FoodSearchProblem::new(walls.clone(), food.clone(), Coord::new(1, 0));
    let ucs_path = uniform_cost_search(&ucs_problem).unwrap();
    assert_eq!(ucs_path.len(), 5);

    let astar_problem = FoodSearchProblem::new(walls, food, Coord::new(1, 0));
    let astar_path = a_star_search(&astar_problem, &food_heuristic).unwrap();
    assert_eq!(astar_path.len(), 5);
}
