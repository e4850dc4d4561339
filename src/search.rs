// Generic graph-search engine
//
// One skeleton drives all four strategies; they differ only in the frontier
// discipline and the priority key. This is graph search, not tree search:
// a reached set prevents re-expansion on cyclic state spaces, and duplicate
// elimination on pop tolerates states pushed more than once.

use std::collections::HashSet;

use log::info;

use crate::frontier::{Discipline, Frontier};
use crate::problem::SearchProblem;

/// Search-engine-internal node: a state plus how it was reached
///
/// Immutable once pushed; consumed and discarded on pop.
struct Node<S, A> {
    state: S,
    path: Vec<A>,
    cost: f64,
}

/// Searches the deepest nodes first
///
/// Completeness on finite spaces only; no cost-optimality guarantee.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    graph_search(problem, Discipline::Lifo, None::<&fn(&P::State, &P) -> f64>)
}

/// Searches the shallowest nodes first
///
/// Optimal in cost terms only under unit-cost edges.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    graph_search(problem, Discipline::Fifo, None::<&fn(&P::State, &P) -> f64>)
}

/// Searches the node of least accumulated cost first
///
/// The first goal pop is cost-optimal for non-negative step costs.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Option<Vec<P::Action>> {
    graph_search(problem, Discipline::MinPriority, None::<&fn(&P::State, &P) -> f64>)
}

/// Searches the node with the lowest combined cost and heuristic first
///
/// The heuristic must be non-negative. An inadmissible heuristic is accepted
/// but voids the optimality guarantee.
pub fn a_star_search<P, H>(problem: &P, heuristic: &H) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    graph_search(problem, Discipline::MinPriority, Some(heuristic))
}

/// Shared graph-search skeleton
///
/// Returns the first goal path popped from the frontier, or `None` when the
/// frontier empties without reaching a goal. "No solution" is a first-class
/// outcome, not a fault.
fn graph_search<P, H>(
    problem: &P,
    discipline: Discipline,
    heuristic: Option<&H>,
) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    let start = problem.starting_state();
    if problem.is_goal(&start) {
        return Some(Vec::new());
    }

    let estimate = |state: &P::State, cost: f64| match heuristic {
        Some(h) => cost + h(state, problem),
        None => cost,
    };

    let mut frontier: Frontier<P::State, Node<P::State, P::Action>> = Frontier::new(discipline);
    let start_priority = estimate(&start, 0.0);
    frontier.push(
        start.clone(),
        Node { state: start, path: Vec::new(), cost: 0.0 },
        start_priority,
    );

    let mut reached: HashSet<P::State> = HashSet::new();
    let mut pops: usize = 0;

    while let Some(node) = frontier.pop() {
        pops += 1;

        if problem.is_goal(&node.state) {
            info!(
                "Goal found: {} actions, cost {}, {} pops, {} states reached",
                node.path.len(),
                node.cost,
                pops,
                reached.len()
            );
            return Some(node.path);
        }

        // Lazy duplicate elimination: a state may be queued several times but
        // is expanded at most once.
        if !reached.insert(node.state.clone()) {
            continue;
        }

        for successor in problem.successor_states(&node.state) {
            if reached.contains(&successor.state) || frontier.contains(&successor.state) {
                continue;
            }

            let cost = node.cost + successor.cost;
            let priority = estimate(&successor.state, cost);

            let mut path = node.path.clone();
            path.push(successor.action);

            frontier.push(
                successor.state.clone(),
                Node { state: successor.state, path, cost },
                priority,
            );
        }
    }

    info!(
        "Frontier exhausted without a goal: {} pops, {} states reached",
        pops,
        reached.len()
    );
    None
}
