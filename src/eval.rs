// Evaluation function
//
// Scalar scoring over a game state, higher is better for the maximizing
// agent. Consumed by the reflex agent and as the leaf evaluator of the
// game-tree engine. Distances here are manhattan: the evaluator runs at
// every leaf, so it trades the oracle's exactness for speed.

use crate::config::EvalWeights;
use crate::game::{MazeGame, ThreatState};
use crate::heuristics::manhattan;
use crate::types::Coord;

/// Scores a game state
///
/// Composition: raw score, minus a food-distance penalty, threat terms on the
/// nearest threat, a capsule-distance penalty while threats are not
/// vulnerable, and a bonus for remaining vulnerability time. An active threat
/// on the agent's own cell short-circuits to `collision_score`, which
/// dominates every other term.
pub fn evaluate_state<G: MazeGame>(state: &G, weights: &EvalWeights) -> f64 {
    let position = state.agent_position();
    let mut score = state.score();

    if let Some(distance) = nearest_distance(position, &state.food().positions()) {
        score -= weights.food_distance * distance;
    }

    let threats = state.threats();
    if let Some(nearest) = nearest_threat(position, &threats) {
        let distance = manhattan(position, nearest.position);
        if distance < 1.0 {
            if nearest.is_active() {
                return weights.collision_score;
            }
        } else if nearest.vulnerable_timer >= weights.vulnerable_timer_threshold {
            // Worth chasing while the timer holds
            score += weights.vulnerable_threat * distance;
        } else {
            score -= weights.active_threat / distance;
        }
    }

    let any_vulnerable = threats
        .iter()
        .any(|t| t.vulnerable_timer >= weights.vulnerable_timer_threshold);
    if !any_vulnerable {
        match nearest_distance(position, &state.capsules()) {
            Some(distance) => score -= weights.capsule_distance * distance,
            None => score += weights.no_capsule_bonus,
        }
    }

    let total_vulnerability: u32 = threats.iter().map(|t| t.vulnerable_timer).sum();
    score += weights.vulnerability_time * f64::from(total_vulnerability);

    score
}

/// Scores taking `action` from `state`: the reflex-agent variant
pub fn evaluate_action<G: MazeGame>(state: &G, action: &G::Action, weights: &EvalWeights) -> f64 {
    let successor = state.generate_successor(0, action);
    evaluate_state(&successor, weights)
}

fn nearest_distance(position: Coord, targets: &[Coord]) -> Option<f64> {
    targets
        .iter()
        .map(|&target| manhattan(position, target))
        .min_by(|a, b| a.total_cmp(b))
}

fn nearest_threat(position: Coord, threats: &[ThreatState]) -> Option<&ThreatState> {
    threats.iter().min_by(|a, b| {
        manhattan(position, a.position).total_cmp(&manhattan(position, b.position))
    })
}
