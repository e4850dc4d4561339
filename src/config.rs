// Configuration module for reading Agents.toml
//
// All tunable coefficients live here: the game-tree depth default and the
// evaluation weights. The weight numbers are policy, not structure. The
// structural contract (objective distance lowers score, imminent collision
// dominates everything) is enforced by the evaluation code itself.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use log::warn;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub adversarial: AdversarialConfig,
    pub weights: EvalWeights,
}

/// Game-tree search constants
#[derive(Debug, Deserialize, Clone)]
pub struct AdversarialConfig {
    /// Default ply-depth bound; the sole admission-control knob on tree size
    pub default_ply_depth: u32,
}

/// Evaluation-function coefficients
#[derive(Debug, Deserialize, Clone)]
pub struct EvalWeights {
    /// Penalty per unit of distance to the nearest food
    pub food_distance: f64,
    /// Inverse-distance penalty for the nearest active threat
    pub active_threat: f64,
    /// Per-unit-distance bonus while the nearest threat is vulnerable
    pub vulnerable_threat: f64,
    /// Penalty per unit of distance to the nearest capsule
    pub capsule_distance: f64,
    /// Bonus once no capsules remain
    pub no_capsule_bonus: f64,
    /// Bonus per remaining unit of threat vulnerability time
    pub vulnerability_time: f64,
    /// Override returned when an active threat shares the agent's cell;
    /// must dominate every other term
    pub collision_score: f64,
    /// Scared time at or above which a threat counts as safely vulnerable
    pub vulnerable_timer_threshold: u32,
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Agents.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Agents.toml")
    }

    /// Loads Agents.toml, falling back to hardcoded defaults on any failure
    pub fn load_or_default() -> Self {
        match Self::load_default() {
            Ok(config) => config,
            Err(e) => {
                warn!("Using hardcoded config defaults: {}", e);
                Self::default_hardcoded()
            }
        }
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Agents.toml
    pub fn default_hardcoded() -> Self {
        Config {
            adversarial: AdversarialConfig { default_ply_depth: 2 },
            weights: EvalWeights {
                food_distance: 1.5,
                active_threat: 2.0,
                vulnerable_threat: 2.0,
                capsule_distance: 2.0,
                no_capsule_bonus: 100.0,
                vulnerability_time: 200.0,
                collision_score: -1_000_000.0,
                vulnerable_timer_threshold: 2,
            },
        }
    }
}
