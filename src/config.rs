// Configuration module for reading Snake.toml
//
// All engine behavior is driven by an immutable Config loaded once at
// startup. The two playstyles this bot has shipped with are exposed as
// named presets of the same engine rather than separate code paths.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::score::DistanceMetric;
use crate::types::Direction;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub timing: TimingConfig,
    pub engine: EngineConfig,
    pub debug: DebugConfig,
}

/// Timing constants for the per-turn response budget
#[derive(Debug, Deserialize, Clone)]
pub struct TimingConfig {
    pub response_time_budget_ms: u64,
    pub network_overhead_ms: u64,
}

impl TimingConfig {
    /// Computes the effective computation budget
    pub fn effective_budget_ms(&self) -> u64 {
        self.response_time_budget_ms.saturating_sub(self.network_overhead_ms)
    }
}

/// Move-selection engine parameters
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Distance metric shared by every scorer feature
    pub distance_metric: DistanceMetric,
    /// Plies of lookahead before the scorer is applied
    pub lookahead_depth: u8,
    /// When true, candidate moves are pre-checked two cells ahead and the
    /// plain safe set is only used if that stricter set comes up empty
    pub cautious_moves: bool,
    /// Returned when no candidate move is safe; may well be fatal, but the
    /// API demands a direction every turn
    pub fallback_move: Direction,
    pub weights: Weights,
}

/// Per-feature scorer weights. An omitted weight disables its feature.
#[derive(Debug, Deserialize, Clone)]
pub struct Weights {
    #[serde(default)]
    pub food: Option<f64>,
    #[serde(default)]
    pub centrality: Option<f64>,
    #[serde(default)]
    pub predator: Option<f64>,
    #[serde(default)]
    pub prey: Option<f64>,
}

impl EngineConfig {
    /// Aggressive preset: Manhattan distances, five plies of lookahead and
    /// all four features, including predator avoidance and prey pursuit
    pub fn hunter() -> Self {
        EngineConfig {
            distance_metric: DistanceMetric::Manhattan,
            lookahead_depth: 5,
            cautious_moves: false,
            fallback_move: Direction::Up,
            weights: Weights {
                food: Some(0.7),
                centrality: Some(-100.0),
                predator: Some(0.5),
                prey: Some(-4.0),
            },
        }
    }

    /// Conservative preset: Euclidean distances, a single ply of lookahead
    /// with the two-step cautious pre-check, food and centrality only
    pub fn homebody() -> Self {
        EngineConfig {
            distance_metric: DistanceMetric::Euclidean,
            lookahead_depth: 1,
            cautious_moves: true,
            fallback_move: Direction::Up,
            weights: Weights {
                food: Some(0.7),
                centrality: Some(-25.0),
                predator: None,
                prey: None,
            },
        }
    }
}

/// Debug configuration for the JSONL decision log
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback.
    /// This should match the constants defined in Snake.toml.
    pub fn default_hardcoded() -> Self {
        Config {
            timing: TimingConfig {
                response_time_budget_ms: 400,
                network_overhead_ms: 50,
            },
            engine: EngineConfig::hunter(),
            debug: DebugConfig {
                enabled: false,
                log_file_path: "foresight_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Snake.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}
