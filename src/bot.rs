// Move selection: safety filtering, lookahead, and the endpoint-facing Bot.
//
// choose_move is a pure function of the snapshot and the engine config, so
// every turn is an independent stateless decision. The Bot wraps it with the
// per-turn time budget and the plumbing the API endpoints need.

use log::{info, warn};
use rayon::prelude::*;
use serde_json::{json, Value};
use std::time::{Duration, Instant};

use crate::config::{Config, EngineConfig};
use crate::debug_logger::DebugLogger;
use crate::safety::{cautious_moves, safe_moves};
use crate::search::lookahead_value;
use crate::types::{Battlesnake, Board, Direction, Game};

/// Candidate moves for the current head. With cautious_moves enabled the
/// stricter two-step set is preferred, degrading to the plain safe set when
/// it is empty.
fn candidate_moves(board: &Board, you: &Battlesnake, config: &EngineConfig) -> Vec<Direction> {
    let head = &you.head;
    if config.cautious_moves {
        let cautious = cautious_moves(head, board, you);
        if !cautious.is_empty() {
            return cautious;
        }
    }
    safe_moves(head, board, you)
}

/// Selects the best move for the controlled snake on the given board.
///
/// With no safe candidate the configured fallback direction is returned;
/// the API wants a direction every turn, even a doomed one. Otherwise each
/// candidate is scored by lookahead and the argmax wins, ties going to the
/// earliest candidate in scan order.
pub fn choose_move(board: &Board, you: &Battlesnake, config: &EngineConfig) -> Direction {
    let moves = candidate_moves(board, you, config);
    if moves.is_empty() {
        return config.fallback_move;
    }

    // Root candidates are independent subtrees; evaluate them in parallel.
    // collect() preserves input order, keeping the tie-break deterministic.
    let values: Vec<f64> = moves
        .par_iter()
        .map(|dir| {
            lookahead_value(
                &dir.apply(&you.head),
                board,
                you,
                config,
                config.lookahead_depth,
            )
        })
        .collect();

    let mut best = moves[0];
    let mut best_value = values[0];
    for (dir, value) in moves.iter().zip(&values).skip(1) {
        // Strict comparison: the earlier candidate keeps ties
        if *value > best_value {
            best = *dir;
            best_value = *value;
        }
    }
    best
}

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration and no debug
    /// logging; this is the constructor tests use
    pub fn new(config: Config) -> Self {
        Bot {
            config,
            debug_logger: DebugLogger::disabled(),
        }
    }

    /// Creates a Bot that mirrors every decision into the debug logger
    pub fn with_debug_logger(config: Config, debug_logger: DebugLogger) -> Self {
        Bot {
            config,
            debug_logger,
        }
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        json!({
            "apiversion": "1",
            "author": "cognalog",
            "color": "#6b0c78",
            "head": "safe",
            "tail": "freckled",
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, _game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME START");
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, _game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME OVER");
    }

    /// Computes and returns the next move for the current turn.
    /// Corresponds to POST /move endpoint.
    ///
    /// The search itself is strictly bounded (at most 4^depth leaf
    /// evaluations), but the whole call still runs under the configured
    /// wall-clock budget and degrades to the fallback direction if it ever
    /// overruns.
    pub async fn get_move(
        &self,
        _game: &Game,
        turn: &i32,
        board: &Board,
        you: &Battlesnake,
    ) -> Value {
        let start_time = Instant::now();

        let board_copy = board.clone();
        let you_copy = you.clone();
        let engine = self.config.engine.clone();

        let budget = Duration::from_millis(self.config.timing.effective_budget_ms());
        let search =
            tokio::task::spawn_blocking(move || choose_move(&board_copy, &you_copy, &engine));

        let chosen_move = match tokio::time::timeout(budget, search).await {
            Ok(Ok(dir)) => dir,
            _ => {
                warn!(
                    "Turn {}: search did not finish within {}ms, using fallback",
                    turn,
                    budget.as_millis()
                );
                self.config.engine.fallback_move
            }
        };

        info!(
            "Turn {}: chose {} (depth: {}, time: {}ms)",
            turn,
            chosen_move.as_str(),
            self.config.engine.lookahead_depth,
            start_time.elapsed().as_millis()
        );

        self.debug_logger.log_move(*turn, you, chosen_move);

        json!({ "move": chosen_move.as_str() })
    }
}
