use super::*;

use klondike_common::{Move, State};

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

pub const DEFAULT_MAX_STATES: usize = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Distinct states the search may visit before giving up.
    pub max_states: usize,
    /// Keep searching after the first win for a shorter one.
    pub minimal: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_states: DEFAULT_MAX_STATES,
            minimal: false,
        }
    }
}

impl SolverConfig {
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win(Vec<Move>),
    /// Every branch was followed to a dead end or a revisited state.
    Exhausted,
    BudgetExceeded,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(moves) => write!(f, "win in {} moves", moves.len()),
            Outcome::Exhausted => f.write_str("exhausted"),
            Outcome::BudgetExceeded => f.write_str("budget exceeded"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolveResult {
    pub outcome: Outcome,
    /// The search finished within budget in minimal mode, so no shorter
    /// solution exists among the paths it can reach.
    pub minimal: bool,
    pub states: usize,
    pub elapsed: Duration,
}

impl SolveResult {
    pub fn is_win(&self) -> bool {
        matches!(self.outcome, Outcome::Win(_))
    }

    pub fn moves(&self) -> Option<&[Move]> {
        match &self.outcome {
            Outcome::Win(moves) => Some(moves),
            _ => None,
        }
    }
}

pub fn solve(state: &State, config: &SolverConfig) -> Result<SolveResult> {
    let mut solver = Solver::new(*config);
    solver.solve(state)
}

struct Frame {
    state: State,
    moves: Moves,
    next: usize,
    depth: usize,
}

impl Frame {
    fn new(state: State, depth: usize) -> Self {
        let moves = prioritized_moves(&state);
        Self {
            state,
            moves,
            next: 0,
            depth,
        }
    }

    fn next_move(&mut self) -> Option<Move> {
        let mov = self.moves.get(self.next).copied();
        self.next += 1;
        mov
    }
}

/// Depth-first backtracking search, best-priority move first.
///
/// Each solver owns its visited map, keyed by state and holding the depth at
/// which the state was first reached, so independent solvers never share
/// anything.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
    visited: FxHashMap<State, usize>,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            visited: FxHashMap::default(),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&mut self, initial: &State) -> Result<SolveResult> {
        initial
            .validate()
            .context("Invalid initial board state.")?;

        let SolverConfig {
            max_states,
            minimal,
        } = self.config;
        let timer = Instant::now();
        self.visited.clear();
        debug!(max_states, minimal, "Starting search");

        if initial.is_win() {
            return Ok(self.finish(Outcome::Win(Vec::new()), minimal, timer));
        }

        self.visited.insert(initial.clone(), 0);
        if self.visited.len() > max_states {
            debug!(max_states, "State budget exceeded");
            return Ok(self.finish(Outcome::BudgetExceeded, false, timer));
        }

        let mut stack = vec![Frame::new(initial.clone(), 0)];
        let mut path: Vec<Move> = Vec::new();
        let mut best: Option<Vec<Move>> = None;
        let mut exceeded = false;

        while let Some(frame) = stack.last_mut() {
            let Some(mov) = frame.next_move() else {
                stack.pop();
                path.pop();
                continue;
            };

            let depth = frame.depth + 1;
            if let Some(best) = &best
                && depth >= best.len()
            {
                continue;
            }

            let child = frame.state.apply(&mov)?;
            if child.is_win() {
                let mut solution = path.clone();
                solution.push(mov);
                if !minimal {
                    return Ok(self.finish(Outcome::Win(solution), false, timer));
                }
                trace!(moves = solution.len(), states = self.visited.len(), "Found solution");
                best = Some(solution);
                continue;
            }

            if let Some(&seen_at) = self.visited.get(&child)
                && (!minimal || seen_at <= depth)
            {
                continue;
            }
            if self.visited.insert(child.clone(), depth).is_none() && self.visited.len() > max_states
            {
                debug!(max_states, "State budget exceeded");
                exceeded = true;
                break;
            }

            path.push(mov);
            stack.push(Frame::new(child, depth));
        }

        let outcome = match best {
            Some(moves) => Outcome::Win(moves),
            None if exceeded => Outcome::BudgetExceeded,
            None => Outcome::Exhausted,
        };
        Ok(self.finish(outcome, minimal && !exceeded, timer))
    }

    fn finish(&self, outcome: Outcome, minimal: bool, timer: Instant) -> SolveResult {
        let result = SolveResult {
            minimal: minimal && matches!(outcome, Outcome::Win(_)),
            outcome,
            states: self.visited.len(),
            elapsed: timer.elapsed(),
        };
        info!(
            outcome = %result.outcome,
            states = result.states,
            elapsed = ?result.elapsed,
            "Search finished"
        );
        result
    }
}
