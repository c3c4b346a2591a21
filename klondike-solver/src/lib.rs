//! Legal move generation, heuristic move ordering and a depth-first
//! backtracking solver for Klondike Solitaire (draw three).
//!
//! External strategies drive the engine through [`legal_moves`],
//! [`State::apply`](klondike_common::State::apply) and [`is_terminal`].
mod heuristic;
mod lock;
mod moves;
mod playout;
mod solver;
mod talon;

#[cfg(test)]
mod fixtures;

use crate::talon::*;

pub use crate::heuristic::{Priority, prioritized_moves, priority};
pub use crate::lock::has_locked_cards;
pub use crate::moves::{Moves, is_dead_end, is_terminal, legal_moves};
pub use crate::playout::{PlayoutResult, PlayoutStop, playout};
pub use crate::solver::{DEFAULT_MAX_STATES, Outcome, SolveResult, Solver, SolverConfig, solve};
pub use crate::talon::draw_depth;
