use super::*;

use klondike_common::{Move, State};

use anyhow::Result;
use rustc_hash::FxHashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutStop {
    Win,
    Revisited,
    Stuck,
    StepLimit,
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub stop: PlayoutStop,
    pub moves: Vec<Move>,
    /// Distinct states seen along the way.
    pub states: usize,
    /// Where the playout stopped.
    pub state: State,
}

/// Greedily plays the best-priority move until the game is won, a state
/// repeats, nothing is legal or `max_steps` moves have been played.
pub fn playout(state: &State, max_steps: usize) -> Result<PlayoutResult> {
    let mut seen = FxHashSet::default();
    let mut moves = Vec::new();
    let mut state = state.clone();

    let stop = loop {
        if state.is_win() {
            break PlayoutStop::Win;
        }
        if moves.len() >= max_steps {
            break PlayoutStop::StepLimit;
        }
        if !seen.insert(state.clone()) {
            break PlayoutStop::Revisited;
        }
        let Some(&mov) = prioritized_moves(&state).first() else {
            break PlayoutStop::Stuck;
        };
        state = state.apply(&mov)?;
        moves.push(mov);
    };

    debug!(?stop, moves = moves.len(), states = seen.len(), "Playout stopped");
    Ok(PlayoutResult {
        stop,
        moves,
        states: seen.len(),
        state,
    })
}
