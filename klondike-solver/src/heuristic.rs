//! Move ordering after Yan et al., "Solitaire: Man Versus Machine" (2005).
//!
//! Priorities only order siblings during a search; they never filter moves.
use super::*;

use klondike_common::{Card, Move, PileId, QUEEN, State};

use std::cmp::Reverse;

/// Ordering key of a move. Higher sorts first; `reward` dominates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority {
    pub reward: i32,
    pub tie_break: i32,
}

impl Priority {
    pub const fn new(reward: i32, tie_break: i32) -> Self {
        Self { reward, tie_break }
    }
}

pub fn priority(mov: &Move, state: &State) -> Priority {
    match *mov {
        Move::Transfer {
            from: PileId::Tableau(_),
            to: PileId::Foundation(_),
            ..
        } => Priority::new(5, 0),
        Move::Transfer {
            from: PileId::Waste,
            to: PileId::Tableau(_),
            ..
        } => Priority::new(5, waste_to_tableau_tie_break(state)),
        Move::Transfer {
            from: PileId::Foundation(_),
            to: PileId::Tableau(_),
            ..
        } => Priority::new(-10, 0),
        Move::Transfer {
            from: PileId::Tableau(from),
            to: PileId::Tableau(_),
            count,
        } => {
            let tableau = &state.tableaus[from];
            let face_up = tableau.face_up_count();
            let face_down = tableau.face_down_count();
            let tie_break = if count == face_up && face_down > 0 {
                face_down as i32 + 1
            } else if count == tableau.len() {
                1
            } else {
                0
            };
            Priority::new(0, tie_break)
        }
        Move::Draw(n) if n != 1 => Priority::new(0, -1),
        _ => Priority::new(0, 0),
    }
}

/// A King leaving the waste is only worth it while its Queen can still follow.
fn waste_to_tableau_tie_break(state: &State) -> i32 {
    let Some(card) = state.waste.peek_top() else {
        return 1;
    };
    if !card.is_king() {
        return 1;
    }
    let queen = Card::new(QUEEN, card.suit());
    let in_talon = state
        .stock
        .iter()
        .chain(state.waste.iter())
        .any(|c| c.same_face(&queen));
    let mut tableau_cards = state.tableaus.iter().flatten();
    if in_talon || tableau_cards.clone().any(|c| *c == queen) {
        1
    } else if tableau_cards.any(|c| *c == queen.turned_down()) {
        -1
    } else {
        0
    }
}

/// Legal moves of `state`, best first. Equal priorities fall back to the
/// move identifier, descending, so the order is total.
pub fn prioritized_moves(state: &State) -> Moves {
    let mut moves = legal_moves(state);
    moves.sort_by_cached_key(|mov| Reverse((priority(mov, state), mov.code())));
    moves
}
