use super::*;

use klondike_common::{Card, Move, Pile, PileId, State, Suit};

use smallvec::SmallVec;

pub type Moves = SmallVec<[Move; 32]>;

/// Whether `card` may be laid on `tableau`: a King on an empty pile, otherwise
/// one rank lower and the opposite color.
#[inline]
fn fits_tableau(card: &Card, tableau: &Pile) -> bool {
    match tableau.peek_top() {
        None => card.is_king(),
        Some(top) => card.stacks_on(&top),
    }
}

/// Offers `card`, heading a run of `count`, to every tableau it fits on.
/// A run that is a whole pile already stands on the table, so empty piles
/// are skipped for it.
fn push_to_tableaus(
    state: &State,
    from: PileId,
    card: &Card,
    count: usize,
    whole_pile: bool,
    moves: &mut Moves,
) {
    for (idx, tableau) in state.tableaus.iter().enumerate() {
        let to = PileId::Tableau(idx);
        if from == to || (whole_pile && tableau.is_empty()) {
            continue;
        }
        if fits_tableau(card, tableau) {
            moves.push(Move::Transfer { from, to, count });
        }
    }
}

/// Every legal move that is not a draw or a recycle.
pub fn compute_card_moves(state: &State, moves: &mut Moves) {
    for (idx, tableau) in state.tableaus.iter().enumerate() {
        let Some(top) = tableau.peek_top() else {
            continue;
        };
        let from = PileId::Tableau(idx);
        if state.can_move_to_foundation(&top) {
            moves.push(Move::Transfer {
                from,
                to: PileId::Foundation(top.suit()),
                count: 1,
            });
        }
        for count in 1..=tableau.face_up_count() {
            let card = tableau[tableau.len() - count];
            push_to_tableaus(state, from, &card, count, count == tableau.len(), moves);
        }
    }

    if let Some(top) = state.waste.peek_top() {
        if state.can_move_to_foundation(&top) {
            moves.push(Move::Transfer {
                from: PileId::Waste,
                to: PileId::Foundation(top.suit()),
                count: 1,
            });
        }
        push_to_tableaus(state, PileId::Waste, &top, 1, false, moves);
    }

    for suit in Suit::ALL {
        if let Some(top) = state.foundation(suit).peek_top() {
            push_to_tableaus(state, PileId::Foundation(suit), &top, 1, false, moves);
        }
    }
}

fn compute_talon_moves(state: &State, moves: &mut Moves) {
    moves.extend((1..=draw_depth(state)).map(Move::Draw));
    if state.stock.is_empty() && !state.waste.is_empty() {
        moves.push(Move::Recycle);
    }
}

/// The set of legal moves in `state`, each listed once.
pub fn legal_moves(state: &State) -> Moves {
    let mut moves = Moves::new();
    compute_card_moves(state, &mut moves);
    compute_talon_moves(state, &mut moves);
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// A state that is not won and can never be: some tableau card is locked in
/// place, or drawing and recycling never expose a move that changes anything
/// but the talon.
pub fn is_dead_end(state: &State) -> bool {
    if state.is_win() {
        return false;
    }
    if has_locked_cards(state) {
        return true;
    }
    let mut moves = Moves::new();
    talon_cycle(state).iter().all(|s| {
        moves.clear();
        compute_card_moves(s, &mut moves);
        moves.is_empty()
    })
}

pub fn is_terminal(state: &State) -> bool {
    state.is_win() || is_dead_end(state)
}
