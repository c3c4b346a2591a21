//! Static detection of tableau cards that can never be moved again.
use klondike_common::{Card, MAX_CARD, State, Suit};

use smallvec::SmallVec;

/// A tableau position: pile index and depth from the bottom card.
type Slot = (usize, usize);

fn locate(state: &State) -> [Option<Slot>; MAX_CARD as usize] {
    let mut slots = [None; MAX_CARD as usize];
    for (pile, tableau) in state.tableaus.iter().enumerate() {
        for (depth, card) in tableau.iter().enumerate() {
            slots[card.id() as usize] = Some((pile, depth));
        }
    }
    slots
}

/// Whether some tableau card is locked in place for the rest of the game.
///
/// A card is locked when it cannot reach its foundation, because a lower card
/// of its own suit lies beneath it, and every card it could be laid on lies
/// beneath a locked card. Kings are never locked, any emptied pile takes them.
///
/// Locks can be mutual, so the search starts from every card blocked from its
/// foundation and drops those with a target that is not buried under the
/// remaining set, until the set is stable. Runs carried off by a card beneath
/// them are not taken into account.
pub fn has_locked_cards(state: &State) -> bool {
    let slots = locate(state);

    let mut locked: SmallVec<[Slot; 16]> = SmallVec::new();
    for (pile, tableau) in state.tableaus.iter().enumerate() {
        for (depth, card) in tableau.iter().enumerate() {
            let blocked = tableau[..depth]
                .iter()
                .any(|below| below.suit() == card.suit() && below.rank() < card.rank());
            if blocked && !card.is_king() {
                locked.push((pile, depth));
            }
        }
    }

    loop {
        let candidates = locked.clone();
        let buried = |target: &Card| match slots[target.id() as usize] {
            Some((pile, depth)) => candidates
                .iter()
                .any(|&(lock_pile, lock_depth)| lock_pile == pile && depth < lock_depth),
            None => false,
        };
        locked.retain(|slot| {
            let (pile, depth) = *slot;
            let card = state.tableaus[pile][depth];
            Suit::ALL
                .into_iter()
                .filter(|suit| suit.color() != card.color())
                .all(|suit| buried(&Card::new(card.rank() + 1, suit)))
        });
        if locked.len() == candidates.len() {
            return !locked.is_empty();
        }
    }
}
