use crate::card::{Card, MAX_CARD, MAX_RANK, Suit};
use crate::error::{DealError, MoveError};
use crate::move_::Move;
use crate::pile::Pile;

use std::fmt;

pub const TOTAL_FOUNDATIONS: usize = 4;
pub const TOTAL_TABLEAUS: usize = 7;
/// Cards turned over by one unit draw.
pub const DRAW_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PileId {
    Stock,
    Waste,
    Tableau(usize),
    Foundation(Suit),
}

impl PileId {
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Waste]
            .into_iter()
            .chain((0..TOTAL_TABLEAUS).map(PileId::Tableau))
            .chain(Suit::ALL.into_iter().map(PileId::Foundation))
    }

    /// The pile's letter in move identifiers. The stock has none, and neither
    /// has a tableau off the board.
    pub fn code(&self) -> Option<char> {
        match *self {
            PileId::Stock => None,
            PileId::Waste => Some('W'),
            PileId::Tableau(idx) if idx < TOTAL_TABLEAUS => {
                char::from_digit(idx as u32 + 1, 10)
            }
            PileId::Tableau(_) => None,
            PileId::Foundation(suit) => Some(suit.letter()),
        }
    }

    /// Cards may leave this pile in a transfer.
    pub fn is_source(&self) -> bool {
        self.code().is_some()
    }

    /// Cards may arrive on this pile in a transfer.
    pub fn is_destination(&self) -> bool {
        self.is_source() && *self != PileId::Waste
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => f.write_str("Stock"),
            PileId::Waste => f.write_str("Waste"),
            PileId::Tableau(idx) => write!(f, "Tableau {}", idx.saturating_add(1)),
            PileId::Foundation(suit) => write!(f, "Foundation {suit}"),
        }
    }
}

/// A full deal: stock, waste, seven tableaus and the four foundations in
/// C, D, S, H order.
///
/// States are values. Every move produces a new state, and equality and
/// hashing look only at the cards, so states can be used directly as keys of a
/// visited set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct State {
    pub stock: Pile,
    pub waste: Pile,
    pub tableaus: [Pile; TOTAL_TABLEAUS],
    pub foundations: [Pile; TOTAL_FOUNDATIONS],
}

impl State {
    /// Deals the greenfelt.net game with the given id.
    pub fn from_seed(seed: u32) -> Self {
        let mut current_seed = seed;
        let mut rnd = || {
            current_seed = ((current_seed as u64 * 16807) % 0x7fffffff) as u32;
            current_seed
        };
        let mut deck: Vec<Card> = (0..26)
            .chain(39..52)
            .chain(26..39)
            .filter_map(Card::new_with_id)
            .collect();
        let deck_size = deck.len();

        for _ in 0..7 {
            for j in 0..deck_size {
                let k = (rnd() % deck_size as u32) as usize;
                deck.swap(j, k);
            }
        }

        deck.rotate_left(24);

        let mut orig: i32 = 27;
        for i in 0..7_i32 {
            let mut pos = (i + 1) * (i + 2) / 2 - 1;
            for j in (0..=(6 - i)).rev() {
                if j >= i {
                    deck.swap(pos as usize, orig as usize);
                }
                orig -= 1;
                pos += 6 - j + 1;
            }
        }

        let mut state = State::default();
        let mut cards = deck.into_iter();
        for (i, tableau) in state.tableaus.iter_mut().enumerate() {
            *tableau = cards.by_ref().take(i + 1).map(Card::turned_down).collect();
            tableau.flip_top();
        }
        state.stock = cards.map(Card::turned_down).collect();
        state
    }

    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Stock => &self.stock,
            PileId::Waste => &self.waste,
            PileId::Tableau(idx) => &self.tableaus[idx],
            PileId::Foundation(suit) => &self.foundations[suit.index()],
        }
    }

    pub fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Stock => &mut self.stock,
            PileId::Waste => &mut self.waste,
            PileId::Tableau(idx) => &mut self.tableaus[idx],
            PileId::Foundation(suit) => &mut self.foundations[suit.index()],
        }
    }

    pub fn foundation(&self, suit: Suit) -> &Pile {
        &self.foundations[suit.index()]
    }

    /// Whether `card` is the next card for its foundation.
    pub fn can_move_to_foundation(&self, card: &Card) -> bool {
        self.foundation(card.suit()).len() + 1 == card.rank() as usize
    }

    /// Parses and applies a move identifier.
    pub fn play(&self, code: &str) -> Result<State, MoveError> {
        let mov: Move = code.parse()?;
        self.apply(&mov)
    }

    /// Returns the state after `mov`.
    ///
    /// The move is trusted to be legal; only moves that cannot be carried out
    /// at all are refused. Whenever a tableau loses cards its new top card is
    /// turned face-up.
    pub fn apply(&self, mov: &Move) -> Result<State, MoveError> {
        let mut next = self.clone();
        match *mov {
            Move::Draw(times) => {
                for _ in 0..times {
                    next.draw_in_place();
                }
            }
            Move::Recycle => next.recycle_in_place(),
            Move::Flip(_) => {}
            Move::Transfer { from, to, count } => {
                Move::check_transfer(from, to, count)?;
                if next.pile(from).len() < count {
                    return Err(MoveError::NotEnoughCards { pile: from, count });
                }
                let mut source = std::mem::take(next.pile_mut(from));
                source.move_n_cards_to(next.pile_mut(to), count);
                if let PileId::Tableau(_) = from {
                    source.flip_top();
                }
                *next.pile_mut(from) = source;
            }
        }
        Ok(next)
    }

    /// One unit draw. An empty stock is first refilled from the waste.
    pub fn draw(&self) -> State {
        let mut next = self.clone();
        next.draw_in_place();
        next
    }

    fn draw_in_place(&mut self) {
        if self.stock.is_empty() {
            if self.waste.is_empty() {
                return;
            }
            self.recycle_in_place();
        }
        let count = DRAW_COUNT.min(self.stock.len());
        self.stock
            .move_n_cards_reversed_to(&mut self.waste, count, true);
    }

    fn recycle_in_place(&mut self) {
        let count = self.waste.len();
        self.waste
            .move_n_cards_reversed_to(&mut self.stock, count, false);
    }

    /// Every card sits on its foundation, in order.
    pub fn is_win(&self) -> bool {
        self.stock.is_empty()
            && self.waste.is_empty()
            && self.tableaus.iter().all(|t| t.is_empty())
            && self
                .foundations
                .iter()
                .zip(Suit::ALL)
                .all(|(pile, suit)| {
                    pile.len() == MAX_RANK as usize
                        && pile
                            .iter()
                            .enumerate()
                            .all(|(i, c)| c.same_face(&Card::new(i as u8 + 1, suit)))
                })
    }

    /// Nothing is hidden any more: the stock is empty and no tableau holds a
    /// face-down card. Such a deal always plays out.
    pub fn all_cards_face_up(&self) -> bool {
        self.stock.is_empty()
            && self
                .tableaus
                .iter()
                .all(|t| t.iter().all(|c| c.is_face_up()))
    }

    /// Checks the structural invariants of a deal.
    pub fn validate(&self) -> Result<(), DealError> {
        let mut seen = [false; MAX_CARD as usize];
        for id in PileId::all() {
            for card in self.pile(id) {
                let slot = &mut seen[card.id() as usize];
                if *slot {
                    return Err(DealError::Duplicate(card.turned_up()));
                }
                *slot = true;
            }
        }
        if let Some(missing) = (0..MAX_CARD)
            .filter(|&id| !seen[id as usize])
            .find_map(Card::new_with_id)
        {
            return Err(DealError::Missing(missing));
        }

        if self.stock.iter().any(|c| c.is_face_up()) {
            return Err(DealError::Orientation {
                pile: PileId::Stock,
            });
        }
        if self.waste.iter().any(|c| !c.is_face_up()) {
            return Err(DealError::Orientation {
                pile: PileId::Waste,
            });
        }

        for (pile, suit) in self.foundations.iter().zip(Suit::ALL) {
            for (i, card) in pile.iter().enumerate() {
                if !card.is_face_up() {
                    return Err(DealError::Orientation {
                        pile: PileId::Foundation(suit),
                    });
                }
                if card.suit() != suit || card.rank() as usize != i + 1 {
                    return Err(DealError::Foundation(suit));
                }
            }
        }

        for (i, tableau) in self.tableaus.iter().enumerate() {
            let face_up = tableau.face_up_count();
            let face_down = tableau.len() - face_up;
            if tableau[..face_down].iter().any(|c| c.is_face_up()) {
                return Err(DealError::TableauOrientation(i + 1));
            }
            if face_up == 0 && !tableau.is_empty() {
                return Err(DealError::TableauTopFaceDown(i + 1));
            }
            if tableau[face_down..]
                .windows(2)
                .any(|pair| !pair[1].stacks_on(&pair[0]))
            {
                return Err(DealError::TableauRun(i + 1));
            }
        }

        Ok(())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = |f: &mut fmt::Formatter<'_>, label: &str, pile: &Pile| -> fmt::Result {
            f.write_str(label)?;
            f.write_str(":")?;
            for card in pile {
                write!(f, " {card}")?;
            }
            Ok(())
        };

        line(f, "Stock", &self.stock)?;
        f.write_str("\n")?;
        line(f, "Waste", &self.waste)?;
        for (pile, suit) in self.foundations.iter().zip(Suit::ALL) {
            f.write_str("\n")?;
            line(f, &format!("Fnd {suit}"), pile)?;
        }
        for (i, pile) in self.tableaus.iter().enumerate() {
            f.write_str("\n")?;
            line(f, &format!("Tab {}", i + 1), pile)?;
        }
        Ok(())
    }
}
