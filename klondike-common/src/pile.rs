use crate::card::{Card, count_face_up};

use smallvec::SmallVec;
use std::ops::Deref;

/// Largest pile that can occur: the whole talon.
pub const TALON_SIZE: usize = 24;

/// An ordered run of cards; the last card is the exposed one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pile {
    cards: SmallVec<[Card; TALON_SIZE]>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[inline]
    pub fn peek_top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[inline]
    pub fn face_up_count(&self) -> usize {
        count_face_up(&self.cards)
    }

    #[inline]
    pub fn face_down_count(&self) -> usize {
        self.cards.len() - self.face_up_count()
    }

    /// Moves the top `count` cards onto `to`, keeping their order. Every
    /// destination of a card move holds face-up cards.
    #[inline]
    pub fn move_n_cards_to(&mut self, to: &mut Pile, count: usize) {
        let from_idx = self.cards.len() - count;
        to.cards
            .extend(self.cards.drain(from_idx..).map(Card::turned_up));
    }

    /// Moves the top `count` cards onto `to` one at a time, which reverses
    /// them, turning each to `face_up`.
    #[inline]
    pub fn move_n_cards_reversed_to(&mut self, to: &mut Pile, count: usize, face_up: bool) {
        let from_idx = self.cards.len() - count;
        to.cards.extend(
            self.cards
                .drain(from_idx..)
                .rev()
                .map(|c| c.with_face_up(face_up)),
        );
    }

    /// Turns the exposed card face-up after the pile was shortened.
    #[inline]
    pub fn flip_top(&mut self) {
        if let Some(top) = self.cards.last_mut() {
            *top = top.turned_up();
        }
    }

    pub fn set_face_up(&mut self, face_up: bool) {
        for card in self.cards.iter_mut() {
            *card = card.with_face_up(face_up);
        }
    }

    /// The top `count` cards, bottom first.
    pub fn top_cards(&self, count: usize) -> &[Card] {
        &self.cards[self.cards.len().saturating_sub(count)..]
    }
}

impl Deref for Pile {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
