use crate::error::CardError;

use std::fmt;
use std::str::FromStr;

pub const MAX_RANK: u8 = 13;
pub const MAX_SUIT: u8 = 4;
pub const MAX_CARD: u8 = MAX_SUIT * MAX_RANK;

pub const ACE: u8 = 1;
pub const QUEEN: u8 = 12;
pub const KING: u8 = 13;

const RANKS: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Diamonds,
    Spades,
    Hearts,
}

impl Suit {
    /// Foundation order: C, D, S, H.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            _ => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// A playing card together with its orientation.
///
/// Orientation is part of the identity: a face-down card is not playable and
/// never compares equal to its face-up counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    rank: u8,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Creates a face-up card. `rank` runs from 1 (Ace) to 13 (King).
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!((ACE..=KING).contains(&rank));
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// Card ids run suit-major: `suit * 13 + (rank - 1)`.
    pub fn new_with_id(id: u8) -> Option<Self> {
        if id >= MAX_CARD {
            return None;
        }
        let suit = Suit::from_index((id / MAX_RANK) as usize)?;
        Some(Self::new(id % MAX_RANK + 1, suit))
    }

    pub fn id(&self) -> u8 {
        self.suit as u8 * MAX_RANK + self.rank - 1
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn is_king(&self) -> bool {
        self.rank == KING
    }

    pub fn with_face_up(self, face_up: bool) -> Self {
        Self { face_up, ..self }
    }

    pub fn turned_up(self) -> Self {
        self.with_face_up(true)
    }

    pub fn turned_down(self) -> Self {
        self.with_face_up(false)
    }

    /// Same rank and suit, regardless of orientation.
    pub fn same_face(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }

    /// Whether this card may be placed on `below` in a tableau.
    pub fn stacks_on(&self, below: &Card) -> bool {
        self.color() != below.color() && self.rank + 1 == below.rank
    }

    pub fn token(&self) -> String {
        let token = format!("{}{}", RANKS[(self.rank - 1) as usize], self.suit.letter());
        if self.face_up {
            token
        } else {
            token.to_ascii_lowercase()
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses `<rank><suit>`. A lower-case suit letter marks a face-down card,
    /// and a literal `10` rank is read as `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidToken(s.to_string());
        let token = s.trim();
        let (rank, suit) = match token.strip_prefix("10") {
            Some(rest) => ('T', rest),
            None => {
                let mut chars = token.chars();
                let rank = chars.next().ok_or_else(invalid)?;
                (rank.to_ascii_uppercase(), chars.as_str())
            }
        };
        let mut suit_chars = suit.chars();
        let (Some(suit), None) = (suit_chars.next(), suit_chars.next()) else {
            return Err(invalid());
        };
        let rank = RANKS
            .iter()
            .position(|&r| r == rank)
            .ok_or_else(invalid)? as u8
            + 1;
        let face_up = suit.is_ascii_uppercase();
        let suit = Suit::from_letter(suit).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit).with_face_up(face_up))
    }
}

/// Length of the face-up run at the top of `cards`: 0 for an empty pile, the
/// full length when nothing is face-down.
pub fn count_face_up(cards: &[Card]) -> usize {
    cards.iter().rev().take_while(|c| c.is_face_up()).count()
}
