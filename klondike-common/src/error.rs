use crate::card::{Card, Suit};
use crate::state::PileId;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Invalid card token `{0}`")]
    InvalidToken(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Malformed move `{0}`")]
    Malformed(String),
    #[error("Cannot take {count} card(s) from {pile}")]
    NotEnoughCards { pile: PileId, count: usize },
    #[error("Cannot move {count} card(s) from {from} to {to}")]
    InvalidTransfer {
        from: PileId,
        to: PileId,
        count: usize,
    },
}

/// Structural problems with a deal, reported before any search starts.
#[derive(Debug, Error)]
pub enum DealError {
    #[error("Failed to read deal")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Card(#[from] CardError),
    #[error("Expected {expected} {kind} piles, found {found}")]
    PileCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Card {0} appears more than once")]
    Duplicate(Card),
    #[error("Card {0} is missing")]
    Missing(Card),
    #[error("{pile} holds a card with the wrong orientation")]
    Orientation { pile: PileId },
    #[error("Foundation {0} is not built up from Ace in suit")]
    Foundation(Suit),
    #[error("Tableau {0} has a face-down card above a face-up card")]
    TableauOrientation(usize),
    #[error("Tableau {0} has a face-down top card")]
    TableauTopFaceDown(usize),
    #[error("Tableau {0} face-up cards do not form a descending alternating run")]
    TableauRun(usize),
}
