//! Cards, piles and the immutable deal model for Klondike Solitaire (draw
//! three), with the textual move notation and the pure move executor.
mod card;
mod deal;
mod error;
mod move_;
mod pile;
mod state;

pub use crate::card::{ACE, Card, Color, KING, MAX_CARD, MAX_RANK, QUEEN, Suit, count_face_up};
pub use crate::deal::{ReferenceDeal, UiDeal};
pub use crate::error::{CardError, DealError, MoveError};
pub use crate::move_::{Move, format_moves};
pub use crate::pile::{Pile, TALON_SIZE};
pub use crate::state::{DRAW_COUNT, PileId, State, TOTAL_FOUNDATIONS, TOTAL_TABLEAUS};
