//! Deal descriptions as they arrive from outside.
//!
//! Two JSON shapes are accepted. The UI shape is what a game front-end reports:
//!
//! ```json
//! {"foundation": [[], [], [], []], "waste": [], "stock": ["kc", "9c"], "tableau": [["8H"], ...]}
//! ```
//!
//! The reference shape is the one written by other solvers:
//!
//! ```json
//! {"tableau piles": [["8H"], ...], "stock": ["KC", "9C"], "waste": [], "foundations": [...]}
//! ```
//!
//! In both, the last card of a list is the exposed one, foundations are listed
//! in C, D, S, H order, and a lower-case suit letter marks a face-down card.

use crate::card::Card;
use crate::error::DealError;
use crate::pile::Pile;
use crate::state::{State, TOTAL_FOUNDATIONS, TOTAL_TABLEAUS};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiDeal {
    #[serde(default = "empty_foundations")]
    pub foundation: Vec<Vec<String>>,
    #[serde(default)]
    pub waste: Vec<String>,
    #[serde(default)]
    pub stock: Vec<String>,
    pub tableau: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferenceDeal {
    #[serde(rename = "tableau piles")]
    pub tableau_piles: Vec<Vec<String>>,
    pub stock: Vec<String>,
    #[serde(default)]
    pub waste: Vec<String>,
    #[serde(default = "empty_foundations")]
    pub foundations: Vec<Vec<String>>,
}

fn empty_foundations() -> Vec<Vec<String>> {
    vec![Vec::new(); TOTAL_FOUNDATIONS]
}

/// Parses a list of tokens. `face_up` forces an orientation; `None` keeps the
/// one spelled by each token.
fn parse_pile(tokens: &[String], face_up: Option<bool>) -> Result<Pile, DealError> {
    let pile = tokens
        .iter()
        .map(|token| -> Result<Card, DealError> {
            let card: Card = token.parse()?;
            Ok(face_up.map_or(card, |up| card.with_face_up(up)))
        })
        .collect::<Result<Pile, DealError>>()?;
    Ok(pile)
}

fn parse_piles<const N: usize>(
    kind: &'static str,
    piles: &[Vec<String>],
    face_up: Option<bool>,
) -> Result<[Pile; N], DealError> {
    if piles.len() != N {
        return Err(DealError::PileCount {
            kind,
            expected: N,
            found: piles.len(),
        });
    }
    let mut parsed: [Pile; N] = std::array::from_fn(|_| Pile::new());
    for (slot, tokens) in parsed.iter_mut().zip(piles) {
        *slot = parse_pile(tokens, face_up)?;
    }
    Ok(parsed)
}

fn assemble(
    stock: &[String],
    waste: &[String],
    tableaus: &[Vec<String>],
    foundations: &[Vec<String>],
) -> Result<State, DealError> {
    let state = State {
        stock: parse_pile(stock, Some(false))?,
        waste: parse_pile(waste, Some(true))?,
        tableaus: parse_piles::<TOTAL_TABLEAUS>("tableau", tableaus, None)?,
        foundations: parse_piles::<TOTAL_FOUNDATIONS>("foundation", foundations, Some(true))?,
    };
    state.validate()?;
    Ok(state)
}

impl TryFrom<&UiDeal> for State {
    type Error = DealError;

    fn try_from(deal: &UiDeal) -> Result<Self, Self::Error> {
        assemble(&deal.stock, &deal.waste, &deal.tableau, &deal.foundation)
    }
}

impl TryFrom<&ReferenceDeal> for State {
    type Error = DealError;

    fn try_from(deal: &ReferenceDeal) -> Result<Self, Self::Error> {
        assemble(
            &deal.stock,
            &deal.waste,
            &deal.tableau_piles,
            &deal.foundations,
        )
    }
}

impl From<&State> for UiDeal {
    fn from(state: &State) -> Self {
        let tokens = |pile: &Pile| pile.iter().map(Card::token).collect::<Vec<_>>();
        UiDeal {
            foundation: state.foundations.iter().map(tokens).collect(),
            waste: tokens(&state.waste),
            stock: tokens(&state.stock),
            tableau: state.tableaus.iter().map(tokens).collect(),
        }
    }
}

impl State {
    /// Loads and validates a deal in the UI shape.
    pub fn from_ui_json(json: &str) -> Result<State, DealError> {
        let deal: UiDeal = serde_json::from_str(json)?;
        State::try_from(&deal)
    }

    /// Loads and validates a deal in the reference shape.
    pub fn from_reference_json(json: &str) -> Result<State, DealError> {
        let deal: ReferenceDeal = serde_json::from_str(json)?;
        State::try_from(&deal)
    }

    pub fn to_ui_deal(&self) -> UiDeal {
        UiDeal::from(self)
    }
}
