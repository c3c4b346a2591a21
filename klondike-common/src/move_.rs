use crate::card::Suit;
use crate::error::MoveError;
use crate::state::{PileId, TOTAL_TABLEAUS};

use std::fmt;
use std::str::FromStr;

/// One action, named the way move logs spell it:
///
/// - `DR<n>`: `n` unit draws from the stock.
/// - `NEW`: turn the waste over into a new stock.
/// - `F<p>`: flip marker for tableau `p`; turning cards is implicit, so this
///   changes nothing.
/// - `<src><dest>[-<n>]`: move `n` (default 1) cards. Piles are `1`-`7`
///   (tableaus), `C` `D` `S` `H` (foundations) and `W` (waste, source only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    Draw(usize),
    Recycle,
    Flip(usize),
    Transfer {
        from: PileId,
        to: PileId,
        count: usize,
    },
}

impl Move {
    /// A transfer of `count` cards, refused when either end is not a pile
    /// cards can travel between.
    pub fn new(from: PileId, to: PileId, count: usize) -> Result<Self, MoveError> {
        Self::check_transfer(from, to, count)?;
        Ok(Move::Transfer { from, to, count })
    }

    pub(crate) fn check_transfer(from: PileId, to: PileId, count: usize) -> Result<(), MoveError> {
        if from.is_source() && to.is_destination() && from != to && count > 0 {
            Ok(())
        } else {
            Err(MoveError::InvalidTransfer { from, to, count })
        }
    }

    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Draw(n) => write!(f, "DR{n}"),
            Move::Recycle => f.write_str("NEW"),
            Move::Flip(idx) => write!(f, "F{}", idx.saturating_add(1)),
            Move::Transfer { from, to, count } => {
                write_pile(f, from)?;
                write_pile(f, to)?;
                if count > 1 {
                    write!(f, "-{count}")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MoveError::Malformed(s.to_string());

        if s == "NEW" {
            return Ok(Move::Recycle);
        }
        if let Some(rest) = s.strip_prefix("DR") {
            let n = parse_count(rest).ok_or_else(malformed)?;
            return Ok(Move::Draw(n));
        }
        if let Some(rest) = s.strip_prefix('F') {
            let mut chars = rest.chars();
            return match (chars.next().and_then(tableau_index), chars.next()) {
                (Some(idx), None) => Ok(Move::Flip(idx)),
                _ => Err(malformed()),
            };
        }

        let (piles, count) = match s.split_once('-') {
            Some((piles, count)) => (piles, parse_count(count).ok_or_else(malformed)?),
            None => (s, 1),
        };
        let mut chars = piles.chars();
        let (Some(from), Some(to), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(malformed());
        };
        let from = match from {
            'W' => PileId::Waste,
            c => pile_from_code(c).ok_or_else(malformed)?,
        };
        let to = pile_from_code(to).ok_or_else(malformed)?;
        Move::new(from, to, count).map_err(|_| malformed())
    }
}

fn write_pile(f: &mut fmt::Formatter<'_>, pile: PileId) -> fmt::Result {
    match pile.code() {
        Some(code) => write!(f, "{code}"),
        None => write!(f, "[{pile}]"),
    }
}

/// A positive decimal count without sign or leading zeros.
fn parse_count(s: &str) -> Option<usize> {
    if s.is_empty() || s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn tableau_index(c: char) -> Option<usize> {
    let n = c.to_digit(10)? as usize;
    (1..=TOTAL_TABLEAUS).contains(&n).then(|| n - 1)
}

fn pile_from_code(c: char) -> Option<PileId> {
    if let Some(idx) = tableau_index(c) {
        return Some(PileId::Tableau(idx));
    }
    if c.is_ascii_uppercase() {
        return Suit::from_letter(c).map(PileId::Foundation);
    }
    None
}

/// Renders a move list ten to a line, in aligned columns.
pub fn format_moves(moves: &[Move]) -> String {
    let list: Vec<String> = moves.iter().map(Move::code).collect();
    let max_width = list.iter().map(|s| s.len()).max().unwrap_or_default() + 1;

    let mut output = String::new();
    for chunk in list.chunks(10) {
        for code in chunk {
            output.push_str(&format!("{code:<max_width$}"));
        }
        let trimmed = output.trim_end_matches(' ').len();
        output.truncate(trimmed);
        output.push('\n');
    }
    output
}
