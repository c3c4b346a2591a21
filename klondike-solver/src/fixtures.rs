//! Deals shared by the unit tests.
use klondike_common::{Card, MAX_CARD, Pile, State};

pub fn scenario() -> State {
    State::from_ui_json(
        r#"{
        "stock": ["KC", "9C", "QC", "8C", "3C", "7S", "7H", "TC", "4C", "7D", "KS", "AD",
                  "QS", "KH", "QD", "TH", "8S", "AH", "6H", "4H", "AS", "2D", "TD", "3H"],
        "tableau": [
            ["8H"],
            ["3d", "6C"],
            ["5s", "jd", "JS"],
            ["2h", "kd", "7c", "9S"],
            ["qh", "8d", "jc", "2c", "AC"],
            ["4s", "6s", "2s", "3s", "9d", "5C"],
            ["5h", "6d", "5d", "4d", "ts", "9h", "JH"]
        ]
    }"#,
    )
    .unwrap()
}

pub const SCENARIO_SOLUTION: &str = "5C F5 5C F5 DR3 W5 45 F4 41 F4 DR1 W4 74 F7 DR3 W7 WC DR1 \
    NEW DR2 W1 W6 WS DR3 W4 WC 74-2 F7 61-2 F6 67 F6 61 F6 6S F6 1S W4 64 F6 6S W6 WD 15-5 W1 \
    W6 36 F3 W7 WH WD DR1 W1 31 F3 3S 4S WS 71-3 F7 W1 43-7 F4 4H W6 WH 5H 5C 2C F2 2D 7D F7 7D \
    F7 7D F7 7H 5H 1H 3D 5C 1S 3C 5H 5S 3H 5H DR1 W2 WC 3C 5C F5 5D F5 1D 1S 6D 1D 3H 6S 1C 3S \
    5H 6D 1H 2C 3D 6S";

pub fn foundation_to_tableau() -> State {
    State::from_ui_json(
        r#"{
        "foundation": [["AC", "2C", "3C"], [], ["AS", "2S", "3S"], []],
        "waste": ["3H", "10D", "2D", "AH", "8S", "QD", "KH", "AD", "KS", "7D", "4C", "7H", "7S"],
        "stock": ["kc", "9c", "qc"],
        "tableau": [
            ["KD", "QS", "JH", "10C", "9H", "8C"],
            ["3d", "6C"],
            ["5s", "jd", "JS", "10H", "9S", "8H", "7C", "6H", "5C", "4H"],
            ["2H"],
            ["qh", "8d", "JC"],
            ["4s", "6S"],
            ["5h", "6d", "5d", "4d", "10S", "9D"]
        ]
    }"#,
    )
    .unwrap()
}

pub fn waste_to_foundation() -> State {
    State::from_ui_json(
        r#"{
        "foundation": [["AC", "2C"], [], [], []],
        "waste": ["3H", "10D", "2D", "AS", "4H", "6H", "AH", "8S", "QD", "KH", "AD", "KS",
                  "7D", "4C", "10C", "7H", "7S", "3C"],
        "stock": ["kc", "9c", "qc"],
        "tableau": [
            ["KD", "QS", "JH"],
            ["3d", "6C"],
            ["5s", "jd", "JS", "10H", "9S", "8H", "7C"],
            ["2H"],
            ["qh", "8d", "JC"],
            ["4s", "6s", "2s", "3s", "9d", "5C"],
            ["5h", "6d", "5d", "4d", "10s", "9H", "8C"]
        ]
    }"#,
    )
    .unwrap()
}

pub fn endgame_1() -> State {
    State::from_ui_json(
        r#"{
        "foundation": [
            ["AC", "2C", "3C", "4C", "5C", "6C", "7C", "8C", "9C", "10C"],
            ["AD", "2D", "3D", "4D", "5D", "6D", "7D"],
            ["AS", "2S", "3S", "4S", "5S", "6S", "7S", "8S", "9S"],
            ["AH", "2H", "3H", "4H", "5H", "6H", "7H", "8H", "9H", "10H", "JH"]
        ],
        "tableau": [
            ["KD", "QS"],
            ["KC"],
            [],
            ["KH", "QC", "JD", "10S", "9D"],
            ["qh", "8d", "JC", "10D"],
            ["KS", "QD", "JS"],
            []
        ]
    }"#,
    )
    .unwrap()
}

pub fn endgame_2() -> State {
    State::from_ui_json(
        r#"{
        "foundation": [
            ["AC", "2C", "3C", "4C", "5C", "6C", "7C", "8C", "9C", "10C", "JC"],
            ["AD", "2D", "3D", "4D", "5D", "6D", "7D", "8D", "9D", "10D", "JD"],
            ["AS", "2S", "3S", "4S", "5S", "6S", "7S", "8S", "9S", "10S", "JS"],
            ["AH", "2H", "3H", "4H", "5H", "6H", "7H", "8H", "9H", "10H", "JH"]
        ],
        "tableau": [["KD", "QS"], ["KH", "QC"], [], ["KC"], ["QH"], ["KS", "QD"], []]
    }"#,
    )
    .unwrap()
}

/// Seven black tops with everything else face-down, and no talon.
/// `in_stock` cards are kept out of the tableaus and placed in the stock.
pub fn blocked(in_stock: &[&str]) -> State {
    const TOPS: [&str; 7] = ["5C", "5S", "7C", "7S", "9C", "9S", "JC"];
    let mut state = State::default();
    let hidden = (0..MAX_CARD)
        .filter_map(Card::new_with_id)
        .filter(|c| !TOPS.contains(&c.token().as_str()));
    let mut stock = Vec::new();
    for (i, card) in hidden.enumerate() {
        if in_stock.contains(&card.token().as_str()) {
            stock.push(card.turned_down());
        } else {
            state.tableaus[i % TOPS.len()].push_card(card.turned_down());
        }
    }
    for (tableau, top) in state.tableaus.iter_mut().zip(TOPS) {
        tableau.push_card(top.parse().unwrap());
    }
    state.stock = stock.into_iter().collect::<Pile>();
    assert!(state.validate().is_ok());
    state
}

/// A deal with foundations filled to the given heights (C, D, S, H), no stock
/// and the given waste and tableaus as comma-separated tokens.
pub fn late_game(heights: [usize; 4], waste: &str, tableaus: [&str; 7]) -> State {
    let tokens = |list: &str| {
        list.split(',')
            .filter(|t| !t.is_empty())
            .map(|t| format!("\"{t}\""))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let foundations = heights
        .iter()
        .zip(['C', 'D', 'S', 'H'])
        .map(|(&height, suit)| {
            let list = "A23456789TJQK"
                .chars()
                .take(height)
                .map(|rank| format!("{rank}{suit}"))
                .collect::<Vec<_>>()
                .join(",");
            format!("[{}]", tokens(&list))
        })
        .collect::<Vec<_>>()
        .join(", ");
    let tableaus = tableaus
        .iter()
        .map(|t| format!("[{}]", tokens(t)))
        .collect::<Vec<_>>()
        .join(", ");
    let json = format!(
        r#"{{"foundation": [{foundations}], "waste": [{}], "tableau": [{tableaus}]}}"#,
        tokens(waste)
    );
    State::from_ui_json(&json).unwrap()
}

/// Bjarnason et al. (2007), figure 8a: the Queen of spades covers the two of
/// spades with both red Kings beneath it.
pub fn queen_over_red_kings() -> State {
    State::from_ui_json(
        r#"{
        "stock": ["4h", "8d", "7c", "jc", "qh", "ad", "tc", "ah", "9s", "2c", "7s", "4s",
                  "9c", "4c", "9h", "js", "2d", "as", "8h", "6s", "ts", "td", "3d", "jd"],
        "tableau": [
            ["3H"],
            ["ks", "6D"],
            ["7d", "3c", "5H"],
            ["5c", "qc", "4d", "TH"],
            ["3s", "6h", "kc", "ac", "QD"],
            ["8c", "jh", "2h", "8s", "9d", "6C"],
            ["kh", "5d", "7h", "kd", "5s", "2s", "QS"]
        ]
    }"#,
    )
    .unwrap()
}

/// The same deal with the Jack of diamonds moved from the stock onto the
/// Queen of spades.
pub fn queen_over_red_kings_with_jack() -> State {
    State::from_ui_json(
        r#"{
        "stock": ["4h", "8d", "7c", "jc", "qh", "ad", "tc", "ah", "9s", "2c", "7s", "4s",
                  "9c", "4c", "9h", "js", "2d", "as", "8h", "6s", "ts", "td", "3d"],
        "tableau": [
            ["3H"],
            ["ks", "6D"],
            ["7d", "3c", "5H"],
            ["5c", "qc", "4d", "TH"],
            ["3s", "6h", "kc", "ac", "QD"],
            ["8c", "jh", "2h", "8s", "9d", "6C"],
            ["kh", "5d", "7h", "kd", "5s", "2s", "QS", "JD"]
        ]
    }"#,
    )
    .unwrap()
}

/// Bjarnason et al. (2007), figure 8b before `75`, which leaves the red Tens
/// each covering the other's black Jack.
pub fn tens_over_jacks() -> State {
    State::from_ui_json(
        r#"{
        "stock": ["9c", "9h", "8c", "3h", "kd", "6d", "kh", "7c", "ad", "6s", "tc", "jh",
                  "4s", "4h", "5s", "2c", "ac", "6c", "3d", "2h", "qc", "5c", "ts"],
        "tableau": [
            ["KC"],
            ["2d", "3C"],
            ["8s", "2s", "5D", "4C"],
            ["8d", "7h", "qd", "JD"],
            ["7d", "4d", "8h", "QH", "JS"],
            ["ks", "as", "ah", "7s", "9s", "QS"],
            ["5h", "3s", "9d", "jc", "6h", "th", "TD"]
        ]
    }"#,
    )
    .unwrap()
}

/// Only draws are legal, but the talon frees the Ace of hearts later on.
pub fn draws_only() -> State {
    State::from_ui_json(
        r#"{
        "stock": ["qc", "5c", "as", "js", "ks", "9d", "5d", "3s", "6c", "8h", "6d", "9c",
                  "td", "kh", "7h", "jh", "qs", "8d", "3c", "qd", "4s"],
        "waste": ["AH", "7S", "5S"],
        "tableau": [
            ["3H", "2C"],
            ["9h", "JC"],
            ["7d", "4c", "4D"],
            ["2d", "ad", "TC"],
            ["kc", "6h", "2h", "ts", "KD"],
            ["ac", "5h", "3d", "9s", "7c", "2S"],
            ["4h", "8s", "jd", "qh", "th", "8c", "6S"]
        ]
    }"#,
    )
    .unwrap()
}
