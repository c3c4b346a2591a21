use klondike_common::{Card, DRAW_COUNT, State};

use rustc_hash::FxHashSet;

/// What a draw-three player sees of the waste: its top three cards, bottom
/// first.
type Window = [Option<Card>; DRAW_COUNT];

fn window(state: &State) -> Window {
    let top = state.waste.top_cards(DRAW_COUNT);
    std::array::from_fn(|i| top.get(i).copied())
}

/// How many `DR<n>` moves are worth offering from `state`.
///
/// Unit draws are simulated until the visible window repeats one already seen,
/// the current window included. Any deeper draw shows cards that a shallower
/// one already reaches.
pub fn draw_depth(state: &State) -> usize {
    let mut seen = FxHashSet::default();
    seen.insert(window(state));

    let mut depth = 0;
    let mut current = state.draw();
    while seen.insert(window(&current)) {
        depth += 1;
        current = current.draw();
    }
    depth
}

/// Every state reachable from `state` by unit draws alone, `state` first.
///
/// A recycle followed by draws lands on states of this cycle too, and the
/// freshly recycled state offers nothing beyond what `state` does.
pub fn talon_cycle(state: &State) -> Vec<State> {
    let mut seen = FxHashSet::default();
    let mut cycle = Vec::new();
    let mut current = state.clone();
    while seen.insert(current.clone()) {
        let next = current.draw();
        cycle.push(current);
        current = next;
    }
    cycle
}
