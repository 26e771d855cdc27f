use super::grid::{merged, Grid, Idx};

/// A grid is terminal once it is full and no two horizontally or vertically adjacent slots can
/// merge. Only right and lower neighbours are compared since the merge rule is symmetric.
pub fn is_terminal(grid: &Grid) -> bool {
    let size = grid.size();
    for y in 0..size {
        for x in 0..size {
            let card = grid.get(Idx(x, y)).unwrap_or(0);
            if card == 0 {
                return false;
            }
            let mergeable = |idx| grid.get(idx).and_then(|other| merged(card, other)).is_some();
            if x + 1 < size && mergeable(Idx(x + 1, y)) {
                return false;
            }
            if y + 1 < size && mergeable(Idx(x, y + 1)) {
                return false;
            }
        }
    }
    true
}
