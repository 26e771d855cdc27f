use super::grid::{Grid, Score};
use super::line::reduce;

/// Direction represents the direction indicated by the player.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Direction {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{}", s)
    }
}

/// The outcome of shifting a grid; the caller decides what to do with it.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftResult {
    pub grid: Grid,
    pub score: Score,
    pub changed: bool,
}

/// Shift every line of the grid in the given direction. Right, up and down are all expressed as a
/// leftward shift of a mirrored and/or transposed grid, so there is only one reducer.
pub fn shift(grid: &Grid, direction: Direction) -> ShiftResult {
    let (shifted, score) = oriented(grid, direction);
    let changed = shifted != *grid;
    log::trace!("shift {direction}: changed={changed} score={score}");
    ShiftResult {
        grid: shifted,
        score,
        changed,
    }
}

/// Whether shifting in the given direction would move or merge anything.
#[cfg(test)]
pub(crate) fn can_shift(grid: &Grid, direction: Direction) -> bool {
    oriented(grid, direction).0 != *grid
}

fn oriented(grid: &Grid, direction: Direction) -> (Grid, Score) {
    match direction {
        Direction::Left => shift_left(grid),
        Direction::Right => {
            let (g, score) = shift_left(&grid.mirrored());
            (g.mirrored(), score)
        }
        Direction::Up => {
            let (g, score) = shift_left(&grid.transposed());
            (g.transposed(), score)
        }
        Direction::Down => {
            let (g, score) = oriented(&grid.transposed(), Direction::Right);
            (g.transposed(), score)
        }
    }
}

fn shift_left(grid: &Grid) -> (Grid, Score) {
    let mut score = 0;
    let rows = grid
        .rows()
        .map(|row| {
            let (line, delta) = reduce(row);
            score += delta;
            line
        })
        .collect();
    (Grid::from_reduced_rows(rows), score)
}
