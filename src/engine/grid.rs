use super::error::{EngineError, Result};

pub type Card = u32;

pub type Score = u64;

/// Smallest supported board edge.
pub const MIN_SIZE: usize = 2;

pub const DEFAULT_SIZE: usize = 4;

/// Largest card a grid may hold. Two of these never merge, so every card stays within `Card`.
pub const MAX_CARD: Card = 1 << 30;

/// Column (x) and row (y) of a slot on the grid.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Idx(pub usize, pub usize);

impl std::fmt::Display for Idx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "idx({0},{1})", self.0, self.1)
    }
}

impl Idx {
    pub fn x(&self) -> usize {
        self.0
    }

    pub fn y(&self) -> usize {
        self.1
    }
}

/// Grid is a square matrix of cards where 0 marks an empty slot and every other value is a power
/// of two between 2 and `MAX_CARD`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Grid {
    slots: Vec<Vec<Card>>,
}

impl Grid {
    /// An all-empty grid with `size` rows and columns.
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(EngineError::invalid(format!(
                "size {size} is smaller than the minimum of {MIN_SIZE}"
            )));
        }
        Ok(Self {
            slots: vec![vec![0; size]; size],
        })
    }

    /// Build a grid from row-major values, rejecting anything that is not square, is smaller
    /// than 2x2 or holds a card that is not a power of two up to `MAX_CARD`.
    pub fn from_rows(rows: Vec<Vec<Card>>) -> Result<Self> {
        let size = rows.len();
        if size < MIN_SIZE {
            return Err(EngineError::invalid(format!(
                "{size} rows is smaller than the minimum of {MIN_SIZE}"
            )));
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(EngineError::invalid(format!(
                    "row {y} has {0} columns, expected {size}",
                    row.len()
                )));
            }
            for (x, card) in row.iter().enumerate() {
                if !is_valid_card(*card) {
                    return Err(EngineError::invalid(format!(
                        "card {card} at {0} is not a power of two between 2 and {MAX_CARD}",
                        Idx(x, y)
                    )));
                }
            }
        }
        Ok(Self { slots: rows })
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Return the card at the given index, or None if the index is off the grid.
    pub fn get(&self, idx: Idx) -> Option<Card> {
        self.slots.get(idx.y())?.get(idx.x()).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Card]> {
        self.slots.iter().map(Vec::as_slice)
    }

    /// Indices of every empty slot in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Idx> + '_ {
        self.slots.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, card)| **card == 0)
                .map(move |(x, _)| Idx(x, y))
        })
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    pub fn max_tile(&self) -> Card {
        self.slots
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Every row reversed; applying it twice yields the original grid.
    pub fn mirrored(&self) -> Self {
        Self {
            slots: self
                .slots
                .iter()
                .map(|row| row.iter().rev().copied().collect())
                .collect(),
        }
    }

    /// Rows become columns; applying it twice yields the original grid.
    pub fn transposed(&self) -> Self {
        let size = self.size();
        Self {
            slots: (0..size)
                .map(|x| self.slots.iter().map(|row| row[x]).collect())
                .collect(),
        }
    }

    pub(crate) fn from_reduced_rows(slots: Vec<Vec<Card>>) -> Self {
        Self { slots }
    }

    /// Place a card in a slot. Only the spawner writes through this and it only ever picks
    /// indices that came out of `empty_cells`.
    pub(crate) fn set(&mut self, idx: Idx, card: Card) {
        if let Some(slot) = self
            .slots
            .get_mut(idx.y())
            .and_then(|row| row.get_mut(idx.x()))
        {
            *slot = card;
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.slots {
            let cells = row
                .iter()
                .map(|card| format!("{card:>5}"))
                .collect::<Vec<_>>()
                .join("");
            writeln!(f, "{cells}")?;
        }
        Ok(())
    }
}

#[inline]
fn is_valid_card(card: Card) -> bool {
    card == 0 || (card >= 2 && card <= MAX_CARD && card.is_power_of_two())
}

/// The card two equal neighbours merge into, or None if they can't merge.
#[inline]
pub(crate) fn merged(a: Card, b: Card) -> Option<Card> {
    if a == 0 || a != b {
        return None;
    }
    a.checked_mul(2).filter(|card| *card <= MAX_CARD)
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    fn grid(rows: [[Card; 4]; 4]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).expect("valid test grid")
    }

    #[rstest]
    #[case::two(2)]
    #[case::four(4)]
    #[case::eight(8)]
    fn new_is_empty(#[case] size: usize) {
        let g = Grid::new(size).unwrap();
        assert_eq!(g.size(), size);
        assert_eq!(g.empty_cells().count(), size * size);
        assert_eq!(g.max_tile(), 0);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::one(1)]
    fn new_too_small(#[case] size: usize) {
        assert!(matches!(
            Grid::new(size),
            Err(EngineError::InvalidGridState { .. })
        ));
    }

    #[rstest]
    #[case::not_square(vec![vec![0, 0], vec![0, 0, 0]])]
    #[case::too_few_rows(vec![vec![2]])]
    #[case::one_is_not_a_tile(vec![vec![1, 0], vec![0, 0]])]
    #[case::not_a_power_of_two(vec![vec![2, 6], vec![0, 0]])]
    #[case::tall(vec![vec![0, 0], vec![0, 0], vec![0, 0]])]
    #[case::above_max_card(vec![vec![1 << 31, 1 << 31], vec![0, 0]])]
    fn from_rows_rejects(#[case] rows: Vec<Vec<Card>>) {
        let err = Grid::from_rows(rows).unwrap_err();
        assert!(err.to_string().starts_with("invalid grid state"));
    }

    #[test]
    fn from_rows_reports_offending_card() {
        let err = Grid::from_rows(vec![vec![2, 4], vec![12, 0]]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidGridState {
                reason: "card 12 at idx(0,1) is not a power of two between 2 and 1073741824"
                    .to_string()
            }
        );
    }

    #[test]
    fn from_rows_accepts_max_card() {
        let g = Grid::from_rows(vec![vec![MAX_CARD, 0], vec![0, 2]]).unwrap();
        assert_eq!(g.max_tile(), MAX_CARD);
    }

    #[rstest]
    #[case::pair(4, 4, Some(8))]
    #[case::unequal(4, 8, None)]
    #[case::empty(0, 0, None)]
    #[case::largest_pair(MAX_CARD / 2, MAX_CARD / 2, Some(MAX_CARD))]
    #[case::max_pair(MAX_CARD, MAX_CARD, None)]
    fn merge_rule(#[case] a: Card, #[case] b: Card, #[case] expected: Option<Card>) {
        assert_eq!(merged(a, b), expected);
    }

    #[test]
    fn get_is_column_then_row() {
        let g = grid([[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 8]]);
        assert_eq!(g.get(Idx(1, 0)), Some(4));
        assert_eq!(g.get(Idx(3, 3)), Some(8));
        assert_eq!(g.get(Idx(4, 0)), None);
        assert_eq!(g.max_tile(), 8);
    }

    #[test]
    fn empty_cells_row_major() {
        let g = Grid::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
        assert_eq!(g.empty_cells().collect::<Vec<_>>(), vec![Idx(1, 0), Idx(0, 1)]);
        assert!(!g.is_full());
    }

    #[test]
    fn mirrored_reverses_rows() {
        let g = grid([[2, 4, 8, 16], [0, 2, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0]]);
        let expected = grid([[16, 8, 4, 2], [0, 0, 2, 0], [0, 0, 0, 0], [0, 0, 0, 4]]);
        assert_eq!(g.mirrored(), expected);
        assert_eq!(g.mirrored().mirrored(), g);
    }

    #[test]
    fn transposed_swaps_axes() {
        let g = grid([[2, 4, 8, 16], [0, 2, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0]]);
        let expected = grid([[2, 0, 0, 4], [4, 2, 0, 0], [8, 0, 0, 0], [16, 0, 0, 0]]);
        assert_eq!(g.transposed(), expected);
        assert_eq!(g.transposed().transposed(), g);
    }
}
