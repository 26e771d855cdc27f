use rand::distributions::Distribution;
use rand::distributions::WeightedIndex;
use rand::seq::IteratorRandom;
use rand::Rng;

use super::grid::{Card, Grid, Idx};

const NEW_CARD_CHOICES: [Card; 2] = [2, 4];
const NEW_CARD_WEIGHTS: [u8; 2] = [9, 1];

/// A tile placed by the spawner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NewTile {
    pub idx: Idx,
    pub value: Card,
}

impl std::fmt::Display for NewTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0} at {1}", self.value, self.idx)
    }
}

/// TileSpawner drops a 2 (nine times in ten) or a 4 into a uniformly chosen empty slot.
#[derive(Clone, Debug)]
pub struct TileSpawner {
    new_tile_weighted_index: WeightedIndex<u8>,
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self {
            new_tile_weighted_index: WeightedIndex::new(NEW_CARD_WEIGHTS)
                .expect("NEW_CARD_WEIGHTS should never be empty"),
        }
    }
}

impl TileSpawner {
    /// Return the grid with one new tile in it. A full grid comes back untouched.
    pub fn spawn<R: Rng + ?Sized>(&self, mut grid: Grid, rng: &mut R) -> (Grid, Option<NewTile>) {
        if grid.is_full() {
            log::trace!("no room to spawn a tile");
            return (grid, None);
        }
        let chosen = grid.empty_cells().choose(rng);
        let idx = match chosen {
            Some(idx) => idx,
            None => return (grid, None),
        };
        let value = NEW_CARD_CHOICES[self.new_tile_weighted_index.sample(rng)];
        grid.set(idx, value);
        log::trace!("spawned {value} at {idx}");
        (grid, Some(NewTile { idx, value }))
    }
}
