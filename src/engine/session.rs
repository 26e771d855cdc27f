use rand::RngCore;

use super::error::Result;
use super::grid::{Card, Grid, Score};
use super::shift::{shift, Direction};
use super::spawner::{NewTile, TileSpawner};
use super::termination::is_terminal;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum State {
    #[default]
    Playing,
    GameOver,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::GameOver => write!(f, "game over"),
        }
    }
}

/// What a single direction input did to the session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TurnOutcome {
    pub changed: bool,
    pub score: Score,
    pub state: State,
    pub new_tile: Option<NewTile>,
}

/// Session owns the authoritative grid and score of one game and applies player input to them.
pub struct Session {
    rng: Box<dyn RngCore>,
    spawner: TileSpawner,
    grid: Grid,
    score: Score,
    state: State,
    turns: usize,
}

impl Session {
    /// Start a game on an empty `size`x`size` grid seeded with two tiles.
    pub fn new(size: usize, rng: impl RngCore + 'static) -> Result<Self> {
        let mut rng: Box<dyn RngCore> = Box::new(rng);
        let spawner = TileSpawner::default();
        let grid = Grid::new(size)?;
        let (grid, _) = spawner.spawn(grid, &mut *rng);
        let (grid, _) = spawner.spawn(grid, &mut *rng);
        log::debug!("new {size}x{size} session\n{grid}");
        Ok(Self::assemble(rng, spawner, grid))
    }

    /// Resume play from an existing grid. The grid has already been validated by
    /// `Grid::from_rows`, so this can't fail; a grid with no legal moves starts out as game over.
    pub fn with_grid(grid: Grid, rng: impl RngCore + 'static) -> Self {
        Self::assemble(Box::new(rng), TileSpawner::default(), grid)
    }

    fn assemble(rng: Box<dyn RngCore>, spawner: TileSpawner, grid: Grid) -> Self {
        let state = if is_terminal(&grid) {
            State::GameOver
        } else {
            State::Playing
        };
        Self {
            rng,
            spawner,
            grid,
            score: 0,
            state,
            turns: 0,
        }
    }

    /// Shift the grid in the given direction. A shift that moves nothing is ignored entirely:
    /// no tile is spawned and neither score nor state change.
    pub fn apply_direction(&mut self, direction: Direction) -> TurnOutcome {
        if self.state == State::GameOver {
            return self.outcome(false, None);
        }

        let result = shift(&self.grid, direction);
        if !result.changed {
            log::debug!("ignoring {direction}: nothing moved");
            return self.outcome(false, None);
        }

        self.score += result.score;
        let (grid, new_tile) = self.spawner.spawn(result.grid, &mut *self.rng);
        self.grid = grid;
        self.turns += 1;
        log::debug!(
            "turn {0}: {direction} earned {1}, score {2}\n{3}",
            self.turns,
            result.score,
            self.score,
            self.grid
        );

        if is_terminal(&self.grid) {
            self.state = State::GameOver;
            log::info!(
                "game over after {0} turns with score {1}, max tile {2}",
                self.turns,
                self.score,
                self.max_tile()
            );
        }

        self.outcome(true, new_tile)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == State::GameOver
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Number of accepted turns so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn max_tile(&self) -> Card {
        self.grid.max_tile()
    }

    fn outcome(&self, changed: bool, new_tile: Option<NewTile>) -> TurnOutcome {
        TurnOutcome {
            changed,
            score: self.score,
            state: self.state,
            new_tile,
        }
    }
}
