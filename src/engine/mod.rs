//! The 2048 rules: a square grid of power-of-two tiles, the shift/merge transition and the
//! per-turn session state machine. Nothing in here touches the terminal.

pub mod error;
pub mod grid;
pub mod line;
pub mod session;
pub mod shift;
pub mod spawner;
pub mod termination;

pub use error::{EngineError, Result};
pub use grid::{Card, Grid, Idx, Score};
pub use session::{Session, State, TurnOutcome};
pub use shift::{Direction, ShiftResult};
pub use spawner::{NewTile, TileSpawner};
