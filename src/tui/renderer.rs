use super::error::Result;
use crate::engine::{Grid, Score, State};

/// Everything a renderer needs to draw one screen of the game.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub score: Score,
    pub state: State,
}

pub trait Renderer {
    fn size_hint(&self) -> Result<(u16, u16)>;
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}
