use super::error::Result;
use crate::engine::Direction;

pub trait EventSource {
    fn next_event(&mut self) -> Result<Event>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    UserInput(UserInput),
    Resize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UserInput {
    Direction(Direction),
    Quit,
}
