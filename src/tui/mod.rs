pub mod colors;
pub mod crossterm;
pub mod error;
pub mod events;
pub mod layout;
pub mod renderer;
