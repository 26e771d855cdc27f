//! A terminal 2048 clone. The rules live in [`engine`] and know nothing about terminals; the
//! [`tui`] module and the [`slide48::Slide48`] game loop drive them from crossterm.

pub mod cli;
pub mod engine;
pub mod error;
pub mod slide48;
pub mod tui;
