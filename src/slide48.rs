use std::time::Duration;

use crate::engine::{Direction, Session};
use crate::error::Result;
use crate::tui::events::{Event, EventSource, UserInput};
use crate::tui::renderer::{Frame, Renderer};

/// How a call to `Slide48::run` ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Exit {
    Quit,
    GameOver,
}

/// Slide48 feeds player input from an `EventSource` into a `Session` and redraws through a
/// `Renderer` after every event.
pub struct Slide48<R: Renderer, E: EventSource> {
    renderer: R,
    event_source: E,
    session: Session,
    linger: Duration,
}

impl<R: Renderer, E: EventSource> Slide48<R, E> {
    pub fn new(session: Session, renderer: R, event_source: E) -> Self {
        Self {
            renderer,
            event_source,
            session,
            linger: Duration::ZERO,
        }
    }

    /// Keep the final board on screen this long before returning from a finished game.
    pub fn with_linger(mut self, linger: Duration) -> Self {
        self.linger = linger;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Play until the player quits or no moves remain.
    pub fn run(&mut self) -> Result<Exit> {
        self.render()?;
        if self.session.is_game_over() {
            return self.finish();
        }

        loop {
            match self.event_source.next_event()? {
                Event::UserInput(UserInput::Direction(d)) => {
                    if self.shift(d) {
                        self.render()?;
                    }
                    if self.session.is_game_over() {
                        return self.finish();
                    }
                }
                Event::UserInput(UserInput::Quit) => {
                    log::info!(
                        "quit with score {0} after {1} turns",
                        self.session.score(),
                        self.session.turns()
                    );
                    return Ok(Exit::Quit);
                }
                Event::Resize => {
                    self.renderer.clear()?;
                    self.render()?;
                }
            }
        }
    }
}

impl<R: Renderer, E: EventSource> Slide48<R, E> {
    fn shift(&mut self, direction: Direction) -> bool {
        let outcome = self.session.apply_direction(direction);
        if let Some(tile) = outcome.new_tile {
            log::trace!("{direction}: new tile {tile}");
        }
        outcome.changed
    }

    fn render(&mut self) -> Result<()> {
        let frame = Frame {
            grid: self.session.grid(),
            score: self.session.score(),
            state: self.session.state(),
        };
        self.renderer.render(&frame)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<Exit> {
        if !self.linger.is_zero() {
            std::thread::sleep(self.linger);
        }
        Ok(Exit::GameOver)
    }
}

#[cfg(test)]
mod test {
    use std::collections::VecDeque;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::engine::{Card, Grid, Score, State};
    use crate::tui::error::Result as TuiResult;

    /// Records a copy of every frame it is asked to draw.
    #[derive(Default)]
    struct Recorder {
        frames: Vec<(Grid, Score, State)>,
        clears: usize,
    }

    impl Renderer for Recorder {
        fn size_hint(&self) -> TuiResult<(u16, u16)> {
            Ok((80, 24))
        }

        fn render(&mut self, frame: &Frame<'_>) -> TuiResult<()> {
            self.frames
                .push((frame.grid.clone(), frame.score, frame.state));
            Ok(())
        }

        fn clear(&mut self) -> TuiResult<()> {
            self.clears += 1;
            Ok(())
        }
    }

    /// Replays a fixed list of events and then quits.
    struct Script(VecDeque<Event>);

    impl Script {
        fn new(events: &[Event]) -> Self {
            Self(events.iter().copied().collect())
        }
    }

    impl EventSource for Script {
        fn next_event(&mut self) -> TuiResult<Event> {
            Ok(self
                .0
                .pop_front()
                .unwrap_or(Event::UserInput(UserInput::Quit)))
        }
    }

    fn dir(d: Direction) -> Event {
        Event::UserInput(UserInput::Direction(d))
    }

    fn session(rows: Vec<Vec<Card>>) -> Session {
        Session::with_grid(Grid::from_rows(rows).unwrap(), SmallRng::seed_from_u64(42))
    }

    #[test]
    fn quit_immediately() {
        let mut game = Slide48::new(
            Session::new(4, SmallRng::seed_from_u64(1)).unwrap(),
            Recorder::default(),
            Script::new(&[Event::UserInput(UserInput::Quit)]),
        );
        assert_eq!(game.run().unwrap(), Exit::Quit);
        assert_eq!(game.renderer.frames.len(), 1);
    }

    #[test]
    fn noop_move_does_not_redraw() {
        let mut game = Slide48::new(
            session(vec![
                vec![2, 4, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ]),
            Recorder::default(),
            Script::new(&[dir(Direction::Left), dir(Direction::Right)]),
        );
        assert_eq!(game.run().unwrap(), Exit::Quit);
        assert_eq!(game.renderer.frames.len(), 2);
        assert_eq!(game.session().turns(), 1);
        let (last, _, state) = &game.renderer.frames[1];
        assert_eq!(&last.rows().next().unwrap()[2..], &[2, 4]);
        assert_eq!(*state, State::Playing);
    }

    #[test]
    fn score_reaches_renderer() {
        let mut game = Slide48::new(
            session(vec![
                vec![2, 2, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ]),
            Recorder::default(),
            Script::new(&[dir(Direction::Left)]),
        );
        game.run().unwrap();
        let scores: Vec<Score> = game.renderer.frames.iter().map(|f| f.1).collect();
        assert_eq!(scores, vec![0, 4]);
    }

    #[test]
    fn resize_clears_and_redraws() {
        let mut game = Slide48::new(
            Session::new(4, SmallRng::seed_from_u64(3)).unwrap(),
            Recorder::default(),
            Script::new(&[Event::Resize]),
        );
        game.run().unwrap();
        assert_eq!(game.renderer.clears, 1);
        assert_eq!(game.renderer.frames.len(), 2);
    }

    #[test]
    fn stops_at_game_over() {
        let mut game = Slide48::new(
            session(vec![
                vec![8, 8, 2, 16],
                vec![32, 64, 128, 256],
                vec![512, 1024, 2048, 4096],
                vec![8192, 16384, 32768, 65536],
            ]),
            Recorder::default(),
            // the trailing input must never be consumed
            Script::new(&[dir(Direction::Right), dir(Direction::Left)]),
        );
        assert_eq!(game.run().unwrap(), Exit::GameOver);
        let (_, score, state) = game.renderer.frames.last().unwrap();
        assert_eq!(*score, 16);
        assert_eq!(*state, State::GameOver);
        assert_eq!(game.event_source.0.len(), 1);
    }

    #[test]
    fn already_over_returns_without_input() {
        let mut game = Slide48::new(
            session(vec![vec![2, 4], vec![4, 2]]),
            Recorder::default(),
            Script::new(&[dir(Direction::Left)]),
        );
        assert_eq!(game.run().unwrap(), Exit::GameOver);
        assert_eq!(game.renderer.frames.len(), 1);
        assert_eq!(game.event_source.0.len(), 1);
    }
}
