use std::io::Write;

use crossterm::{
    cursor,
    event::{self, Event as CrossTermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Attribute, Color},
    terminal, ExecutableCommand, QueueableCommand,
};
use textwrap::wrap;

use super::colors::{Rgb, TilePalette, BOARD_BACKGROUND, SCORE_FOREGROUND};
use super::error::Result;
use super::events::{Event, EventSource, UserInput};
use super::layout::{Layout, Rectangle, TILE_HEIGHT};
use super::renderer::{Frame, Renderer};
use crate::engine::{Direction, Idx, State};

const HELP: &str = "arrows or hjkl to move, q to quit";

/// Renderer that draws straight to a crossterm-capable writer. Raw mode and the alternate screen
/// are held for as long as the value lives.
pub struct Crossterm<T: Write> {
    w: T,
    palette: TilePalette,
}

impl<T: Write> Crossterm<T> {
    pub fn new(mut w: T) -> Result<Self> {
        terminal::enable_raw_mode()?;
        w.execute(terminal::EnterAlternateScreen)?;
        w.execute(cursor::Hide)?;
        Ok(Self {
            w,
            palette: TilePalette::default(),
        })
    }
}

impl<T: Write> Drop for Crossterm<T> {
    fn drop(&mut self) {
        if let Err(e) = self
            .w
            .execute(cursor::Show)
            .and_then(|w| w.execute(terminal::LeaveAlternateScreen).map(|_| ()))
        {
            log::error!("leaving alternate screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("disabling raw mode: {e}");
        }
    }
}

impl<T: Write> Renderer for Crossterm<T> {
    fn size_hint(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        let (width, height) = self.size_hint()?;
        draw(
            &mut self.w,
            &self.palette,
            frame,
            (width as usize, height as usize),
        )
    }

    fn clear(&mut self) -> Result<()> {
        self.w.queue(style::ResetColor)?;
        self.w.queue(terminal::Clear(terminal::ClearType::All))?;
        self.w.flush()?;
        Ok(())
    }
}

/// Queue one complete screen onto `w` and flush it.
pub(crate) fn draw<W: Write>(
    w: &mut W,
    palette: &TilePalette,
    frame: &Frame<'_>,
    terminal: (usize, usize),
) -> Result<()> {
    w.queue(terminal::BeginSynchronizedUpdate)?;
    w.queue(style::ResetColor)?;
    w.queue(terminal::Clear(terminal::ClearType::All))?;

    match Layout::new(frame.grid.size(), terminal) {
        Ok(layout) => {
            draw_score(w, &layout, frame)?;
            draw_board(w, &layout)?;
            draw_tiles(w, palette, &layout, frame)?;
            draw_footer(w, &layout, frame)?;
        }
        Err(e) if e.is_terminal_too_small() => {
            log::debug!("{e}");
            let message = format!("{e}. Try resizing your terminal, or press q to quit.");
            draw_wrapped(w, &message, (0, 0), terminal.0.max(1), terminal.1)?;
        }
        Err(e) => return Err(e),
    }

    w.queue(style::ResetColor)?;
    w.queue(terminal::EndSynchronizedUpdate)?;
    w.flush()?;
    Ok(())
}

fn draw_score<W: Write>(w: &mut W, layout: &Layout, frame: &Frame<'_>) -> Result<()> {
    let (x, y) = layout.score_origin();
    w.queue(cursor::MoveTo(x as u16, y as u16))?;
    w.queue(style::SetForegroundColor(SCORE_FOREGROUND.into()))?;
    w.queue(style::SetAttribute(Attribute::Bold))?;
    w.queue(style::Print(format!("Score: {}", frame.score)))?;
    w.queue(style::SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn draw_board<W: Write>(w: &mut W, layout: &Layout) -> Result<()> {
    let board = layout.board();
    let inner = board.width().saturating_sub(2);
    w.queue(style::SetBackgroundColor(BOARD_BACKGROUND.into()))?;
    w.queue(style::SetForegroundColor(Color::Black))?;
    for row in 0..board.height() {
        let line = if row == 0 {
            format!("╔{}╗", "═".repeat(inner))
        } else if row + 1 == board.height() {
            format!("╚{}╝", "═".repeat(inner))
        } else {
            format!("║{}║", " ".repeat(inner))
        };
        w.queue(cursor::MoveTo(board.x() as u16, (board.y() + row) as u16))?;
        w.queue(style::Print(line))?;
    }
    Ok(())
}

fn draw_tiles<W: Write>(
    w: &mut W,
    palette: &TilePalette,
    layout: &Layout,
    frame: &Frame<'_>,
) -> Result<()> {
    let size = frame.grid.size();
    for y in 0..size {
        for x in 0..size {
            let card = frame.grid.get(Idx(x, y)).unwrap_or(0);
            let (bg, fg) = palette.colors(card);
            let label = if card == 0 {
                String::new()
            } else {
                card.to_string()
            };
            draw_tile(w, layout.tile(x, y), &label, bg, fg)?;
        }
    }
    Ok(())
}

fn draw_tile<W: Write>(w: &mut W, r: Rectangle, label: &str, bg: Rgb, fg: Rgb) -> Result<()> {
    w.queue(style::SetBackgroundColor(bg.into()))?;
    w.queue(style::SetForegroundColor(fg.into()))?;
    for row in 0..r.height() {
        let content = if row == TILE_HEIGHT / 2 {
            format!("{:^width$}", label, width = r.width())
        } else {
            " ".repeat(r.width())
        };
        w.queue(cursor::MoveTo(r.x() as u16, (r.y() + row) as u16))?;
        w.queue(style::Print(content))?;
    }
    Ok(())
}

fn draw_footer<W: Write>(w: &mut W, layout: &Layout, frame: &Frame<'_>) -> Result<()> {
    let footer = layout.footer();
    w.queue(style::ResetColor)?;
    let text = match frame.state {
        State::Playing => HELP.to_string(),
        State::GameOver => {
            w.queue(style::SetAttribute(Attribute::Bold))?;
            format!("GAME OVER! final score {}", frame.score)
        }
    };
    draw_wrapped(w, &text, (footer.x(), footer.y()), footer.width(), footer.height())?;
    w.queue(style::SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn draw_wrapped<W: Write>(
    w: &mut W,
    text: &str,
    origin: (usize, usize),
    width: usize,
    height: usize,
) -> Result<()> {
    for (row, line) in wrap(text, width).iter().take(height).enumerate() {
        w.queue(cursor::MoveTo(origin.0 as u16, (origin.1 + row) as u16))?;
        w.queue(style::Print(line))?;
    }
    Ok(())
}

/// Blocking event source backed by crossterm's global event queue.
#[derive(Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> Result<Event> {
        loop {
            match event::read()? {
                CrossTermEvent::Key(ke) => match handle_key_event(ke) {
                    Some(input) => return Ok(Event::UserInput(input)),
                    None => continue,
                },
                CrossTermEvent::Resize(_, _) => return Ok(Event::Resize),
                _ => continue,
            };
        }
    }
}

fn handle_key_event(ke: KeyEvent) -> Option<UserInput> {
    if ke.kind == KeyEventKind::Release {
        return None;
    }
    match ke.code {
        KeyCode::Left | KeyCode::Char('h') => Some(UserInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(UserInput::Direction(Direction::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(UserInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(UserInput::Direction(Direction::Down)),
        KeyCode::Char('c') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UserInput::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(UserInput::Quit),
        _ => None,
    }
}
