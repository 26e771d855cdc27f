use std::io::stdout;

use anyhow::{Context, Result};
use clap::Parser;

use slide48::cli::Cli;
use slide48::slide48::{Exit, Slide48};
use slide48::tui::crossterm::{Crossterm, CrosstermEvents};

fn main() -> Result<()> {
    let cli = Cli::parse();

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(cli.verbose.log_level_filter())
        .chain(
            fern::log_file(&cli.log_file)
                .with_context(|| format!("opening log file {}", cli.log_file.display()))?,
        )
        .apply()?;

    let session = cli.session().context("starting a new game")?;

    // the renderer restores the terminal when it drops, so it must be gone before printing
    let (exit, score) = {
        let renderer = Crossterm::new(stdout().lock())?;
        let mut game = Slide48::new(session, renderer, CrosstermEvents).with_linger(cli.linger());
        let exit = game.run()?;
        (exit, game.session().score())
    };

    match exit {
        Exit::GameOver => println!("game over! final score: {score}"),
        Exit::Quit => println!("final score: {score}"),
    }

    Ok(())
}
