//! Terminal Tetris runner (default binary).
//!
//! A single-threaded event loop: render a frame, wait for a key until the next gravity
//! tick is due, then feed the key and the elapsed time to the session, in that order.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, warn};

use classic_tetris::config::Config;
use classic_tetris::core::GameState;
use classic_tetris::engine::Session;
use classic_tetris::input::{map_key, HostAction};
use classic_tetris::logging;
use classic_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use classic_tetris::types::Phase;

/// Poll timeout while no game is running.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    for warning in &config.warnings {
        warn!("{warning}");
    }

    let state = match config.seed {
        Some(seed) => GameState::seeded(seed),
        None => GameState::new(),
    };
    let mut session = Session::new(state);
    session.select_level(config.level.get())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    session.stop();
    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut clock = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = session
            .time_until_tick_ms()
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(key) {
                    Some(HostAction::Quit) => return Ok(()),
                    Some(HostAction::Command(command)) => {
                        session.handle_command(command);
                    }
                    Some(HostAction::SelectLevel(n)) => {
                        if let Err(err) = session.select_level(n) {
                            debug!(code = err.code(), "level change refused");
                        }
                    }
                    Some(HostAction::Start) => {
                        if session.phase() != Phase::Playing {
                            session.start();
                        }
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Only whole milliseconds are consumed so fractions carry into the next frame.
        let elapsed_ms = clock.elapsed().as_millis().min(u32::MAX as u128) as u32;
        clock += Duration::from_millis(elapsed_ms as u64);
        session.advance(elapsed_ms);
    }
}
