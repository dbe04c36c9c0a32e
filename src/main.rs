//! Terminal runner (default binary).
//!
//! Polls crossterm for key events within a fixed frame budget, feeds at most
//! one intent per frame into the session, and redraws from its snapshot.
//! Logs go to `blockfall.log`; the terminal itself belongs to the game.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, error, info};

use blockfall::config::FileConfig;
use blockfall::core::{GameSnapshot, RoundEvent, Session, SimpleRng};
use blockfall::input::{should_quit, HeldKeys};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Intent, SessionPhase, FRAME_MS};

const LOG_FILE: &str = "blockfall.log";

fn main() -> Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("logging disabled: {:#}", e);
    }
    info!("starting blockfall");

    let path = FileConfig::path();
    let config = FileConfig::load(&path).unwrap_or_else(|e| {
        error!("{:#}; using defaults", e);
        FileConfig::default()
    });

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("exiting with error: {:#}", e);
    }
    result
}

fn init_logging() -> Result<()> {
    let file = File::create(LOG_FILE).with_context(|| format!("creating {}", LOG_FILE))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &FileConfig) -> Result<()> {
    let seed = config.seed();
    info!("seed {}", seed);

    let mut session = Session::new(config.round_config(), SimpleRng::new(seed));
    let view = GameView::default();
    let mut keys = HeldKeys::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        let frame_start = Instant::now();
        let mut confirmed = false;

        // Drain input until the frame budget is spent.
        while let Some(timeout) = frame.checked_sub(frame_start.elapsed()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if keys.on_key(key, Instant::now()) == Some(Intent::Confirm) {
                        confirmed = true;
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let intent = if confirmed {
            Some(Intent::Confirm)
        } else {
            keys.current(now)
        };

        let was_playing = session.phase() == SessionPhase::Playing;
        for event in session.update(now, intent) {
            match event {
                RoundEvent::GameOver => info!("game over"),
                other => debug!("{:?}", other),
            }
        }
        if was_playing && session.phase() != SessionPhase::Playing {
            // Keys held at game over must not steer the next round.
            keys.clear();
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
    }
}
