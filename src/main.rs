//! Terminal runner (default binary).
//!
//! Fixed-timestep loop: draw, wait for input until the next tick, advance gravity.
//!
//! Environment:
//! - `BLOCKFALL_CONFIG`: path to a JSON file with `GameConfig` fields
//! - `BLOCKFALL_SEED`, `BLOCKFALL_BASE_FALL_MS`, `BLOCKFALL_MIN_FALL_MS`: overrides
//! - `BLOCKFALL_LOG_PATH`: write logs there (filter from `RUST_LOG`, default `info`)

use std::env;
use std::fs::{self, File};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameConfig, GameSession};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    init_logging()?;
    let config = load_config()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file because stdout belongs to the game; without a path logging stays off.
fn init_logging() -> Result<()> {
    let Ok(path) = env::var("BLOCKFALL_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("create log file {path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_config() -> Result<GameConfig> {
    let base = match env::var("BLOCKFALL_CONFIG") {
        Ok(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("read config file {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parse config file {path}"))?
        }
        Err(_) => GameConfig::default(),
    };
    let config = base.with_env_overrides();
    log::info!("config: {:?}", config);
    Ok(config)
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut session = GameSession::new(config);
    session.start();

    let view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        log::info!("quit (score {})", session.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
            if let Some(event) = session.take_last_event() {
                log::debug!("{:?}", event);
            }
        }
    }
}
