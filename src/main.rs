//! Terminal match-3 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from the term
//! crate. Records are loaded from the profile store at startup and written
//! back whenever they change.

mod config;

use std::fs::{self, File};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use tui_match3::core::{GameEvent, GameSnapshot, GameState};
use tui_match3::input::{handle_key_event, should_quit};
use tui_match3::store::{JsonFileStore, Profile};
use tui_match3::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_match3::types::{GameAction, TICK_MS};

use crate::config::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let mut profile = Profile::new(JsonFileStore::open(&config.data_path));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut profile);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file; the terminal itself belongs to the renderer.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    config: &AppConfig,
    profile: &mut Profile<JsonFileStore>,
) -> Result<()> {
    let mut game = GameState::new(config.game);
    game.restore(profile.load());
    let mut saved = game.records();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if action == GameAction::ClearRecords {
                            if let Err(error) = profile.clear() {
                                tracing::warn!(%error, "failed to clear profile");
                            }
                        }
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }

        // One bell per frame however many notices landed in it.
        let events = game.take_events();
        let noticed = events.iter().any(|e| matches!(e, GameEvent::Notice(_)));
        if noticed && game.settings().sound {
            term.bell()?;
        }

        let records = game.records();
        if records != saved {
            match profile.save(&records) {
                Ok(()) => saved = records,
                Err(error) => tracing::warn!(%error, "failed to save profile"),
            }
        }
    }
}
