//! Terminal Tetris runner (default binary).
//!
//! The game runs on a [`Driver`] task; a blocking thread reads crossterm
//! events and this task redraws whenever the snapshot changes or the
//! terminal is resized.

use anyhow::Result;
use crossterm::{event, terminal};
use log::{info, warn};
use tokio::sync::mpsc;

use tetris_engine::input::{translate_event, InputEvent};
use tetris_engine::runtime::{init_logging, Driver, RuntimeConfig};
use tetris_engine::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = RuntimeConfig::from_env()?;
    if init_logging(&config)? {
        info!("starting with {:?}", config);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config).await;

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

async fn run(term: &mut TerminalRenderer, config: &RuntimeConfig) -> Result<()> {
    let driver = Driver::new(config.game_state());
    let mut snapshots = driver.subscribe();
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let game = tokio::spawn(driver.run(action_rx));

    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    spawn_input_thread(input_tx);

    let view = GameView;
    let (w, h) = terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let mut snap = *snapshots.borrow_and_update();

    loop {
        view.render_into(&snap, viewport, &mut fb);
        term.present(&fb)?;

        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                snap = *snapshots.borrow_and_update();
            }
            input = input_rx.recv() => match input {
                Some(InputEvent::Action(action)) => {
                    if action_tx.send(action).is_err() {
                        break;
                    }
                }
                Some(InputEvent::Resize { width, height }) => {
                    viewport = Viewport::new(width, height);
                    term.invalidate();
                }
                Some(InputEvent::Quit) | None => break,
            },
        }
    }

    drop(action_tx);
    let last = game.await?;
    info!("session over: score {} level {}", last.score, last.level);
    Ok(())
}

/// crossterm's `event::read` blocks, so it gets its own thread.
fn spawn_input_thread(tx: mpsc::UnboundedSender<InputEvent>) {
    std::thread::spawn(move || loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                warn!("input error: {err}");
                let _ = tx.send(InputEvent::Quit);
                break;
            }
        };
        if let Some(input) = translate_event(&event) {
            let quit = input == InputEvent::Quit;
            if tx.send(input).is_err() || quit {
                break;
            }
        }
    });
}
