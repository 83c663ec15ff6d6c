// ABOUTME: TUI event types and event stream.
// ABOUTME: Wraps crossterm events plus a tick for animations.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
}

/// Polls crossterm on a blocking task and forwards events over a channel.
/// Emits a `Tick` whenever the poll window elapses with no input.
pub struct EventStream {
    rx: mpsc::UnboundedReceiver<TuiEvent>,
}

impl EventStream {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::task::spawn_blocking(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    let tui_event = match evt {
                        Event::Key(key) => Some(TuiEvent::Key(key)),
                        Event::Paste(text) => Some(TuiEvent::Paste(text)),
                        Event::Resize(w, h) => Some(TuiEvent::Resize(w, h)),
                        _ => None,
                    };

                    if let Some(e) = tui_event {
                        if tx.send(e).is_err() {
                            break;
                        }
                    }
                }
            } else {
                // Tick for animations
                if tx.send(TuiEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    pub async fn recv(&mut self) -> Option<TuiEvent> {
        self.rx.recv().await
    }
}
