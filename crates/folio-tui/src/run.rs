// ABOUTME: Terminal lifecycle and the main event loop
// ABOUTME: Multiplexes key events and dispatch deliveries over channels

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::KeyEventKind;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use folio_core::session::Delivery;

use crate::app::{App, Control};
use crate::config::Config;
use crate::event::{EventStream, TuiEvent};
use crate::{theme, ui};

const TICK_RATE: Duration = Duration::from_millis(100);

type Term = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(config: &Config, ops_board: bool) -> Result<()> {
    let theme = theme::get_theme(&config.appearance.theme);
    let (delivery_tx, mut delivery_rx) = mpsc::unbounded_channel();
    let mut app = App::new(theme, config.demo.latency(), delivery_tx, ops_board);

    let mut terminal = setup_terminal()?;
    let mut events = EventStream::new(TICK_RATE);

    let result = event_loop(&mut terminal, &mut app, &mut events, &mut delivery_rx).await;

    restore_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Term,
    app: &mut App,
    events: &mut EventStream,
    delivery_rx: &mut mpsc::UnboundedReceiver<Delivery>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        tokio::select! {
            event = events.recv() => match event {
                Some(TuiEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) == Some(Control::Quit) {
                        break;
                    }
                }
                Some(TuiEvent::Key(_)) => {}
                Some(TuiEvent::Paste(text)) => app.handle_paste(&text),
                Some(TuiEvent::Resize(_, _)) => {}
                Some(TuiEvent::Tick) => app.tick(),
                None => break,
            },
            delivery = delivery_rx.recv() => {
                if let Some(delivery) = delivery {
                    app.handle_delivery(delivery);
                }
            }
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}
