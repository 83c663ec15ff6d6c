// ABOUTME: UI rendering module for folio
// ABOUTME: Dispatches rendering to per-screen modules

mod board;
mod chat;
mod gallery;
mod input;
mod login;
mod request;
mod settings;
mod status;

use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::Frame;

use folio_core::router::AppView;

use crate::app::{AgentTab, App};

/// Create a centered rect using percentages of the parent rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        f.area(),
    );

    if app.board.is_some() {
        board::render(f, app);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Screen body
        Constraint::Length(1), // Status bar
    ])
    .split(f.area());

    match app.state.view {
        AppView::Login => login::render(f, chunks[0], app),
        AppView::Gallery => gallery::render(f, chunks[0], app),
        AppView::Agent => match app.tab {
            AgentTab::Chat => {
                let inner =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(4)]).split(chunks[0]);
                chat::render(f, inner[0], app);
                input::render(f, inner[1], app);
            }
            AgentTab::Settings => settings::render(f, chunks[0], app),
        },
    }

    status::render(f, chunks[1], app);

    // The custom-agent dialog is an overlay on top of the gallery
    if app.request_dialog.is_some() {
        request::render(f, app);
    }
}
