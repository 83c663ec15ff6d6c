// ABOUTME: Bottom status bar rendering
// ABOUTME: Shows user, agent, pending state, notices, keybinds

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use folio_core::router::AppView;

use crate::app::{AgentTab, App};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let mut spans: Vec<Span> = vec![];

    // User
    match &app.state.user {
        Some(user) => spans.push(Span::styled(
            format!(" {} ", user.name),
            Style::default().bold(),
        )),
        None => spans.push(Span::styled(
            " Not signed in ",
            Style::default().fg(theme.text_muted),
        )),
    }

    // Agent + pending state
    if let Some(session) = &app.session {
        let agent = session.agent();
        spans.push(Span::styled(
            format!("│ {} {} ", agent.glyph, agent.name),
            Style::default().fg(theme.agent_message),
        ));
        if session.is_pending() {
            spans.push(Span::styled(
                format!("│ {} Processing your request... ", app.throbber_char()),
                Style::default().fg(theme.pending),
            ));
        }
    }

    // Notice or Ctrl+C hint
    if let Some(notice) = &app.notice {
        spans.push(Span::styled(
            format!("│ {} ", notice.text),
            Style::default().fg(theme.warning),
        ));
    } else if app.show_ctrl_c_hint() {
        spans.push(Span::styled(
            "│ Press Ctrl+C again to quit ",
            Style::default().fg(theme.warning),
        ));
    }

    // Keybinds
    let hints = match app.state.view {
        AppView::Login => "│ Tab: field │ Enter: sign in │ Ctrl+Q: quit ",
        AppView::Gallery => {
            "│ type to search │ ↑↓: select │ ←→: category │ Enter: connect │ Ctrl+N: custom │ Ctrl+L: logout "
        }
        AppView::Agent => match app.tab {
            AgentTab::Chat => "│ Enter: send │ Alt+1/2: quick action │ Ctrl+T: settings │ Esc: gallery ",
            AgentTab::Settings => "│ Ctrl+T: chat │ Esc: gallery │ Ctrl+L: logout ",
        },
    };
    spans.push(Span::styled(hints, Style::default().fg(theme.text_muted)));

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));
    f.render_widget(para, area);
}
