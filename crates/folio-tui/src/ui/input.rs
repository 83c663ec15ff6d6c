// ABOUTME: Chat input area rendering
// ABOUTME: Textarea with top/bottom borders, dimmed while pending

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let pending = app
        .session
        .as_ref()
        .map(|s| s.is_pending())
        .unwrap_or(false);

    let title = match &app.session {
        Some(s) if pending => format!(" {} is working… ", s.agent().name),
        Some(s) => format!(" Ask {} anything ", s.agent().name),
        None => String::new(),
    };

    let border_style = if pending {
        Style::default().fg(theme.text_muted)
    } else {
        Style::default().fg(theme.primary)
    };

    // Quick actions: the agent's first two use cases, one keystroke away
    let quick = app
        .session
        .as_ref()
        .map(|s| {
            s.agent()
                .use_cases
                .iter()
                .take(2)
                .enumerate()
                .map(|(i, uc)| format!("Alt+{}: {}", i + 1, uc))
                .collect::<Vec<_>>()
                .join(" │ ")
        })
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(border_style)
        .title(title)
        .title_bottom(format!(" {} ", quick))
        .style(Style::default().bg(theme.surface));

    // Clear the area first so the background fills completely
    f.render_widget(Clear, area);

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Render textarea
    f.render_widget(&app.input, inner);
}
