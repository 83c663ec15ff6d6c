// ABOUTME: Login screen rendering
// ABOUTME: Centered sign-in card with email and password fields

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, LoginField};
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let card = centered_rect(60, 70, area);

    f.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(" Document Management Tool Kit ")
        .title_style(Style::default().fg(theme.primary).bold())
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(card);
    f.render_widget(block, card);

    let chunks = Layout::vertical([
        Constraint::Length(4), // Blurb
        Constraint::Length(1), // Heading
        Constraint::Length(3), // Email
        Constraint::Length(3), // Password
        Constraint::Length(1), // Hint
        Constraint::Min(0),    // Features
    ])
    .split(inner);

    let blurb = Paragraph::new(
        "Your central hub for organising, accessing, and collaborating on documents. \
         Streamline workflows and let specialized agents handle the busywork.",
    )
    .style(Style::default().fg(theme.text_muted))
    .wrap(Wrap { trim: true });
    f.render_widget(blurb, chunks[0]);

    f.render_widget(
        Paragraph::new("Welcome back").style(Style::default().fg(theme.text).bold()),
        chunks[1],
    );

    render_field(
        f,
        chunks[2],
        app,
        "Email",
        &app.login.email,
        app.login.focus == LoginField::Email,
        false,
    );
    let masked = "*".repeat(app.login.password.chars().count());
    render_field(
        f,
        chunks[3],
        app,
        "Password",
        &masked,
        app.login.focus == LoginField::Password,
        true,
    );

    f.render_widget(
        Paragraph::new("Tab: switch field │ Enter: sign in")
            .style(Style::default().fg(theme.text_muted)),
        chunks[4],
    );

    let features = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "What you'll get access to:",
            Style::default().fg(theme.text_muted),
        )),
        Line::from(format!(
            "  • {} specialized document agents",
            folio_core::catalog::catalog().len()
        )),
        Line::from("  • Interactive document workflows"),
        Line::from("  • Custom agent creation"),
    ])
    .style(Style::default().fg(theme.text_muted));
    f.render_widget(features, chunks[5]);
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    app: &App,
    label: &str,
    value: &str,
    focused: bool,
    _masked: bool,
) {
    let theme = app.theme;
    let border = if focused {
        Style::default().fg(theme.primary)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", label));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cursor = if focused { "▏" } else { "" };
    f.render_widget(
        Paragraph::new(format!("{}{}", value, cursor)).style(Style::default().fg(theme.text)),
        inner,
    );
}
