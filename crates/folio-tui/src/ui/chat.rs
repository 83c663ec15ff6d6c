// ABOUTME: Chat transcript rendering
// ABOUTME: Messages, attached result payloads, and the pending throbber

use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use folio_core::types::{ChatMessage, Role, TaskResult};

use crate::app::App;

const INDENT: &str = "       ";

fn push_message<'a>(app: &App, msg: &'a ChatMessage, lines: &mut Vec<Line<'a>>) {
    let theme = app.theme;
    let time = msg
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();

    let (marker, marker_style) = match msg.role {
        Role::User => ("❯ ", Style::default().fg(theme.user_message).bold()),
        Role::Agent => ("⏺ ", Style::default().fg(theme.agent_message)),
        Role::System => ("· ", Style::default().fg(theme.text_muted)),
    };

    let mut content_lines = msg.content.lines();
    let first = content_lines.next().unwrap_or("");
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", time), Style::default().fg(theme.text_muted)),
        Span::styled(marker, marker_style),
        Span::raw(first),
    ]));
    for line in content_lines {
        lines.push(Line::from(format!("{}{}", INDENT, line)));
    }

    if let Some(result) = &msg.result {
        push_result(app, result, lines);
    }

    lines.push(Line::from(""));
}

fn push_result<'a>(app: &App, result: &'a TaskResult, lines: &mut Vec<Line<'a>>) {
    let theme = app.theme;
    let muted = Style::default().fg(theme.text_muted);
    lines.push(Line::from(Span::styled(
        format!("{}Result:", INDENT),
        muted,
    )));

    let mut item = |prefix: &str, text: &'a str, style: Style| {
        lines.push(Line::from(vec![
            Span::styled(format!("{}  {} ", INDENT, prefix), style),
            Span::styled(text, Style::default().fg(theme.text)),
        ]));
    };

    match result {
        TaskResult::Analysis { insights, charts } => {
            for insight in insights {
                item("•", insight, Style::default().fg(theme.accent));
            }
            for chart in charts {
                item("▦", chart, muted);
            }
        }
        TaskResult::Content { items } => {
            for entry in items {
                item("✓", entry, Style::default().fg(theme.success));
            }
        }
        TaskResult::Code {
            improvements,
            files,
        } => {
            for entry in improvements {
                item("⚡", entry, Style::default().fg(theme.warning));
            }
            for file in files {
                item("·", file, muted);
            }
        }
        TaskResult::General { summary, items } => {
            item("·", summary, muted);
            for entry in items {
                item("•", entry, Style::default().fg(theme.accent));
            }
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let mut lines: Vec<Line> = vec![];

    if let Some(session) = &app.session {
        for msg in session.transcript() {
            push_message(app, msg, &mut lines);
        }

        // Pending exchange: show the processing throbber
        if session.is_pending() {
            let now = Local::now().format("%H:%M").to_string();
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", now), Style::default().fg(theme.text_muted)),
                Span::styled(
                    format!("{} ", app.throbber_char()),
                    Style::default().fg(theme.pending),
                ),
                Span::styled(
                    "Processing your request...",
                    Style::default().fg(theme.text_muted),
                ),
            ]));
        }
    }

    // Empty state
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Start typing to chat...",
            Style::default().fg(theme.text_muted),
        )));
    }

    // Auto-scroll to bottom: scroll_offset=0 means "show newest", higher values scroll up
    let total_lines = lines.len() as u16;
    let visible_lines = area.height;
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let actual_scroll = max_scroll.saturating_sub(app.scroll_offset as u16);

    let para = Paragraph::new(lines).scroll((actual_scroll, 0));
    f.render_widget(para, area);
}
