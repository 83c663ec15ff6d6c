// ABOUTME: Settings tab rendering
// ABOUTME: Session configuration rows plus the agent capability list

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use folio_core::settings::{MAX_TOKENS_MAX, MAX_TOKENS_MIN};

use crate::app::App;

fn meter(value: f64, min: f64, max: f64, width: usize) -> String {
    let frac = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let filled = (frac * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let chunks = Layout::vertical([
        Constraint::Length(9), // Configuration rows
        Constraint::Min(1),   // Capabilities
        Constraint::Length(1), // Hints
    ])
    .split(area);

    let s = &app.settings;
    let rows: [(&str, String); 6] = [
        ("Primary Data Source", s.data_source.label().to_string()),
        ("Input Format", s.input_format.label().to_string()),
        ("Output Format", s.output_format.label().to_string()),
        (
            "Max Tokens",
            format!(
                "{:>4} {}",
                s.max_tokens,
                meter(
                    s.max_tokens as f64,
                    MAX_TOKENS_MIN as f64,
                    MAX_TOKENS_MAX as f64,
                    16
                )
            ),
        ),
        (
            "Temperature",
            format!("{:.1}  {}", s.temperature, meter(s.temperature as f64, 0.0, 1.0, 16)),
        ),
        (
            "Auto-execute compatible tasks",
            if s.auto_execute { "on" } else { "off" }.to_string(),
        ),
    ];

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let selected = i == app.settings_row;
            let marker = if selected { "▸" } else { " " };
            let style = if selected {
                Style::default().fg(theme.primary).bold()
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} {:<30}", marker, label), style),
                Span::styled(value.clone(), Style::default().fg(theme.accent)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted))
            .title(" Session Configuration "),
    );
    f.render_widget(list, chunks[0]);

    let caps: Vec<ListItem> = app
        .session
        .as_ref()
        .map(|session| {
            session
                .agent()
                .capabilities
                .iter()
                .map(|c| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!(" {} ", c.name), Style::default().fg(theme.text)),
                        Span::styled(
                            format!("— {} ", c.description),
                            Style::default().fg(theme.text_muted),
                        ),
                        Span::styled(format!("[{}]", c.category), Style::default().fg(theme.accent)),
                    ]))
                })
                .collect()
        })
        .unwrap_or_default();
    let caps_list = List::new(caps).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted))
            .title(" Available Capabilities "),
    );
    f.render_widget(caps_list, chunks[1]);

    f.render_widget(
        Paragraph::new(" ↑↓: row │ ←→: adjust │ s: save │ r: reset │ Ctrl+T: chat")
            .style(Style::default().fg(theme.text_muted)),
        chunks[2],
    );
}
