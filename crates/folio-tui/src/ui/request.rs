// ABOUTME: Custom agent request dialog rendering
// ABOUTME: Centered overlay with text fields and data-source checkboxes

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use folio_core::request::DataSource;

use crate::app::App;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, app: &App) {
    let Some(dialog) = &app.request_dialog else {
        return;
    };
    let theme = app.theme;
    let area = centered_rect(70, 80, f.area());

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" Request Custom Agent ")
        .title_style(Style::default().fg(theme.accent).bold())
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Intro
        Constraint::Length(3), // Email
        Constraint::Length(3), // Description
        Constraint::Length(3), // Capabilities
        Constraint::Length(1), // Sources label
        Constraint::Length(DataSource::ALL.len() as u16),
        Constraint::Min(0), // What happens next + hints
    ])
    .split(inner);

    f.render_widget(
        Paragraph::new("Tell us about your requirements and we'll create a tailored agent.")
            .style(Style::default().fg(theme.text_muted)),
        chunks[0],
    );

    let fields = [
        ("Requestor Email", &dialog.form.requestor_email),
        ("Short Description of the Agent", &dialog.form.short_description),
        ("What Capabilities Required", &dialog.form.required_capabilities),
    ];
    for (i, (label, value)) in fields.iter().enumerate() {
        let focused = dialog.focus == i;
        let border = if focused {
            Style::default().fg(theme.primary)
        } else {
            Style::default().fg(theme.text_muted)
        };
        let field = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} * ", label));
        let field_inner = field.inner(chunks[i + 1]);
        f.render_widget(field, chunks[i + 1]);
        let cursor = if focused { "▏" } else { "" };
        f.render_widget(
            Paragraph::new(format!("{}{}", value, cursor)).style(Style::default().fg(theme.text)),
            field_inner,
        );
    }

    f.render_widget(
        Paragraph::new("Data Source Location * — select all the agent will need:")
            .style(Style::default().fg(theme.text)),
        chunks[4],
    );

    let source_lines: Vec<Line> = DataSource::ALL
        .iter()
        .enumerate()
        .map(|(i, source)| {
            let focused = dialog.focus == 3 + i;
            let checked = dialog.form.data_sources.contains(source);
            let mark = if checked { "[x]" } else { "[ ]" };
            let style = if focused {
                Style::default().fg(theme.primary).bold()
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(Span::styled(format!(" {} {}", mark, source.label()), style))
        })
        .collect();
    f.render_widget(Paragraph::new(source_lines), chunks[5]);

    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "What happens next?",
            Style::default().fg(theme.text),
        )),
        Line::from("  • Our team will review your request within 1 business day"),
        Line::from("  • Development typically takes 3-5 business days"),
        Line::from("  • You'll receive testing access before full deployment"),
        Line::from(""),
        Line::from(Span::styled(
            "Tab: next field │ Space: toggle source │ Enter: submit │ Esc: cancel",
            Style::default().fg(theme.text_muted),
        )),
    ])
    .style(Style::default().fg(theme.text_muted));
    f.render_widget(footer, chunks[6]);
}
