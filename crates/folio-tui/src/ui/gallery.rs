// ABOUTME: Agent gallery rendering
// ABOUTME: Sidebar with search and categories, main pane with agent cards

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use folio_core::catalog::{AgentDescriptor, AgentStatus};

use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::horizontal([Constraint::Length(30), Constraint::Min(1)]).split(area);

    render_sidebar(f, chunks[0], app);
    render_agents(f, chunks[1], app);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let chunks = Layout::vertical([
        Constraint::Length(3), // Search
        Constraint::Min(1),   // Categories
        Constraint::Length(5), // Custom agent hint
    ])
    .split(area);

    let search_title = if app.search.is_empty() {
        " Search agents ".to_string()
    } else {
        format!(" Search: {} ", app.search)
    };
    let search = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_muted))
        .title(search_title);
    let inner = search.inner(chunks[0]);
    f.render_widget(search, chunks[0]);
    f.render_widget(
        Paragraph::new(format!("{}▏", app.search)).style(Style::default().fg(theme.text)),
        inner,
    );

    let items: Vec<ListItem> = app
        .categories()
        .iter()
        .enumerate()
        .map(|(i, cat)| {
            let style = if i == app.category_index {
                Style::default().fg(theme.primary).bold()
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(format!(" {} ({})", cat.label, cat.count)).style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted))
            .title(" Categories "),
    );
    f.render_widget(list, chunks[1]);

    let hint = Paragraph::new(vec![
        Line::from(Span::styled(
            "Need something specific?",
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            "Ctrl+N: request a custom agent",
            Style::default().fg(theme.accent),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Custom Solutions "),
    );
    f.render_widget(hint, chunks[2]);
}

fn render_agents(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let filtered = app.filtered_agents();

    let header = match app.selected_category() {
        None => format!(" All Agents — {} found ", filtered.len()),
        Some(cat) => format!(" {} — {} found ", cat, filtered.len()),
    };

    if filtered.is_empty() {
        let empty = Paragraph::new("No agents found\nTry adjusting your search or category filter")
            .style(Style::default().fg(theme.text_muted))
            .block(Block::default().borders(Borders::ALL).title(header));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = filtered
        .into_iter()
        .enumerate()
        .map(|(i, agent)| agent_card(app, agent, i == app.gallery_index))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted))
            .title(header),
    );
    f.render_widget(list, area);
}

fn agent_card<'a>(app: &App, agent: &'a AgentDescriptor, selected: bool) -> ListItem<'a> {
    let theme = app.theme;
    let status_style = match agent.status {
        AgentStatus::Available => Style::default().fg(theme.success),
        AgentStatus::Busy => Style::default().fg(theme.warning),
        AgentStatus::Offline => Style::default().fg(theme.text_muted),
    };

    let capabilities = agent
        .capabilities
        .iter()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(" · ");

    let title = Line::from(vec![
        Span::styled(format!(" {} ", agent.glyph), Style::default().fg(theme.primary)),
        Span::styled(agent.name, Style::default().fg(theme.text).bold()),
        Span::raw("  "),
        Span::styled(format!("● {}", agent.status.label()), status_style),
    ]);
    let meta = Line::from(vec![
        Span::raw("   "),
        Span::styled(agent.category, Style::default().fg(theme.accent)),
        Span::styled(
            format!("  ★ {:.1}  {} interactions", agent.rating, agent.total_interactions),
            Style::default().fg(theme.text_muted),
        ),
    ]);
    let caps = Line::from(Span::styled(
        format!("   {}", capabilities),
        Style::default().fg(theme.text_muted),
    ));

    let mut text = Text::from(vec![title, meta, caps, Line::from("")]);
    if selected {
        text = text.patch_style(Style::default().bg(theme.surface));
    }
    ListItem::new(text)
}
