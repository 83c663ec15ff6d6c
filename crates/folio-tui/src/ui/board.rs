// ABOUTME: Mock ops board rendering
// ABOUTME: Task list, per-task agent runs, metrics overlay

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph};
use ratatui::Frame;

use folio_core::board::{format_duration, RunStatus, TaskPriority, MOCK_METRICS};

use crate::app::App;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, app: &App) {
    let Some(board) = &app.board else {
        return;
    };
    let theme = app.theme;

    let chunks =
        Layout::horizontal([Constraint::Length(32), Constraint::Min(1)]).split(f.area());

    // Task list
    let items: Vec<ListItem> = board
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let priority_style = match task.priority {
                TaskPriority::High => Style::default().fg(theme.error),
                TaskPriority::Medium => Style::default().fg(theme.warning),
                TaskPriority::Low => Style::default().fg(theme.success),
            };
            let style = if i == board.task_index {
                Style::default().fg(theme.primary).bold()
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", task.name), style),
                    Span::styled(format!("[{}]", task.priority.label()), priority_style),
                ]),
                Line::from(Span::styled(
                    format!("   {} · {} agents", task.status.label(), task.agents.len()),
                    Style::default().fg(theme.text_muted),
                )),
            ])
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted))
            .title(" Tasks "),
    );
    f.render_widget(list, chunks[0]);

    render_task_detail(f, chunks[1], app);

    if board.metrics_open {
        render_metrics(f, app);
    }
}

fn render_task_detail(f: &mut Frame, area: Rect, app: &App) {
    let Some(board) = &app.board else {
        return;
    };
    let theme = app.theme;
    let Some(task) = board.current_task() else {
        let empty = Paragraph::new("Select a task from the sidebar to get started")
            .style(Style::default().fg(theme.text_muted))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_muted))
        .title(format!(" {} ", task.name));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Description + tags
        Constraint::Length(1), // Agent tabs
        Constraint::Length(3), // Progress gauge
        Constraint::Min(1),   // Logs / errors
        Constraint::Length(1), // Hints
    ])
    .split(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(task.description, Style::default().fg(theme.text))),
        Line::from(Span::styled(
            format!("brands: {} · tags: {}", task.brands.join(", "), task.tags.join(", ")),
            Style::default().fg(theme.text_muted),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    // Agent tabs
    let mut tab_spans: Vec<Span> = vec![];
    for (i, run) in task.agents.iter().enumerate() {
        let status_style = match run.status {
            RunStatus::Running => Style::default().fg(theme.accent),
            RunStatus::Completed => Style::default().fg(theme.success),
            RunStatus::Failed => Style::default().fg(theme.error),
            RunStatus::Paused => Style::default().fg(theme.warning),
        };
        let style = if i == board.agent_index {
            status_style.bold().underlined()
        } else {
            status_style
        };
        tab_spans.push(Span::styled(format!(" {} ({}) ", run.name, run.status.label()), style));
        tab_spans.push(Span::raw("│"));
    }
    f.render_widget(Paragraph::new(Line::from(tab_spans)), chunks[1]);

    let Some(run) = task.agents.get(board.agent_index) else {
        return;
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(theme.accent))
        .percent(run.progress as u16);
    f.render_widget(gauge, chunks[2]);

    let mut lines: Vec<Line> = vec![];
    if board.logs_expanded {
        lines.push(Line::from(Span::styled(
            format!("Logs ({})", run.logs.len()),
            Style::default().fg(theme.text).bold(),
        )));
        for event in &run.logs {
            lines.push(Line::from(Span::styled(
                format!("  {} ", event.message),
                Style::default().fg(theme.text_muted),
            )));
        }
    }
    if board.errors_expanded {
        lines.push(Line::from(Span::styled(
            format!("Errors ({})", run.errors.len()),
            Style::default().fg(theme.error).bold(),
        )));
        for event in &run.errors {
            lines.push(Line::from(Span::styled(
                format!("  ✗ {} ", event.message),
                Style::default().fg(theme.error),
            )));
        }
    }
    f.render_widget(Paragraph::new(lines), chunks[3]);

    f.render_widget(
        Paragraph::new(" ↑↓: task │ Tab: agent │ p: pause/resume │ l/e: logs/errors │ m: metrics │ q: quit")
            .style(Style::default().fg(theme.text_muted)),
        chunks[4],
    );
}

fn render_metrics(f: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = centered_rect(40, 50, f.area());
    f.render_widget(Clear, area);

    let m = MOCK_METRICS;
    let text = vec![
        Line::from(format!(" CPU Usage        {:>3}%", m.cpu_percent)),
        Line::from(format!(" Memory Usage     {:>3}%", m.memory_percent)),
        Line::from(format!(" Network Activity {:>3}%", m.network_percent)),
        Line::from(""),
        Line::from(format!(" Execution Time   {}", format_duration(m.execution_ms))),
        Line::from(format!(" Steps            {}/{}", m.steps_completed, m.steps_total)),
        Line::from(format!(" Screenshots      {}", m.screenshots_taken)),
        Line::from(format!(" Errors Found     {}", m.errors_found)),
    ];
    let para = Paragraph::new(text)
        .style(Style::default().fg(theme.text).bg(theme.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Agent Details "),
        );
    f.render_widget(para, area);
}
