//! Step 3: attached evidence list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::style::Modifier;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let attachments = &app.wizard.draft().attachments;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let intro = vec![
        Line::from(Span::styled("Upload Evidence (optional)", theme::text())),
        Line::from(Span::styled(
            "PDF, Images, Documents (Max 10MB each)",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(intro), chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" Attached ({}) ", attachments.len()))
        .title_style(theme::muted());

    if attachments.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No files attached. Press [a] to add files.",
            theme::muted(),
        ))
        .block(block);
        f.render_widget(empty, chunks[1]);
    } else {
        let lines: Vec<Line> = attachments
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let is_cursor = i == app.evidence_cursor;
                let style = if is_cursor {
                    theme::accent().add_modifier(Modifier::REVERSED)
                } else {
                    theme::text()
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", a.name), style),
                    Span::styled(format!(" {}", format_size(a.size())), theme::muted()),
                ])
            })
            .collect();
        f.render_widget(Paragraph::new(lines).block(block), chunks[1]);
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            "[a] attach  [j/k] select  [x] remove",
            theme::muted(),
        )),
        chunks[2],
    );
}

fn format_size(bytes: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = 1024 * 1024;
    if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}
