//! Step 2: keyboard location picker.
//!
//! Stands in for the map: a coarse grid around the selected point with the
//! marker fixed at the centre, plus the coordinates the wizard holds.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let location = app.wizard.draft().location;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Location (move the marker with h/j/k/l or arrows)",
            theme::text(),
        )),
        chunks[0],
    );

    let map_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" Map · step {}° ", app.map_step))
        .title_style(theme::muted());
    let map_inner = map_block.inner(chunks[1]);
    f.render_widget(map_block, chunks[1]);
    f.render_widget(Paragraph::new(grid_lines(map_inner)), map_inner);

    let info = vec![
        Line::from(vec![
            Span::styled("Selected: ", theme::muted()),
            Span::styled(location.to_string(), theme::accent_bold()),
        ]),
        Line::from(Span::styled(
            "[+/-] finer/coarser  [r] recenter",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(info), chunks[2]);
}

/// Dotted grid with the marker in the middle cell.
fn grid_lines(area: Rect) -> Vec<Line<'static>> {
    let width = area.width as usize;
    let height = area.height as usize;
    let (cx, cy) = (width / 2, height / 2);
    (0..height)
        .map(|y| {
            let mut spans = Vec::with_capacity(3);
            if y == cy && width > 0 {
                spans.push(Span::styled(dots(cx), theme::muted()));
                spans.push(Span::styled("●", theme::negative()));
                spans.push(Span::styled(dots(width - cx - 1), theme::muted()));
            } else {
                spans.push(Span::styled(dots(width), theme::muted()));
            }
            Line::from(spans)
        })
        .collect()
}

fn dots(n: usize) -> String {
    (0..n).map(|i| if i % 4 == 0 { '·' } else { ' ' }).collect()
}
