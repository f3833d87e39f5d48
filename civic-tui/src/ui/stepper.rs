//! Progress stepper: bar, "Step n of N", and the four step boxes.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let view = app.wizard.view();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(2),
        ])
        .split(inner);

    let bar_width = (rows[0].width as usize).saturating_sub(7);
    let filled = ((view.progress_percent / 100.0) * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);
    let bar = Line::from(vec![
        Span::styled(format!("[{}{}]", "=".repeat(filled), " ".repeat(empty)), theme::accent()),
        Span::styled(format!(" {:>3.0}%", view.progress_percent), theme::text()),
    ]);
    f.render_widget(Paragraph::new(bar), rows[0]);

    let caption = Paragraph::new(Span::styled(
        format!("Step {} of {}", view.current.number(), view.total),
        theme::muted(),
    ));
    f.render_widget(caption, rows[1]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, view.total as u32); view.total])
        .split(rows[2]);

    for (step_view, col) in view.steps.iter().zip(cols.iter()) {
        let style = theme::step(step_view.status);
        let lines = vec![
            Line::from(Span::styled(step_view.number.to_string(), style)),
            Line::from(Span::styled(step_view.title, style)),
        ];
        f.render_widget(Paragraph::new(lines).centered(), *col);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::{filled_app, render_to_string};

    #[test]
    fn shows_progress_for_current_step() {
        let mut app = filled_app();
        app.wizard.advance().unwrap();
        app.wizard.advance().unwrap();
        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("Step 3 of 4"));
        assert!(screen.contains("75%"));
        assert!(screen.contains("Evidence"));
        assert!(screen.contains("Review"));
    }
}
