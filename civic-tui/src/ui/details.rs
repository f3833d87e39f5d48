//! Step 1: category selector and description editor.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{AppState, DetailsFocus};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let draft = app.wizard.draft();
    let catalog = app.wizard.catalog();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(area);

    // Category
    let category_active = app.details_focus == DetailsFocus::Category;
    let selected = if draft.category.is_empty() {
        Span::styled("Select a category", theme::muted())
    } else {
        let label = catalog
            .label_for(&draft.category)
            .unwrap_or(draft.category.as_str());
        Span::styled(format!("◀ {label} ▶"), theme::accent_bold())
    };
    let category = Paragraph::new(Line::from(selected)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(category_active))
            .title(" Category [h/l] ")
            .title_style(theme::panel_title(category_active)),
    );
    f.render_widget(category, chunks[0]);

    // Description
    let description_active = app.details_focus == DetailsFocus::Description;
    let mut lines: Vec<Line> = if draft.description.is_empty() && !description_active {
        vec![Line::from(Span::styled(
            "Provide detailed information about the incident...",
            theme::muted(),
        ))]
    } else {
        draft
            .description
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), theme::text())))
            .collect()
    };
    if description_active {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("_", theme::accent()));
        }
    }
    let description = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(description_active))
                .title(" Description [Tab] ")
                .title_style(theme::panel_title(description_active)),
        );
    f.render_widget(description, chunks[1]);

    let notice = Paragraph::new(Line::from(Span::styled(
        "Your report is completely anonymous. No personal information is required or collected.",
        theme::accent(),
    )))
    .wrap(Wrap { trim: true });
    f.render_widget(notice, chunks[2]);
}

#[cfg(test)]
mod tests {
    use crate::app::DetailsFocus;
    use crate::test_helpers::{filled_app, render_to_string, test_app};

    #[test]
    fn shows_category_label_and_description() {
        let screen = render_to_string(&filled_app(), 100, 30);
        assert!(screen.contains("Bribery"));
        assert!(screen.contains("cash for a building permit"));
    }

    #[test]
    fn placeholder_hidden_while_typing() {
        let mut app = test_app();
        let idle = render_to_string(&app, 100, 30);
        assert!(idle.contains("Provide detailed information"));

        app.details_focus = DetailsFocus::Description;
        let typing = render_to_string(&app, 100, 30);
        assert!(!typing.contains("Provide detailed information"));
    }
}
