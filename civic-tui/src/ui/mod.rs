//! Top-level UI layout: header, stepper, active step, nav hints, status bar.

pub mod confirmation;
pub mod details;
pub mod evidence;
pub mod location;
pub mod overlays;
pub mod review;
pub mod status_bar;
pub mod stepper;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use civic_core::Step;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header_area = chunks[0];
    let main_area = chunks[1];
    let status_area = chunks[2];

    render_header(f, header_area);

    if app.wizard.is_submitted() {
        confirmation::render(f, main_area, app);
    } else {
        draw_form(f, main_area, app);
    }

    status_bar::render(f, status_area, app);

    // Overlays on top.
    match &app.overlay {
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
        Overlay::AttachPrompt => overlays::render_attach_prompt(f, main_area, &app.path_input),
        Overlay::None => {}
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Anonymous Corruption Reporting",
            theme::accent_bold(),
        )),
        Line::from(Span::styled(
            "Report corruption safely and securely. Your identity is protected.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).centered(), area);
}

/// Stepper above, the active step's card below.
fn draw_form(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    stepper::render(f, chunks[0], app);

    let step = app.wizard.current_step();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} · {} ", step.title(), step.description()))
        .title_style(theme::panel_title(true))
        .title_bottom(nav_hint(app));

    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    match step {
        Step::Details => details::render(f, inner, app),
        Step::Location => location::render(f, inner, app),
        Step::Evidence => evidence::render(f, inner, app),
        Step::Review => review::render(f, inner, app),
    }
}

/// "Previous" / "Next" / "Submit" with disabled buttons muted.
fn nav_hint(app: &AppState) -> Line<'static> {
    let prev_style = if app.wizard.can_retreat() {
        theme::accent()
    } else {
        theme::muted()
    };
    let next = if app.wizard.current_step().is_last() {
        Span::styled(" [Enter] Submit Report ", theme::positive())
    } else if app.wizard.can_advance() {
        Span::styled(" [n] Next ", theme::accent())
    } else {
        Span::styled(" [n] Next ", theme::muted())
    };
    Line::from(vec![Span::styled(" [p] Previous ", prev_style), Span::raw("│"), next])
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
