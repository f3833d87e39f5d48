//! Help, error history and attach prompt popups.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::AppState;
use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let mut lines = Vec::new();
    for (section, bindings) in key_bindings_help() {
        lines.push(Line::from(Span::styled(section, theme::accent_bold())));
        for (keys, action) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<18}"), theme::text()),
                Span::styled(action, theme::muted()),
            ]));
        }
        lines.push(Line::from(""));
    }

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::accent())
            .title(" Help (Esc to close) ")
            .title_style(theme::accent_bold()),
    );
    f.render_widget(help, popup);
}

pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let lines: Vec<Line> = if app.error_history.is_empty() {
        vec![Line::from(Span::styled("No errors recorded", theme::muted()))]
    } else {
        app.error_history
            .iter()
            .skip(app.error_scroll)
            .map(|record| {
                let mut spans = vec![
                    Span::styled(
                        record.timestamp.format("%H:%M:%S ").to_string(),
                        theme::muted(),
                    ),
                    Span::styled(
                        format!("[{}] ", record.category.label()),
                        theme::negative(),
                    ),
                    Span::styled(record.message.clone(), theme::text()),
                ];
                if !record.context.is_empty() {
                    spans.push(Span::styled(format!(" ({})", record.context), theme::muted()));
                }
                Line::from(spans)
            })
            .collect()
    };

    let history = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::negative())
            .title(format!(
                " Error History ({}) j/k scroll, Esc close ",
                app.error_history.len()
            ))
            .title_style(theme::negative()),
    );
    f.render_widget(history, popup);
}

pub fn render_attach_prompt(f: &mut Frame, area: Rect, input: &str) {
    let popup = centered_rect(70, 30, area);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled(
            "File paths, separated by ';'",
            theme::muted(),
        )),
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(input.to_string(), theme::text()),
            Span::styled("_", theme::accent()),
        ]),
        Line::from(""),
        Line::from(Span::styled("[Enter] attach  [Esc] cancel", theme::muted())),
    ];

    let prompt = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::accent())
            .title(" Attach Evidence ")
            .title_style(theme::accent_bold()),
    );
    f.render_widget(prompt, popup);
}
