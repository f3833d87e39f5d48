//! Step 4: read-only summary before submit.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let summary = app.wizard.review_summary();

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<13}"), theme::muted()),
            Span::styled(value, theme::text()),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled("Review Your Report", theme::accent_bold())),
        Line::from(""),
        row("Category:", summary.category),
        row("Location:", summary.location),
        row("Files:", summary.files),
    ];
    for name in summary.file_names {
        lines.push(Line::from(Span::styled(
            format!("{:13}• {name}", ""),
            theme::muted(),
        )));
    }
    lines.push(Line::from(Span::styled("Description:", theme::muted())));
    for l in summary.description.split('\n') {
        lines.push(Line::from(Span::styled(format!("  {l}"), theme::text())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Your report is ready to submit. All information is encrypted and your identity remains protected.",
        theme::warning(),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use civic_core::Attachment;

    use crate::test_helpers::{filled_app, render_to_string};

    #[test]
    fn summarises_draft() {
        let mut app = filled_app();
        app.wizard
            .add_attachments([Attachment::new("ledger.pdf", vec![1u8, 2, 3])]);
        for _ in 0..3 {
            app.wizard.advance().unwrap();
        }
        let screen = render_to_string(&app, 120, 40);
        assert!(screen.contains("Review Your Report"));
        assert!(screen.contains("Bribery"));
        assert!(screen.contains("1 file(s)"));
        assert!(screen.contains("ledger.pdf"));
        assert!(screen.contains("27.7172, 85.3240"));
        assert!(screen.contains("Submit Report"));
        assert!(screen.contains("All information is encrypted"));
    }
}
