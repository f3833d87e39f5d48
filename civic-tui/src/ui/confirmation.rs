//! Post-submit confirmation with the receipt reference and reset countdown.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use civic_core::Clock;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::positive());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Report Submitted Successfully",
            theme::positive(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your identity is protected. Your report has been submitted securely.",
            theme::text(),
        )),
        Line::from(Span::styled(
            "All information is encrypted and anonymous",
            theme::muted(),
        )),
    ];

    if let Some(receipt) = app.wizard.receipt() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Reference: ", theme::muted()),
            Span::styled(receipt.reference.clone(), theme::accent_bold()),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "Submitted {}",
                receipt.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            theme::muted(),
        )));
    }

    lines.push(Line::from(""));
    match app.wizard.reset_remaining(app.clock.now()) {
        Some(remaining) if app.wizard.reset_pending() => {
            // Round up so the countdown never shows 0 while still pending.
            let secs = remaining.as_millis().div_ceil(1000);
            lines.push(Line::from(Span::styled(
                format!("Starting a new report in {secs}s"),
                theme::muted(),
            )));
        }
        _ => lines.push(Line::from(Span::styled(
            "Press q to quit",
            theme::muted(),
        ))),
    }

    f.render_widget(
        Paragraph::new(lines).centered().wrap(Wrap { trim: true }),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use civic_core::{Clock, ManualClock, WizardConfig};

    use crate::app::AppState;
    use crate::test_helpers::render_to_string;

    #[test]
    fn shows_reference_and_countdown() {
        let clock = Arc::new(ManualClock::new());
        let mut app = AppState::new(WizardConfig::default(), clock.clone());
        app.wizard.set_field(civic_core::Field::Category, "nepotism");
        app.wizard.set_field(civic_core::Field::Description, "hired a cousin");
        for _ in 0..3 {
            app.wizard.advance().unwrap();
        }
        let receipt = app.wizard.submit(clock.now()).unwrap();

        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("Report Submitted Successfully"));
        assert!(screen.contains(&receipt.reference));
        assert!(screen.contains("new report in 5s"));

        clock.advance(Duration::from_millis(3500));
        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("new report in 2s"));
    }

    #[test]
    fn cancelled_reset_shows_quit_hint() {
        let clock = Arc::new(ManualClock::new());
        let mut app = AppState::new(WizardConfig::default(), clock.clone());
        app.wizard.set_field(civic_core::Field::Category, "bribery");
        app.wizard.set_field(civic_core::Field::Description, "cash");
        for _ in 0..3 {
            app.wizard.advance().unwrap();
        }
        app.wizard.submit(clock.now()).unwrap();
        assert!(app.wizard.cancel_pending_reset());

        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("All information is encrypted and anonymous"));
        assert!(screen.contains("Press q to quit"));
        assert!(!screen.contains("Starting a new report"));
    }
}
