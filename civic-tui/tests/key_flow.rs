//! Drives the TUI state purely through key events, the way a user would.

use std::sync::Arc;
use std::time::Duration;

use civic_core::{ManualClock, Step, WizardConfig};
use civic_tui::app::{AppState, DetailsFocus, Overlay, StatusLevel};
use civic_tui::handle_key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::from(code));
}

fn type_text(app: &mut AppState, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn status(app: &AppState) -> (&str, StatusLevel) {
    let (msg, level) = app.status_message.as_ref().expect("status message");
    (msg.as_str(), *level)
}

#[test]
fn full_report_by_keyboard_then_auto_reset() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("photo.jpg");
    std::fs::write(&photo, [0xFFu8, 0xD8, 0xFF, 0xE0]).unwrap();

    let clock = Arc::new(ManualClock::new());
    let mut app = AppState::new(WizardConfig::default(), clock.clone());

    // Nothing filled in yet: Next is refused.
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.wizard.current_step(), Step::Details);
    let (msg, level) = status(&app);
    assert_eq!(level, StatusLevel::Warning);
    assert!(msg.contains("category"));

    // Pick the first category and write a description.
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.wizard.draft().category, "bribery");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.details_focus, DetailsFocus::Description);
    type_text(&mut app, "officer asked for cash");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.wizard.draft().description, "officer asked for cash");

    // Location: one nudge north.
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.wizard.current_step(), Step::Location);
    press(&mut app, KeyCode::Char('k'));
    assert!((app.wizard.draft().location.lat - 27.7272).abs() < 1e-9);

    // Evidence: attach through the path prompt.
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.wizard.current_step(), Step::Evidence);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.overlay, Overlay::AttachPrompt);
    type_text(&mut app, &photo.display().to_string());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.wizard.draft().attachments.len(), 1);
    assert_eq!(app.wizard.draft().attachments[0].name, "photo.jpg");

    // Review, then submit with Enter.
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.wizard.current_step(), Step::Review);
    press(&mut app, KeyCode::Enter);
    assert!(app.wizard.is_submitted());
    let reference = app.wizard.receipt().unwrap().reference.clone();
    assert!(status(&app).0.contains(&reference));

    // Navigation is locked on the confirmation screen.
    press(&mut app, KeyCode::Char('p'));
    assert!(app.wizard.is_submitted());

    // Not yet.
    clock.advance(Duration::from_secs(4));
    app.tick();
    assert!(app.wizard.is_submitted());

    clock.advance(Duration::from_secs(1));
    app.tick();
    assert!(!app.wizard.is_submitted());
    assert_eq!(app.wizard.current_step(), Step::Details);
    assert!(app.wizard.draft().category.is_empty());
    assert!(app.wizard.draft().attachments.is_empty());
    assert_eq!(status(&app).0, "Ready for a new report");
    assert!(app.running);
}

#[test]
fn oversized_attachment_is_reported_not_added() {
    let dir = tempfile::tempdir().unwrap();
    let big = dir.path().join("scan.pdf");
    std::fs::write(&big, vec![0u8; 64]).unwrap();

    let config = WizardConfig {
        max_attachment_bytes: 32,
        ..WizardConfig::default()
    };
    let mut app = AppState::new(config, Arc::new(ManualClock::new()));
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "tender rigged");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.wizard.current_step(), Step::Evidence);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, &big.display().to_string());
    press(&mut app, KeyCode::Enter);

    assert!(app.wizard.draft().attachments.is_empty());
    assert_eq!(app.error_history.len(), 1);
    assert_eq!(status(&app).1, StatusLevel::Error);
}

#[test]
fn ctrl_c_quits_even_mid_description() {
    let mut app = AppState::new(WizardConfig::default(), Arc::new(ManualClock::new()));
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "q");
    assert!(app.running);
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(!app.running);
}
