//! Keyboard input dispatch: overlays → confirmation lock → text entry → global keys → step keys.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use civic_core::{load_attachments, Clock, Field, Step, WizardError};

use crate::app::{AppState, DetailsFocus, ErrorCategory, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::AttachPrompt => {
            handle_attach_prompt(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. The confirmation screen only listens for quit until the reset fires.
    if app.wizard.is_submitted() {
        if key.code == KeyCode::Char('q') {
            app.running = false;
        }
        return;
    }

    // 3. Free-text entry swallows everything but focus changes.
    if app.wizard.current_step() == Step::Details && app.details_focus == DetailsFocus::Description
    {
        handle_description_key(app, key);
        return;
    }

    // 4. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
            return;
        }
        KeyCode::Char('n') | KeyCode::Enter => {
            next_or_submit(app);
            return;
        }
        KeyCode::Char('p') | KeyCode::Backspace => {
            app.wizard.retreat();
            return;
        }
        _ => {}
    }

    // 5. Step-specific keys.
    match app.wizard.current_step() {
        Step::Details => handle_category_key(app, key),
        Step::Location => handle_location_key(app, key),
        Step::Evidence => handle_evidence_key(app, key),
        Step::Review => handle_review_key(app, key),
    }
}

/// "Next" on steps 1-3, "Submit Report" on the last.
fn next_or_submit(app: &mut AppState) {
    if app.wizard.current_step().is_last() {
        submit(app);
        return;
    }
    match app.wizard.advance() {
        Ok(step) => app.set_status(format!("Step {} of {}: {}", step.number(), Step::COUNT, step.title())),
        Err(WizardError::IncompleteStep { missing, .. }) => {
            let fields: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            app.set_warning(format!("Please fill in: {}", fields.join(", ")));
            if missing.contains(&Field::Category) {
                app.details_focus = DetailsFocus::Category;
            } else {
                app.details_focus = DetailsFocus::Description;
            }
        }
        Err(e) => app.push_error(ErrorCategory::Validation, e.to_string(), "advance".into()),
    }
}

fn submit(app: &mut AppState) {
    let now = app.clock.now();
    match app.wizard.submit(now) {
        Ok(receipt) => app.set_status(format!("Report submitted, reference {}", receipt.reference)),
        Err(e) => app.push_error(ErrorCategory::Validation, e.to_string(), "submit".into()),
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

/// Path prompt for the file picker. Several paths may be separated by `;`.
fn handle_attach_prompt(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.path_input.clear();
        }
        KeyCode::Enter => {
            let paths: Vec<PathBuf> = app
                .path_input
                .split(';')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .collect();
            if !paths.is_empty() {
                match load_attachments(&paths, app.config.max_attachment_bytes) {
                    Ok(files) => {
                        let added = app.wizard.add_attachments(files);
                        app.set_status(format!("Attached {added} file(s)"));
                    }
                    Err(e) => {
                        let context = app.path_input.clone();
                        app.push_error(ErrorCategory::File, e.to_string(), context);
                    }
                }
            }
            app.path_input.clear();
            app.overlay = Overlay::None;
        }
        KeyCode::Backspace => {
            app.path_input.pop();
        }
        KeyCode::Char(c) => {
            app.path_input.push(c);
        }
        _ => {}
    }
}

fn handle_description_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => {
            app.details_focus = DetailsFocus::Category;
        }
        KeyCode::Backspace => {
            let mut text = app.wizard.draft().description.clone();
            text.pop();
            app.wizard.set_field(Field::Description, text);
        }
        KeyCode::Enter => {
            let mut text = app.wizard.draft().description.clone();
            text.push('\n');
            app.wizard.set_field(Field::Description, text);
        }
        KeyCode::Char(c) => {
            let mut text = app.wizard.draft().description.clone();
            text.push(c);
            app.wizard.set_field(Field::Description, text);
        }
        _ => {}
    }
}

fn handle_category_key(app: &mut AppState, key: KeyEvent) {
    let current = app.wizard.draft().category.clone();
    let picked = match key.code {
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('k') | KeyCode::Up => {
            app.wizard.catalog().prev(&current)
        }
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('j') | KeyCode::Down => {
            app.wizard.catalog().next(&current)
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('i') => {
            app.details_focus = DetailsFocus::Description;
            None
        }
        _ => None,
    };
    if let Some(slug) = picked {
        app.wizard.set_field(Field::Category, slug);
    }
}

fn handle_location_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.nudge_location(1.0, 0.0),
        KeyCode::Char('j') | KeyCode::Down => app.nudge_location(-1.0, 0.0),
        KeyCode::Char('h') | KeyCode::Left => app.nudge_location(0.0, -1.0),
        KeyCode::Char('l') | KeyCode::Right => app.nudge_location(0.0, 1.0),
        KeyCode::Char('+') | KeyCode::Char('=') => app.zoom_in(),
        KeyCode::Char('-') => app.zoom_out(),
        KeyCode::Char('r') => {
            let home = app.config.default_location;
            app.wizard.select_location(home.lat, home.lng);
        }
        _ => {}
    }
}

fn handle_evidence_key(app: &mut AppState, key: KeyEvent) {
    let count = app.wizard.draft().attachments.len();

    match key.code {
        KeyCode::Char('a') => {
            app.overlay = Overlay::AttachPrompt;
            app.path_input.clear();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.evidence_cursor + 1 < count {
                app.evidence_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.evidence_cursor = app.evidence_cursor.saturating_sub(1);
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(removed) = app.wizard.remove_attachment(app.evidence_cursor) {
                app.set_status(format!("Removed {}", removed.name));
                app.clamp_evidence_cursor();
            }
        }
        _ => {}
    }
}

fn handle_review_key(app: &mut AppState, key: KeyEvent) {
    if let KeyCode::Char('s') = key.code {
        submit(app);
    }
}

/// Key bindings help text, grouped by section.
pub fn key_bindings_help() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    vec![
        (
            "Global",
            vec![
                ("n / Enter", "Next step (Submit on Review)"),
                ("p / Backspace", "Previous step"),
                ("?", "Show this help"),
                ("e", "Error history"),
                ("q / Ctrl+C", "Quit"),
            ],
        ),
        (
            "Step 1: Incident Details",
            vec![
                ("h / l", "Cycle category"),
                ("Tab / i", "Edit description"),
                ("Tab / Esc", "Leave description"),
            ],
        ),
        (
            "Step 2: Location",
            vec![
                ("h j k l / arrows", "Move the marker"),
                ("+ / -", "Finer / coarser moves"),
                ("r", "Recenter on the default point"),
            ],
        ),
        (
            "Step 3: Evidence",
            vec![
                ("a", "Attach files (paths separated by ;)"),
                ("j / k", "Select file"),
                ("x / Delete", "Remove selected file"),
            ],
        ),
        ("Step 4: Review", vec![("s / Enter", "Submit report")]),
    ]
}
