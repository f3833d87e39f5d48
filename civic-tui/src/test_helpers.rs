//! Test helpers for building app state and capturing rendered screens

use std::sync::Arc;

use civic_core::{Field, ManualClock, WizardConfig};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use crate::app::AppState;

pub fn test_app() -> AppState {
    AppState::new(WizardConfig::default(), Arc::new(ManualClock::new()))
}

/// App on the Details step with both required fields filled.
pub fn filled_app() -> AppState {
    let mut app = test_app();
    app.wizard.set_field(Field::Category, "bribery");
    app.wizard.set_field(Field::Description, "cash for a building permit");
    app
}

/// Render one frame and flatten the buffer into newline-separated rows.
pub fn render_to_string(app: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| crate::ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
