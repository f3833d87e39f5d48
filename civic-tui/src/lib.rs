//! Civic Report TUI: the four-step anonymous report wizard in the terminal.
//!
//! Screens:
//! 1. Incident Details: category picker and description editor
//! 2. Location: keyboard-driven marker over a coordinate grid
//! 3. Evidence: attach files by path, remove by row
//! 4. Review: read-only summary, then submit
//!
//! After submit a confirmation screen counts down to the automatic reset.

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
