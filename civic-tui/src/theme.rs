//! Civic theme tokens for the report TUI.
//!
//! Palette follows the web dashboard: blue primary, green for success and
//! completed steps, amber for warnings, red for errors.

use ratatui::style::{Color, Modifier, Style};

use civic_core::StepStatus;

/// Colour palette for the report TUI.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Civic blue (focus, active step)
    pub accent: Color,
    /// Green (completed steps, success)
    pub positive: Color,
    /// Red (errors, blocked gates)
    pub negative: Color,
    /// Amber (warnings)
    pub warning: Color,
    /// Slate (secondary text, upcoming steps)
    pub muted: Color,
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::civic()
    }
}

impl Theme {
    pub const fn civic() -> Self {
        THEME
    }

    /// Colour for a step box in the stepper.
    pub fn step_color(&self, status: StepStatus) -> Color {
        match status {
            StepStatus::Active => self.accent,
            StepStatus::Completed => self.positive,
            StepStatus::Upcoming => self.muted,
        }
    }
}

const THEME: Theme = Theme {
    accent: Color::Rgb(59, 130, 246),
    positive: Color::Rgb(22, 163, 74),
    negative: Color::Rgb(220, 38, 38),
    warning: Color::Rgb(245, 158, 11),
    muted: Color::Rgb(100, 116, 139),
    text_primary: Color::White,
};

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Stepper box style; completed steps are struck through like the web form.
pub fn step(status: StepStatus) -> Style {
    let style = Style::default().fg(THEME.step_color(status));
    match status {
        StepStatus::Active => style.add_modifier(Modifier::BOLD | Modifier::REVERSED),
        StepStatus::Completed => style.add_modifier(Modifier::CROSSED_OUT),
        StepStatus::Upcoming => style,
    }
}
