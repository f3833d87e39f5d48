//! Wizard steps: the fixed four-page sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One page of the report wizard. Numbered 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    Details,
    Location,
    Evidence,
    Review,
}

impl Step {
    /// Step count (N).
    pub const COUNT: usize = 4;

    pub const ALL: [Step; Step::COUNT] = [Step::Details, Step::Location, Step::Evidence, Step::Review];

    pub fn first() -> Step {
        Step::Details
    }

    pub fn last() -> Step {
        Step::Review
    }

    /// 1-based position.
    pub fn number(self) -> usize {
        match self {
            Step::Details => 1,
            Step::Location => 2,
            Step::Evidence => 3,
            Step::Review => 4,
        }
    }

    pub fn from_number(n: usize) -> Option<Self> {
        match n {
            1 => Some(Step::Details),
            2 => Some(Step::Location),
            3 => Some(Step::Evidence),
            4 => Some(Step::Review),
            _ => None,
        }
    }

    /// Following step, or `None` at the last one.
    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    /// Preceding step, or `None` at the first one.
    pub fn prev(self) -> Option<Step> {
        Step::from_number(self.number() - 1)
    }

    pub fn is_last(self) -> bool {
        self == Step::last()
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Details => "Incident Details",
            Step::Location => "Location",
            Step::Evidence => "Evidence",
            Step::Review => "Review",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::Details => "Describe what happened",
            Step::Location => "Where did this occur?",
            Step::Evidence => "Upload supporting documents",
            Step::Review => "Confirm and submit",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.title())
    }
}
