//! Draft record: the in-progress report and its parts.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Latitude of the default map centre (Kathmandu).
pub const DEFAULT_LAT: f64 = 27.7172;
/// Longitude of the default map centre (Kathmandu).
pub const DEFAULT_LNG: f64 = 85.3240;

/// A geographic point picked on the map.
///
/// No bounds checking: any pair the picker emits is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::new(DEFAULT_LAT, DEFAULT_LNG)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// An evidence file handed over by the file picker.
///
/// The payload is opaque to the wizard; cloning shares the buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub payload: Bytes,
}

impl Attachment {
    pub fn new(name: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.payload.len()
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("name", &self.name)
            .field("size", &self.payload.len())
            .finish()
    }
}

/// Text fields of the draft addressable by `set_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Category,
    Description,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Category => "category",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The in-progress, unsubmitted report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportDraft {
    /// Category slug (lowercased catalog label), or empty when unset.
    pub category: String,
    pub description: String,
    pub location: Coordinates,
    pub attachments: Vec<Attachment>,
}

impl ReportDraft {
    /// Empty draft centred on `location`.
    pub fn with_location(location: Coordinates) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Category => &self.category,
            Field::Description => &self.description,
        }
    }

    pub(crate) fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Category => &mut self.category,
            Field::Description => &mut self.description,
        }
    }

    /// Required fields that are still empty, in display order.
    pub fn missing_required(&self) -> Vec<Field> {
        [Field::Category, Field::Description]
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect()
    }

    /// Total payload bytes across all attachments.
    pub fn attachment_bytes(&self) -> usize {
        self.attachments.iter().map(Attachment::size).sum()
    }
}
