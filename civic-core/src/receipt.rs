//! Submission receipt: the in-memory acknowledgement of a simulated submit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, ReportDraft};

/// Hex characters kept from the content hash.
const REFERENCE_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Short content-derived reference the reporter can quote.
    pub reference: String,
    pub submitted_at: DateTime<Utc>,
    pub category: String,
    pub location: Coordinates,
    pub attachment_count: usize,
    pub attachment_bytes: usize,
}

impl Receipt {
    /// Hash the draft contents together with the submission time.
    pub fn issue(draft: &ReportDraft, submitted_at: DateTime<Utc>) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(draft.category.as_bytes());
        hasher.update(&[0]);
        hasher.update(draft.description.as_bytes());
        hasher.update(&[0]);
        hasher.update(&draft.location.lat.to_le_bytes());
        hasher.update(&draft.location.lng.to_le_bytes());
        for attachment in &draft.attachments {
            hasher.update(attachment.name.as_bytes());
            hasher.update(&[0]);
            hasher.update(&attachment.payload);
        }
        hasher.update(submitted_at.to_rfc3339().as_bytes());

        let hex = hasher.finalize().to_hex();
        Self {
            reference: hex.as_str()[..REFERENCE_LEN].to_string(),
            submitted_at,
            category: draft.category.clone(),
            location: draft.location,
            attachment_count: draft.attachments.len(),
            attachment_bytes: draft.attachment_bytes(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
