//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yj_core::Reading;

/// A single entry in the session journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A completed six-line reading.
    Reading {
        /// The question it was cast for.
        question: Option<String>,
        /// Line values 6-9, bottom first.
        values: [u8; 6],
        /// Label of the primary hexagram.
        primary: String,
        /// Label of the secondary hexagram, when it differs.
        secondary: Option<String>,
        /// Positions of the changing lines.
        changing: Vec<usize>,
        /// When the sixth line was tossed.
        timestamp: DateTime<Utc>,
    },
    /// A player note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// Record a completed reading.
    pub fn from_reading(reading: &Reading<'_>, question: Option<&str>) -> Self {
        Self::Reading {
            question: question.map(str::to_string),
            values: reading.values(),
            primary: reading.primary.label(),
            secondary: reading.secondary_if_changed().map(|h| h.label()),
            changing: reading.changing.clone(),
            timestamp: Utc::now(),
        }
    }

    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Reading { timestamp, .. } | Self::Note { timestamp, .. } => *timestamp,
        }
    }
}
