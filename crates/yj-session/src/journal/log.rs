//! Journal storage and export.

use serde::{Deserialize, Serialize};
use yj_core::line::position_name;

use super::entry::JournalEntry;

/// A chronological log of readings and notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of completed readings.
    pub fn reading_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, JournalEntry::Reading { .. }))
            .count()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Yijing Journal\n\n");
        let mut reading_no = 0;
        for entry in &self.entries {
            let stamp = entry.timestamp().format("%Y-%m-%d %H:%M UTC");
            match entry {
                JournalEntry::Reading {
                    question,
                    values,
                    primary,
                    secondary,
                    changing,
                    ..
                } => {
                    reading_no += 1;
                    out.push_str(&format!("## Reading {reading_no}\n\n"));
                    out.push_str(&format!("*{stamp}*\n\n"));
                    if let Some(q) = question {
                        out.push_str(&format!("**Question**: {q}\n"));
                    }
                    out.push_str(&format!("**Lines**: {}\n", join_values(values)));
                    out.push_str(&format!("**Hexagram**: {primary}\n"));
                    if !changing.is_empty() {
                        out.push_str(&format!("**Changing**: {}\n", join_positions(changing)));
                    }
                    if let Some(s) = secondary {
                        out.push_str(&format!("**Becomes**: {s}\n"));
                    }
                    out.push('\n');
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Yijing Journal\n==============\n\n");
        for entry in &self.entries {
            let stamp = entry.timestamp().format("%Y-%m-%d %H:%M UTC");
            match entry {
                JournalEntry::Reading {
                    question,
                    values,
                    primary,
                    secondary,
                    changing,
                    ..
                } => {
                    out.push_str(&format!("[{stamp}] {primary}\n"));
                    if let Some(q) = question {
                        out.push_str(&format!("  Question: {q}\n"));
                    }
                    out.push_str(&format!("  Lines: {}\n", join_values(values)));
                    if !changing.is_empty() {
                        out.push_str(&format!("  Changing: {}\n", join_positions(changing)));
                    }
                    if let Some(s) = secondary {
                        out.push_str(&format!("  Becomes: {s}\n"));
                    }
                    out.push('\n');
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("[{stamp}] Note: {text}\n\n"));
                }
            }
        }
        out
    }
}

fn join_values(values: &[u8]) -> String {
    let vals: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    vals.join(" ")
}

fn join_positions(indices: &[usize]) -> String {
    let names: Vec<&str> = indices.iter().map(|&i| position_name(i)).collect();
    names.join(", ")
}
