//! Journaling for completed readings and notes.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
