//! Interactive divination sessions.
//!
//! A session owns the random source, tosses lines strictly in order, resolves
//! the reading once the sixth line is in, and keeps a journal of completed
//! readings and notes that can be exported as Markdown or plain text.

pub mod config;
pub mod error;
pub mod journal;
pub mod render;
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use journal::{Journal, JournalEntry};
pub use session::DivinationSession;
