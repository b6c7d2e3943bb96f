//! Coin-toss divination core for Yijing.
//!
//! Converts three-coin tosses into line values, assembles six lines into a
//! primary hexagram, derives the changed (secondary) hexagram from any
//! changing lines, and attaches interpretation data from compiled-in tables.
//! Randomness is always injected through [`CoinSource`], so every result is
//! reproducible from a seed or a scripted flip sequence.

pub mod coin;
pub mod error;
pub mod guidance;
pub mod hexagram;
pub mod interpretation;
pub mod line;
pub mod reading;
pub mod trigram;

pub use coin::{CoinFace, CoinSource, FixedFlips};
pub use error::{YiError, YiResult};
pub use guidance::{Emphasis, Guidance};
pub use hexagram::{Hexagram, Pattern};
pub use interpretation::Interpretation;
pub use line::{LineRecord, LineValue, Polarity, generate_line};
pub use reading::{PartialReading, Reading, Resolver};
pub use trigram::Trigram;
