//! Hexagram patterns and the static hexagram record.
//!
//! A hexagram is identified by a six-bit [`Pattern`] (bottom line = bit 0,
//! top line = bit 5, yang = 1) and by its King Wen number 1-64. The 64
//! records live in [`table::HEXAGRAMS`].

pub mod table;

use serde::{Deserialize, Serialize};

use crate::error::{YiError, YiResult};
use crate::line::Polarity;
use crate::trigram::Trigram;

/// A six-line bit pattern, always in `0..=63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Pattern(u8);

impl Pattern {
    /// Six yin lines.
    pub const ALL_YIN: Self = Self(0);
    /// Six yang lines.
    pub const ALL_YANG: Self = Self(0b11_1111);

    /// Validate a raw bit pattern.
    pub fn new(bits: u8) -> YiResult<Self> {
        if bits > 0b11_1111 {
            return Err(YiError::InvalidPattern(bits));
        }
        Ok(Self(bits))
    }

    /// Stack an upper trigram on a lower one.
    pub const fn from_trigrams(upper: Trigram, lower: Trigram) -> Self {
        Self((upper.bits() << 3) | lower.bits())
    }

    /// Assemble a pattern from polarities, bottom line first.
    ///
    /// Polarities past the sixth are ignored.
    pub fn from_polarities(polarities: impl IntoIterator<Item = Polarity>) -> Self {
        let bits = polarities
            .into_iter()
            .take(6)
            .enumerate()
            .fold(0u8, |acc, (i, p)| acc | (p.bit() << i));
        Self(bits)
    }

    /// The raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Polarity of line `index` (0 = bottom). Indices above 5 read as yin.
    pub fn line(self, index: usize) -> Polarity {
        if index > 5 {
            return Polarity::Yin;
        }
        Polarity::from_bit(self.0 >> index)
    }

    /// This pattern with line `index` flipped. Indices above 5 are ignored.
    pub fn flip(self, index: usize) -> Self {
        if index > 5 {
            return self;
        }
        Self(self.0 ^ (1 << index))
    }

    /// The lower trigram (lines 0-2).
    pub const fn lower(self) -> Trigram {
        Trigram::from_bits(self.0)
    }

    /// The upper trigram (lines 3-5).
    pub const fn upper(self) -> Trigram {
        Trigram::from_bits(self.0 >> 3)
    }

    /// Line positions where `self` and `other` differ, ascending.
    pub fn diff(self, other: Self) -> Vec<usize> {
        let x = self.0 ^ other.0;
        (0..6).filter(|i| x & (1 << i) != 0).collect()
    }

    /// Every pattern from `0b000000` to `0b111111`.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=0b11_1111u8).map(Self)
    }
}

/// Written top line first, the way the figure is drawn.
impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06b}", self.0)
    }
}

impl From<Pattern> for u8 {
    fn from(p: Pattern) -> Self {
        p.0
    }
}

impl TryFrom<u8> for Pattern {
    type Error = YiError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

/// Static reference data for one of the 64 hexagrams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    /// King Wen sequence number, 1-64.
    pub number: u8,
    /// Pinyin name.
    pub name: &'static str,
    /// English name.
    pub full_name: &'static str,
    /// Chinese character(s).
    pub character: &'static str,
    /// Upper trigram (lines 4-6).
    pub upper: Trigram,
    /// Lower trigram (lines 1-3).
    pub lower: Trigram,
    /// The judgment text.
    pub judgment: &'static str,
    /// Line texts, bottom to top.
    pub lines: [&'static str; 6],
}

impl Hexagram {
    /// The six-bit pattern formed by the two trigrams.
    pub const fn pattern(&self) -> Pattern {
        Pattern::from_trigrams(self.upper, self.lower)
    }

    /// The Unicode hexagram symbol (U+4DC0 block, King Wen order).
    pub fn symbol(&self) -> char {
        char::from_u32(0x4DC0 + u32::from(self.number.saturating_sub(1))).unwrap_or('?')
    }

    /// The text of line `index` (0 = bottom).
    pub fn line_text(&self, index: usize) -> Option<&'static str> {
        self.lines.get(index).copied()
    }

    /// Short label such as `No. 60 Jie (Limitation)`.
    pub fn label(&self) -> String {
        format!("No. {} {} ({})", self.number, self.name, self.full_name)
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_validation() {
        assert!(Pattern::new(63).is_ok());
        assert_eq!(Pattern::new(64), Err(YiError::InvalidPattern(64)));
    }

    #[test]
    fn pattern_from_trigrams() {
        let p = Pattern::from_trigrams(Trigram::Kan, Trigram::Dui);
        assert_eq!(p.bits(), 0b010_011);
        assert_eq!(p.upper(), Trigram::Kan);
        assert_eq!(p.lower(), Trigram::Dui);
    }

    #[test]
    fn pattern_from_polarities_bottom_first() {
        use Polarity::{Yang, Yin};
        let p = Pattern::from_polarities([Yang, Yang, Yin, Yin, Yang, Yin]);
        assert_eq!(p.bits(), 0b010011);
        assert_eq!(p.line(0), Yang);
        assert_eq!(p.line(2), Yin);
        assert_eq!(p.line(4), Yang);
    }

    #[test]
    fn flip_and_diff() {
        let p = Pattern::ALL_YANG.flip(0).flip(3);
        assert_eq!(p.bits(), 0b110110);
        assert_eq!(p.diff(Pattern::ALL_YANG), vec![0, 3]);
        assert_eq!(p.flip(9), p);
        assert!(p.diff(p).is_empty());
    }

    #[test]
    fn display_top_line_first() {
        assert_eq!(Pattern::new(0b000001).unwrap().to_string(), "000001");
        assert_eq!(Pattern::ALL_YANG.to_string(), "111111");
    }

    #[test]
    fn all_patterns() {
        assert_eq!(Pattern::all().count(), 64);
    }

    #[test]
    fn serde_as_number() {
        let p = Pattern::new(19).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "19");
        assert!(serde_json::from_str::<Pattern>("64").is_err());
    }

    #[test]
    fn hexagram_symbol_and_label() {
        let first = &table::HEXAGRAMS[0];
        assert_eq!(first.symbol(), '䷀');
        let last = &table::HEXAGRAMS[63];
        assert_eq!(last.symbol(), '䷿');
        assert_eq!(first.label(), "No. 1 Qian (The Creative)");
        assert_eq!(first.line_text(6), None);
    }
}
