//! Line values and the three-coin line generator.
//!
//! Three coins are tossed per line. The number of heads decides the value:
//!
//! | heads | value | polarity | changing |
//! |-------|-------|----------|----------|
//! | 3     | 9     | yang     | yes      |
//! | 2     | 7     | yang     | no       |
//! | 1     | 8     | yin      | no       |
//! | 0     | 6     | yin      | yes      |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coin::{CoinFace, CoinSource};
use crate::error::YiError;

/// Traditional names of the six line positions, bottom to top.
pub const POSITION_NAMES: [&str; 6] = ["Initial", "Second", "Third", "Fourth", "Fifth", "Top"];

/// The name of a line position (0 = bottom), or `"?"` when out of range.
pub fn position_name(index: usize) -> &'static str {
    POSITION_NAMES.get(index).copied().unwrap_or("?")
}

/// Whether a line is broken or solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Broken line, bit 0.
    Yin,
    /// Solid line, bit 1.
    Yang,
}

impl Polarity {
    /// The bit this polarity contributes to a pattern.
    pub fn bit(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }

    /// Polarity for a single pattern bit (only the lowest bit is read).
    pub fn from_bit(bit: u8) -> Self {
        if bit & 1 == 1 { Self::Yang } else { Self::Yin }
    }

    /// The opposite polarity.
    pub fn flipped(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }

    /// Monogram glyph: `⚊` for yang, `⚋` for yin.
    pub fn glyph(self) -> char {
        match self {
            Self::Yin => '⚋',
            Self::Yang => '⚊',
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "yin"),
            Self::Yang => write!(f, "yang"),
        }
    }
}

/// One of the four line values produced by a toss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LineValue {
    /// 6: yin, changing.
    OldYin,
    /// 7: yang, stable.
    YoungYang,
    /// 8: yin, stable.
    YoungYin,
    /// 9: yang, changing.
    OldYang,
}

impl LineValue {
    /// All values in numeric order.
    pub const ALL: [Self; 4] = [Self::OldYin, Self::YoungYang, Self::YoungYin, Self::OldYang];

    /// Value for three coin faces, by heads count.
    pub fn from_flips(flips: &[CoinFace; 3]) -> Self {
        match flips.iter().filter(|f| f.is_heads()).count() {
            0 => Self::OldYin,
            1 => Self::YoungYin,
            2 => Self::YoungYang,
            _ => Self::OldYang,
        }
    }

    /// Value for a heads count, or `None` outside `0..=3`.
    pub fn from_heads(heads: u8) -> Option<Self> {
        match heads {
            0 => Some(Self::OldYin),
            1 => Some(Self::YoungYin),
            2 => Some(Self::YoungYang),
            3 => Some(Self::OldYang),
            _ => None,
        }
    }

    /// The traditional number (6, 7, 8 or 9).
    pub fn number(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Polarity of the line as tossed.
    pub fn polarity(self) -> Polarity {
        match self {
            Self::YoungYang | Self::OldYang => Polarity::Yang,
            Self::OldYin | Self::YoungYin => Polarity::Yin,
        }
    }

    /// Whether the line is unstable and flips in the secondary hexagram.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// Polarity after change: flipped for 6 and 9, unchanged otherwise.
    pub fn changed_polarity(self) -> Polarity {
        if self.is_changing() {
            self.polarity().flipped()
        } else {
            self.polarity()
        }
    }

    /// Marker for a changing line: `○` for old yang, `×` for old yin.
    pub fn change_marker(self) -> Option<char> {
        match self {
            Self::OldYang => Some('○'),
            Self::OldYin => Some('×'),
            Self::YoungYang | Self::YoungYin => None,
        }
    }
}

impl std::fmt::Display for LineValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OldYin => write!(f, "old yin"),
            Self::YoungYang => write!(f, "young yang"),
            Self::YoungYin => write!(f, "young yin"),
            Self::OldYang => write!(f, "old yang"),
        }
    }
}

impl From<LineValue> for u8 {
    fn from(value: LineValue) -> Self {
        value.number()
    }
}

impl TryFrom<u8> for LineValue {
    type Error = YiError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::YoungYang),
            8 => Ok(Self::YoungYin),
            9 => Ok(Self::OldYang),
            other => Err(YiError::InvalidLineValue(other)),
        }
    }
}

/// The outcome of one three-coin toss. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRecord {
    value: LineValue,
    flips: [CoinFace; 3],
    is_changing: bool,
}

impl LineRecord {
    /// Build a record from three coin faces.
    pub fn from_flips(flips: [CoinFace; 3]) -> Self {
        let value = LineValue::from_flips(&flips);
        Self {
            value,
            flips,
            is_changing: value.is_changing(),
        }
    }

    /// The line value.
    pub fn value(&self) -> LineValue {
        self.value
    }

    /// The three coin faces in toss order.
    pub fn flips(&self) -> &[CoinFace; 3] {
        &self.flips
    }

    /// Number of heads among the three flips.
    pub fn heads(&self) -> usize {
        self.flips.iter().filter(|f| f.is_heads()).count()
    }

    /// Whether this line changes.
    pub fn is_changing(&self) -> bool {
        self.is_changing
    }

    /// Polarity as tossed.
    pub fn polarity(&self) -> Polarity {
        self.value.polarity()
    }
}

/// Toss three coins from `source` and record the resulting line.
pub fn generate_line<S: CoinSource + ?Sized>(source: &mut S) -> LineRecord {
    let flips = [
        CoinFace::from_flip(source.flip()),
        CoinFace::from_flip(source.flip()),
        CoinFace::from_flip(source.flip()),
    ];
    let line = LineRecord::from_flips(flips);
    debug!(
        value = line.value.number(),
        changing = line.is_changing,
        "generated line"
    );
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::FixedFlips;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use CoinFace::{Heads, Tails};

    #[test]
    fn heads_count_mapping() {
        assert_eq!(LineValue::from_flips(&[Heads, Heads, Heads]).number(), 9);
        assert_eq!(LineValue::from_flips(&[Heads, Tails, Heads]).number(), 7);
        assert_eq!(LineValue::from_flips(&[Tails, Tails, Heads]).number(), 8);
        assert_eq!(LineValue::from_flips(&[Tails, Tails, Tails]).number(), 6);
    }

    #[test]
    fn from_heads_matches_from_flips() {
        assert_eq!(LineValue::from_heads(3), Some(LineValue::OldYang));
        assert_eq!(LineValue::from_heads(2), Some(LineValue::YoungYang));
        assert_eq!(LineValue::from_heads(1), Some(LineValue::YoungYin));
        assert_eq!(LineValue::from_heads(0), Some(LineValue::OldYin));
        assert_eq!(LineValue::from_heads(4), None);
    }

    #[test]
    fn all_eight_flip_outcomes_are_consistent() {
        for bits in 0u8..8 {
            let flips = [
                CoinFace::from_flip(bits & 1 != 0),
                CoinFace::from_flip(bits & 2 != 0),
                CoinFace::from_flip(bits & 4 != 0),
            ];
            let line = LineRecord::from_flips(flips);
            let n = line.value().number();
            assert!((6..=9).contains(&n));
            assert_eq!(line.is_changing(), n == 6 || n == 9);
            assert_eq!(line.polarity() == Polarity::Yin, n == 6 || n == 8);
            assert_eq!(line.polarity() == Polarity::Yang, n == 7 || n == 9);
            assert_eq!(line.heads(), bits.count_ones() as usize);
        }
    }

    #[test]
    fn changed_polarity() {
        assert_eq!(LineValue::OldYang.changed_polarity(), Polarity::Yin);
        assert_eq!(LineValue::OldYin.changed_polarity(), Polarity::Yang);
        assert_eq!(LineValue::YoungYang.changed_polarity(), Polarity::Yang);
        assert_eq!(LineValue::YoungYin.changed_polarity(), Polarity::Yin);
    }

    #[test]
    fn numeric_conversion() {
        for v in LineValue::ALL {
            assert_eq!(LineValue::try_from(u8::from(v)), Ok(v));
        }
        assert_eq!(LineValue::try_from(5), Err(YiError::InvalidLineValue(5)));
        assert_eq!(LineValue::try_from(10), Err(YiError::InvalidLineValue(10)));
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&LineValue::OldYang).unwrap(), "9");
        let v: LineValue = serde_json::from_str("8").unwrap();
        assert_eq!(v, LineValue::YoungYin);
        assert!(serde_json::from_str::<LineValue>("4").is_err());
    }

    #[test]
    fn glyphs_and_markers() {
        assert_eq!(Polarity::Yang.glyph(), '⚊');
        assert_eq!(Polarity::Yin.glyph(), '⚋');
        assert_eq!(LineValue::OldYang.change_marker(), Some('○'));
        assert_eq!(LineValue::OldYin.change_marker(), Some('×'));
        assert_eq!(LineValue::YoungYin.change_marker(), None);
    }

    #[test]
    fn value_display() {
        assert_eq!(LineValue::OldYin.to_string(), "old yin");
        assert_eq!(LineValue::YoungYang.to_string(), "young yang");
    }

    #[test]
    fn generate_line_from_fixed_flips() {
        let mut src = FixedFlips::new([true, false, true]);
        let line = generate_line(&mut src);
        assert_eq!(line.value(), LineValue::YoungYang);
        assert_eq!(line.flips(), &[Heads, Tails, Heads]);
        assert!(!line.is_changing());
    }

    #[test]
    fn generate_line_consumes_three_flips() {
        let mut src = FixedFlips::from_heads(&[3, 0]);
        assert_eq!(generate_line(&mut src).value(), LineValue::OldYang);
        assert_eq!(src.remaining(), 3);
        assert_eq!(generate_line(&mut src).value(), LineValue::OldYin);
    }

    #[test]
    fn generate_line_with_rng_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let line = generate_line(&mut rng);
            assert_eq!(line.is_changing(), line.value().is_changing());
        }
    }

    #[test]
    fn all_values_appear_over_many_tosses() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..400 {
            seen.insert(generate_line(&mut rng).value());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn position_names() {
        assert_eq!(position_name(0), "Initial");
        assert_eq!(position_name(5), "Top");
        assert_eq!(position_name(6), "?");
    }
}
