//! The eight trigrams.
//!
//! A trigram is three lines. Bits follow the hexagram convention: the
//! bottom line is bit 0, so Zhen (one yang line at the bottom) is `0b001`.

use serde::{Deserialize, Serialize};

/// One of the eight three-line figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☷ Earth, `000`.
    Kun,
    /// ☳ Thunder, `001`.
    Zhen,
    /// ☵ Water, `010`.
    Kan,
    /// ☱ Lake, `011`.
    Dui,
    /// ☶ Mountain, `100`.
    Gen,
    /// ☲ Fire, `101`.
    Li,
    /// ☴ Wind, `110`.
    Xun,
    /// ☰ Heaven, `111`.
    Qian,
}

impl Trigram {
    /// All trigrams, indexed by their bit pattern.
    pub const ALL: [Self; 8] = [
        Self::Kun,
        Self::Zhen,
        Self::Kan,
        Self::Dui,
        Self::Gen,
        Self::Li,
        Self::Xun,
        Self::Qian,
    ];

    /// The trigram for the lowest three bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b111) as usize]
    }

    /// Parse a trigram from its pinyin name or its image, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s) || t.image().eq_ignore_ascii_case(s))
    }

    /// The three-bit pattern, bottom line first.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Kun => 0b000,
            Self::Zhen => 0b001,
            Self::Kan => 0b010,
            Self::Dui => 0b011,
            Self::Gen => 0b100,
            Self::Li => 0b101,
            Self::Xun => 0b110,
            Self::Qian => 0b111,
        }
    }

    /// The Unicode trigram symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Qian => '☰',
            Self::Dui => '☱',
            Self::Li => '☲',
            Self::Zhen => '☳',
            Self::Xun => '☴',
            Self::Kan => '☵',
            Self::Gen => '☶',
            Self::Kun => '☷',
        }
    }

    /// Pinyin name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Li => "Li",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Kan => "Kan",
            Self::Gen => "Gen",
            Self::Kun => "Kun",
        }
    }

    /// The natural image the trigram stands for.
    pub fn image(self) -> &'static str {
        match self {
            Self::Qian => "Heaven",
            Self::Dui => "Lake",
            Self::Li => "Fire",
            Self::Zhen => "Thunder",
            Self::Xun => "Wind",
            Self::Kan => "Water",
            Self::Gen => "Mountain",
            Self::Kun => "Earth",
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.symbol(), self.name(), self.image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_round_trip() {
        for (i, t) in Trigram::ALL.iter().enumerate() {
            assert_eq!(t.bits() as usize, i);
            assert_eq!(Trigram::from_bits(t.bits()), *t);
        }
    }

    #[test]
    fn from_bits_ignores_high_bits() {
        assert_eq!(Trigram::from_bits(0b1111_1000), Trigram::Kun);
        assert_eq!(Trigram::from_bits(0b0000_1111), Trigram::Qian);
    }

    #[test]
    fn line_figures_match_bits() {
        // Zhen: yang at the bottom; Gen: yang at the top.
        assert_eq!(Trigram::Zhen.bits() & 1, 1);
        assert_eq!(Trigram::Gen.bits() & 0b100, 0b100);
        // Kan: yang in the middle; Li: yin in the middle.
        assert_eq!(Trigram::Kan.bits(), 0b010);
        assert_eq!(Trigram::Li.bits(), 0b101);
    }

    #[test]
    fn parse_name_or_image() {
        assert_eq!(Trigram::parse("kan"), Some(Trigram::Kan));
        assert_eq!(Trigram::parse("Water"), Some(Trigram::Kan));
        assert_eq!(Trigram::parse(" THUNDER "), Some(Trigram::Zhen));
        assert_eq!(Trigram::parse("cloud"), None);
    }

    #[test]
    fn display() {
        assert_eq!(Trigram::Qian.to_string(), "☰ Qian (Heaven)");
        assert_eq!(Trigram::Kan.to_string(), "☵ Kan (Water)");
    }
}
