//! Hexagram resolution: six line records in, a primary/secondary pair out.

mod partial;

pub use partial::PartialReading;

use serde::Serialize;
use tracing::debug;

use crate::error::{YiError, YiResult};
use crate::guidance::{Emphasis, Guidance};
use crate::hexagram::{Hexagram, Pattern, table::HEXAGRAMS};
use crate::interpretation::{self, Interpretation, table::INTERPRETATIONS};
use crate::line::LineRecord;

/// Looks hexagrams and interpretations up in a pair of borrowed tables.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    hexagrams: &'a [Hexagram],
    interpretations: &'a [Interpretation],
}

impl Resolver<'static> {
    /// A resolver over the compiled-in tables.
    pub fn standard() -> Self {
        Self::new(&HEXAGRAMS, &INTERPRETATIONS)
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> Resolver<'a> {
    /// A resolver over arbitrary tables.
    ///
    /// Nothing is checked here; call [`Resolver::validate`] for that.
    pub fn new(hexagrams: &'a [Hexagram], interpretations: &'a [Interpretation]) -> Self {
        Self {
            hexagrams,
            interpretations,
        }
    }

    /// The hexagram table.
    pub fn hexagrams(&self) -> &'a [Hexagram] {
        self.hexagrams
    }

    /// The hexagram drawn by `pattern`.
    pub fn hexagram_by_pattern(&self, pattern: Pattern) -> Option<&'a Hexagram> {
        self.hexagrams.iter().find(|h| h.pattern() == pattern)
    }

    /// The hexagram with King Wen number `number`.
    pub fn hexagram_by_number(&self, number: u8) -> Option<&'a Hexagram> {
        self.hexagrams.iter().find(|h| h.number == number)
    }

    /// The first hexagram, in table order, whose pinyin name, English name
    /// or character matches `name`. Case, spaces and hyphens are ignored.
    pub fn hexagram_by_name(&self, name: &str) -> Option<&'a Hexagram> {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return None;
        }
        self.hexagrams.iter().find(|h| {
            normalize(h.name) == wanted
                || normalize(h.full_name) == wanted
                || h.character == name.trim()
        })
    }

    /// Look a hexagram up by number or by name.
    pub fn lookup(&self, query: &str) -> YiResult<&'a Hexagram> {
        let found = match query.trim().parse::<u8>() {
            Ok(n) => self.hexagram_by_number(n),
            Err(_) => self.hexagram_by_name(query),
        };
        found.ok_or_else(|| YiError::UnknownHexagram(query.trim().to_string()))
    }

    /// The interpretation for hexagram `number`, if the table has one.
    pub fn interpretation(&self, number: u8) -> Option<&'a Interpretation> {
        interpretation::find(self.interpretations, number)
    }

    /// Check that the hexagram table covers every pattern exactly once and
    /// numbers 1-64 exactly once.
    pub fn validate(&self) -> YiResult<()> {
        let mut patterns = [false; 64];
        let mut numbers = [false; 64];
        for h in self.hexagrams {
            let slot = usize::from(h.number).wrapping_sub(1);
            match numbers.get_mut(slot) {
                Some(seen) if !*seen => *seen = true,
                _ => return Err(YiError::DuplicateNumber(h.number)),
            }
            let bits = usize::from(h.pattern().bits());
            if patterns[bits] {
                return Err(YiError::DuplicatePattern(h.pattern()));
            }
            patterns[bits] = true;
        }
        if let Some(missing) = Pattern::all().find(|p| !patterns[usize::from(p.bits())]) {
            return Err(YiError::PatternNotFound(missing));
        }
        Ok(())
    }

    /// Resolve six line records, bottom first, into a reading.
    pub fn resolve(&self, lines: &[LineRecord]) -> YiResult<Reading<'a>> {
        let got = lines.len();
        let lines: [LineRecord; 6] = lines
            .try_into()
            .map_err(|_| YiError::IncompleteReading { got })?;

        let primary_pattern = Pattern::from_polarities(lines.iter().map(LineRecord::polarity));
        let secondary_pattern =
            Pattern::from_polarities(lines.iter().map(|l| l.value().changed_polarity()));
        let changing: Vec<usize> = (0..6).filter(|&i| lines[i].is_changing()).collect();

        let primary = self
            .hexagram_by_pattern(primary_pattern)
            .ok_or(YiError::PatternNotFound(primary_pattern))?;
        let secondary = self
            .hexagram_by_pattern(secondary_pattern)
            .ok_or(YiError::PatternNotFound(secondary_pattern))?;

        let primary_interpretation = self.interpretation(primary.number);
        let secondary_interpretation = if secondary.number != primary.number {
            self.interpretation(secondary.number)
        } else {
            None
        };
        let guidance = Guidance::from_changing(&changing);

        debug!(
            primary = primary.number,
            secondary = secondary.number,
            changing = ?changing,
            "resolved reading"
        );

        Ok(Reading {
            lines,
            primary_pattern,
            secondary_pattern,
            primary,
            secondary,
            changing,
            primary_interpretation,
            secondary_interpretation,
            guidance,
        })
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A completed six-line reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading<'a> {
    /// The six lines, bottom first.
    pub lines: [LineRecord; 6],
    /// Pattern as tossed.
    pub primary_pattern: Pattern,
    /// Pattern after every changing line flips.
    pub secondary_pattern: Pattern,
    /// Hexagram as tossed.
    pub primary: &'a Hexagram,
    /// Hexagram after change. Same as `primary` when nothing changes.
    pub secondary: &'a Hexagram,
    /// Positions of changing lines, ascending.
    pub changing: Vec<usize>,
    /// Interpretation of the primary hexagram.
    pub primary_interpretation: Option<&'a Interpretation>,
    /// Interpretation of the secondary hexagram, only when it differs.
    pub secondary_interpretation: Option<&'a Interpretation>,
    /// Which texts to read.
    pub guidance: Guidance,
}

impl<'a> Reading<'a> {
    /// Whether any line changes.
    pub fn has_changes(&self) -> bool {
        !self.changing.is_empty()
    }

    /// The secondary hexagram, or `None` when it equals the primary.
    pub fn secondary_if_changed(&self) -> Option<&'a Hexagram> {
        (self.secondary.number != self.primary.number).then_some(self.secondary)
    }

    /// The traditional line numbers (6-9), bottom first.
    pub fn values(&self) -> [u8; 6] {
        self.lines.map(|l| l.value().number())
    }

    /// The texts to read, most important first.
    pub fn emphasis(&self) -> Vec<Emphasis<'a>> {
        let judgment = |hexagram| Emphasis::Judgment { hexagram };
        match self.guidance {
            Guidance::Stable => vec![judgment(self.primary)],
            Guidance::BothJudgments => vec![judgment(self.primary), judgment(self.secondary)],
            Guidance::Transformed => vec![judgment(self.secondary)],
            g => {
                let hexagram = if g.reads_secondary_lines() {
                    self.secondary
                } else {
                    self.primary
                };
                g.focus_lines()
                    .into_iter()
                    .filter_map(|index| {
                        hexagram.line_text(index).map(|text| Emphasis::Line {
                            hexagram,
                            index,
                            text,
                        })
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::FixedFlips;
    use crate::line::generate_line;
    use proptest::prelude::*;

    fn lines_from_heads(heads: &[u8]) -> Vec<LineRecord> {
        let mut src = FixedFlips::from_heads(heads);
        (0..heads.len()).map(|_| generate_line(&mut src)).collect()
    }

    #[test]
    fn standard_tables_validate() {
        assert_eq!(Resolver::standard().validate(), Ok(()));
    }

    #[test]
    fn all_heads() {
        let reading = Resolver::standard()
            .resolve(&lines_from_heads(&[3; 6]))
            .unwrap();
        assert_eq!(reading.values(), [9; 6]);
        assert_eq!(reading.primary_pattern, Pattern::ALL_YANG);
        assert_eq!(reading.secondary_pattern, Pattern::ALL_YIN);
        assert_eq!(reading.changing, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(reading.primary.number, 1);
        assert_eq!(reading.secondary.number, 2);
        assert_eq!(reading.guidance, Guidance::Transformed);
    }

    #[test]
    fn all_tails() {
        let reading = Resolver::standard()
            .resolve(&lines_from_heads(&[0; 6]))
            .unwrap();
        assert_eq!(reading.values(), [6; 6]);
        assert_eq!(reading.primary_pattern, Pattern::ALL_YIN);
        assert_eq!(reading.secondary_pattern, Pattern::ALL_YANG);
        assert_eq!(reading.changing.len(), 6);
        assert_eq!(reading.primary.number, 2);
        assert_eq!(reading.secondary.number, 1);
    }

    #[test]
    fn no_changing_lines() {
        let reading = Resolver::standard()
            .resolve(&lines_from_heads(&[2, 1, 2, 1, 2, 1]))
            .unwrap();
        assert_eq!(reading.values(), [7, 8, 7, 8, 7, 8]);
        assert!(!reading.has_changes());
        assert_eq!(reading.primary.number, reading.secondary.number);
        assert_eq!(reading.primary_pattern.bits(), 0b010_101);
        assert!(reading.secondary_if_changed().is_none());
        assert!(reading.secondary_interpretation.is_none());
        assert!(reading.primary_interpretation.is_some());
        assert_eq!(reading.guidance, Guidance::Stable);
        // Water over fire.
        assert_eq!(reading.primary.name, "Ji Ji");
    }

    #[test]
    fn mixed_reading() {
        let reading = Resolver::standard()
            .resolve(&lines_from_heads(&[3, 2, 1, 0, 2, 1]))
            .unwrap();
        assert_eq!(reading.values(), [9, 7, 8, 6, 7, 8]);
        assert_eq!(reading.changing, vec![0, 3]);
        assert_eq!(reading.primary_pattern.bits(), 0b010_011);
        assert_eq!(reading.secondary_pattern.bits(), 0b011_010);
        assert_eq!(reading.primary.number, 60);
        assert_eq!(reading.primary.name, "Jie");
        assert_eq!(reading.secondary.number, 47);
        assert_eq!(reading.secondary.name, "Kun");
        assert_eq!(reading.primary_interpretation.map(|i| i.number), Some(60));
        assert_eq!(reading.secondary_interpretation.map(|i| i.number), Some(47));
        assert_eq!(reading.guidance, Guidance::TwoLines { lower: 0, upper: 3 });
    }

    #[test]
    fn emphasis_follows_guidance() {
        let resolver = Resolver::standard();

        let two = resolver
            .resolve(&lines_from_heads(&[3, 2, 1, 0, 2, 1]))
            .unwrap();
        let emphasis = two.emphasis();
        assert_eq!(emphasis.len(), 2);
        assert!(matches!(
            emphasis[0],
            Emphasis::Line { index: 3, hexagram, .. } if hexagram.number == 60
        ));

        let stable = resolver.resolve(&lines_from_heads(&[2; 6])).unwrap();
        assert_eq!(
            stable.emphasis(),
            vec![Emphasis::Judgment {
                hexagram: stable.primary
            }]
        );

        // Four changing: lines 1 and 4 stay fixed, line 1 is read in the secondary.
        let four = resolver
            .resolve(&lines_from_heads(&[3, 2, 0, 3, 1, 0]))
            .unwrap();
        assert_eq!(four.guidance, Guidance::LowerUnchanging { line: 1 });
        assert_eq!(
            four.emphasis(),
            vec![Emphasis::Line {
                hexagram: four.secondary,
                index: 1,
                text: four.secondary.lines[1],
            }]
        );

        let three = resolver
            .resolve(&lines_from_heads(&[3, 3, 3, 2, 2, 2]))
            .unwrap();
        assert_eq!(three.emphasis().len(), 2);
    }

    #[test]
    fn wrong_line_count_is_rejected() {
        let resolver = Resolver::standard();
        assert_eq!(
            resolver.resolve(&lines_from_heads(&[2; 5])),
            Err(YiError::IncompleteReading { got: 5 })
        );
        assert_eq!(
            resolver.resolve(&lines_from_heads(&[2; 7])),
            Err(YiError::IncompleteReading { got: 7 })
        );
        assert_eq!(
            resolver.resolve(&[]),
            Err(YiError::IncompleteReading { got: 0 })
        );
    }

    #[test]
    fn incomplete_table_is_fatal() {
        // Drop Qian: an all-yang toss has nothing to resolve to.
        let resolver = Resolver::new(&HEXAGRAMS[1..], &INTERPRETATIONS);
        assert_eq!(
            resolver.resolve(&lines_from_heads(&[2; 6])),
            Err(YiError::PatternNotFound(Pattern::ALL_YANG))
        );
        assert_eq!(
            resolver.validate(),
            Err(YiError::PatternNotFound(Pattern::ALL_YANG))
        );
    }

    #[test]
    fn validate_reports_duplicates() {
        let mut table = HEXAGRAMS.to_vec();
        table[1] = HEXAGRAMS[0].clone();
        assert_eq!(
            Resolver::new(&table, &[]).validate(),
            Err(YiError::DuplicateNumber(1))
        );

        let mut table = HEXAGRAMS.to_vec();
        table[1].upper = table[0].upper;
        table[1].lower = table[0].lower;
        assert_eq!(
            Resolver::new(&table, &[]).validate(),
            Err(YiError::DuplicatePattern(Pattern::ALL_YANG))
        );

        let mut table = HEXAGRAMS.to_vec();
        table[5].number = 0;
        assert_eq!(
            Resolver::new(&table, &[]).validate(),
            Err(YiError::DuplicateNumber(0))
        );
    }

    #[test]
    fn missing_interpretations_are_none() {
        let sparse = [INTERPRETATIONS[59].clone()];
        let resolver = Resolver::new(&HEXAGRAMS, &sparse);
        let reading = resolver
            .resolve(&lines_from_heads(&[3, 2, 1, 0, 2, 1]))
            .unwrap();
        assert_eq!(reading.primary_interpretation.map(|i| i.number), Some(60));
        assert!(reading.secondary_interpretation.is_none());

        let none = Resolver::new(&HEXAGRAMS, &[]);
        let reading = none.resolve(&lines_from_heads(&[2; 6])).unwrap();
        assert!(reading.primary_interpretation.is_none());
    }

    #[test]
    fn lookups() {
        let r = Resolver::standard();
        assert_eq!(r.hexagram_by_number(60).map(|h| h.name), Some("Jie"));
        assert!(r.hexagram_by_number(0).is_none());
        assert!(r.hexagram_by_number(65).is_none());
        assert_eq!(r.hexagram_by_name("wei ji").map(|h| h.number), Some(64));
        assert_eq!(r.hexagram_by_name("WeiJi").map(|h| h.number), Some(64));
        assert_eq!(r.hexagram_by_name("limitation").map(|h| h.number), Some(60));
        assert_eq!(r.hexagram_by_name("節").map(|h| h.number), Some(60));
        // Shared pinyin resolves to the first in sequence.
        assert_eq!(r.hexagram_by_name("kun").map(|h| h.number), Some(2));
        assert_eq!(r.hexagram_by_name("oppression").map(|h| h.number), Some(47));
        assert!(r.hexagram_by_name("").is_none());
        assert_eq!(
            r.hexagram_by_pattern(Pattern::new(0b010_011).unwrap())
                .map(|h| h.number),
            Some(60)
        );
    }

    #[test]
    fn lookup_by_query() {
        let r = Resolver::standard();
        assert_eq!(r.lookup("47").map(|h| h.name), Ok("Kun"));
        assert_eq!(r.lookup(" jie ").map(|h| h.number), Ok(60));
        assert_eq!(
            r.lookup("99"),
            Err(YiError::UnknownHexagram("99".to_string()))
        );
        assert_eq!(
            r.lookup("nothing"),
            Err(YiError::UnknownHexagram("nothing".to_string()))
        );
    }

    #[test]
    fn reading_serializes() {
        let reading = Resolver::standard()
            .resolve(&lines_from_heads(&[3, 2, 1, 0, 2, 1]))
            .unwrap();
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["primary"]["number"], 60);
        assert_eq!(json["secondary"]["number"], 47);
        assert_eq!(json["primary_pattern"], 0b010_011);
        assert_eq!(json["lines"][0]["value"], 9);
        assert_eq!(json["changing"], serde_json::json!([0, 3]));
        assert_eq!(json["guidance"]["rule"], "two_lines");
    }

    proptest! {
        #[test]
        fn resolve_is_deterministic(heads in proptest::collection::vec(0u8..=3, 6)) {
            let resolver = Resolver::standard();
            let lines = lines_from_heads(&heads);
            prop_assert_eq!(resolver.resolve(&lines), resolver.resolve(&lines));
        }

        #[test]
        fn patterns_differ_exactly_at_changing_lines(heads in proptest::collection::vec(0u8..=3, 6)) {
            let reading = Resolver::standard().resolve(&lines_from_heads(&heads)).unwrap();
            prop_assert_eq!(
                reading.primary_pattern.diff(reading.secondary_pattern),
                reading.changing.clone()
            );
            prop_assert!(reading.changing.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(reading.changing.iter().all(|&i| i < 6));
            if reading.changing.is_empty() {
                prop_assert_eq!(reading.primary.number, reading.secondary.number);
            }
            prop_assert_eq!(reading.primary.pattern(), reading.primary_pattern);
            prop_assert_eq!(reading.secondary.pattern(), reading.secondary_pattern);
            prop_assert_eq!(reading.guidance.changing_count(), reading.changing.len());
        }

        #[test]
        fn changing_set_comes_from_values(heads in proptest::collection::vec(0u8..=3, 6)) {
            let reading = Resolver::standard().resolve(&lines_from_heads(&heads)).unwrap();
            let expected: Vec<usize> = heads
                .iter()
                .enumerate()
                .filter(|(_, h)| **h == 0 || **h == 3)
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(reading.changing, expected);
        }
    }
}
