//! Which texts to read, given how many lines are changing.
//!
//! | changing | read |
//! |----------|------|
//! | 0 | primary judgment |
//! | 1 | that line in the primary |
//! | 2 | both lines in the primary, the upper one first |
//! | 3 | both judgments |
//! | 4 | the lower unchanging line in the secondary |
//! | 5 | the one unchanging line in the secondary |
//! | 6 | secondary judgment |

use serde::Serialize;

use crate::hexagram::Hexagram;

/// The reading rule selected by the changing-line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Guidance {
    /// No changing lines.
    Stable,
    /// One changing line.
    SingleLine {
        /// Its position.
        line: usize,
    },
    /// Two changing lines.
    TwoLines {
        /// The lower position.
        lower: usize,
        /// The upper position, which carries more weight.
        upper: usize,
    },
    /// Three changing lines.
    BothJudgments,
    /// Four changing lines.
    LowerUnchanging {
        /// The lower of the two unchanging positions.
        line: usize,
    },
    /// Five changing lines.
    SoleUnchanging {
        /// The unchanging position.
        line: usize,
    },
    /// All six lines change.
    Transformed,
}

impl Guidance {
    /// Select the rule for a set of ascending changing-line indices.
    pub fn from_changing(changing: &[usize]) -> Self {
        let unchanging: Vec<usize> = (0..6).filter(|i| !changing.contains(i)).collect();
        match (changing, unchanging.as_slice()) {
            ([], _) => Self::Stable,
            ([line], _) => Self::SingleLine { line: *line },
            ([lower, upper], _) => Self::TwoLines {
                lower: *lower,
                upper: *upper,
            },
            ([_, _, _], _) => Self::BothJudgments,
            (_, [line, _]) => Self::LowerUnchanging { line: *line },
            (_, [line]) => Self::SoleUnchanging { line: *line },
            _ => Self::Transformed,
        }
    }

    /// How many lines change under this rule.
    pub fn changing_count(&self) -> usize {
        match self {
            Self::Stable => 0,
            Self::SingleLine { .. } => 1,
            Self::TwoLines { .. } => 2,
            Self::BothJudgments => 3,
            Self::LowerUnchanging { .. } => 4,
            Self::SoleUnchanging { .. } => 5,
            Self::Transformed => 6,
        }
    }

    /// Line positions whose texts to emphasise, most important first.
    pub fn focus_lines(&self) -> Vec<usize> {
        match *self {
            Self::SingleLine { line }
            | Self::LowerUnchanging { line }
            | Self::SoleUnchanging { line } => vec![line],
            Self::TwoLines { lower, upper } => vec![upper, lower],
            Self::Stable | Self::BothJudgments | Self::Transformed => Vec::new(),
        }
    }

    /// Whether the focus lines are read from the secondary hexagram.
    pub fn reads_secondary_lines(&self) -> bool {
        matches!(
            self,
            Self::LowerUnchanging { .. } | Self::SoleUnchanging { .. }
        )
    }

    /// One-sentence explanation of the rule.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Stable => {
                "No lines are changing. The primary judgment describes a situation that holds steady."
            }
            Self::SingleLine { .. } => {
                "One line is changing. Its text is the heart of the answer; the secondary hexagram shows where things lead."
            }
            Self::TwoLines { .. } => {
                "Two lines are changing. Read both, giving more weight to the upper one."
            }
            Self::BothJudgments => {
                "Three lines are changing. Weigh the judgments of the primary and secondary hexagrams together."
            }
            Self::LowerUnchanging { .. } => {
                "Four lines are changing. Read the lower of the two lines that stay fixed, in the secondary hexagram."
            }
            Self::SoleUnchanging { .. } => {
                "Five lines are changing. The one line that stays fixed, read in the secondary hexagram, is the key."
            }
            Self::Transformed => {
                "All six lines are changing. A complete reversal; the secondary judgment describes what comes."
            }
        }
    }
}

impl std::fmt::Display for Guidance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// A text singled out for attention in a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Emphasis<'a> {
    /// A hexagram's judgment.
    Judgment {
        /// The hexagram.
        hexagram: &'a Hexagram,
    },
    /// One line text.
    Line {
        /// The hexagram the text is taken from.
        hexagram: &'a Hexagram,
        /// Line position (0 = bottom).
        index: usize,
        /// The line text.
        text: &'static str,
    },
}

impl std::fmt::Display for Emphasis<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Judgment { hexagram } => {
                write!(f, "{} judgment: {}", hexagram.label(), hexagram.judgment)
            }
            Self::Line {
                hexagram,
                index,
                text,
            } => write!(
                f,
                "{} line {}: {}",
                hexagram.label(),
                crate::line::position_name(*index),
                text
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_per_count() {
        assert_eq!(Guidance::from_changing(&[]), Guidance::Stable);
        assert_eq!(
            Guidance::from_changing(&[4]),
            Guidance::SingleLine { line: 4 }
        );
        assert_eq!(
            Guidance::from_changing(&[0, 3]),
            Guidance::TwoLines { lower: 0, upper: 3 }
        );
        assert_eq!(Guidance::from_changing(&[1, 2, 5]), Guidance::BothJudgments);
        assert_eq!(
            Guidance::from_changing(&[0, 2, 3, 5]),
            Guidance::LowerUnchanging { line: 1 }
        );
        assert_eq!(
            Guidance::from_changing(&[0, 1, 2, 4, 5]),
            Guidance::SoleUnchanging { line: 3 }
        );
        assert_eq!(
            Guidance::from_changing(&[0, 1, 2, 3, 4, 5]),
            Guidance::Transformed
        );
    }

    #[test]
    fn count_round_trips() {
        let cases: [&[usize]; 7] = [
            &[],
            &[2],
            &[1, 5],
            &[0, 1, 2],
            &[2, 3, 4, 5],
            &[1, 2, 3, 4, 5],
            &[0, 1, 2, 3, 4, 5],
        ];
        for (n, changing) in cases.iter().enumerate() {
            assert_eq!(Guidance::from_changing(changing).changing_count(), n);
        }
    }

    #[test]
    fn focus_lines_put_upper_first() {
        let g = Guidance::TwoLines { lower: 1, upper: 4 };
        assert_eq!(g.focus_lines(), vec![4, 1]);
        assert!(!g.reads_secondary_lines());
    }

    #[test]
    fn judgment_rules_have_no_focus_lines() {
        assert!(Guidance::Stable.focus_lines().is_empty());
        assert!(Guidance::BothJudgments.focus_lines().is_empty());
        assert!(Guidance::Transformed.focus_lines().is_empty());
    }

    #[test]
    fn unchanging_rules_read_secondary() {
        assert!(Guidance::LowerUnchanging { line: 0 }.reads_secondary_lines());
        assert!(Guidance::SoleUnchanging { line: 0 }.reads_secondary_lines());
    }

    #[test]
    fn summary_mentions_count() {
        assert!(Guidance::Stable.to_string().starts_with("No lines"));
        assert!(Guidance::Transformed.summary().contains("six"));
    }

    #[test]
    fn emphasis_display() {
        let jie = &crate::hexagram::table::HEXAGRAMS[59];
        let e = Emphasis::Line {
            hexagram: jie,
            index: 0,
            text: jie.lines[0],
        };
        assert_eq!(
            e.to_string(),
            "No. 60 Jie (Limitation) line Initial: Not leaving the courtyard. No blame."
        );
    }
}
