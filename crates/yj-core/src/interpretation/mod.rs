//! Plain-language interpretations keyed by hexagram number.

pub mod table;

use serde::Serialize;

/// Modern reading aids for one hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    /// The hexagram this entry belongs to (King Wen number).
    pub number: u8,
    /// Overall meaning.
    pub general: &'static str,
    /// Work and undertakings.
    pub career: &'static str,
    /// Partnerships and family.
    pub relationship: &'static str,
    /// Body and energy.
    pub health: &'static str,
    /// What to do.
    pub advice: &'static str,
}

impl Interpretation {
    /// The labelled sections in display order.
    pub fn sections(&self) -> [(&'static str, &'static str); 5] {
        [
            ("General", self.general),
            ("Career", self.career),
            ("Relationships", self.relationship),
            ("Health", self.health),
            ("Advice", self.advice),
        ]
    }
}

/// Find the interpretation for `number` in `entries`.
///
/// Tables need not be complete or ordered.
pub fn find(entries: &[Interpretation], number: u8) -> Option<&Interpretation> {
    entries.iter().find(|i| i.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_in_standard_table() {
        let interp = find(&table::INTERPRETATIONS, 60).unwrap();
        assert_eq!(interp.number, 60);
        assert!(find(&table::INTERPRETATIONS, 0).is_none());
        assert!(find(&table::INTERPRETATIONS, 65).is_none());
    }

    #[test]
    fn find_in_sparse_table() {
        let sparse = [table::INTERPRETATIONS[46].clone()];
        assert!(find(&sparse, 47).is_some());
        assert!(find(&sparse, 60).is_none());
    }

    #[test]
    fn sections_in_order() {
        let names: Vec<_> = table::INTERPRETATIONS[0]
            .sections()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(
            names,
            ["General", "Career", "Relationships", "Health", "Advice"]
        );
    }
}
