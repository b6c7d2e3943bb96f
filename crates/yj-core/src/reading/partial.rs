use serde::Serialize;

use crate::line::LineRecord;

/// A read-only view over a reading still being tossed.
///
/// Holds up to six lines; anything beyond the sixth is ignored. Never
/// resolves a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartialReading<'s> {
    lines: &'s [LineRecord],
}

impl<'s> PartialReading<'s> {
    /// View the given lines, bottom first.
    pub fn new(lines: &'s [LineRecord]) -> Self {
        let lines = &lines[..lines.len().min(6)];
        Self { lines }
    }

    /// Lines tossed so far.
    pub fn lines(&self) -> &'s [LineRecord] {
        self.lines
    }

    /// How many lines have been tossed.
    pub fn tossed(&self) -> usize {
        self.lines.len()
    }

    /// How many lines are still to come.
    pub fn remaining(&self) -> usize {
        6 - self.lines.len()
    }

    /// Whether all six lines are in.
    pub fn is_complete(&self) -> bool {
        self.lines.len() == 6
    }

    /// Position of the next line to toss.
    pub fn next_position(&self) -> Option<usize> {
        (!self.is_complete()).then_some(self.lines.len())
    }

    /// Positions of the changing lines so far, ascending.
    pub fn changing_indices(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_changing())
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::FixedFlips;
    use crate::line::generate_line;

    fn lines(heads: &[u8]) -> Vec<LineRecord> {
        let mut src = FixedFlips::from_heads(heads);
        heads.iter().map(|_| generate_line(&mut src)).collect()
    }

    #[test]
    fn empty_view() {
        let view = PartialReading::new(&[]);
        assert_eq!(view.tossed(), 0);
        assert_eq!(view.remaining(), 6);
        assert_eq!(view.next_position(), Some(0));
        assert!(view.changing_indices().is_empty());
    }

    #[test]
    fn grows_line_by_line() {
        let all = lines(&[3, 2, 1, 0, 2, 1]);
        for n in 1..=6 {
            let view = PartialReading::new(&all[..n]);
            assert_eq!(view.tossed(), n);
            assert_eq!(view.remaining(), 6 - n);
            assert_eq!(view.is_complete(), n == 6);
        }
        let view = PartialReading::new(&all[..3]);
        assert_eq!(view.changing_indices(), vec![0]);
        assert_eq!(view.next_position(), Some(3));
        let view = PartialReading::new(&all);
        assert_eq!(view.changing_indices(), vec![0, 3]);
        assert_eq!(view.next_position(), None);
    }

    #[test]
    fn ignores_extra_lines() {
        let all = lines(&[2; 8]);
        let view = PartialReading::new(&all);
        assert_eq!(view.tossed(), 6);
        assert!(view.is_complete());
    }
}
