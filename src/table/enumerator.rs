use std::iter::FusedIterator;

/// Every assignment of truth values to `variable_count` variables.
///
/// Rows come in standard truth table order: the leftmost variable changes
/// slowest, and every column starts with a block of `true`. The variable at
/// position `i` (0-based) flips every `2^(n - 1 - i)` rows.
///
/// Zero variables yield a single empty assignment.
#[derive(Debug, Clone)]
pub struct Assignments {
    variable_count: usize,
    next_row: u64,
    row_count: u64,
}

impl Assignments {
    /// Returns `None` when `2^variable_count` rows cannot be counted in a `u64`.
    pub fn new(variable_count: usize) -> Option<Self> {
        let row_count = u32::try_from(variable_count)
            .ok()
            .filter(|count| *count < u64::BITS)
            .map(|count| 1u64 << count)?;

        Some(Assignments {
            variable_count,
            next_row: 0,
            row_count,
        })
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    fn row(&self, row: u64) -> Vec<bool> {
        (0..self.variable_count)
            .map(|i| (row >> (self.variable_count - 1 - i)) & 1 == 0)
            .collect()
    }
}

impl Iterator for Assignments {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row >= self.row_count {
            return None;
        }

        let assignment = self.row(self.next_row);
        self.next_row += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.row_count - self.next_row) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

impl FusedIterator for Assignments {}

/// Collects all `2^variable_count` assignments, `None` past 63 variables.
pub fn enumerate(variable_count: usize) -> Option<Vec<Vec<bool>>> {
    Assignments::new(variable_count).map(|assignments| assignments.collect())
}

#[cfg(test)]
mod tests {
    use super::{enumerate, Assignments};

    #[test]
    fn test_enumerate_zero_variables() {
        assert_eq!(enumerate(0), Some(vec![Vec::<bool>::new()]));
    }

    #[test]
    fn test_enumerate_two_variables() {
        assert_eq!(
            enumerate(2),
            Some(vec![
                vec![true, true],
                vec![true, false],
                vec![false, true],
                vec![false, false],
            ])
        );
    }

    #[test]
    fn test_enumerate_block_sizes() {
        let n = 4;
        let rows = enumerate(n).unwrap();
        assert_eq!(rows.len(), 16);

        for i in 0..n {
            let block = 1usize << (n - 1 - i);
            for (index, row) in rows.iter().enumerate() {
                assert_eq!(row.len(), n);
                assert_eq!(row[i], (index / block) % 2 == 0, "row {} column {}", index, i);
            }
        }
    }

    #[test]
    fn test_assignments_exact_size() {
        let mut assignments = Assignments::new(3).unwrap();
        assert_eq!(assignments.len(), 8);
        assert_eq!(assignments.variable_count(), 3);

        assignments.next();
        assert_eq!(assignments.len(), 7);
        assert_eq!(assignments.by_ref().count(), 7);
        assert_eq!(assignments.next(), None);
    }

    #[test]
    fn test_assignments_row_count_limit() {
        let mut widest = Assignments::new(63).unwrap();
        assert_eq!(widest.variable_count(), 63);
        assert_eq!(widest.next(), Some(vec![true; 63]));

        assert!(Assignments::new(64).is_none());
        assert!(Assignments::new(usize::MAX).is_none());
        assert_eq!(enumerate(64), None);
    }
}
