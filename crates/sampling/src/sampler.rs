use apriori::PresenceTable;
use rand::{Rng, seq::index};

/// How rows are drawn. Fixed by the theorem under test: changing it voids the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    With,
    Without,
}

/// Draws `size` rows uniformly at random into a fresh table.
/// Without replacement the size is capped at the table's row count.
pub fn draw<R: Rng + ?Sized>(
    table: &PresenceTable,
    size: usize,
    replacement: Replacement,
    rng: &mut R,
) -> PresenceTable {
    let rows = table.rows();
    if rows == 0 {
        return table.select_rows(Vec::new());
    }
    match replacement {
        Replacement::Without => table.select_rows(index::sample(rng, rows, size.min(rows))),
        Replacement::With => table.select_rows((0..size).map(|_| rng.gen_range(0..rows))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use apriori::PresenceTable;
    use rand::{SeedableRng, rngs::StdRng};

    use super::{Replacement, draw};

    /// Column 0 is set on row r when r is odd, column 1 marks row 0 only.
    fn table(rows: usize) -> PresenceTable {
        let mut t = PresenceTable::new(rows, 2);
        for r in (1..rows).step_by(2) {
            t.set(r, 0, true);
        }
        t.set(0, 1, true);
        t
    }

    #[test]
    fn test_without_replacement() {
        let t = table(10);
        let mut rng = StdRng::seed_from_u64(7);
        let s = draw(&t, 10, Replacement::Without, &mut rng);
        assert_eq!(s.rows(), 10);
        // A full draw without replacement is a permutation
        assert_eq!(s.iter().filter(|r| r[0]).count(), 5);
        assert_eq!(s.iter().filter(|r| r[1]).count(), 1);
        assert_eq!(draw(&t, 50, Replacement::Without, &mut rng).rows(), 10);
    }
    #[test]
    fn test_partial_draw_has_distinct_rows() {
        // Row r holds the bits of r, so every row is distinct
        let mut t = PresenceTable::new(16, 4);
        for r in 0..16 {
            for c in 0..4 {
                t.set(r, c, (r >> c) & 1 == 1);
            }
        }
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let s = draw(&t, 9, Replacement::Without, &mut rng);
            assert_eq!(s.rows(), 9);
            let distinct: HashSet<Vec<bool>> = s.iter().map(|r| r.to_vec()).collect();
            assert_eq!(distinct.len(), 9);
        }
    }
    #[test]
    fn test_with_replacement() {
        let t = table(3);
        let mut rng = StdRng::seed_from_u64(7);
        let s = draw(&t, 300, Replacement::With, &mut rng);
        assert_eq!(s.rows(), 300);
        assert_eq!(s.columns(), 2);
        // Row 0 is the only one with column 1; drawn about 100 times
        let zeros = s.iter().filter(|r| r[1]).count();
        assert!(zeros > 50 && zeros < 150);
    }
    #[test]
    fn test_fresh_draws() {
        let t = table(1000);
        let mut rng = StdRng::seed_from_u64(1);
        let a = draw(&t, 20, Replacement::Without, &mut rng);
        let b = draw(&t, 20, Replacement::Without, &mut rng);
        assert_ne!(a, b);
    }
    #[test]
    fn test_empty() {
        let t = PresenceTable::new(0, 2);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(draw(&t, 5, Replacement::With, &mut rng).is_empty());
    }
}
