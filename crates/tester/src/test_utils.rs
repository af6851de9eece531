use std::{collections::HashSet, path::Path};

use apriori::{Format, Itemset, PresenceTable, TransactionSet};

pub const BASKET: &str = "groceries.csv";
pub const ITEM_LIST: &str = "item_list.csv";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Solved {
    pub set: HashSet<Itemset>,
}
impl Solved {
    pub fn new(set: HashSet<Itemset>) -> Self {
        Self { set }
    }
    /// Every itemset over the table's columns with support at least `min_support`,
    /// found by enumerating the subsets of each row.
    pub fn brute_force(table: &PresenceTable, min_support: f64) -> Self {
        let mut counts: std::collections::HashMap<Itemset, u64> = Default::default();
        for r in 0..table.rows() {
            let present = table.present(r);
            assert!(present.len() < 20, "Row too wide to enumerate");
            for mask in 1u32..(1 << present.len()) {
                let v: Vec<usize> = present
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << *i) != 0)
                    .map(|(_, &c)| c)
                    .collect();
                *counts.entry(Itemset::new(v)).or_default() += 1;
            }
        }
        let rows = table.rows();
        counts
            .into_iter()
            .filter(|&(_, c)| rows > 0 && c as f64 / rows as f64 >= min_support)
            .map(|(s, _)| s)
            .collect::<HashSet<_>>()
            .into()
    }
}
impl From<HashSet<Itemset>> for Solved {
    fn from(other: HashSet<Itemset>) -> Self {
        Self { set: other }
    }
}
impl From<Vec<Itemset>> for Solved {
    fn from(other: Vec<Itemset>) -> Self {
        Self {
            set: other.into_iter().collect(),
        }
    }
}

pub fn load<T: AsRef<Path>>(test_files: T, name: &str, format: Format) -> TransactionSet {
    let path = test_files.as_ref().join(name);
    assert!(path.exists(), "Fixture file does not exist");
    TransactionSet::from_path(&path, format).expect("Invalid fixture file")
}

/// Runs `f` on the basket fixture and compares against brute force.
pub fn test_generic<T: AsRef<Path>>(
    test_files: T,
    min_support: f64,
    f: impl Fn(&PresenceTable, f64) -> Solved,
) {
    let data = load(test_files, BASKET, Format::Basket);
    let table = PresenceTable::encode(&data);
    let s = f(&table, min_support);
    let s2 = Solved::brute_force(&table, min_support);
    assert_eq!(s.set.len(), s2.set.len());
    assert_eq!(s, s2);
}

/// Builds a transaction set and its table from rows of item names.
pub fn from_rows(rows: &[&[&str]]) -> (TransactionSet, PresenceTable) {
    let data = TransactionSet::new(rows.iter().map(|r| r.iter().copied()));
    let table = PresenceTable::encode(&data);
    (data, table)
}

/// A table whose every column is present in exactly the first `present` rows.
pub fn uniform_table(rows: usize, columns: usize, present: usize) -> PresenceTable {
    let mut table = PresenceTable::new(rows, columns);
    for r in 0..present.min(rows) {
        for c in 0..columns {
            table.set(r, c, true);
        }
    }
    table
}
