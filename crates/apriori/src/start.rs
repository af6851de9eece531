use crate::{itemset::Itemset, table::PresenceTable};

/// Finds every itemset whose support over `table` is at least `min_support`.
/// Support is the fraction of rows containing the itemset.
pub trait ItemsetMiner {
    fn mine(&self, table: &PresenceTable, min_support: f64) -> Vec<Itemset>;
}

impl<F> ItemsetMiner for F
where
    F: Fn(&PresenceTable, f64) -> Vec<Itemset>,
{
    fn mine(&self, table: &PresenceTable, min_support: f64) -> Vec<Itemset> {
        self(table, min_support)
    }
}

/// Whether `count` of `rows` reaches `min_support`.
/// Support is `count / rows`; an empty table has no frequent itemsets.
pub fn is_frequent(count: u64, rows: usize, min_support: f64) -> bool {
    rows > 0 && count as f64 / rows as f64 >= min_support
}

#[cfg(test)]
mod tests {
    use super::{ItemsetMiner, is_frequent};
    use crate::{itemset::Itemset, table::PresenceTable};

    #[test]
    fn test_closure_miner() {
        let miner = |_: &PresenceTable, _: f64| vec![Itemset::from([0])];
        assert_eq!(miner.mine(&PresenceTable::new(1, 1), 0.5).len(), 1);
    }
    #[test]
    fn test_is_frequent() {
        assert!(is_frequent(1, 2, 0.5));
        assert!(!is_frequent(1, 3, 0.5));
        assert!(!is_frequent(0, 0, 0.0));
    }
}
