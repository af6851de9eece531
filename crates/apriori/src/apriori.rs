use crate::{
    itemset::Itemset,
    start::{ItemsetMiner, is_frequent},
    table::PresenceTable,
    trie::Trie,
};

/// Level-wise Apriori over a presence table, with candidates held in a trie.
#[derive(Debug, Default, Clone, Copy)]
pub struct AprioriRunner {
    max_len: Option<usize>,
}

impl AprioriRunner {
    pub fn new() -> Self {
        Self::default()
    }
    /// Stops after itemsets of `max_len` items.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
        }
    }
}

impl ItemsetMiner for AprioriRunner {
    fn mine(&self, table: &PresenceTable, min_support: f64) -> Vec<Itemset> {
        let mut out = Vec::new();
        if table.is_empty() {
            return out;
        }
        let rows = table.rows();
        let data: Vec<Vec<usize>> = (0..rows).map(|r| table.present(r)).collect();
        let keep = |count: u64| is_frequent(count, rows, min_support);
        let mut prev = Trie::new();
        for k in 1.. {
            if self.max_len.is_some_and(|m| k > m) {
                break;
            }
            if k == 1 {
                for i in 0..table.columns() {
                    prev.add(&[i]);
                }
            } else {
                let mut next = Trie::new();
                prev.join(
                    |v| {
                        // The two joined parents are frequent; check the other subsets
                        let mut pruner: Vec<usize> = v[1..].to_vec();
                        for i in 0..(v.len() - 2) {
                            if !prev.contains(&pruner) {
                                return;
                            }
                            pruner[i] = v[i];
                        }
                        next.add(v);
                    },
                    k - 1,
                );
                prev = next;
            }
            for d in data.iter() {
                prev.count_transaction(d, k);
            }
            prev.filter(k, &keep);
            if prev.is_empty() {
                break;
            }
            prev.for_each(|v, _| out.push(Itemset::from(v)), k);
        }
        tracing::trace!(rows, min_support, found = out.len(), "apriori finished");
        out
    }
}
