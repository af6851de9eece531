use ahash::AHashMap;

/// A prefix tree of sorted itemsets, one level per itemset length.
/// Every node carries the support count of the itemset spelled by its path.
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }
    /// Adds a sorted itemset. Returns whether its path was new.
    pub fn add(&mut self, v: &[usize]) -> bool {
        let added = self.root.add(v);
        if added {
            self.len += 1;
        }
        added
    }
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `f` with every union of two k-itemsets sharing their first k - 1 items.
    pub fn join(&self, mut f: impl FnMut(&[usize]), k: usize) {
        let mut v = Vec::new();
        self.root.join(&mut v, &mut f, k);
    }

    /// Drops every k-itemset whose count fails `keep`.
    pub fn filter(&mut self, k: usize, keep: &impl Fn(u64) -> bool) {
        self.len -= self.root.filter(k, keep);
    }

    /// Counts every k-itemset contained in the sorted transaction.
    pub fn count_transaction(&mut self, data: &[usize], k: usize) {
        if data.len() < k {
            return;
        }
        self.root.count(data, k);
    }

    pub fn get(&self, v: &[usize]) -> Option<u64> {
        self.root.get(v)
    }

    pub fn contains(&self, v: &[usize]) -> bool {
        self.get(v).is_some()
    }

    pub fn for_each(&self, mut f: impl FnMut(&[usize], u64), k: usize) {
        let mut v = Vec::new();
        self.root.for_each(&mut f, &mut v, k);
    }
}

#[derive(Debug, Default)]
struct Node {
    children: AHashMap<usize, Box<Node>>,
    count: u64,
}
impl Node {
    fn for_each(&self, f: &mut impl FnMut(&[usize], u64), v: &mut Vec<usize>, k: usize) {
        if k == 0 {
            f(v, self.count);
            return;
        }
        for (&a, child) in self.children.iter() {
            v.push(a);
            child.for_each(f, v, k - 1);
            v.pop();
        }
    }

    fn join(&self, v: &mut Vec<usize>, f: &mut impl FnMut(&[usize]), k: usize) {
        if v.len() + 1 == k {
            let mut a: Vec<_> = self.children.keys().copied().collect();
            a.sort_unstable();
            for (i, &n1) in a.iter().enumerate() {
                for &n2 in a.iter().skip(i + 1) {
                    v.push(n1);
                    v.push(n2);
                    f(v);
                    v.pop();
                    v.pop();
                }
            }
            return;
        }
        for (&a, c) in self.children.iter() {
            v.push(a);
            c.join(v, f, k);
            v.pop();
        }
    }

    fn get(&self, v: &[usize]) -> Option<u64> {
        match v.split_first() {
            None => Some(self.count),
            Some((first, rest)) => self.children.get(first).and_then(|c| c.get(rest)),
        }
    }

    fn add(&mut self, v: &[usize]) -> bool {
        let Some((&first, rest)) = v.split_first() else {
            return false;
        };
        let mut added = false;
        let child = self.children.entry(first).or_insert_with(|| {
            added = true;
            Box::default()
        });
        let b = child.add(rest);
        // Only the full path being new makes a new itemset
        if rest.is_empty() { added } else { b }
    }

    fn count(&mut self, data: &[usize], k: usize) {
        if k == 0 {
            self.count += 1;
            return;
        }
        // Items of a k-itemset are increasing, so the rest must fit after position i
        for i in 0..=(data.len() - k) {
            if let Some(child) = self.children.get_mut(&data[i]) {
                child.count(&data[i + 1..], k - 1);
            }
        }
    }

    /// Returns how many k-itemsets were removed.
    fn filter(&mut self, k: usize, keep: &impl Fn(u64) -> bool) -> usize {
        if k == 1 {
            let before = self.children.len();
            self.children.retain(|_, v| keep(v.count));
            return before - self.children.len();
        }
        let mut removed = 0;
        for v in self.children.values_mut() {
            removed += v.filter(k - 1, keep);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Trie;

    #[test]
    fn test_add() {
        let mut trie = Trie::new();
        assert!(trie.add(&[1, 2]));
        assert!(!trie.add(&[1]));
        assert!(!trie.add(&[1, 2]));
        assert!(trie.add(&[1, 3]));
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.get(&[1, 2]), Some(0));
    }
    #[test]
    fn test_count_transaction() {
        let mut trie = Trie::new();
        trie.add(&[1, 2, 3]);
        trie.add(&[1, 2, 5]);
        trie.add(&[1, 2, 6]);
        trie.count_transaction(&[1, 2, 3, 4, 5], 3);
        assert_eq!(trie.get(&[1, 2, 3]), Some(1));
        assert_eq!(trie.get(&[1, 2, 4]), None);
        assert_eq!(trie.get(&[1, 2, 5]), Some(1));
        trie.filter(3, &|c| c >= 1);
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.get(&[1, 2, 3]), Some(1));
        assert_eq!(trie.get(&[1, 2, 5]), Some(1));
        assert_eq!(trie.get(&[1, 2, 6]), None);
    }
    #[test]
    fn test_join() {
        let mut trie = Trie::new();
        trie.add(&[1, 2, 3]);
        trie.add(&[1, 2, 5]);
        trie.join(
            |v| {
                assert_eq!(v, &[1, 2, 3, 5]);
            },
            3,
        );
        let mut set = HashSet::new();
        set.insert(vec![1, 2, 3]);
        set.insert(vec![1, 2, 5]);
        trie.for_each(|v, _| assert!(set.remove(v)), 3);
        assert!(set.is_empty());

        let mut trie = Trie::new();
        trie.add(&[1]);
        trie.add(&[2]);
        trie.join(
            |v| {
                assert_eq!(v, [1, 2]);
            },
            1,
        );
    }
}
