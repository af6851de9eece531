use std::{fmt, ops::Deref};

use crate::transaction_set::ItemUniverse;

/// A set of 0-indexed item columns.
/// Stored sorted and deduplicated, so two itemsets holding the same items compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset(Vec<usize>);

impl Itemset {
    pub fn new(mut items: Vec<usize>) -> Self {
        items.sort();
        items.dedup();
        Self(items)
    }
    pub fn items(&self) -> &[usize] {
        &self.0
    }
    /// Renders the itemset with item names, e.g. `{bread, milk}`.
    pub fn display<'a>(&'a self, universe: &'a ItemUniverse) -> NamedItemset<'a> {
        NamedItemset {
            set: self,
            universe,
        }
    }
}

impl Deref for Itemset {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&[usize]> for Itemset {
    fn from(v: &[usize]) -> Self {
        Self::new(v.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Itemset {
    fn from(v: [usize; N]) -> Self {
        Self::new(v.to_vec())
    }
}

pub struct NamedItemset<'a> {
    set: &'a Itemset,
    universe: &'a ItemUniverse,
}

impl fmt::Display for NamedItemset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, &c) in self.set.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.universe.name(c) {
                Some(name) => write!(f, "{name}")?,
                None => write!(f, "#{c}")?,
            }
        }
        write!(f, "}}")
    }
}
