use std::{fs::OpenOptions, io::Read, ops::Deref, path::Path};

use ahash::AHashMap;
use thiserror::Error;

/// Errors raised while reading a transaction file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read transactions: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed transaction file: {0}")]
    Csv(#[from] csv::Error),
}

/// The layout of a transaction file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Headerless CSV, one transaction per line, one item per cell.
    #[default]
    Basket,
    /// CSV with a header line whose first two columns are identifiers.
    ItemList,
}

/// Maps item names to 0-indexed columns and back.
/// Columns are assigned in sorted name order.
#[derive(Debug, Default, Clone)]
pub struct ItemUniverse {
    names: Vec<String>,
    columns: AHashMap<String, usize>,
}

impl ItemUniverse {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = items.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        let columns = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        Self { names, columns }
    }
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }
    pub fn name(&self, column: usize) -> Option<&str> {
        self.names.get(column).map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.names.len()
    }
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A Transactional Database.
/// Every transaction is a sorted, deduplicated list of columns of `universe`.
#[derive(Debug, Default)]
pub struct TransactionSet {
    pub transactions: Vec<Vec<usize>>,
    pub universe: ItemUniverse,
}

// Dereferences to the underlying Vector
impl Deref for TransactionSet {
    type Target = Vec<Vec<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.transactions
    }
}

impl TransactionSet {
    /// Builds the set from transactions of item names.
    pub fn new<T, S>(transactions: T) -> Self
    where
        T: IntoIterator,
        T::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let named: Vec<Vec<String>> = transactions
            .into_iter()
            .map(|t| t.into_iter().map(|s| s.as_ref().to_string()).collect())
            .collect();
        let universe = ItemUniverse::new(named.iter().flatten().cloned());
        let transactions = named
            .iter()
            .map(|t| {
                let mut items: Vec<usize> = t
                    .iter()
                    .filter_map(|name| universe.column(name))
                    .collect();
                items.sort();
                items.dedup();
                items
            })
            .collect();
        Self {
            transactions,
            universe,
        }
    }
    /// Number of distinct items across the whole collection
    pub fn num_items(&self) -> usize {
        self.universe.len()
    }
    /// Iterates over all the transactions
    pub fn iter(&self) -> impl Iterator<Item = &Vec<usize>> {
        self.transactions.iter()
    }
    pub fn from_path(path: &Path, format: Format) -> Result<Self, LoadError> {
        let file = OpenOptions::new().read(true).open(path)?;
        Self::from_reader(file, format)
    }
    /// Constructs the set from a CSV source, quoted cells included.
    /// Empty cells, `nan` cells and purely numeric cells are not items.
    /// Blank lines are skipped; a line of empty cells is an empty transaction.
    pub fn from_reader(r: impl Read, format: Format) -> Result<Self, LoadError> {
        let skip = match format {
            Format::Basket => 0,
            Format::ItemList => 2,
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(format == Format::ItemList)
            .flexible(true)
            .from_reader(r);
        let mut transactions = Vec::new();
        for record in reader.records() {
            let record = record?;
            let items: Vec<String> = record
                .iter()
                .skip(skip)
                .map(str::trim)
                .filter(|cell| is_item(cell))
                .map(str::to_string)
                .collect();
            transactions.push(items);
        }
        let set = Self::new(transactions);
        tracing::debug!(
            transactions = set.len(),
            items = set.num_items(),
            "transactions loaded"
        );
        Ok(set)
    }
}

fn is_item(cell: &str) -> bool {
    !(cell.is_empty()
        || cell.eq_ignore_ascii_case("nan")
        || cell.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::{Format, TransactionSet};

    #[test]
    fn test_new() {
        let t = TransactionSet::new(vec![vec!["milk", "bread"], vec!["bread", "bread"], vec![]]);
        assert_eq!(t.num_items(), 2);
        assert_eq!(t.universe.column("bread"), Some(0));
        assert_eq!(t.universe.name(1), Some("milk"));
        assert_eq!(t.transactions, vec![vec![0, 1], vec![0], vec![]]);
    }
    #[test]
    fn test_basket() {
        let data = "milk,bread,,\neggs,12,nan\n\n,,\n";
        let t = TransactionSet::from_reader(data.as_bytes(), Format::Basket).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.num_items(), 3);
        assert_eq!(t[1], vec![t.universe.column("eggs").unwrap()]);
        assert!(t[2].is_empty());
    }
    #[test]
    fn test_quoted_cells() {
        let data = "\"milk\",\"bread, white\"\nmilk,eggs\n";
        let t = TransactionSet::from_reader(data.as_bytes(), Format::Basket).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.num_items(), 3);
        let bread = t.universe.column("bread, white").unwrap();
        let milk = t.universe.column("milk").unwrap();
        let eggs = t.universe.column("eggs").unwrap();
        assert_eq!(t[0], vec![bread, milk]);
        assert_eq!(t[1], vec![eggs, milk]);
    }
    #[test]
    fn test_item_list() {
        let data = "Member,Date,Items\n1,2020,milk,bread\n2,2021,\"2x cola\"\n";
        let t = TransactionSet::from_reader(data.as_bytes(), Format::ItemList).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.num_items(), 3);
        assert!(t.universe.column("2x cola").is_some());
        assert!(t.universe.column("2020").is_none());
    }
}
