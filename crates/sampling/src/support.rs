use apriori::PresenceTable;

use crate::error::DomainError;

/// The fraction of rows of `table` holding every item of `itemset`.
///
/// Fails for an empty itemset, an item outside the table's columns, or a table
/// without rows. Nothing is cached: calling it on a sample and on the full table
/// gives two independent measurements.
pub fn support(table: &PresenceTable, itemset: &[usize]) -> Result<f64, DomainError> {
    if itemset.is_empty() {
        return Err(DomainError::EmptyItemset);
    }
    if let Some(&item) = itemset.iter().find(|&&i| i >= table.columns()) {
        return Err(DomainError::UnknownItem {
            item,
            columns: table.columns(),
        });
    }
    if table.is_empty() {
        return Err(DomainError::EmptyTable);
    }
    let count = table
        .iter()
        .filter(|row| itemset.iter().all(|&i| row[i]))
        .count();
    Ok(count as f64 / table.rows() as f64)
}

#[cfg(test)]
mod tests {
    use apriori::{PresenceTable, TransactionSet};

    use super::support;
    use crate::error::DomainError;

    fn table() -> PresenceTable {
        let data = TransactionSet::new(vec![vec!["a", "b"], vec!["a"], vec!["a", "b"], vec!["b"]]);
        PresenceTable::encode(&data)
    }

    #[test]
    fn test_support() {
        let t = table();
        assert_eq!(support(&t, &[0]), Ok(0.75));
        assert_eq!(support(&t, &[0, 1]), Ok(0.5));
        assert_eq!(support(&t, &[1]), Ok(0.75));
    }
    #[test]
    fn test_rejects() {
        let t = table();
        assert_eq!(support(&t, &[]), Err(DomainError::EmptyItemset));
        assert_eq!(
            support(&t, &[0, 2]),
            Err(DomainError::UnknownItem { item: 2, columns: 2 })
        );
        assert_eq!(
            support(&PresenceTable::new(0, 2), &[0]),
            Err(DomainError::EmptyTable)
        );
    }
    #[test]
    fn test_deterministic() {
        let t = table();
        let a = support(&t, &[0, 1]).unwrap();
        let b = support(&t, &[0, 1]).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
