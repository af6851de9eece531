use ahash::AHashSet;

use crate::error::DomainError;

/// The largest `d` such that at least `d` distinct transactions hold at least `d` items.
///
/// Identical transactions count once and empty transactions are ignored.
/// Fails with [`DomainError::NoDBound`] when no transaction has an item.
pub fn d_bound(transactions: &[Vec<usize>]) -> Result<usize, DomainError> {
    let unique: AHashSet<Vec<usize>> = transactions
        .iter()
        .map(|t| {
            let mut t = t.clone();
            t.sort_unstable();
            t.dedup();
            t
        })
        .collect();
    let max = unique.iter().map(Vec::len).max().unwrap_or(0);
    // histogram[i] = distinct transactions with at least i items
    let mut histogram = vec![0usize; max + 1];
    for t in unique.iter() {
        for count in histogram.iter_mut().take(t.len() + 1).skip(1) {
            *count += 1;
        }
    }
    let d = histogram
        .iter()
        .enumerate()
        .skip(1)
        .filter(|&(len, &count)| count >= len)
        .map(|(len, _)| len)
        .max()
        .ok_or(DomainError::NoDBound)?;
    tracing::debug!(unique = unique.len(), max_len = max, d, "d-bound computed");
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::d_bound;
    use crate::error::DomainError;

    #[test]
    fn test_d_bound() {
        let t = vec![
            vec![0, 1, 2],
            vec![1, 2, 3],
            vec![2, 3, 4],
            vec![0, 1],
            vec![3, 4],
            vec![5],
        ];
        assert_eq!(d_bound(&t), Ok(3));
    }
    #[test]
    fn test_duplicates_count_once() {
        let t = vec![vec![0, 1, 2], vec![0, 1, 2], vec![2, 1, 0], vec![3]];
        assert_eq!(d_bound(&t), Ok(1));
    }
    #[test]
    fn test_long_but_few() {
        let t = vec![vec![0, 1, 2, 3, 4, 5], vec![0, 1, 2, 3, 4]];
        assert_eq!(d_bound(&t), Ok(2));
    }
    #[test]
    fn test_degenerate() {
        assert_eq!(d_bound(&[]), Err(DomainError::NoDBound));
        assert_eq!(d_bound(&[vec![], vec![]]), Err(DomainError::NoDBound));
    }
}
