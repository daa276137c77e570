use super::types::Rank;

/// Dense ranks for `items` already sorted by `key`: equal adjacent keys share
/// a rank and each new key advances it by one.
pub fn dense_ranks<T, K, F>(items: &[T], key: F) -> Vec<Rank>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut ranks = Vec::with_capacity(items.len());
    let mut previous: Option<K> = None;
    let mut current: Rank = 0;

    for item in items {
        let k = key(item);
        if previous.as_ref() != Some(&k) {
            current += 1;
        }
        ranks.push(current);
        previous = Some(k);
    }

    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_share_rank_without_gaps() {
        let points = [9, 7, 7, 4, 4, 4, 1];
        assert_eq!(dense_ranks(&points, |p| *p), vec![1, 2, 2, 3, 3, 3, 4]);
    }

    #[test]
    fn test_empty_input() {
        let empty: [u32; 0] = [];
        assert!(dense_ranks(&empty, |p| *p).is_empty());
    }

    #[test]
    fn test_all_equal() {
        assert_eq!(dense_ranks(&[0, 0, 0], |p| *p), vec![1, 1, 1]);
    }
}
