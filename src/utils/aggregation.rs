use std::collections::HashMap;
use std::hash::Hash;

/// Count occurrences of each key, keeping keys in first-encountered order.
pub fn count_in_order<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts
}

/// The `n` most frequent keys, highest count first.
///
/// The sort is stable, so keys with equal counts stay in the order they were
/// first seen.
pub fn most_common<K, I>(keys: I, n: usize) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut counts = count_in_order(keys);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_count_keeps_first_seen_order() {
        let result = count_in_order(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(result, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_empty_data() {
        let result = most_common(Vec::<String>::new(), 10);
        assert!(result.is_empty());
    }

    #[test]
    fn test_ties_broken_by_first_seen() {
        let result = most_common(["carol", "alice", "bob", "alice", "bob", "carol"], 10);
        assert_eq!(result, vec![("carol", 2), ("alice", 2), ("bob", 2)]);
    }

    #[test]
    fn test_truncates_to_n() {
        let keys: Vec<u32> = (0..20).chain(0..5).collect();
        let result = most_common(keys, 10);
        assert_eq!(result.len(), 10);
        assert!(result[..5].iter().all(|(_, count)| *count == 2));
        assert_eq!(result[5], (5, 1));
        assert!(result.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
