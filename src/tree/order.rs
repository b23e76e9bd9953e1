//! Sorted insertion of siblings as they are discovered
//!
//! Each insertion is a linear scan, so a directory with n entries costs
//! O(n²) comparisons. Directory fan-out is bounded in practice.

use super::node::Node;

/// Insert `candidate` before the first entry for which
/// `belongs_before(existing, candidate)` holds, or at the end if none does.
pub fn insert_ordered<T, F>(siblings: &mut Vec<T>, candidate: T, belongs_before: F)
where
    F: Fn(&T, &T) -> bool,
{
    let index = siblings
        .iter()
        .position(|existing| belongs_before(existing, &candidate))
        .unwrap_or(siblings.len());
    siblings.insert(index, candidate);
}

/// Returns true when `candidate` belongs strictly before `existing`.
///
/// Sizes descend by default and ascend with `reverse`. Equal sizes always
/// order by ascending name, whatever `reverse` says.
pub fn compare_files(existing: &Node, candidate: &Node, reverse: bool) -> bool {
    if existing.size == candidate.size {
        return existing.name() > candidate.name();
    }

    if reverse {
        existing.size > candidate.size
    } else {
        existing.size < candidate.size
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn file(name: &str, size: u64) -> Node {
        Node {
            path: PathBuf::from("/tmp").join(name),
            size,
            item_count: 0,
            mode: 0o100_644,
            uid: 0,
            gid: 0,
            children: None,
        }
    }

    fn build(entries: &[(&str, u64)], reverse: bool) -> Vec<String> {
        let mut siblings = Vec::new();
        for &(name, size) in entries {
            insert_ordered(&mut siblings, file(name, size), |existing, candidate| {
                compare_files(existing, candidate, reverse)
            });
        }
        siblings
            .iter()
            .map(|n| n.display_name().into_owned())
            .collect()
    }

    #[test]
    fn test_insert_ordered_generic() {
        let mut values = vec![1, 3, 5];
        insert_ordered(&mut values, 4, |existing, candidate| candidate < existing);
        insert_ordered(&mut values, 0, |existing, candidate| candidate < existing);
        insert_ordered(&mut values, 9, |existing, candidate| candidate < existing);
        assert_eq!(values, vec![0, 1, 3, 4, 5, 9]);
    }

    #[test]
    fn test_default_order_is_biggest_first() {
        let order = build(&[("small", 1), ("big", 100), ("medium", 10)], false);
        assert_eq!(order, vec!["big", "medium", "small"]);
    }

    #[test]
    fn test_reverse_order_is_smallest_first() {
        let order = build(&[("small", 1), ("big", 100), ("medium", 10)], true);
        assert_eq!(order, vec!["small", "medium", "big"]);
    }

    #[test]
    fn test_equal_sizes_ascend_by_name() {
        let entries = [("c", 5), ("a", 5), ("b", 5)];
        assert_eq!(build(&entries, false), vec!["a", "b", "c"]);
        assert_eq!(build(&entries, true), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ties_ascend_by_name_within_reversed_sizes() {
        let entries = [("z", 1), ("y", 7), ("b", 7), ("a", 1), ("m", 3)];
        assert_eq!(build(&entries, false), vec!["b", "y", "m", "a", "z"]);
        assert_eq!(build(&entries, true), vec!["a", "z", "m", "b", "y"]);
    }

    #[test]
    fn test_names_compare_bytewise() {
        // Uppercase sorts before lowercase in byte order
        let order = build(&[("beta", 0), ("Alpha", 0), ("alpha", 0)], false);
        assert_eq!(order, vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_compare_files_direct() {
        let big = file("big", 100);
        let small = file("small", 1);
        assert!(compare_files(&small, &big, false));
        assert!(!compare_files(&big, &small, false));
        assert!(compare_files(&big, &small, true));
        assert!(!compare_files(&small, &big, true));
    }
}
