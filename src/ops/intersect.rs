use crate::ops::sort::SortKit;

/// Intersection of sorted id lists
pub struct SetOps;

impl SetOps {
    /// Linear merge intersection of two ascending lists.
    /// Repeated values are matched pairwise, so `[1, 1, 2] ∩ [1, 1]` is `[1, 1]`.
    pub fn intersect_pairwise<T: Ord + Copy>(a: &[T], b: &[T]) -> Vec<T> {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }

        let mut result = Vec::with_capacity(a.len().min(b.len()));
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            if a[i] < b[j] {
                i += 1;
            } else if a[i] > b[j] {
                j += 1;
            } else {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }

        result
    }

    /// Sort every list, then fold `intersect_pairwise` over them left to right.
    pub fn intersect_all<T: Ord + Copy>(mut lists: Vec<Vec<T>>) -> Vec<T> {
        if lists.is_empty() {
            return Vec::new();
        }

        for list in lists.iter_mut() {
            SortKit::sort_asc_for_intersection(list);
        }

        let mut lists = lists.into_iter();
        let mut result = lists.next().unwrap_or_default();

        for list in lists {
            if result.is_empty() {
                break;
            }
            result = Self::intersect_pairwise(&result, &list);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn common_values_of_three_lists() {
        let lists = vec![vec![1, 3, 5, 7], vec![3, 5, 9], vec![3, 5]];
        assert_eq!(SetOps::intersect_all(lists), vec![3, 5]);
    }

    #[test]
    fn disjoint_lists_give_nothing() {
        assert!(SetOps::intersect_all(vec![vec![1, 2], vec![3, 4]]).is_empty());
    }

    #[test]
    fn single_list_is_returned_whole() {
        assert_eq!(SetOps::intersect_all(vec![vec![1, 2, 3]]), vec![1, 2, 3]);
        assert_eq!(SetOps::intersect_all(vec![vec![3, 1, 2]]), vec![1, 2, 3]);
    }

    #[test]
    fn no_lists_give_nothing() {
        assert!(SetOps::intersect_all(Vec::<Vec<u32>>::new()).is_empty());
    }

    #[test]
    fn empty_member_empties_the_result() {
        let lists = vec![vec![1, 2, 3], vec![], vec![1, 2]];
        assert!(SetOps::intersect_all(lists).is_empty());
    }

    #[test]
    fn unsorted_inputs_are_sorted_first() {
        let lists = vec![vec![9, 2, 7, 4], vec![4, 8, 9, 1]];
        assert_eq!(SetOps::intersect_all(lists), vec![4, 9]);
    }

    #[test]
    fn pairwise_keeps_matched_repeats() {
        assert_eq!(SetOps::intersect_pairwise(&[1, 1, 2], &[1, 1]), vec![1, 1]);
        assert_eq!(SetOps::intersect_pairwise(&[1, 1, 2], &[1, 2, 2]), vec![1, 2]);
    }

    proptest! {
        #[test]
        fn matches_set_intersection(
            a in prop::collection::btree_set(0u32..200, 0..60),
            b in prop::collection::btree_set(0u32..200, 0..60),
            c in prop::collection::btree_set(0u32..200, 0..60),
        ) {
            let expected: Vec<u32> = a.iter()
                .filter(|v| b.contains(*v) && c.contains(*v))
                .copied()
                .collect();

            // feed them in reverse order so the quicksort has work to do
            let lists: Vec<Vec<u32>> = [&a, &b, &c]
                .iter()
                .map(|set: &&BTreeSet<u32>| set.iter().rev().copied().collect())
                .collect();

            prop_assert_eq!(SetOps::intersect_all(lists), expected);
        }
    }
}
