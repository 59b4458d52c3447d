use crate::core::types::Rated;

/// Sorting primitives behind every ranked result
pub struct SortKit;

impl SortKit {
    /// Merge sort, highest rating first. Equal ratings keep their input order.
    pub fn stable_sort_desc_by_rating<T: Rated + Clone>(records: &mut [T]) {
        Self::stable_sort_desc_by(records, |record| record.rating());
    }

    /// Merge sort on an arbitrary numeric key, highest first, stable.
    pub fn stable_sort_desc_by<T, F>(records: &mut [T], key: F)
    where
        T: Clone,
        F: Fn(&T) -> f64,
    {
        if records.len() < 2 {
            return;
        }

        let mut scratch = records.to_vec();
        merge_sort(records, &mut scratch, &key);
    }

    /// In-place quicksort, ascending, pivot = last element. Not stable.
    pub fn sort_asc_for_intersection<T: PartialOrd + Copy>(ids: &mut [T]) {
        let mut slice = ids;

        // Recurse into the smaller side, loop on the larger one
        while slice.len() > 1 {
            let current = std::mem::take(&mut slice);
            let pivot = partition(current);
            let (left, rest) = current.split_at_mut(pivot);
            let right = &mut rest[1..];

            if left.len() < right.len() {
                Self::sort_asc_for_intersection(left);
                slice = right;
            } else {
                Self::sort_asc_for_intersection(right);
                slice = left;
            }
        }
    }
}

fn merge_sort<T, F>(slice: &mut [T], scratch: &mut [T], key: &F)
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let len = slice.len();
    if len < 2 {
        return;
    }

    let mid = len.div_ceil(2);
    {
        let (left, right) = slice.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        merge_sort(left, left_scratch, key);
        merge_sort(right, right_scratch, key);
    }

    scratch[..len].clone_from_slice(slice);
    let (left, right) = scratch[..len].split_at(mid);

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < left.len() && j < right.len() {
        // `>=` takes from the left run on ties, which keeps the sort stable
        if key(&left[i]) >= key(&right[j]) {
            slice[k] = left[i].clone();
            i += 1;
        } else {
            slice[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    while i < left.len() {
        slice[k] = left[i].clone();
        i += 1;
        k += 1;
    }

    while j < right.len() {
        slice[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}

/// Lomuto partition around the last element; returns the pivot's final index
fn partition<T: PartialOrd + Copy>(slice: &mut [T]) -> usize {
    let high = slice.len() - 1;
    let pivot = slice[high];
    let mut store = 0;

    for j in 0..high {
        if slice[j] <= pivot {
            slice.swap(store, j);
            store += 1;
        }
    }

    slice.swap(store, high);
    store
}
