//! In-place selection over the parallel `ids` / `coords` arrays.
//!
//! Floyd-Rivest selection: a Hoare partition loop, preceded on large ranges
//! by a recursive pass over a sample that narrows the range to one expected
//! to contain the k-th element. Expected linear time.

/// Ranges wider than this are narrowed by sampling before partitioning.
const SAMPLE_THRESHOLD: isize = 600;

/// Rearranges `ids` and `coords` so that slot `k` holds the k-th smallest
/// value along `axis` (0 = X, 1 = Y) within the closed slot range
/// `[left, right]`.
///
/// Afterwards every slot in `[left, k)` has an axis coordinate `<=` the one at
/// `k` and every slot in `(k, right]` has one `>=` it. Equal values are left in
/// no particular order.
pub(crate) fn select(
    ids: &mut [usize],
    coords: &mut [f64],
    k: usize,
    left: usize,
    right: usize,
    axis: usize,
) {
    debug_assert!(axis < 2, "axis must be 0 (x) or 1 (y)");
    debug_assert!(
        left <= k && k <= right && right < ids.len(),
        "select rank {k} outside [{left}, {right}]"
    );
    select_range(ids, coords, k as isize, left as isize, right as isize, axis);
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "sampled bounds are clamped to [left, right] right after the cast"
)]
fn select_range(
    ids: &mut [usize],
    coords: &mut [f64],
    k: isize,
    mut left: isize,
    mut right: isize,
    axis: usize,
) {
    while right > left {
        if right - left > SAMPLE_THRESHOLD {
            let n = (right - left + 1) as f64;
            let m = (k - left + 1) as f64;
            let z = n.ln();
            let s = 0.5 * (2.0 * z / 3.0).exp();
            let sign = if m - n / 2.0 < 0.0 { -1.0 } else { 1.0 };
            let sd = 0.5 * (z * s * (n - s) / n).sqrt() * sign;
            let new_left = left.max((k as f64 - m * s / n + sd).floor() as isize);
            let new_right = right.min((k as f64 + (n - m) * s / n + sd).floor() as isize);
            select_range(ids, coords, k, new_left, new_right, axis);
        }

        let t = coord(coords, k, axis);
        let mut i = left;
        let mut j = right;

        swap_item(ids, coords, left, k);
        if coord(coords, right, axis) > t {
            swap_item(ids, coords, left, right);
        }

        while i < j {
            swap_item(ids, coords, i, j);
            i += 1;
            j -= 1;
            while coord(coords, i, axis) < t {
                i += 1;
            }
            while coord(coords, j, axis) > t {
                j -= 1;
            }
        }

        if coord(coords, left, axis) == t {
            swap_item(ids, coords, left, j);
        } else {
            j += 1;
            swap_item(ids, coords, j, right);
        }

        if j <= k {
            left = j + 1;
        }
        if k <= j {
            right = j - 1;
        }
    }
}

#[inline]
fn coord(coords: &[f64], slot: isize, axis: usize) -> f64 {
    coords[2 * slot as usize + axis]
}

/// Swaps two slots, moving the id and both coordinates together.
#[inline]
fn swap_item(ids: &mut [usize], coords: &mut [f64], i: isize, j: isize) {
    let (i, j) = (i as usize, j as usize);
    ids.swap(i, j);
    coords.swap(2 * i, 2 * j);
    coords.swap(2 * i + 1, 2 * j + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn interleave(points: &[(f64, f64)]) -> (Vec<usize>, Vec<f64>) {
        let ids = (0..points.len()).collect();
        let coords = points.iter().flat_map(|&(x, y)| [x, y]).collect();
        (ids, coords)
    }

    fn assert_partitioned(coords: &[f64], k: usize, left: usize, right: usize, axis: usize) {
        let pivot = coords[2 * k + axis];
        for slot in left..k {
            assert!(
                coords[2 * slot + axis] <= pivot,
                "slot {slot} left of {k} has {} > {pivot}",
                coords[2 * slot + axis]
            );
        }
        for slot in k + 1..=right {
            assert!(
                coords[2 * slot + axis] >= pivot,
                "slot {slot} right of {k} has {} < {pivot}",
                coords[2 * slot + axis]
            );
        }
    }

    fn assert_aligned(ids: &[usize], coords: &[f64], original: &[(f64, f64)]) {
        for (slot, &id) in ids.iter().enumerate() {
            assert_eq!(
                (coords[2 * slot], coords[2 * slot + 1]),
                original[id],
                "coordinates at slot {slot} drifted from id {id}"
            );
        }
    }

    #[test]
    fn test_select_small_range_x() {
        let points = [(5.0, 0.0), (1.0, 9.0), (4.0, 2.0), (3.0, 7.0), (2.0, 1.0)];
        let (mut ids, mut coords) = interleave(&points);
        select(&mut ids, &mut coords, 2, 0, 4, 0);

        assert_eq!(coords[4], 3.0, "median along x should be 3");
        assert_eq!(ids[2], 3);
        assert_partitioned(&coords, 2, 0, 4, 0);
        assert_aligned(&ids, &coords, &points);
    }

    #[test]
    fn test_select_small_range_y() {
        let points = [(5.0, 0.0), (1.0, 9.0), (4.0, 2.0), (3.0, 7.0), (2.0, 1.0)];
        let (mut ids, mut coords) = interleave(&points);
        select(&mut ids, &mut coords, 2, 0, 4, 1);

        assert_eq!(coords[5], 2.0, "median along y should be 2");
        assert_eq!(ids[2], 2);
        assert_partitioned(&coords, 2, 0, 4, 1);
        assert_aligned(&ids, &coords, &points);
    }

    #[test]
    fn test_select_extremes() {
        let points: Vec<(f64, f64)> = (0..20).rev().map(|i| (f64::from(i), 0.0)).collect();

        let (mut min_ids, mut min_coords) = interleave(&points);
        select(&mut min_ids, &mut min_coords, 0, 0, 19, 0);
        assert_eq!(min_coords[0], 0.0, "rank 0 should be the minimum");

        let (mut max_ids, mut max_coords) = interleave(&points);
        select(&mut max_ids, &mut max_coords, 19, 0, 19, 0);
        assert_eq!(max_coords[38], 19.0, "last rank should be the maximum");
    }

    #[test]
    fn test_select_subrange_leaves_outside_untouched() {
        let points: Vec<(f64, f64)> = (0..10).map(|i| (f64::from(10 - i), 0.0)).collect();
        let (mut ids, mut coords) = interleave(&points);
        select(&mut ids, &mut coords, 5, 3, 7, 0);

        assert_eq!(&ids[..3], &[0, 1, 2]);
        assert_eq!(&ids[8..], &[8, 9]);
        assert_partitioned(&coords, 5, 3, 7, 0);
        assert_aligned(&ids, &coords, &points);
    }

    #[test]
    fn test_select_with_duplicates() {
        let points: Vec<(f64, f64)> = (0..50).map(|i| (f64::from(i % 3), 0.0)).collect();
        let (mut ids, mut coords) = interleave(&points);
        select(&mut ids, &mut coords, 25, 0, 49, 0);

        assert_eq!(coords[50], 1.0, "17 zeros then 17 ones put rank 25 at 1");
        assert_partitioned(&coords, 25, 0, 49, 0);
        assert_aligned(&ids, &coords, &points);
    }

    #[test]
    fn test_select_all_equal() {
        let points = vec![(2.0, 2.0); 33];
        let (mut ids, mut coords) = interleave(&points);
        select(&mut ids, &mut coords, 16, 0, 32, 1);

        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..33).collect::<Vec<usize>>());
    }

    #[test]
    fn test_select_large_range_uses_sampling() {
        // Wide enough to take the sampling branch several times.
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let points: Vec<(f64, f64)> = (0..5_000)
            .map(|_| (rng.random_range(-1e3..1e3), rng.random_range(-1e3..1e3)))
            .collect();

        for &(k, axis) in &[(0, 0), (1_234, 1), (2_499, 0), (4_000, 1), (4_999, 0)] {
            let (mut ids, mut coords) = interleave(&points);
            select(&mut ids, &mut coords, k, 0, 4_999, axis);

            let mut expected: Vec<f64> = points
                .iter()
                .map(|&(x, y)| if axis == 0 { x } else { y })
                .collect();
            expected.sort_by(f64::total_cmp);

            assert_eq!(coords[2 * k + axis], expected[k], "wrong rank {k} on axis {axis}");
            assert_partitioned(&coords, k, 0, 4_999, axis);
            assert_aligned(&ids, &coords, &points);
        }
    }

    #[test]
    fn test_select_sorted_and_reversed_large_input() {
        let ascending: Vec<(f64, f64)> = (0..2_000).map(|i| (f64::from(i), 0.0)).collect();
        let descending: Vec<(f64, f64)> = ascending.iter().rev().copied().collect();

        for points in [ascending, descending] {
            let (mut ids, mut coords) = interleave(&points);
            select(&mut ids, &mut coords, 1_000, 0, 1_999, 0);
            assert_eq!(coords[2_000], 1_000.0);
            assert_partitioned(&coords, 1_000, 0, 1_999, 0);
        }
    }
}
