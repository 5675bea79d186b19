//! Range and radius queries for [`KDBush`].
//!
//! Both walk the implicit tree with an explicit stack of
//! `(left, right, axis)` slot ranges. Ranges no wider than the node size are
//! scanned linearly; wider ones test their median point and only descend into
//! the halves the query region can reach along the split axis.
//!
//! All comparisons are inclusive: points lying exactly on the query boundary
//! are reported.

use crate::kdbush::KDBush;
use crate::point::Point;

impl KDBush {
    /// Finds all points inside the closed box `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// `results` is cleared first and then filled with identity indices, in
    /// traversal order. Reuse the same vector across queries to avoid
    /// reallocating. An inverted box (`min > max` on either axis) or a NaN
    /// bound matches nothing.
    ///
    /// # Example
    /// ```
    /// use kdbush::prelude::*;
    ///
    /// let index = KDBush::new(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    /// let mut results = Vec::new();
    /// index.query_range(1.0, 1.0, 2.0, 2.0, &mut results);
    /// results.sort_unstable();
    /// assert_eq!(results, vec![1, 2]);
    /// ```
    pub fn query_range(
        &self,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
        results: &mut Vec<usize>,
    ) {
        results.clear();
        if self.num_sorted == 0 {
            return;
        }

        let inside = |x: f64, y: f64| x >= min_x && x <= max_x && y >= min_y && y <= max_y;

        let mut stack = vec![(0, self.num_sorted - 1, 0)];
        while let Some((left, right, axis)) = stack.pop() {
            if right - left <= self.node_size {
                for slot in left..=right {
                    if inside(self.coords[2 * slot], self.coords[2 * slot + 1]) {
                        results.push(self.ids[slot]);
                    }
                }
                continue;
            }

            let m = (left + right) / 2;
            let x = self.coords[2 * m];
            let y = self.coords[2 * m + 1];
            if inside(x, y) {
                results.push(self.ids[m]);
            }

            let next_axis = (axis + 1) % 2;
            let (lower, upper, split) = if axis == 0 { (min_x, max_x, x) } else { (min_y, max_y, y) };
            if lower <= split {
                stack.push((left, m - 1, next_axis));
            }
            if upper >= split {
                stack.push((m + 1, right, next_axis));
            }
        }
    }

    /// Finds all points inside the closed box and returns their identity indices.
    ///
    /// Allocating form of [`query_range`](Self::query_range).
    pub fn range(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<usize> {
        let mut results = Vec::new();
        self.query_range(min_x, min_y, max_x, max_y, &mut results);
        results
    }

    /// Finds all points within `radius` of `(x, y)`, boundary included.
    ///
    /// Distances are compared squared, so no square root is taken.
    /// `results` is cleared first. A negative or NaN radius matches nothing;
    /// a radius of zero matches only points coincident with the center.
    ///
    /// # Example
    /// ```
    /// use kdbush::prelude::*;
    ///
    /// let index = KDBush::new(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
    /// let mut results = Vec::new();
    /// index.query_within(0.0, 0.0, 5.0, &mut results);
    /// results.sort_unstable();
    /// assert_eq!(results, vec![0, 1]);
    /// ```
    pub fn query_within(&self, qx: f64, qy: f64, radius: f64, results: &mut Vec<usize>) {
        results.clear();
        if self.num_sorted == 0 || radius.is_nan() || radius < 0.0 {
            return;
        }

        let r2 = radius * radius;

        let mut stack = vec![(0, self.num_sorted - 1, 0)];
        while let Some((left, right, axis)) = stack.pop() {
            if right - left <= self.node_size {
                for slot in left..=right {
                    if sq_dist(self.coords[2 * slot], self.coords[2 * slot + 1], qx, qy) <= r2 {
                        results.push(self.ids[slot]);
                    }
                }
                continue;
            }

            let m = (left + right) / 2;
            let x = self.coords[2 * m];
            let y = self.coords[2 * m + 1];
            if sq_dist(x, y, qx, qy) <= r2 {
                results.push(self.ids[m]);
            }

            let next_axis = (axis + 1) % 2;
            let (q, split) = if axis == 0 { (qx, x) } else { (qy, y) };
            if !beyond(q - split, r2) {
                stack.push((left, m - 1, next_axis));
            }
            if !beyond(split - q, r2) {
                stack.push((m + 1, right, next_axis));
            }
        }
    }

    /// Finds all points within `radius` of `center` and returns their identity indices.
    ///
    /// Allocating form of [`query_within`](Self::query_within).
    pub fn within<P: Point + ?Sized>(&self, center: &P, radius: f64) -> Vec<usize> {
        let (qx, qy) = center.coordinates();
        let mut results = Vec::new();
        self.query_within(qx, qy, radius, &mut results);
        results
    }
}

/// Whether a half-plane at signed axis distance `d` lies wholly outside the
/// squared radius. NaN (infinite center against an infinite split) is never
/// beyond, so the subtree is still visited.
#[inline]
fn beyond(d: f64, r2: f64) -> bool {
    d > 0.0 && d * d > r2
}

/// Squared euclidean distance between two points.
#[inline]
fn sq_dist(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}
