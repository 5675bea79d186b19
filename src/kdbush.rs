//! Static flat KD-tree over 2D points.
//!
//! The tree is never materialised as nodes. Construction permutes two
//! parallel arrays in place so that, for every slot range `[left, right]` met
//! while recursing from the full range, the median slot `(left + right) / 2`
//! splits the range along the axis of that recursion depth (x on even
//! depths, y on odd). Queries replay the same recursion with an explicit
//! stack.

use std::time::Instant;

use crate::point::Point;
use crate::select::select;

/// Default number of points grouped into a linear-scan leaf.
pub const DEFAULT_NODE_SIZE: usize = 64;

/// Static spatial index for 2D points based on a flat KD-tree.
///
/// Memory layout:
/// - `ids`: N identity indices, a permutation of `0..N`
/// - `coords`: 2N interleaved coordinates `x0, y0, x1, y1, ...`, aligned with `ids`
///
/// Only coordinates are copied from the input; the points themselves are not
/// retained. Points with a NaN coordinate are kept in `ids`/`coords` but placed
/// after every other point, outside the tree, so they never match a query and
/// never act as a split. The index has no mutating methods once built, so it can be shared
/// freely between threads for concurrent queries.
///
/// # Example
/// ```
/// use kdbush::prelude::*;
///
/// let points = [(0.0, 0.0), (10.0, 10.0), (5.0, 5.0)];
/// let index = KDBush::with_node_size(&points, 1);
///
/// assert_eq!(index.range(2.0, 2.0, 8.0, 8.0), vec![2]);
///
/// let mut near = index.within(&(0.0, 0.0), 8.0);
/// near.sort_unstable();
/// assert_eq!(near, vec![0, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct KDBush {
    /// Identity index of the point stored at each slot
    pub(crate) ids: Vec<usize>,
    /// Interleaved coordinates, co-permuted with `ids`
    pub(crate) coords: Vec<f64>,
    /// Leaf group threshold
    pub(crate) node_size: usize,
    /// Number of leading slots organised as the tree; NaN-bearing points follow
    pub(crate) num_sorted: usize,
}

impl KDBush {
    /// Builds an index over `points` with [`DEFAULT_NODE_SIZE`].
    ///
    /// Query results refer to points by their position in `points`.
    pub fn new<P: Point>(points: &[P]) -> Self {
        Self::with_node_size(points, DEFAULT_NODE_SIZE)
    }

    /// Builds an index over `points` grouping up to `node_size` points per leaf.
    ///
    /// Larger node sizes build faster and query slower. A `node_size` of zero
    /// is treated as one. Points with a NaN coordinate keep their identity
    /// index but are never returned by a query.
    ///
    /// # Example
    /// ```
    /// use kdbush::prelude::*;
    ///
    /// let points = vec![SimplePoint::new(1.0, 1.0); 100];
    /// let index = KDBush::with_node_size(&points, 8);
    /// assert_eq!(index.len(), 100);
    /// assert_eq!(index.node_size(), 8);
    /// ```
    pub fn with_node_size<P: Point>(points: &[P], node_size: usize) -> Self {
        let mut coords = Vec::with_capacity(2 * points.len());
        for point in points {
            let (x, y) = point.coordinates();
            coords.push(x);
            coords.push(y);
        }
        Self::from_coords(coords, node_size)
    }

    /// Builds an index from an interleaved `x0, y0, x1, y1, ...` buffer.
    ///
    /// The buffer is taken over and permuted in place. A trailing unpaired
    /// value is dropped. Pairs containing NaN are moved behind the tree.
    ///
    /// # Example
    /// ```
    /// use kdbush::KDBush;
    ///
    /// let index = KDBush::from_coords(vec![0.0, 0.0, 3.0, 4.0], 16);
    /// assert_eq!(index.within(&(0.0, 0.0), 5.0).len(), 2);
    /// ```
    pub fn from_coords(mut coords: Vec<f64>, node_size: usize) -> Self {
        let num_items = coords.len() / 2;
        coords.truncate(2 * num_items);

        let mut index = Self {
            ids: (0..num_items).collect(),
            coords,
            node_size: node_size.max(1),
            num_sorted: 0,
        };
        index.build();
        index
    }

    fn build(&mut self) {
        if self.ids.is_empty() {
            log::debug!("kdbush: empty index, nothing to sort");
            return;
        }

        let start = Instant::now();
        self.num_sorted = move_nan_last(&mut self.ids, &mut self.coords);
        let skipped = self.ids.len() - self.num_sorted;
        if skipped > 0 {
            log::warn!("kdbush: {skipped} points with NaN coordinates left out of the tree");
        }
        if self.num_sorted > 0 {
            let right = self.num_sorted - 1;
            sort_kd(&mut self.ids, &mut self.coords, self.node_size, 0, right, 0);
        }
        log::debug!(
            "kdbush: indexed {} points (node_size {}) in {:?}",
            self.num_sorted,
            self.node_size,
            start.elapsed()
        );
    }

    /// Returns the number of points, including any left out of the tree for NaN coordinates
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the index holds no points
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the leaf group threshold the index was built with
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Identity indices in tree-array order.
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    /// Interleaved coordinates in tree-array order, aligned with [`ids`](Self::ids).
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Returns `(id, x, y)` for the point stored at tree-array `slot`,
    /// or `None` if `slot` is out of range.
    pub fn point(&self, slot: usize) -> Option<(usize, f64, f64)> {
        let &id = self.ids.get(slot)?;
        Some((id, self.coords[2 * slot], self.coords[2 * slot + 1]))
    }
}

/// Moves every point with a NaN coordinate behind the others and returns the
/// number of points left in front.
fn move_nan_last(ids: &mut [usize], coords: &mut [f64]) -> usize {
    let mut end = ids.len();
    let mut slot = 0;
    while slot < end {
        if coords[2 * slot].is_nan() || coords[2 * slot + 1].is_nan() {
            end -= 1;
            ids.swap(slot, end);
            coords.swap(2 * slot, 2 * end);
            coords.swap(2 * slot + 1, 2 * end + 1);
        } else {
            slot += 1;
        }
    }
    end
}

/// Recursively partitions `[left, right]` around its median slot, alternating
/// the split axis with `depth`, until ranges fit in a leaf.
fn sort_kd(
    ids: &mut [usize],
    coords: &mut [f64],
    node_size: usize,
    left: usize,
    right: usize,
    depth: usize,
) {
    if right - left <= node_size {
        return;
    }

    let m = (left + right) / 2;
    select(ids, coords, m, left, right, depth % 2);

    sort_kd(ids, coords, node_size, left, m - 1, depth + 1);
    sort_kd(ids, coords, node_size, m + 1, right, depth + 1);
}
