//! Incremental construction of a [`KDBush`].
//!
//! Collects coordinates one point at a time and sorts them once in
//! [`KDBushBuilder::build`]. Useful when points are produced on the fly
//! rather than held in a slice.

use crate::kdbush::{DEFAULT_NODE_SIZE, KDBush};
use crate::point::Point;

/// Collects points for a [`KDBush`] before it is built.
///
/// # Example
/// ```
/// use kdbush::prelude::*;
///
/// let mut builder = KDBushBuilder::with_capacity(3).node_size(16);
/// builder.add_point(0.0, 0.0);
/// builder.add_point(10.0, 10.0);
/// builder.add(&SimplePoint::new(5.0, 5.0));
///
/// let index = builder.build();
/// assert_eq!(index.range(2.0, 2.0, 8.0, 8.0), vec![2]);
/// ```
#[derive(Clone, Debug)]
pub struct KDBushBuilder {
    coords: Vec<f64>,
    node_size: usize,
}

impl KDBushBuilder {
    /// Creates an empty builder using [`DEFAULT_NODE_SIZE`].
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty builder with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coords: Vec::with_capacity(2 * capacity),
            node_size: DEFAULT_NODE_SIZE,
        }
    }

    /// Sets the leaf group threshold. Zero is treated as one at build time.
    #[must_use]
    pub fn node_size(mut self, node_size: usize) -> Self {
        self.node_size = node_size;
        self
    }

    /// Adds a point and returns its identity index.
    pub fn add<P: Point + ?Sized>(&mut self, point: &P) -> usize {
        let (x, y) = point.coordinates();
        self.add_point(x, y)
    }

    /// Adds the point `(x, y)` and returns its identity index.
    pub fn add_point(&mut self, x: f64, y: f64) -> usize {
        let id = self.len();
        self.coords.push(x);
        self.coords.push(y);
        id
    }

    /// Returns the number of points added so far
    pub fn len(&self) -> usize {
        self.coords.len() / 2
    }

    /// Returns whether no point has been added
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Sorts the collected points into a queryable index.
    pub fn build(self) -> KDBush {
        KDBush::from_coords(self.coords, self.node_size)
    }
}

impl Default for KDBushBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Point> Extend<P> for KDBushBuilder {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for point in iter {
            let (x, y) = point.coordinates();
            self.coords.extend([x, y]);
        }
    }
}

impl<P: Point> FromIterator<P> for KDBushBuilder {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}
