//! # KDBush - Static 2D Point Index
//!
//! A fast static spatial index for 2D points based on a flat KD-tree.
//!
//! ## Features
//!
//! - **Flat Layout**: The tree lives in two parallel arrays (ids and interleaved
//!   coordinates); no node objects are allocated
//! - **Range Queries**: All points inside an axis-aligned box
//! - **Radius Queries**: All points within a distance of a center
//! - **Generic Input**: Anything implementing [`Point`] can be indexed; only its
//!   coordinates are copied, once
//! - **Static**: Built once, then read-only and safe to query from many threads
//!
//! ## Quick Start
//!
//! ```rust
//! use kdbush::prelude::*;
//!
//! let points = vec![
//!     SimplePoint::new(0.0, 0.0),   // Point 0
//!     SimplePoint::new(10.0, 10.0), // Point 1
//!     SimplePoint::new(5.0, 5.0),   // Point 2
//! ];
//!
//! // Build the index (node size 1 forces a full tree even for 3 points)
//! let index = KDBush::with_node_size(&points, 1);
//!
//! // Points inside the box (min_x, min_y, max_x, max_y)
//! let mut results = Vec::new();
//! index.query_range(2.0, 2.0, 8.0, 8.0, &mut results);
//! assert_eq!(results, vec![2]);
//!
//! // Points within radius 8 of the origin; the vector is reused
//! index.query_within(0.0, 0.0, 8.0, &mut results);
//! results.sort_unstable();
//! assert_eq!(results, vec![0, 2]);
//! ```
//!
//! ## How It Works
//!
//! Construction recursively selects the median of each slot range along x on
//! even depths and y on odd depths, using Floyd-Rivest selection so each level
//! costs linear expected time. Ranges no larger than the node size are left
//! unsorted as leaves. The resulting permutation encodes a balanced KD-tree:
//! the root is the middle slot and the children of a range are the middle slots
//! of its two halves.
//!
//! Query results are identity indices, i.e. positions in the original input.
//! Their order follows the traversal and carries no meaning.

pub mod builder;
pub mod kdbush;
pub mod point;
pub mod prelude;
mod queries;
mod select;


pub use builder::KDBushBuilder;
pub use kdbush::{DEFAULT_NODE_SIZE, KDBush};
pub use point::{Point, SimplePoint};
