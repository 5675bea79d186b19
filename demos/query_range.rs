//! Find points inside an axis-aligned box.
use kdbush::prelude::*;

fn main() {
    let points = [
        SimplePoint::new(0.0, 0.0),   // Point 0
        SimplePoint::new(10.0, 10.0), // Point 1
        SimplePoint::new(5.0, 5.0),   // Point 2
        SimplePoint::new(8.0, 2.0),   // Point 3 (on the box edge)
    ];
    let index = KDBush::with_node_size(&points, 1);

    let mut results = Vec::new();
    index.query_range(2.0, 2.0, 8.0, 8.0, &mut results);
    results.sort_unstable();
    println!("In box: {:?}", results);

    // Bounds are inclusive, so point 3 on the corner is reported
    assert_eq!(results, vec![2, 3], "Expected points 2 and 3 in box");
}
