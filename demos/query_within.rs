//! Find points within a radius of a center.
use kdbush::prelude::*;

#[derive(Debug)]
struct Station {
    name: &'static str,
    x: f64,
    y: f64,
}

impl Point for Station {
    fn coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

fn main() {
    let stations = vec![
        Station { name: "north", x: 0.0, y: 10.0 },
        Station { name: "center", x: 1.0, y: 1.0 },
        Station { name: "east", x: 6.0, y: 0.0 },
        Station { name: "far", x: 50.0, y: 50.0 },
    ];
    let index = KDBush::new(&stations);

    let mut found = index.within(&(0.0, 0.0), 6.0);
    found.sort_unstable();
    for &id in &found {
        println!("within 6.0: {}", stations[id].name);
    }

    // "east" is exactly 6.0 away and the radius is inclusive
    assert_eq!(found, vec![1, 2], "Expected center and east");
}
