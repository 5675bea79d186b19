//! Point abstraction consumed by the index.
//!
//! The index only ever asks a point for its coordinates, and only once, while
//! it is being built. Anything that can report an `(x, y)` pair can be indexed
//! without being copied or wrapped.

/// Something with a 2D position.
///
/// # Example
/// ```
/// use kdbush::prelude::*;
///
/// struct City {
///     lon: f64,
///     lat: f64,
/// }
///
/// impl Point for City {
///     fn coordinates(&self) -> (f64, f64) {
///         (self.lon, self.lat)
///     }
/// }
///
/// let cities = [City { lon: 2.35, lat: 48.85 }, City { lon: 13.4, lat: 52.52 }];
/// let index = KDBush::new(&cities);
/// assert_eq!(index.range(0.0, 40.0, 5.0, 50.0), vec![0]);
/// ```
pub trait Point {
    /// Returns the `(x, y)` coordinates of the point.
    fn coordinates(&self) -> (f64, f64);
}

/// Minimal point type holding two coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimplePoint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl SimplePoint {
    /// Creates a point at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Point for SimplePoint {
    #[inline]
    fn coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Point for (f64, f64) {
    #[inline]
    fn coordinates(&self) -> (f64, f64) {
        *self
    }
}

impl Point for [f64; 2] {
    #[inline]
    fn coordinates(&self) -> (f64, f64) {
        (self[0], self[1])
    }
}

impl<P: Point + ?Sized> Point for &P {
    #[inline]
    fn coordinates(&self) -> (f64, f64) {
        (**self).coordinates()
    }
}

impl<P: Point + ?Sized> Point for Box<P> {
    #[inline]
    fn coordinates(&self) -> (f64, f64) {
        (**self).coordinates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_point_coordinates() {
        let p = SimplePoint::new(1.5, -2.0);
        assert_eq!(p.coordinates(), (1.5, -2.0));
    }

    #[test]
    fn test_tuple_and_array_points() {
        assert_eq!((3.0, 4.0).coordinates(), (3.0, 4.0));
        assert_eq!([5.0, 6.0].coordinates(), (5.0, 6.0));
    }

    #[test]
    fn test_reference_and_boxed_points() {
        let p = SimplePoint::new(7.0, 8.0);
        let r = &p;
        assert_eq!(r.coordinates(), (7.0, 8.0));

        let boxed: Box<dyn Point> = Box::new(SimplePoint::new(9.0, 10.0));
        assert_eq!(boxed.coordinates(), (9.0, 10.0));
    }
}
