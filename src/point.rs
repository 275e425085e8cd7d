use std::cmp::Ordering;

/// An integer pixel coordinate.
#[derive(Clone, Copy, Default, Hash)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    #[inline]
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(&self, dx: isize, dy: isize) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(isize, isize)> for Point {
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.eq(&other.x) && self.y.eq(&other.y)
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    // Scan order: top to bottom, then left to right.
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

/// A polygon vertex. Kept in floating point so that repeated transforms do
/// not compound rounding error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(&self, other: &Vertex) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of `self` as seen from `center`, in radians.
    #[inline]
    pub fn angle_from(&self, center: &Vertex) -> f64 {
        (self.y - center.y).atan2(self.x - center.x)
    }

    /// Nearest pixel, rounding halves towards positive infinity.
    #[inline]
    pub fn to_pixel(&self) -> Point {
        Point::new(round_half_up(self.x), round_half_up(self.y))
    }
}

impl From<Point> for Vertex {
    fn from(p: Point) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[inline]
pub fn round_half_up(v: f64) -> isize {
    (v + 0.5).floor() as isize
}
