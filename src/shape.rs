use std::f64::consts::PI;

use lazy_static::lazy_static;

use crate::{
    error::ShapeErr,
    point::{Point, Vertex},
    polygon::Polygon,
};

pub const HEXAGON_SIDES: usize = 6;
pub const STAR_POINTS: usize = 5;
/// Inner radius of the star relative to its outer radius.
pub const STAR_INNER_RATIO: f64 = 0.4;

lazy_static! {
    /// Unit-radius hexagon, first vertex on the positive x axis.
    static ref UNIT_HEXAGON: Vec<Vertex> = (0..HEXAGON_SIDES)
        .map(|i| {
            let angle = i as f64 * 2.0 * PI / HEXAGON_SIDES as f64;
            Vertex::new(angle.cos(), angle.sin())
        })
        .collect();

    /// Unit-radius star, first (outer) point straight up.
    static ref UNIT_STAR: Vec<Vertex> = (0..2 * STAR_POINTS)
        .map(|i| {
            let angle = -PI / 2.0 + i as f64 * PI / STAR_POINTS as f64;
            let r = if i % 2 == 0 { 1.0 } else { STAR_INNER_RATIO };
            Vertex::new(r * angle.cos(), r * angle.sin())
        })
        .collect();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Hexagon,
    Star,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    /// Side length for squares, circumradius for hexagons and stars.
    pub size: f64,
}

impl ShapeDescriptor {
    pub fn new(kind: ShapeKind, size: f64) -> Self {
        Self { kind, size }
    }

    /// A shape centred on `start` whose size is the (truncated) distance
    /// dragged to `current`.
    pub fn from_drag(kind: ShapeKind, start: Point, current: Point) -> Self {
        let size = Vertex::from(start).distance(&current.into()).trunc();
        Self::new(kind, size)
    }

    /// Vertex offsets relative to the shape's center.
    pub fn offsets(&self) -> Vec<Vertex> {
        let size = self.size;
        match self.kind {
            ShapeKind::Square => {
                let h = size / 2.0;
                vec![
                    Vertex::new(-h, -h),
                    Vertex::new(h, -h),
                    Vertex::new(h, h),
                    Vertex::new(-h, h),
                ]
            }
            ShapeKind::Hexagon => scaled(&UNIT_HEXAGON, size),
            ShapeKind::Star => scaled(&UNIT_STAR, size),
        }
    }

    /// A closed polygon for this shape centred on `center`. A zero size
    /// collapses the vertices onto the center and is rejected.
    pub fn polygon(&self, center: Vertex) -> Result<Polygon, ShapeErr> {
        Polygon::from_vertices(
            self.offsets()
                .into_iter()
                .map(|o| Vertex::new(center.x + o.x, center.y + o.y)),
        )
    }
}

fn scaled(unit: &[Vertex], size: f64) -> Vec<Vertex> {
    unit.iter()
        .map(|v| Vertex::new(v.x * size, v.y * size))
        .collect()
}
