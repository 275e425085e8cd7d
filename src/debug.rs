use std::{collections::HashSet, fmt};

use id_arena::Arena;
use itertools::Itertools;
use procr_ansi_term::{Color, Style};

use crate::{active::ActiveEdges, edge::Edge, point::Point};

pub const COLOR_GREEN: Color = Color::Fixed(40);
pub const COLOR_BLUE: Color = Color::Fixed(27);
pub const COLOR_ORANGE: Color = Color::Fixed(208);

pub const STYLE_LABEL: Style = Style::new().fg(Color::Yellow);

pub const STYLE_LEFT: Style = Style::new().fg(COLOR_GREEN);

pub const STYLE_RIGHT: Style = Style::new().fg(COLOR_BLUE);

pub const STYLE_PIXEL: Style = Style::new().bold().fg(COLOR_ORANGE);

pub fn debug_with(
    f: impl Fn(&mut fmt::Formatter) -> fmt::Result,
) -> impl fmt::Debug {
    struct DebugWith<F>(F);

    impl<F> fmt::Debug for DebugWith<F>
    where
        F: Fn(&mut fmt::Formatter) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0(f)
        }
    }

    DebugWith(f)
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("@({},{})", self.x, self.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "E[{}](y {}..{}, x={:.2}, dx={:.2})",
            self.id.index(),
            self.y_min,
            self.y_max,
            self.x,
            self.inv_slope
        )
    }
}

#[macro_export]
macro_rules! emit_info {
    (sty:$style:expr, msg:$msg:literal) => {
        tracing::info!("{}", $style.paint($msg));
    };
    (sty:$style:expr, fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!("{}", $style.paint(format!($fmt, $($rest)*)));
    };
    (fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!($fmt, $($rest)*);
    };
}

#[macro_export]
macro_rules! dbg_active_edges {
    ($arena:expr, $active_edges:expr) => {
        $crate::debug::debug_with($crate::debug::debug_active_edges(
            $arena,
            $active_edges,
        ))
    };
}

/// Active edges in sweep order, with the left and right member of each
/// span-forming pair tinted.
pub fn debug_active_edges<'a>(
    arena: &'a Arena<Edge>,
    active_edges: &'a ActiveEdges,
) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + 'a {
    move |f| {
        f.write_str(&format!(
            "[{}",
            active_edges
                .items()
                .iter()
                .enumerate()
                .map(|(ix, &id)| {
                    let style = match ix % 2 {
                        0 if ix + 1 < active_edges.len() => STYLE_LEFT,
                        1 => STYLE_RIGHT,
                        _ => Style::new(),
                    };
                    format!(" {}", style.paint(format!("{:?}", arena[id])))
                })
                .join(",")
        ))?;
        f.write_str(" ]")
    }
}

/// Pixels as a character grid over their bounding box, `#` for a set
/// pixel and `.` otherwise. Rows run top to bottom.
pub fn render_grid(pixels: &[Point], paint: bool) -> String {
    let (Some((min_x, max_x)), Some((min_y, max_y))) = (
        pixels.iter().map(|p| p.x).minmax().into_option(),
        pixels.iter().map(|p| p.y).minmax().into_option(),
    ) else {
        return String::new();
    };

    let lit: HashSet<Point> = pixels.iter().copied().collect();
    let on = if paint {
        STYLE_PIXEL.paint("#").to_string()
    } else {
        "#".to_string()
    };

    (min_y..=max_y)
        .map(|y| {
            (min_x..=max_x)
                .map(|x| {
                    if lit.contains(&Point::new(x, y)) {
                        on.as_str()
                    } else {
                        "."
                    }
                })
                .collect::<String>()
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_format() {
        assert_eq!(format!("{:?}", Point::new(-1, 4)), "@(-1,4)");
        assert_eq!(Point::new(2, 3).to_string(), "@(2,3)");
    }

    #[test]
    fn edge_format() {
        let mut arena: Arena<Edge> = Arena::new();
        let id = arena.alloc_with_id(|id| {
            Edge::from_side(id, Point::new(0, 0), Point::new(5, 10)).unwrap()
        });
        assert_eq!(
            format!("{:?}", arena[id]),
            "E[0](y 0..10, x=0.00, dx=0.50)"
        );
    }

    #[test]
    fn grid_marks_pixels() {
        let pixels = [Point::new(0, 0), Point::new(2, 0), Point::new(1, 1)];
        assert_eq!(render_grid(&pixels, false), "#.#\n.#.");
        assert_eq!(render_grid(&[], false), "");
    }

    #[test]
    fn painted_grid_uses_pixel_style() {
        let grid = render_grid(&[Point::new(0, 0), Point::new(1, 1)], true);
        let on = STYLE_PIXEL.paint("#").to_string();
        assert_eq!(grid, format!("{on}.\n.{on}"));
    }
}
