use raster_kit::{
    debug::{render_grid, STYLE_LABEL},
    emit_info,
    gesture::{GestureEvent, TransformKind},
    session::Session,
    shape::{ShapeDescriptor, ShapeKind},
    Point, ShapeErr, Vertex,
};
use tracing::Level;

fn show(label: &str, pixels: &[Point]) {
    emit_info!(sty:STYLE_LABEL, fmt:"{} ({} pixels)" | label, pixels.len());
    println!("{}\n", render_grid(pixels, true));
}

pub fn main() -> Result<(), ShapeErr> {
    let level = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(level)
        // sets this to be the default, global collector for this application.
        .init();

    show(
        "line",
        &raster_kit::rasterize_line(Point::new(0, 0), Point::new(17, 6)),
    );
    show("circle", &raster_kit::rasterize_circle(Point::new(0, 0), 8));
    show(
        "ellipse",
        &raster_kit::rasterize_ellipse(Point::new(0, 0), 14, 6),
    );

    let mut session = Session::new();
    let star = ShapeDescriptor::new(ShapeKind::Star, 12.0)
        .polygon(Vertex::new(12.0, 12.0))?;
    session.add_shape(star)?;

    let spans = session.fill_selected_scanline()?;
    let solid: Vec<Point> = spans.iter().flat_map(|s| s.pixels()).collect();
    show("star, edge table fill", &solid);
    show("star, fence fill", &session.fill_selected_fence()?);

    // quarter turn about the star's center
    for event in [
        GestureEvent::SelectTool(TransformKind::Rotate),
        GestureEvent::AnchorChosen(Vertex::new(12.0, 12.0)),
        GestureEvent::DragSample(Vertex::new(22.0, 12.0)),
        GestureEvent::DragSample(Vertex::new(12.0, 22.0)),
        GestureEvent::GestureEnd,
    ] {
        session.handle(event)?;
    }
    show("rotated star, fence fill", &session.fill_selected_fence()?);

    Ok(())
}
