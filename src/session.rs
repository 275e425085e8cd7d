use tracing::{debug, info};

use crate::{
    error::ShapeErr,
    fence::fill_fence,
    gesture::{Gesture, GestureEvent},
    point::{Point, Vertex},
    polygon::Polygon,
    scanline::{fill_scanline, Span},
    transform::apply_transform,
};

/// One editing session: the shapes it owns, which one is selected, and the
/// transform gesture in progress.
///
/// All mutation goes through `&mut self`, so a session is never read and
/// transformed at the same time.
#[derive(Clone, Debug, Default)]
pub struct Session {
    shapes: Vec<Polygon>,
    selected: Option<usize>,
    gesture: Gesture,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn shapes(&self) -> &[Polygon] {
        &self.shapes
    }

    #[inline]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Add a closed polygon and select it.
    pub fn add_shape(&mut self, polygon: Polygon) -> Result<usize, ShapeErr> {
        if !polygon.is_closed() {
            return Err(ShapeErr::NotClosed);
        }
        self.shapes.push(polygon);
        let ix = self.shapes.len() - 1;
        self.selected = Some(ix);
        info!(ix, "shape added");
        Ok(ix)
    }

    pub fn select(&mut self, ix: usize) -> Result<(), ShapeErr> {
        if ix >= self.shapes.len() {
            return Err(ShapeErr::UnknownShape(ix));
        }
        self.selected = Some(ix);
        Ok(())
    }

    /// Select the first shape containing `p`; clears the selection when
    /// none does.
    pub fn select_at(&mut self, p: Vertex) -> Option<usize> {
        self.selected = self.shapes.iter().position(|s| s.contains(p));
        debug!(?p, selected = ?self.selected, "selection by containment");
        self.selected
    }

    pub fn selected_shape(&self) -> Result<&Polygon, ShapeErr> {
        self.selected
            .and_then(|ix| self.shapes.get(ix))
            .ok_or(ShapeErr::NoSelection)
    }

    /// Route a gesture event. A drag sample that yields a transform is
    /// applied to the selected shape; with nothing selected the gesture
    /// still advances but `NoSelection` is reported.
    pub fn handle(&mut self, event: GestureEvent) -> Result<(), ShapeErr> {
        let Some(transform) = self.gesture.advance(event) else {
            return Ok(());
        };
        let polygon = self
            .selected
            .and_then(|ix| self.shapes.get_mut(ix))
            .ok_or(ShapeErr::NoSelection)?;
        apply_transform(polygon, &transform);
        Ok(())
    }

    pub fn fill_selected_scanline(&self) -> Result<Vec<Span>, ShapeErr> {
        Ok(fill_scanline(&self.selected_shape()?.pixel_outline()))
    }

    pub fn fill_selected_fence(&self) -> Result<Vec<Point>, ShapeErr> {
        Ok(fill_fence(&self.selected_shape()?.pixel_outline()))
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selected = None;
        self.gesture = Gesture::Idle;
        info!("session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        gesture::TransformKind,
        shape::{ShapeDescriptor, ShapeKind},
    };

    fn session_with_square() -> Session {
        let mut session = Session::new();
        let square = ShapeDescriptor::new(ShapeKind::Square, 10.0)
            .polygon(Vertex::new(20.0, 20.0))
            .unwrap();
        session.add_shape(square).unwrap();
        session
    }

    #[test]
    fn open_polygons_are_rejected() {
        let mut session = Session::new();
        assert_eq!(session.add_shape(Polygon::new()), Err(ShapeErr::NotClosed));
        assert_eq!(session.select(0), Err(ShapeErr::UnknownShape(0)));
    }

    #[test]
    fn select_by_containment() {
        let mut session = session_with_square();
        assert_eq!(session.select_at(Vertex::new(0.0, 0.0)), None);
        assert_eq!(session.selected_shape(), Err(ShapeErr::NoSelection));
        assert_eq!(session.select_at(Vertex::new(21.0, 19.0)), Some(0));
    }

    #[test]
    fn drag_translates_selected_shape() {
        let mut session = session_with_square();
        session
            .handle(GestureEvent::SelectTool(TransformKind::Translate))
            .unwrap();
        session
            .handle(GestureEvent::AnchorChosen(Vertex::new(0.0, 0.0)))
            .unwrap();
        session
            .handle(GestureEvent::DragSample(Vertex::new(5.0, 0.0)))
            .unwrap();
        session
            .handle(GestureEvent::DragSample(Vertex::new(5.0, 5.0)))
            .unwrap();
        session.handle(GestureEvent::GestureEnd).unwrap();

        assert_eq!(
            session.shapes()[0].vertices()[0],
            Vertex::new(20.0, 20.0)
        );
    }

    #[test]
    fn drag_without_selection_reports_it() {
        let mut session = session_with_square();
        session.select_at(Vertex::new(-50.0, -50.0));
        session
            .handle(GestureEvent::SelectTool(TransformKind::Translate))
            .unwrap();
        session
            .handle(GestureEvent::AnchorChosen(Vertex::new(0.0, 0.0)))
            .unwrap();
        assert_eq!(
            session.handle(GestureEvent::DragSample(Vertex::new(1.0, 0.0))),
            Err(ShapeErr::NoSelection)
        );
    }

    #[test]
    fn fills_follow_selection() {
        let session = session_with_square();
        let spans = session.fill_selected_scanline().unwrap();
        assert_eq!(spans.len(), 10);
        assert!(spans.iter().all(|s| (s.x_start, s.x_end) == (15, 25)));
        let fence = session.fill_selected_fence().unwrap();
        assert!(!fence.is_empty());

        let mut session = session;
        session.clear();
        assert!(session.shapes().is_empty());
        assert_eq!(session.fill_selected_fence(), Err(ShapeErr::NoSelection));
    }
}
