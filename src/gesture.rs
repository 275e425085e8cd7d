use tracing::{debug, trace};

use crate::{point::Vertex, transform::Transform};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Translate,
    Rotate,
    Scale,
    Shear,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Pick the transform tool; abandons any gesture in progress.
    SelectTool(TransformKind),
    /// The fixed point for rotate/scale/shear, or the drag origin for
    /// translate.
    AnchorChosen(Vertex),
    DragSample(Vertex),
    GestureEnd,
    Reset,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    AwaitingAnchor {
        kind: TransformKind,
    },
    AwaitingGestureEnd {
        kind: TransformKind,
        anchor: Vertex,
        /// The previous drag sample: each new sample is transformed
        /// relative to this one, not to the start of the gesture.
        last: Vertex,
    },
}

impl Gesture {
    pub fn kind(&self) -> Option<TransformKind> {
        match *self {
            Gesture::Idle => None,
            Gesture::AwaitingAnchor { kind }
            | Gesture::AwaitingGestureEnd { kind, .. } => Some(kind),
        }
    }

    /// Feed one event. Returns the incremental transform a drag sample
    /// produces, if any; every other event only moves the state.
    pub fn advance(&mut self, event: GestureEvent) -> Option<Transform> {
        let (next, transform) = match (*self, event) {
            (_, GestureEvent::Reset) => (Gesture::Idle, None),
            (_, GestureEvent::SelectTool(kind)) => {
                (Gesture::AwaitingAnchor { kind }, None)
            }
            (Gesture::AwaitingAnchor { kind }, GestureEvent::AnchorChosen(anchor)) => (
                Gesture::AwaitingGestureEnd {
                    kind,
                    anchor,
                    last: anchor,
                },
                None,
            ),
            (
                Gesture::AwaitingGestureEnd { kind, anchor, last },
                GestureEvent::DragSample(current),
            ) => (
                Gesture::AwaitingGestureEnd {
                    kind,
                    anchor,
                    last: current,
                },
                incremental(kind, anchor, last, current),
            ),
            (Gesture::AwaitingGestureEnd { kind, .. }, GestureEvent::GestureEnd) => {
                (Gesture::AwaitingAnchor { kind }, None)
            }
            (state, event) => {
                debug!(?state, ?event, "event ignored");
                (state, None)
            }
        };
        trace!(from = ?self, to = ?next, ?transform, "gesture step");
        *self = next;
        transform
    }
}

fn incremental(
    kind: TransformKind,
    anchor: Vertex,
    last: Vertex,
    current: Vertex,
) -> Option<Transform> {
    if last == current {
        return None;
    }
    Some(match kind {
        TransformKind::Translate => Transform::Translate {
            dx: current.x - last.x,
            dy: current.y - last.y,
        },
        TransformKind::Rotate => Transform::rotate_between(anchor, last, current),
        TransformKind::Scale => Transform::scale_between(anchor, last, current),
        TransformKind::Shear => Transform::shear_between(anchor, last, current),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new(x, y)
    }

    #[test]
    fn full_translate_gesture() {
        let mut g = Gesture::default();
        assert_eq!(g.advance(GestureEvent::SelectTool(TransformKind::Translate)), None);
        assert_eq!(g.advance(GestureEvent::AnchorChosen(v(10.0, 10.0))), None);
        assert_eq!(
            g.advance(GestureEvent::DragSample(v(13.0, 11.0))),
            Some(Transform::Translate { dx: 3.0, dy: 1.0 })
        );
        assert_eq!(
            g.advance(GestureEvent::DragSample(v(14.0, 15.0))),
            Some(Transform::Translate { dx: 1.0, dy: 4.0 })
        );
        assert_eq!(g.advance(GestureEvent::GestureEnd), None);
        assert_eq!(
            g,
            Gesture::AwaitingAnchor {
                kind: TransformKind::Translate
            }
        );
    }

    #[test]
    fn drag_before_anchor_is_ignored() {
        let mut g = Gesture::default();
        assert_eq!(g.advance(GestureEvent::DragSample(v(1.0, 1.0))), None);
        assert_eq!(g, Gesture::Idle);

        g.advance(GestureEvent::SelectTool(TransformKind::Rotate));
        assert_eq!(g.advance(GestureEvent::DragSample(v(1.0, 1.0))), None);
        assert_eq!(g.kind(), Some(TransformKind::Rotate));
    }

    #[test]
    fn scale_tracks_previous_sample() {
        let mut g = Gesture::default();
        g.advance(GestureEvent::SelectTool(TransformKind::Scale));
        g.advance(GestureEvent::AnchorChosen(v(0.0, 0.0)));
        // the first sample is measured against the anchor itself
        assert_eq!(
            g.advance(GestureEvent::DragSample(v(2.0, 0.0))),
            Some(Transform::Scale {
                anchor: v(0.0, 0.0),
                factor: 1.0
            })
        );
        assert_eq!(
            g.advance(GestureEvent::DragSample(v(6.0, 0.0))),
            Some(Transform::Scale {
                anchor: v(0.0, 0.0),
                factor: 3.0
            })
        );
    }

    #[test]
    fn repeated_sample_yields_nothing() {
        let mut g = Gesture::default();
        g.advance(GestureEvent::SelectTool(TransformKind::Shear));
        g.advance(GestureEvent::AnchorChosen(v(5.0, 5.0)));
        assert!(g.advance(GestureEvent::DragSample(v(8.0, 5.0))).is_some());
        assert_eq!(g.advance(GestureEvent::DragSample(v(8.0, 5.0))), None);
    }

    #[test]
    fn reset_and_retool() {
        let mut g = Gesture::default();
        g.advance(GestureEvent::SelectTool(TransformKind::Rotate));
        g.advance(GestureEvent::AnchorChosen(v(0.0, 0.0)));
        g.advance(GestureEvent::SelectTool(TransformKind::Shear));
        assert_eq!(
            g,
            Gesture::AwaitingAnchor {
                kind: TransformKind::Shear
            }
        );
        g.advance(GestureEvent::Reset);
        assert_eq!(g, Gesture::Idle);
        assert_eq!(g.kind(), None);
    }
}
