//! Input boundary: normalizes touch and mouse events into one stream.
//!
//! The gesture engine never sees where an event came from. Everything it
//! consumes is a [`PointerEvent`] of kind start, move, end, or cancel.
//!
//! ## Normalization rules
//!
//! | Raw event | Normalized |
//! |-----------|------------|
//! | `touch_start` with exactly one touch | `Start` at that touch |
//! | `touch_start` with more touches | dropped (extra finger) |
//! | `touch_move` | `Move` at the first touch |
//! | `touch_end` | `End` |
//! | `touch_cancel` | `Cancel` |
//! | `mouse_down` (primary button) | `Start` |
//! | `mouse_down` (other buttons) | dropped |
//! | `mouse_move` | `Move` |
//! | `mouse_up` | `End` |
//! | `mouse_leave` | `Cancel` |
//!
//! Raw events deserialize from the JSON shape used by recorded traces:
//!
//! ```json
//! [
//!   { "type": "touch_start", "touches": [{ "x": 200, "y": 10 }], "time": 0 },
//!   { "type": "touch_move", "touches": [{ "x": 155, "y": 12 }], "time": 16 },
//!   { "type": "touch_end", "time": 40 }
//! ]
//! ```

use crate::types::{Point, Timestamp};
use serde::{Deserialize, Serialize};

/// Normalized event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Start,
    Move,
    End,
    Cancel,
}

/// A source-agnostic pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub point: Point,
    pub time: Timestamp,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, point: Point, time: Timestamp) -> Self {
        Self { kind, point, time }
    }

    pub fn start(point: Point, time: Timestamp) -> Self {
        Self::new(PointerEventKind::Start, point, time)
    }

    pub fn moved(point: Point, time: Timestamp) -> Self {
        Self::new(PointerEventKind::Move, point, time)
    }

    pub fn end(point: Point, time: Timestamp) -> Self {
        Self::new(PointerEventKind::End, point, time)
    }

    pub fn cancel(point: Point, time: Timestamp) -> Self {
        Self::new(PointerEventKind::Cancel, point, time)
    }
}

/// Which device produced a raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    Touch,
    Mouse,
}

/// Primary mouse button as reported by `MouseEvent.button`.
pub const PRIMARY_BUTTON: i16 = 0;

/// Device-level event, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawPointerEvent {
    TouchStart {
        touches: Vec<Point>,
        time: Timestamp,
    },
    TouchMove {
        touches: Vec<Point>,
        time: Timestamp,
    },
    TouchEnd {
        #[serde(default)]
        touches: Vec<Point>,
        time: Timestamp,
    },
    TouchCancel {
        time: Timestamp,
    },
    MouseDown {
        x: f32,
        y: f32,
        #[serde(default)]
        button: i16,
        time: Timestamp,
    },
    MouseMove {
        x: f32,
        y: f32,
        time: Timestamp,
    },
    MouseUp {
        x: f32,
        y: f32,
        time: Timestamp,
    },
    MouseLeave {
        x: f32,
        y: f32,
        time: Timestamp,
    },
}

impl RawPointerEvent {
    pub fn source(&self) -> PointerSource {
        match self {
            RawPointerEvent::TouchStart { .. }
            | RawPointerEvent::TouchMove { .. }
            | RawPointerEvent::TouchEnd { .. }
            | RawPointerEvent::TouchCancel { .. } => PointerSource::Touch,
            RawPointerEvent::MouseDown { .. }
            | RawPointerEvent::MouseMove { .. }
            | RawPointerEvent::MouseUp { .. }
            | RawPointerEvent::MouseLeave { .. } => PointerSource::Mouse,
        }
    }

    pub fn time(&self) -> Timestamp {
        match *self {
            RawPointerEvent::TouchStart { time, .. }
            | RawPointerEvent::TouchMove { time, .. }
            | RawPointerEvent::TouchEnd { time, .. }
            | RawPointerEvent::TouchCancel { time }
            | RawPointerEvent::MouseDown { time, .. }
            | RawPointerEvent::MouseMove { time, .. }
            | RawPointerEvent::MouseUp { time, .. }
            | RawPointerEvent::MouseLeave { time, .. } => time,
        }
    }
}

/// Normalize a raw device event. `None` means the event is not part of the
/// single-pointer protocol and should be dropped.
pub fn normalize(raw: &RawPointerEvent) -> Option<PointerEvent> {
    match raw {
        RawPointerEvent::TouchStart { touches, time } => match touches.as_slice() {
            [only] => Some(PointerEvent::start(*only, *time)),
            _ => None,
        },
        RawPointerEvent::TouchMove { touches, time } => touches
            .first()
            .map(|first| PointerEvent::moved(*first, *time)),
        RawPointerEvent::TouchEnd { touches, time } => {
            let point = touches.first().copied().unwrap_or_default();
            Some(PointerEvent::end(point, *time))
        }
        RawPointerEvent::TouchCancel { time } => {
            Some(PointerEvent::cancel(Point::default(), *time))
        }
        RawPointerEvent::MouseDown { x, y, button, time } => (*button == PRIMARY_BUTTON)
            .then(|| PointerEvent::start(Point::new(*x, *y), *time)),
        RawPointerEvent::MouseMove { x, y, time } => {
            Some(PointerEvent::moved(Point::new(*x, *y), *time))
        }
        RawPointerEvent::MouseUp { x, y, time } => {
            Some(PointerEvent::end(Point::new(*x, *y), *time))
        }
        RawPointerEvent::MouseLeave { x, y, time } => {
            Some(PointerEvent::cancel(Point::new(*x, *y), *time))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(t: u64) -> Timestamp {
        Timestamp::from_millis(t)
    }

    #[test]
    fn single_touch_starts_session() {
        let raw = RawPointerEvent::TouchStart {
            touches: vec![Point::new(10.0, 20.0)],
            time: ms(5),
        };
        let event = normalize(&raw).unwrap();
        assert_eq!(event.kind, PointerEventKind::Start);
        assert_eq!(event.point, Point::new(10.0, 20.0));
        assert_eq!(event.time, ms(5));
    }

    #[test]
    fn second_finger_is_dropped() {
        let raw = RawPointerEvent::TouchStart {
            touches: vec![Point::new(10.0, 20.0), Point::new(90.0, 20.0)],
            time: ms(5),
        };
        assert_eq!(normalize(&raw), None);
    }

    #[test]
    fn touch_move_tracks_first_touch() {
        let raw = RawPointerEvent::TouchMove {
            touches: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
            time: ms(7),
        };
        assert_eq!(normalize(&raw).unwrap().point, Point::new(1.0, 2.0));
    }

    #[test]
    fn touch_move_without_touches_is_dropped() {
        let raw = RawPointerEvent::TouchMove {
            touches: vec![],
            time: ms(7),
        };
        assert_eq!(normalize(&raw), None);
    }

    #[test]
    fn non_primary_mouse_button_is_dropped() {
        let raw = RawPointerEvent::MouseDown {
            x: 0.0,
            y: 0.0,
            button: 2,
            time: ms(0),
        };
        assert_eq!(normalize(&raw), None);
    }

    #[test]
    fn mouse_leave_cancels() {
        let raw = RawPointerEvent::MouseLeave {
            x: 0.0,
            y: 0.0,
            time: ms(0),
        };
        assert_eq!(normalize(&raw).unwrap().kind, PointerEventKind::Cancel);
        assert_eq!(raw.source(), PointerSource::Mouse);
    }

    #[test]
    fn parses_trace_json() {
        let json = r#"[
            { "type": "touch_start", "touches": [{ "x": 200, "y": 10 }], "time": 0 },
            { "type": "touch_end", "time": 40 },
            { "type": "mouse_down", "x": 5, "y": 6, "time": 100 },
            { "type": "mouse_leave", "x": 5, "y": 6, "time": 120 }
        ]"#;
        let events: Vec<RawPointerEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[1].time(), ms(40));
        assert_eq!(events[0].source(), PointerSource::Touch);
        assert!(matches!(
            events[2],
            RawPointerEvent::MouseDown { button: 0, .. }
        ));
    }

    #[test]
    fn parses_browser_timestamps_with_fractions() {
        let json = r#"[
            { "type": "touch_start", "touches": [{ "x": 200.5, "y": 10.25 }], "time": 16.7 },
            { "type": "mouse_up", "x": 5, "y": 6, "time": 1523.9999 }
        ]"#;
        let events: Vec<RawPointerEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events[0].time(), ms(16));
        assert_eq!(events[1].time(), ms(1523));
        assert_eq!(
            normalize(&events[0]).unwrap().point,
            Point::new(200.5, 10.25)
        );
    }

    #[test]
    fn negative_time_is_rejected() {
        let json = r#"{ "type": "touch_cancel", "time": -1 }"#;
        assert!(serde_json::from_str::<RawPointerEvent>(json).is_err());
    }
}
