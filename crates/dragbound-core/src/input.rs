//! Input normalization for mouse/touch events.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A position in viewport pixels.
pub type Coordinate = Point;

/// Interaction event for unified mouse/touch handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InputEvent {
    /// Mouse or pen event carrying its own client coordinate.
    Pointer { position: Point },
    /// Touch event with the touches currently on the target.
    Touch { touches: Vec<Point> },
}

impl InputEvent {
    /// Create a pointer event at the given client coordinate.
    pub fn pointer(x: f64, y: f64) -> Self {
        Self::Pointer {
            position: Point::new(x, y),
        }
    }

    /// Create a touch event from a list of active touch points.
    pub fn touch(touches: impl IntoIterator<Item = Point>) -> Self {
        Self::Touch {
            touches: touches.into_iter().collect(),
        }
    }

    /// Check if this is a touch event.
    pub fn is_touch(&self) -> bool {
        matches!(self, Self::Touch { .. })
    }
}

/// Resolve an event to a single coordinate.
///
/// Touch events use their first active touch; any further touches are
/// ignored. A touch event without touches is malformed and resolves to
/// `(NaN, NaN)` instead of failing.
pub fn get_position(event: &InputEvent) -> Coordinate {
    match event {
        InputEvent::Pointer { position } => *position,
        InputEvent::Touch { touches } => match touches.first() {
            Some(first) => *first,
            None => {
                log::trace!("Touch event without touches");
                Point::new(f64::NAN, f64::NAN)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_position() {
        let event = InputEvent::pointer(12.5, -3.0);
        let position = get_position(&event);
        assert!((position.x - 12.5).abs() < f64::EPSILON);
        assert!((position.y + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_touch_uses_first_point() {
        let event = InputEvent::touch([
            Point::new(40.0, 60.0),
            Point::new(400.0, 600.0),
            Point::new(-1.0, -1.0),
        ]);
        assert_eq!(get_position(&event), Point::new(40.0, 60.0));
    }

    #[test]
    fn test_single_touch() {
        let event = InputEvent::touch([Point::new(7.0, 8.0)]);
        assert!(event.is_touch());
        assert_eq!(get_position(&event), Point::new(7.0, 8.0));
    }

    #[test]
    fn test_empty_touch_list_is_nan() {
        let position = get_position(&InputEvent::touch(Vec::<Point>::new()));
        assert!(position.x.is_nan());
        assert!(position.y.is_nan());
    }

    #[test]
    fn test_event_json_shape() {
        let event: InputEvent =
            serde_json::from_str(r#"{"kind":"touch","touches":[{"x":1.0,"y":2.0}]}"#).unwrap();
        assert_eq!(event, InputEvent::touch([Point::new(1.0, 2.0)]));

        let event: InputEvent =
            serde_json::from_str(r#"{"kind":"pointer","position":{"x":3.0,"y":4.0}}"#).unwrap();
        assert!(!event.is_touch());
        assert_eq!(get_position(&event), Point::new(3.0, 4.0));
    }
}
