//! Browser adapters: element capabilities and event conversion over `web-sys`.

use crate::element::{ElementGeometry, OffsetSide, QueryDescendants};
use crate::error::SelectorError;
use crate::input::InputEvent;
use kurbo::{Point, Rect};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent, TouchEvent};

/// Set up panic messages and `log` output on the browser console.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
}

impl ElementGeometry for Element {
    fn bounding_rect(&self) -> Rect {
        let rect = self.get_bounding_client_rect();
        Rect::from_origin_size((rect.x(), rect.y()), (rect.width(), rect.height()))
    }

    fn inline_offset(&self, side: OffsetSide) -> Option<String> {
        let html: &HtmlElement = self.dyn_ref()?;
        html.inline_offset(side)
    }
}

impl ElementGeometry for HtmlElement {
    fn bounding_rect(&self) -> Rect {
        let element: &Element = self;
        element.bounding_rect()
    }

    fn inline_offset(&self, side: OffsetSide) -> Option<String> {
        self.style()
            .get_property_value(side.property())
            .ok()
            .filter(|value| !value.is_empty())
    }
}

impl QueryDescendants for Element {
    type Element = Element;

    fn query_descendants(&self, selector: &str) -> Result<Vec<Element>, SelectorError> {
        if selector.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        let list = self
            .query_selector_all(selector)
            .map_err(|e| SelectorError::Invalid {
                selector: selector.to_string(),
                reason: format!("{:?}", e),
            })?;
        Ok((0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

impl QueryDescendants for HtmlElement {
    type Element = Element;

    fn query_descendants(&self, selector: &str) -> Result<Vec<Element>, SelectorError> {
        let element: &Element = self;
        element.query_descendants(selector)
    }
}

/// The element an event was dispatched to, if it is an element.
pub fn event_target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

impl InputEvent {
    /// Convert a mouse (or pointer) event.
    pub fn from_mouse_event(event: &MouseEvent) -> Self {
        Self::Pointer {
            position: Point::new(event.client_x() as f64, event.client_y() as f64),
        }
    }

    /// Convert a touch event from its `targetTouches` list.
    pub fn from_touch_event(event: &TouchEvent) -> Self {
        let touches = event.target_touches();
        Self::Touch {
            touches: (0..touches.length())
                .filter_map(|index| touches.get(index))
                .map(|touch| Point::new(touch.client_x() as f64, touch.client_y() as f64))
                .collect(),
        }
    }

    /// Convert any DOM event, using touches when it is a touch event.
    ///
    /// Returns `None` for events that carry no pointer coordinates.
    pub fn from_event(event: &Event) -> Option<Self> {
        if let Some(touch) = event.dyn_ref::<TouchEvent>() {
            return Some(Self::from_touch_event(touch));
        }
        event.dyn_ref::<MouseEvent>().map(Self::from_mouse_event)
    }
}
