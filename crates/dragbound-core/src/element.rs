//! Capabilities a host element tree provides to the drag computations.
//!
//! The core never walks a real DOM. Hosts implement these traits for their
//! element handles: the browser adapters in `dom`, the in-memory
//! [`crate::Scene`] for tests and replays.

use crate::error::SelectorError;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Inline offset style property of a positioned element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetSide {
    Top,
    Left,
}

impl OffsetSide {
    /// The CSS property name.
    pub fn property(self) -> &'static str {
        match self {
            OffsetSide::Top => "top",
            OffsetSide::Left => "left",
        }
    }
}

/// Rendered geometry and inline offsets of an element.
pub trait ElementGeometry {
    /// Rendered bounding rectangle in viewport coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Raw inline style value for `side` (e.g. `"12px"`), if set.
    fn inline_offset(&self, side: OffsetSide) -> Option<String>;
}

impl<T: ElementGeometry + ?Sized> ElementGeometry for &T {
    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }

    fn inline_offset(&self, side: OffsetSide) -> Option<String> {
        (**self).inline_offset(side)
    }
}

/// Selector queries over the descendants of an element.
pub trait QueryDescendants {
    /// Handle type of matched elements. Equality must be identity.
    type Element: PartialEq;

    /// All descendants matching `selector`, excluding the element itself.
    fn query_descendants(&self, selector: &str) -> Result<Vec<Self::Element>, SelectorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Rect);

    impl ElementGeometry for Fixed {
        fn bounding_rect(&self) -> Rect {
            self.0
        }

        fn inline_offset(&self, side: OffsetSide) -> Option<String> {
            Some(format!("{}px", side.property().len()))
        }
    }

    #[test]
    fn test_reference_forwards() {
        let element = Fixed(Rect::new(1.0, 2.0, 3.0, 4.0));
        let by_ref: &dyn ElementGeometry = &element;
        assert_eq!((&by_ref).bounding_rect(), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!((&element).inline_offset(OffsetSide::Left), Some("4px".to_string()));
    }

    #[test]
    fn test_property_names() {
        assert_eq!(OffsetSide::Top.property(), "top");
        assert_eq!(OffsetSide::Left.property(), "left");
    }
}
