//! Translation envelope of a draggable element inside a bounding container.

use crate::element::{ElementGeometry, OffsetSide};
use crate::pixel::trim_pixel;
use crate::range::number_in_range;
use kurbo::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Allowed range of the inline `top`/`left` offsets of a dragged element.
///
/// The range is symmetric: `max_top == -min_top` and
/// `max_left == -min_left`. `min_*` is the offset at which the element's
/// edge meets the container's edge; the positive limit mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub min_top: f64,
    pub min_left: f64,
    pub max_top: f64,
    pub max_left: f64,
}

impl Envelope {
    /// Build the envelope from the element's current inline offset
    /// (`x` = left, `y` = top) and the two rendered rectangles.
    ///
    /// Assumes the inline offset is the only translation applied to the
    /// element; transforms are not accounted for.
    pub fn from_geometry(offset: Vec2, draggable_rect: Rect, bounding_rect: Rect) -> Self {
        let min_top = offset.y + (bounding_rect.y0 - draggable_rect.y0);
        let min_left = offset.x + (bounding_rect.x0 - draggable_rect.x0);
        Self {
            min_top,
            min_left,
            max_top: -min_top,
            max_left: -min_left,
        }
    }

    /// Whether `min <= max` holds on both axes.
    ///
    /// An element already pushed past its container's top-left edge yields
    /// an inverted envelope, and [`Envelope::clamp_offset`] then pins it to
    /// the `max_*` limits.
    pub fn is_ordered(&self) -> bool {
        self.min_top <= self.max_top && self.min_left <= self.max_left
    }

    /// Check if an offset (`x` = left, `y` = top) lies inside the envelope.
    pub fn contains(&self, offset: Vec2) -> bool {
        (self.min_left..=self.max_left).contains(&offset.x)
            && (self.min_top..=self.max_top).contains(&offset.y)
    }

    /// Clamp a proposed offset (`x` = left, `y` = top) into the envelope.
    pub fn clamp_offset(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            number_in_range(offset.x, self.min_left, self.max_left),
            number_in_range(offset.y, self.min_top, self.max_top),
        )
    }
}

/// Current inline offset of an element (`x` = left, `y` = top).
///
/// Unset or unreadable offsets count as zero.
pub fn inline_offset<E: ElementGeometry + ?Sized>(element: &E) -> Vec2 {
    let read = |side: OffsetSide| trim_pixel(element.inline_offset(side).as_deref().unwrap_or_default());
    Vec2::new(read(OffsetSide::Left), read(OffsetSide::Top))
}

/// Compute the envelope of `draggable` inside `bounding`.
///
/// Without a bounding element the drag is unconstrained and there is no
/// envelope. Geometry is read once per call and nothing is cached.
pub fn get_bounding<D, B>(draggable: &D, bounding: Option<&B>) -> Option<Envelope>
where
    D: ElementGeometry + ?Sized,
    B: ElementGeometry + ?Sized,
{
    let bounding = bounding?;
    let envelope = Envelope::from_geometry(
        inline_offset(draggable),
        draggable.bounding_rect(),
        bounding.bounding_rect(),
    );
    log::debug!("Computed drag envelope: {:?}", envelope);
    Some(envelope)
}
