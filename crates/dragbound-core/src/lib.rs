//! Dragbound Core Library
//!
//! Pure geometry and event-normalization helpers for draggable panels that
//! must stay inside a bounding container.
//!
//! Nothing here owns drag state or touches listeners. A drag controller wires
//! the events, keeps the current offset, and calls into these functions:
//!
//! - [`get_position`] turns a mouse or touch event into a single coordinate.
//! - [`valid_element`] decides whether the pressed element is a drag handle.
//! - [`number_in_range`] clamps an offset into `[min, max]`.
//! - [`trim_pixel`] reads an inline `"12px"` style value as a number.
//! - [`get_bounding`] computes the translation [`Envelope`] of an element
//!   inside its container.

pub mod element;
pub mod envelope;
pub mod error;
pub mod handle;
pub mod input;
pub mod pixel;
pub mod range;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use element::{ElementGeometry, OffsetSide, QueryDescendants};
pub use envelope::{Envelope, get_bounding, inline_offset};
pub use error::{PixelError, SceneError, SelectorError};
pub use handle::valid_element;
pub use input::{Coordinate, InputEvent, get_position};
pub use pixel::{parse_pixel, trim_pixel};
pub use range::number_in_range;
pub use scene::{NodeId, Scene, SceneElement, SceneNode};
