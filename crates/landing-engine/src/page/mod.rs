// page/mod.rs
//
// The document side of the landing: which elements exist, which classes they
// carry, what inline overrides are active, and how their geometry is measured.

pub mod document;
pub mod element;
pub mod layout;

pub use document::PageState;
pub use element::{CardIndex, ClassName, Cursor, ElementId, ElementState, InlineStyle};
pub use layout::{LayoutMeasure, Rect, StaticLayout, Viewport};
