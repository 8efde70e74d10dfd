//! List model types (pure).
//!
//! The styling layer reads sections and elements but owns neither; the only
//! field it writes is each section's cached entry alignment.

pub mod error;
pub mod font;
pub mod geometry;
pub mod identifiers;
pub mod list;
pub mod row_type;

// Re-export for convenience
pub use error::ModelError;
pub use font::FontDescriptor;
pub use geometry::{Point, Rect, Size};
pub use identifiers::{ElementId, SectionId};
pub use list::{Element, RowContext, Root, Section};
pub use row_type::RowType;
