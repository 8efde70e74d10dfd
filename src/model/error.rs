//! Error types for the list model.
//!
//! The list model is consumed, not owned, by the styling layer. The only
//! failures it reports are precondition violations: a row asked to lay out
//! while not attached to the section it claims, or a lookup for an id the
//! root does not know. These fail fast; nothing here attempts recovery.

use super::identifiers::{ElementId, SectionId};
use thiserror::Error;

/// Precondition violations detected while resolving rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The element has no containing section.
    ///
    /// Every element must be pushed into a section before any layout pass
    /// touches it.
    #[error("{element} is not attached to any section")]
    DetachedElement {
        /// The detached element.
        element: ElementId,
    },

    /// The element's parent reference and the section's contents disagree.
    #[error("{element} is not a member of {section}")]
    NotInSection {
        /// The element being classified.
        element: ElementId,
        /// The section it was checked against.
        section: SectionId,
    },

    /// No element with this id exists in the root.
    #[error("unknown {0}")]
    UnknownElement(ElementId),

    /// No section with this id exists in the root.
    #[error("unknown {0}")]
    UnknownSection(SectionId),
}
