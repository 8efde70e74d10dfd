//! Identifier newtypes for list model objects.
//!
//! Identifiers are plain copyable handles. They carry no ownership and are
//! used for lookups only: an element's parent section is recorded as a
//! [`SectionId`], never as a reference.

use std::fmt;

/// Identifier of a row element, unique within a [`Root`](super::Root).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// Identifier of a section, unique within a [`Root`](super::Root).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(u32);

impl SectionId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_display_includes_raw_value() {
        assert_eq!(ElementId::new(7).to_string(), "element#7");
    }

    #[test]
    fn section_id_display_includes_raw_value() {
        assert_eq!(SectionId::new(3).to_string(), "section#3");
    }

    #[test]
    fn ids_round_trip_raw_value() {
        assert_eq!(ElementId::new(42).get(), 42);
        assert_eq!(SectionId::new(42).get(), 42);
    }
}
