//! Row position classification.

use super::error::ModelError;
use super::list::{Element, Section};
use ratatui::widgets::Borders;

/// Position of a row within its section, used for border and corner
/// decoration. Never used to reorder or mutate the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowType {
    /// First of two or more rows.
    Top,
    /// Neither first nor last.
    Mid,
    /// Last of two or more rows.
    Bot,
    /// The only row.
    TopBot,
}

impl RowType {
    /// Classify `element` within `section`.
    ///
    /// # Errors
    /// [`ModelError::DetachedElement`] if the element has no parent,
    /// [`ModelError::NotInSection`] if `section` is not its parent or does not
    /// list it.
    pub fn classify(element: &Element, section: &Section) -> Result<Self, ModelError> {
        let id = element.id();
        let parent = element
            .parent()
            .ok_or(ModelError::DetachedElement { element: id })?;
        let not_in_section = ModelError::NotInSection {
            element: id,
            section: section.id(),
        };
        if parent != section.id() {
            return Err(not_in_section);
        }
        let index = section.position_of(id).ok_or(not_in_section)?;

        Ok(Self::at(index, section.len()))
    }

    /// Classification of row `index` in a section of `len` rows.
    ///
    /// `index` must be `< len`.
    pub fn at(index: usize, len: usize) -> Self {
        debug_assert!(index < len, "row {index} out of range for {len} rows");
        let first = index == 0;
        let last = index + 1 == len;
        match (first, last) {
            (true, true) => Self::TopBot,
            (true, false) => Self::Top,
            (false, true) => Self::Bot,
            (false, false) => Self::Mid,
        }
    }

    /// Terminal borders drawn for a row of this type, so a section renders as
    /// one grouped box.
    pub fn borders(self) -> Borders {
        match self {
            Self::Top => Borders::TOP | Borders::LEFT | Borders::RIGHT,
            Self::Mid => Borders::LEFT | Borders::RIGHT,
            Self::Bot => Borders::BOTTOM | Borders::LEFT | Borders::RIGHT,
            Self::TopBot => Borders::ALL,
        }
    }
}
