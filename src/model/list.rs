//! The narrow view of the list model consumed by the styling layer.
//!
//! Row kinds (text, boolean, JSON-backed rows) live outside this crate. What
//! the styling layer needs from them is captured here: an optional caption,
//! whether the row kind supports captions, the containing section, and the
//! style strategy that renders it.

use super::error::ModelError;
use super::geometry::Size;
use super::identifiers::{ElementId, SectionId};
use super::row_type::RowType;
use crate::style::{CaptionMeasurer, StyleStrategy};
use std::rc::Rc;

/// A row in a section.
#[derive(Debug, Clone)]
pub struct Element {
    id: ElementId,
    caption: Option<String>,
    supports_caption: bool,
    /// Weak relation: set by [`Section::push`], used for lookup only.
    parent: Option<SectionId>,
    style: Rc<dyn StyleStrategy>,
}

impl Element {
    /// Create a detached, caption-less element rendered by `style`.
    pub fn new(id: ElementId, style: Rc<dyn StyleStrategy>) -> Self {
        Self {
            id,
            caption: None,
            supports_caption: false,
            parent: None,
            style,
        }
    }

    /// Set the caption text.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Mark the element's row kind as caption-capable (entry rows and the like).
    pub fn supporting_captions(mut self) -> Self {
        self.supports_caption = true;
        self
    }

    /// Element identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Caption text, if any.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Whether the row kind participates in caption alignment.
    pub fn supports_caption(&self) -> bool {
        self.supports_caption
    }

    /// Containing section, if attached.
    pub fn parent(&self) -> Option<SectionId> {
        self.parent
    }

    /// Strategy governing this element's visuals.
    pub fn style(&self) -> &Rc<dyn StyleStrategy> {
        &self.style
    }

    /// Caption that takes part in alignment: present and caption-capable.
    pub(crate) fn alignment_caption(&self) -> Option<&str> {
        if self.supports_caption {
            self.caption()
        } else {
            None
        }
    }
}

/// An ordered group of elements.
///
/// Element order is significant: it is the row order and decides each row's
/// [`RowType`].
#[derive(Debug, Clone)]
pub struct Section {
    id: SectionId,
    header: Option<String>,
    elements: Vec<Element>,
    entry_alignment: Size,
}

impl Section {
    /// Create an empty section.
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            header: None,
            elements: Vec::new(),
            entry_alignment: Size::ZERO,
        }
    }

    /// Set the header caption.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Builder form of [`Section::push`].
    pub fn with_element(mut self, element: Element) -> Self {
        self.push(element);
        self
    }

    /// Append an element, making this section its parent.
    pub fn push(&mut self, mut element: Element) {
        element.parent = Some(self.id);
        self.elements.push(element);
    }

    /// Remove an element, detaching it.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.position_of(id)?;
        let mut element = self.elements.remove(index);
        element.parent = None;
        Some(element)
    }

    /// Section identifier.
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// Header caption.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Elements in row order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the section has no rows.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Row index of an element.
    pub fn position_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Element by id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Cached caption alignment, written by the list's style strategy.
    pub fn entry_alignment(&self) -> Size {
        self.entry_alignment
    }

    pub(crate) fn set_entry_alignment(&mut self, size: Size) {
        self.entry_alignment = size;
    }
}

/// The whole list: ordered sections plus the strategy styling the list.
#[derive(Debug, Clone)]
pub struct Root {
    caption: Option<String>,
    sections: Vec<Section>,
    style: Rc<dyn StyleStrategy>,
}

impl Root {
    /// Create an empty list styled by `style`.
    pub fn new(style: Rc<dyn StyleStrategy>) -> Self {
        Self {
            caption: None,
            sections: Vec::new(),
            style,
        }
    }

    /// Set the list title.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Builder form of [`Root::push_section`].
    pub fn with_section(mut self, section: Section) -> Self {
        self.push_section(section);
        self
    }

    /// Append a section.
    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// List title.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub(crate) fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }

    /// Mutable access to one section, for structural edits.
    ///
    /// Callers should rerun [`Root::compute_entry_alignment`] afterwards.
    pub fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id() == id)
    }

    /// Strategy styling the list.
    pub fn style(&self) -> &Rc<dyn StyleStrategy> {
        &self.style
    }

    /// Section by id.
    pub fn section(&self, id: SectionId) -> Result<&Section, ModelError> {
        self.sections
            .iter()
            .find(|s| s.id() == id)
            .ok_or(ModelError::UnknownSection(id))
    }

    /// Element by id, searching every section.
    pub fn element(&self, id: ElementId) -> Result<&Element, ModelError> {
        self.sections
            .iter()
            .find_map(|s| s.element(id))
            .ok_or(ModelError::UnknownElement(id))
    }

    /// Resolve an element together with its containing section.
    ///
    /// # Errors
    /// [`ModelError::UnknownElement`] if no section holds the element,
    /// [`ModelError::DetachedElement`] / [`ModelError::NotInSection`] if the
    /// parent reference does not resolve to the holding section.
    pub fn row(&self, id: ElementId) -> Result<RowContext<'_>, ModelError> {
        let element = self.element(id)?;
        let parent = element
            .parent()
            .ok_or(ModelError::DetachedElement { element: id })?;
        let section = self.section(parent)?;
        RowContext::new(element, section)
    }

    /// Recompute every section's caption alignment with the list's strategy.
    ///
    /// Run once per structural or caption change, not per frame.
    pub fn compute_entry_alignment(&mut self, measurer: &dyn CaptionMeasurer) {
        let style = Rc::clone(&self.style);
        style.compute_entry_alignment(self, measurer);
    }
}

/// An element paired with the section that contains it.
///
/// Construction verifies membership, so holders can classify the row without
/// re-checking.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    element: &'a Element,
    section: &'a Section,
    row_type: RowType,
}

impl<'a> RowContext<'a> {
    /// Pair an element with its section.
    ///
    /// # Errors
    /// Fails if `section` is not the element's parent or does not list it.
    pub fn new(element: &'a Element, section: &'a Section) -> Result<Self, ModelError> {
        let row_type = RowType::classify(element, section)?;
        Ok(Self {
            element,
            section,
            row_type,
        })
    }

    /// The row's element.
    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// The containing section.
    pub fn section(&self) -> &'a Section {
        self.section
    }

    /// Position of the row within its section.
    pub fn row_type(&self) -> RowType {
        self.row_type
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
