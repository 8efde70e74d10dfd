//! Headless state of one visible row.
//!
//! A `CellView` is what style hooks mutate: frames, the caption label's
//! font/color/alignment, row borders and tagged decorations. Hosts render it
//! however they like; [`crate::view::DialogListWidget`] renders it to a
//! terminal.

use crate::model::{FontDescriptor, Rect};
use ratatui::layout::Alignment;
use ratatui::style::Color;
use ratatui::widgets::Borders;

/// The caption text visual of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLabel {
    /// Caption text.
    pub text: Option<String>,
    /// Font requested for the caption.
    pub font: FontDescriptor,
    /// Text color.
    pub color: Color,
    /// Horizontal text alignment within `frame`.
    pub alignment: Alignment,
    /// Position within the cell, in cell coordinates.
    pub frame: Rect,
}

impl CaptionLabel {
    /// Label with host defaults: base font, reset color, left aligned.
    pub fn new(text: Option<String>) -> Self {
        Self {
            text,
            font: FontDescriptor::default(),
            color: Color::Reset,
            alignment: Alignment::Left,
            frame: Rect::ZERO,
        }
    }
}

/// An extra visual inserted into a cell by a style hook, such as a column
/// separator.
///
/// Hooks run on every layout pass, so decorations carry a tag that lets the
/// next pass remove what the previous one inserted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    /// Identifies decorations inserted by the same hook.
    pub tag: u32,
    /// Position within the cell, in cell coordinates.
    pub frame: Rect,
    /// Fill color.
    pub color: Color,
}

/// One visible row.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    /// Row geometry in list coordinates. The layout controller keys its
    /// anti-thrash state on this.
    pub frame: Rect,
    /// Area available to the row's content, in cell coordinates.
    pub content_frame: Rect,
    /// Caption visual.
    pub text_label: CaptionLabel,
    /// Value text shown after the caption (entry text, switch state, ...).
    pub detail_text: Option<String>,
    /// Position of the value text, in cell coordinates.
    pub detail_frame: Rect,
    /// Row borders; style hooks derive them from the row type.
    pub borders: Borders,
    decorations: Vec<Decoration>,
}

impl CellView {
    /// Empty cell at `frame` whose content fills the whole cell.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            content_frame: Rect::from_parts(Default::default(), frame.size),
            text_label: CaptionLabel::new(None),
            detail_text: None,
            detail_frame: Rect::ZERO,
            borders: Borders::NONE,
            decorations: Vec::new(),
        }
    }

    /// Set the caption text.
    pub fn with_caption(mut self, caption: Option<&str>) -> Self {
        self.text_label.text = caption.map(str::to_string);
        self
    }

    /// Set the value text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail_text = Some(detail.into());
        self
    }

    /// Decorations in insertion order (drawn last on top).
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Insert a decoration.
    pub fn add_decoration(&mut self, decoration: Decoration) {
        self.decorations.push(decoration);
    }

    /// Remove every decoration carrying `tag`, returning how many went.
    pub fn remove_tag(&mut self, tag: u32) -> usize {
        let before = self.decorations.len();
        self.decorations.retain(|d| d.tag != tag);
        before - self.decorations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(tag: u32) -> Decoration {
        Decoration {
            tag,
            frame: Rect::new(0.0, 0.0, 1.0, 1.0),
            color: Color::Gray,
        }
    }

    #[test]
    fn new_cell_content_fills_cell() {
        let cell = CellView::new(Rect::new(0.0, 44.0, 320.0, 44.0));
        assert_eq!(cell.content_frame, Rect::new(0.0, 0.0, 320.0, 44.0));
        assert_eq!(cell.borders, Borders::NONE);
    }

    #[test]
    fn remove_tag_only_removes_matching() {
        let mut cell = CellView::new(Rect::ZERO);
        cell.add_decoration(bar(2));
        cell.add_decoration(bar(7));
        cell.add_decoration(bar(2));

        assert_eq!(cell.remove_tag(2), 2);
        assert_eq!(cell.decorations(), &[bar(7)]);
        assert_eq!(cell.remove_tag(2), 0);
    }

    #[test]
    fn builders_set_texts() {
        let cell = CellView::new(Rect::ZERO)
            .with_caption(Some("Name"))
            .with_detail("Ada");
        assert_eq!(cell.text_label.text.as_deref(), Some("Name"));
        assert_eq!(cell.detail_text.as_deref(), Some("Ada"));
    }
}
