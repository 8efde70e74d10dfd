//! Address-book look: one right-aligned caption column across the whole list,
//! followed by a thin vertical separator.

use super::{alignment, AlignmentMetrics, CaptionMeasurer, StyleError, StyleStrategy};
use crate::config::StyleConfig;
use crate::model::{Element, FontDescriptor, Rect, RowContext, Section, Size};
use crate::view_state::{CaptionLabel, CellView, Decoration, ListView};
use ratatui::layout::Alignment;
use ratatui::style::Color;
use std::cell::Cell;
use tracing::debug;

/// Tag of the separator decoration inserted by [`ContactsStyle::layout_cell`].
pub const SEPARATOR_TAG: u32 = 2;

/// Contacts strategy.
///
/// Captions are measured at a smaller dedicated font, and the widest caption
/// of the whole list (not just of its section) becomes every section's
/// alignment width and the cached column width used by cell layout.
#[derive(Debug, Clone)]
pub struct ContactsStyle {
    metrics: AlignmentMetrics,
    caption_font: FontDescriptor,
    caption_color: Color,
    border_gap: f32,
    /// Written only while computing alignment, on the UI thread.
    column_width: Cell<f32>,
}

impl ContactsStyle {
    /// Contacts style from configuration.
    pub fn new(config: &StyleConfig) -> Self {
        Self {
            metrics: AlignmentMetrics::from(config),
            caption_font: config.contacts_font.clone(),
            caption_color: config.contacts_caption_color.into(),
            border_gap: config.contacts_border_gap,
            column_width: Cell::new(config.contacts_column_width),
        }
    }

    /// Caption column width shared by every row.
    pub fn column_width(&self) -> f32 {
        self.column_width.get()
    }

    /// Font captions are measured and drawn with.
    pub fn caption_font(&self) -> &FontDescriptor {
        &self.caption_font
    }
}

impl Default for ContactsStyle {
    fn default() -> Self {
        Self::new(&StyleConfig::default())
    }
}

impl StyleStrategy for ContactsStyle {
    fn style_table(&self, list: &mut ListView) {
        list.caption_column_width = Some(self.column_width());
    }

    fn style_caption(&self, label: &mut CaptionLabel, element: &Element) {
        label.font = self.caption_font().clone();
        label.color = self.caption_color;
        if element.supports_caption() {
            label.alignment = Alignment::Right;
        }
    }

    fn layout_cell(&self, cell: &mut CellView, row: RowContext<'_>) -> Result<(), StyleError> {
        let width = self.column_width();

        cell.remove_tag(SEPARATOR_TAG);
        cell.borders = row.row_type().borders();

        if row.element().supports_caption() {
            cell.text_label.frame.size.width = width;
            cell.text_label.alignment = Alignment::Right;

            let content = cell.content_frame;
            cell.add_decoration(Decoration {
                tag: SEPARATOR_TAG,
                frame: Rect::new(
                    content.x() + width + self.border_gap,
                    content.top(),
                    1.0,
                    content.height(),
                ),
                color: Color::Gray,
            });
        }

        Ok(())
    }

    fn alignment_metrics(&self) -> AlignmentMetrics {
        self.metrics.clone()
    }

    fn entry_alignments(&self, sections: &[Section], measurer: &dyn CaptionMeasurer) -> Vec<Size> {
        let mut sizes =
            alignment::section_alignments(sections, measurer, &self.metrics, self.caption_font());

        // No sections: keep the previous column width.
        if let Some(widest) = alignment::widest(&sizes) {
            self.column_width.set(widest);
            for size in &mut sizes {
                size.width = widest;
            }
            debug!(column_width = widest, "Normalized contacts caption column");
        }

        sizes
    }
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
