//! Wrapper strategy for dialogs with their own backdrop.

use super::{AlignmentMetrics, CaptionMeasurer, StyleError, StyleStrategy};
use crate::keyboard::{table_with_background, KeyboardRegistrar};
use crate::model::{Element, Root, RowContext, Section, Size};
use crate::view_state::{BackgroundView, CaptionLabel, CellView, DialogView, ListView};
use ratatui::style::Color;
use std::rc::Rc;
use tracing::debug;

/// Delegates every hook to an inner strategy, and optionally replaces the
/// root visual with a keyboard-aware container over a background.
#[derive(Debug, Clone)]
pub struct CustomStyle {
    inner: Rc<dyn StyleStrategy>,
    background: Option<(Color, KeyboardRegistrar)>,
}

impl CustomStyle {
    /// Wrap `inner` without changing the root visual.
    pub fn new(inner: Rc<dyn StyleStrategy>) -> Self {
        Self {
            inner,
            background: None,
        }
    }

    /// Install a background filled with `fill`; the container subscribes to
    /// keyboard notifications through `registrar`.
    pub fn with_background(mut self, fill: Color, registrar: KeyboardRegistrar) -> Self {
        self.background = Some((fill, registrar));
        self
    }

    /// The wrapped strategy.
    pub fn inner(&self) -> &Rc<dyn StyleStrategy> {
        &self.inner
    }
}

impl StyleStrategy for CustomStyle {
    fn style_table(&self, list: &mut ListView) {
        self.inner.style_table(list);
    }

    fn style_caption(&self, label: &mut CaptionLabel, element: &Element) {
        self.inner.style_caption(label, element);
    }

    fn style_cell(&self, cell: &mut CellView, row: RowContext<'_>) -> Result<(), StyleError> {
        self.inner.style_cell(cell, row)
    }

    fn layout_cell(&self, cell: &mut CellView, row: RowContext<'_>) -> Result<(), StyleError> {
        self.inner.layout_cell(cell, row)
    }

    fn setup_view(&self, list: ListView) -> DialogView {
        match &self.background {
            Some((fill, registrar)) => {
                debug!(frame = ?list.frame, "Wrapping list in keyboard-aware container");
                DialogView::Container(table_with_background(
                    list,
                    BackgroundView::new(*fill),
                    registrar,
                ))
            }
            None => self.inner.setup_view(list),
        }
    }

    fn alignment_metrics(&self) -> AlignmentMetrics {
        self.inner.alignment_metrics()
    }

    fn entry_alignments(&self, sections: &[Section], measurer: &dyn CaptionMeasurer) -> Vec<Size> {
        self.inner.entry_alignments(sections, measurer)
    }

    fn compute_entry_alignment(&self, root: &mut Root, measurer: &dyn CaptionMeasurer) {
        self.inner.compute_entry_alignment(root, measurer);
    }
}
