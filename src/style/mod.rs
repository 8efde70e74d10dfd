//! Pluggable row styling.
//!
//! A [`StyleStrategy`] is shared (by `Rc`) between a [`Root`] and every
//! [`Element`] that opts into it. It exposes whole-list, caption and per-cell
//! hooks plus the caption alignment algorithm. Every hook has a no-op default,
//! so a strategy only overrides what it changes.
//!
//! Variants:
//! - [`DefaultStyle`]: no-op hooks, per-section caption alignment
//! - [`ContactsStyle`]: one caption column width across the whole list, with a
//!   separator after the column
//! - [`CustomStyle`]: wraps another strategy and replaces the root view with a
//!   keyboard-aware container over a background

pub mod alignment;
mod contacts;
mod custom;
mod default;

pub use alignment::AlignmentMetrics;
pub use contacts::{ContactsStyle, SEPARATOR_TAG};
pub use custom::CustomStyle;
pub use default::DefaultStyle;

use crate::model::{Element, ElementId, FontDescriptor, ModelError, Root, RowContext, Section, Size};
use crate::view_state::{CaptionLabel, CellView, DialogView, ListView};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Host text measurement.
pub trait CaptionMeasurer {
    /// Rendered size of `text` in `font`.
    fn measure(&self, text: &str, font: &FontDescriptor) -> Size;
}

impl<F> CaptionMeasurer for F
where
    F: Fn(&str, &FontDescriptor) -> Size,
{
    fn measure(&self, text: &str, font: &FontDescriptor) -> Size {
        self(text, font)
    }
}

/// Errors raised by per-cell hooks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// The row violated a list-model precondition.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A host-supplied hook could not style the row.
    #[error("cannot style {element}: {reason}")]
    Hook {
        /// The row being styled.
        element: ElementId,
        /// Host-provided explanation.
        reason: String,
    },
}

/// Styling and layout hooks for a sectioned list.
///
/// All methods run on the UI thread. Implementations are shared read-only
/// across rows; the only mutable state a strategy may keep is what
/// [`StyleStrategy::entry_alignments`] caches for later cell layout.
pub trait StyleStrategy: fmt::Debug {
    /// Whole-list styling, run when the list is (re)configured.
    ///
    /// Must be idempotent while captions are unchanged.
    fn style_table(&self, _list: &mut ListView) {}

    /// Style one element's caption label.
    fn style_caption(&self, _label: &mut CaptionLabel, _element: &Element) {}

    /// Pre-positioning hook, run before the host lays out the cell's subviews.
    ///
    /// # Errors
    /// Implementations report rows they cannot style.
    fn style_cell(&self, _cell: &mut CellView, _row: RowContext<'_>) -> Result<(), StyleError> {
        Ok(())
    }

    /// Post-positioning hook, run after the host laid out the cell's subviews,
    /// to override final geometry or insert decorations.
    ///
    /// # Errors
    /// Implementations report rows they cannot style.
    fn layout_cell(&self, _cell: &mut CellView, _row: RowContext<'_>) -> Result<(), StyleError> {
        Ok(())
    }

    /// Wrap or replace the list's root visual. The default is the identity.
    fn setup_view(&self, list: ListView) -> DialogView {
        DialogView::List(list)
    }

    /// Fonts and floor used by the default alignment algorithm.
    fn alignment_metrics(&self) -> AlignmentMetrics {
        AlignmentMetrics::default()
    }

    /// One caption alignment per section, in section order.
    ///
    /// The default measures each section independently at the base font.
    fn entry_alignments(&self, sections: &[Section], measurer: &dyn CaptionMeasurer) -> Vec<Size> {
        let metrics = self.alignment_metrics();
        alignment::section_alignments(sections, measurer, &metrics, &metrics.base_font)
    }

    /// Run [`StyleStrategy::entry_alignments`] over `root` and store each
    /// result in its section.
    ///
    /// Override `entry_alignments` rather than this method.
    fn compute_entry_alignment(&self, root: &mut Root, measurer: &dyn CaptionMeasurer) {
        let sizes = self.entry_alignments(root.sections(), measurer);
        if sizes.len() != root.sections().len() {
            warn!(
                expected = root.sections().len(),
                got = sizes.len(),
                "entry_alignments returned a mismatched section count"
            );
        }

        for (section, size) in root.sections_mut().iter_mut().zip(sizes) {
            section.set_entry_alignment(size);
        }

        debug!(
            sections = root.sections().len(),
            style = ?self,
            "Recomputed entry alignment"
        );
    }
}
