//! Row layout controller with a repeat guard.

use crate::config::StyleConfig;
use crate::model::{Element, ElementId, Rect, RowContext};
use crate::style::{StyleError, StyleStrategy};
use crate::view_state::CellView;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Outcome of one [`CellLayoutController::layout`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPass {
    /// The strategy hooks and the host positioning ran.
    Styled,
    /// The same frame was laid out too many times in a row; nothing ran.
    Suppressed,
}

/// Element and strategy a controller is currently bound to.
#[derive(Debug, Clone)]
struct Binding {
    element: ElementId,
    style: Rc<dyn StyleStrategy>,
}

/// Drives one visible row through its strategy's hooks.
///
/// Hosts call [`CellLayoutController::layout`] on every layout pass. Styling
/// a row can itself request another pass with an identical frame; after
/// `threshold` styled passes at the same frame, further passes are skipped
/// until the frame changes or the controller is invalidated.
#[derive(Debug, Clone)]
pub struct CellLayoutController {
    threshold: u8,
    binding: Option<Binding>,
    last_frame: Option<Rect>,
    /// Never exceeds `threshold`.
    repeat_count: u8,
}

impl CellLayoutController {
    /// Unbound controller allowing `threshold` styled passes per frame.
    ///
    /// A threshold of zero is raised to one, so a changed frame always styles.
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold: threshold.max(1),
            binding: None,
            last_frame: None,
            repeat_count: 0,
        }
    }

    /// Controller using the configured repeat threshold.
    pub fn from_config(config: &StyleConfig) -> Self {
        Self::new(config.repeat_threshold)
    }

    /// Bind to `element` and its strategy, resetting the repeat guard.
    pub fn bind(&mut self, element: &Element) {
        self.rebind(element);
    }

    fn rebind(&mut self, element: &Element) -> Rc<dyn StyleStrategy> {
        let style = Rc::clone(element.style());
        self.binding = Some(Binding {
            element: element.id(),
            style: Rc::clone(&style),
        });
        self.invalidate();
        style
    }

    /// Forget the last frame so the next pass styles again.
    pub fn invalidate(&mut self) {
        self.last_frame = None;
        self.repeat_count = 0;
    }

    /// Id of the bound element.
    pub fn bound_element(&self) -> Option<ElementId> {
        self.binding.as_ref().map(|b| b.element)
    }

    /// Strategy of the bound element.
    pub fn bound_style(&self) -> Option<&Rc<dyn StyleStrategy>> {
        self.binding.as_ref().map(|b| &b.style)
    }

    /// Styled passes run at the current frame.
    pub fn repeat_count(&self) -> u8 {
        self.repeat_count
    }

    /// Frame of the previous pass, `None` after invalidation.
    pub fn last_frame(&self) -> Option<Rect> {
        self.last_frame
    }

    /// Maximum styled passes per frame.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Whether the next pass at the current frame would be suppressed.
    pub fn is_saturated(&self) -> bool {
        self.repeat_count >= self.threshold
    }

    /// Run one layout pass for `cell`, which displays `row`.
    ///
    /// Order: the strategy's `style_cell`, then `position_subviews` (the
    /// host's own positioning), then `layout_cell`. Hooks run on the bound
    /// strategy; a row other than the bound one rebinds the controller first.
    ///
    /// # Errors
    /// Propagates the first hook error; the pass still counts toward the
    /// repeat guard.
    pub fn layout<F>(
        &mut self,
        cell: &mut CellView,
        row: RowContext<'_>,
        position_subviews: F,
    ) -> Result<LayoutPass, StyleError>
    where
        F: FnOnce(&mut CellView),
    {
        let style = match &self.binding {
            Some(binding) if binding.element == row.element().id() => Rc::clone(&binding.style),
            _ => {
                debug!(element = %row.element().id(), "Rebinding cell controller");
                self.rebind(row.element())
            }
        };

        if self.last_frame != Some(cell.frame) {
            self.last_frame = Some(cell.frame);
            self.repeat_count = 0;
        }

        if self.is_saturated() {
            trace!(
                element = %row.element().id(),
                frame = ?cell.frame,
                "Layout suppressed at unchanged frame"
            );
            return Ok(LayoutPass::Suppressed);
        }

        self.repeat_count += 1;
        if self.is_saturated() {
            warn!(
                element = %row.element().id(),
                frame = ?cell.frame,
                threshold = self.threshold,
                "Repeat threshold reached, suppressing layout until the frame changes"
            );
        }

        let report = |e: &StyleError| warn!(error = %e, "Cell style hook failed");
        style.style_cell(cell, row).inspect_err(report)?;
        position_subviews(cell);
        style.layout_cell(cell, row).inspect_err(report)?;

        Ok(LayoutPass::Styled)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
