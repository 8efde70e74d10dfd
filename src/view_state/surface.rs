//! Headless state of the list and the views that may wrap it.

use crate::keyboard::KeyboardAwareContainer;
use crate::model::Rect;
use ratatui::style::Color;

/// The scrollable row list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    /// Geometry in the parent's coordinates.
    pub frame: Rect,
    /// Fill behind the rows; `None` leaves whatever is behind the list visible.
    pub background: Option<Color>,
    /// Caption column width published by `style_table`, for hosts that
    /// reserve the column while rendering.
    pub caption_column_width: Option<f32>,
}

impl ListView {
    /// List at `frame` with no fill and no published column width.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            background: None,
            caption_column_width: None,
        }
    }
}

/// Decorative view drawn behind the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundView {
    /// Geometry in the container's coordinates.
    pub frame: Rect,
    /// Fill color.
    pub fill: Color,
}

impl BackgroundView {
    /// Background with the given fill; the container sizes it.
    pub fn new(fill: Color) -> Self {
        Self {
            frame: Rect::ZERO,
            fill,
        }
    }
}

/// What a strategy's `setup_view` hands back to the host as the dialog's root
/// visual.
#[derive(Debug)]
pub enum DialogView {
    /// The list itself, unwrapped.
    List(ListView),
    /// The list inside a keyboard-aware container with a background.
    Container(KeyboardAwareContainer),
}

impl DialogView {
    /// The row list, wherever it sits.
    pub fn list(&self) -> &ListView {
        match self {
            Self::List(list) => list,
            Self::Container(container) => container.list(),
        }
    }

    /// Mutable access to the row list.
    pub fn list_mut(&mut self) -> &mut ListView {
        match self {
            Self::List(list) => list,
            Self::Container(container) => container.list_mut(),
        }
    }

    /// Geometry of the root visual.
    pub fn frame(&self) -> Rect {
        match self {
            Self::List(list) => list.frame,
            Self::Container(container) => container.frame(),
        }
    }

    /// The keyboard-aware container, if the strategy installed one.
    pub fn container_mut(&mut self) -> Option<&mut KeyboardAwareContainer> {
        match self {
            Self::List(_) => None,
            Self::Container(container) => Some(container),
        }
    }
}
