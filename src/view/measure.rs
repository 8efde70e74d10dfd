//! Terminal geometry: text measurement, screen bounds and conversion between
//! layout coordinates and terminal cells.

use crate::keyboard::ScreenService;
use crate::model::{FontDescriptor, Rect, Size};
use crate::style::CaptionMeasurer;
use ratatui::layout::Rect as CellArea;
use unicode_width::UnicodeWidthStr;

/// Measures captions in terminal columns. Every line is one row tall and
/// fonts have no effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalMeasurer;

impl CaptionMeasurer for TerminalMeasurer {
    fn measure(&self, text: &str, _font: &FontDescriptor) -> Size {
        Size::new(text.width() as f32, 1.0)
    }
}

/// The terminal window as the keyboard container's screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalScreen {
    area: CellArea,
}

impl TerminalScreen {
    /// Screen covering `area`, usually `Frame::area()`.
    pub fn new(area: CellArea) -> Self {
        Self { area }
    }
}

impl ScreenService for TerminalScreen {
    fn bounds(&self) -> Rect {
        from_cell_area(self.area)
    }
}

/// Layout rectangle covering a terminal area.
pub fn from_cell_area(area: CellArea) -> Rect {
    Rect::new(
        f32::from(area.x),
        f32::from(area.y),
        f32::from(area.width),
        f32::from(area.height),
    )
}

/// Terminal cells covered by `rect`, offset by `origin` and clipped to
/// `clip`. `None` when nothing is visible.
pub fn to_cell_area(rect: Rect, origin: (u16, u16), clip: CellArea) -> Option<CellArea> {
    let x = f32::from(origin.0) + rect.x().round();
    let y = f32::from(origin.1) + rect.y().round();
    let right = x + rect.width().round().max(0.0);
    let bottom = y + rect.height().round().max(0.0);

    let left = x.max(f32::from(clip.left()));
    let top = y.max(f32::from(clip.top()));
    let right = right.min(f32::from(clip.right()));
    let bottom = bottom.min(f32::from(clip.bottom()));

    if right <= left || bottom <= top {
        return None;
    }
    // Clipping to `clip` keeps every value within u16.
    Some(CellArea::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_columns_not_bytes() {
        let m = TerminalMeasurer;
        let font = FontDescriptor::default();
        assert_eq!(m.measure("Phone", &font), Size::new(5.0, 1.0));
        assert_eq!(m.measure("電話", &font), Size::new(4.0, 1.0));
        assert_eq!(m.measure("", &font).width, 0.0);
    }

    #[test]
    fn screen_bounds_match_area() {
        let screen = TerminalScreen::new(CellArea::new(0, 0, 80, 24));
        assert_eq!(screen.bounds(), Rect::new(0.0, 0.0, 80.0, 24.0));
    }

    #[test]
    fn cell_area_is_offset_and_clipped() {
        let clip = CellArea::new(0, 0, 20, 10);
        assert_eq!(
            to_cell_area(Rect::new(2.0, 1.0, 5.0, 3.0), (1, 1), clip),
            Some(CellArea::new(3, 2, 5, 3))
        );
        assert_eq!(
            to_cell_area(Rect::new(15.0, 8.0, 10.0, 10.0), (0, 0), clip),
            Some(CellArea::new(15, 8, 5, 2))
        );
    }

    #[test]
    fn invisible_rect_has_no_area() {
        let clip = CellArea::new(0, 0, 20, 10);
        assert_eq!(to_cell_area(Rect::new(0.0, 0.0, 0.0, 3.0), (0, 0), clip), None);
        assert_eq!(to_cell_area(Rect::new(30.0, 0.0, 4.0, 3.0), (0, 0), clip), None);
        assert_eq!(to_cell_area(Rect::new(-9.0, 0.0, 4.0, 3.0), (0, 0), clip), None);
    }
}
