//! Terminal rendering of a styled dialog list.

use super::measure::{from_cell_area, to_cell_area, TerminalMeasurer};
use crate::model::{ModelError, Point, Rect, Root, RowType};
use crate::style::CaptionMeasurer;
use crate::view_state::{CellView, DialogView};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellArea;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Columns between the caption column and the value text.
const DETAIL_MARGIN: f32 = 3.0;

/// Glyph used to draw decorations.
const DECORATION_SYMBOL: &str = "│";

/// Terminal rows a cell of `row_type` occupies: one content row plus its
/// horizontal borders.
pub fn row_height(row_type: RowType) -> f32 {
    let borders = row_type.borders();
    1.0 + [Borders::TOP, Borders::BOTTOM]
        .into_iter()
        .filter(|b| borders.contains(*b))
        .count() as f32
}

/// Empty cells for every row of `root`, stacked top to bottom at `width`
/// columns, with captions and heights set.
///
/// # Errors
/// Fails if an element does not belong to the section listing it.
pub fn stack_cells(root: &Root, width: f32) -> Result<Vec<CellView>, ModelError> {
    let mut y = 0.0;
    let mut cells = Vec::new();
    for section in root.sections() {
        for element in section.elements() {
            let row_type = RowType::classify(element, section)?;
            let height = row_height(row_type);
            cells.push(CellView::new(Rect::new(0.0, y, width, height)).with_caption(element.caption()));
            y += height;
        }
    }
    Ok(cells)
}

/// Host positioning of a cell's subviews in a terminal, run between the
/// strategy's `style_cell` and `layout_cell`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalPositioning {
    row_type: RowType,
    caption_column: Option<f32>,
}

impl TerminalPositioning {
    /// Positioning for a row of `row_type`. `caption_column` is the width the
    /// list reserves for captions, if the style published one.
    pub fn new(row_type: RowType, caption_column: Option<f32>) -> Self {
        Self {
            row_type,
            caption_column,
        }
    }

    /// Draw the row as part of its section's box and place the content,
    /// caption and value frames inside the borders.
    pub fn position(&self, cell: &mut CellView) {
        let borders = self.row_type.borders();
        cell.borders = borders;
        let inset = |side: Borders| if borders.contains(side) { 1.0 } else { 0.0 };
        let left = inset(Borders::LEFT);
        let top = inset(Borders::TOP);
        let width = (cell.frame.width() - left - inset(Borders::RIGHT)).max(0.0);
        let height = (cell.frame.height() - top - inset(Borders::BOTTOM)).max(0.0);
        cell.content_frame = Rect::new(left, top, width, height);
        let content = cell.content_frame;

        let caption_width = match self.caption_column {
            Some(column) => column,
            None => cell
                .text_label
                .text
                .as_deref()
                .map(|t| TerminalMeasurer.measure(t, &cell.text_label.font).width)
                .unwrap_or(0.0),
        }
        .min(content.width());
        cell.text_label.frame = Rect::new(content.x(), content.y(), caption_width, content.height());

        let detail_x = (content.x() + caption_width + DETAIL_MARGIN).min(content.right());
        cell.detail_frame = Rect::new(
            detail_x,
            content.y(),
            content.right() - detail_x,
            content.height(),
        );
    }

    /// This positioning as the closure `CellLayoutController::layout` takes.
    pub fn into_fn(self) -> impl FnOnce(&mut CellView) {
        move |cell| self.position(cell)
    }
}

/// Renders a dialog's root visual and its laid out cells.
///
/// The dialog fills the render area. A keyboard-aware container draws its
/// background over the whole area and clips the rows to the list frame, so
/// rows under the keyboard are not drawn.
#[derive(Debug, Clone)]
pub struct DialogListWidget<'a> {
    view: &'a DialogView,
    cells: &'a [CellView],
    border_style: Style,
}

impl<'a> DialogListWidget<'a> {
    /// Widget drawing `cells` inside `view`.
    pub fn new(view: &'a DialogView, cells: &'a [CellView]) -> Self {
        Self {
            view,
            cells,
            border_style: Style::default().fg(Color::DarkGray),
        }
    }

    /// Style of row borders.
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    fn render_cell(&self, cell: &CellView, list_area: CellArea, buf: &mut Buffer) {
        let Some(cell_area) = to_cell_area(cell.frame, (list_area.x, list_area.y), list_area) else {
            return;
        };
        let origin = offset(list_area, cell.frame.origin);

        Block::default()
            .borders(cell.borders)
            .border_style(self.border_style)
            .render(cell_area, buf);

        if let Some(text) = &cell.text_label.text {
            if let Some(area) = to_cell_area(cell.text_label.frame, origin, cell_area) {
                let mut style = Style::default().fg(cell.text_label.color);
                if cell.text_label.font.bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Paragraph::new(text.as_str())
                    .style(style)
                    .alignment(cell.text_label.alignment)
                    .render(area, buf);
            }
        }

        if let Some(detail) = &cell.detail_text {
            if let Some(area) = to_cell_area(cell.detail_frame, origin, cell_area) {
                Paragraph::new(detail.as_str()).render(area, buf);
            }
        }

        for decoration in cell.decorations() {
            if let Some(area) = to_cell_area(decoration.frame, origin, cell_area) {
                for y in area.top()..area.bottom() {
                    for x in area.left()..area.right() {
                        buf[(x, y)]
                            .set_symbol(DECORATION_SYMBOL)
                            .set_fg(decoration.color);
                    }
                }
            }
        }
    }
}

impl Widget for DialogListWidget<'_> {
    fn render(self, area: CellArea, buf: &mut Buffer) {
        let list_area = match self.view {
            DialogView::List(_) => Some(area),
            DialogView::Container(container) => {
                if let Some(background) = container.background() {
                    if let Some(bg_area) = to_cell_area(background.frame, (area.x, area.y), area) {
                        buf.set_style(bg_area, Style::default().bg(background.fill));
                    }
                }
                to_cell_area(container.list().frame, (area.x, area.y), area)
            }
        };
        let Some(list_area) = list_area else {
            return;
        };

        if let Some(fill) = self.view.list().background {
            buf.set_style(list_area, Style::default().bg(fill));
        }

        for cell in self.cells {
            self.render_cell(cell, list_area, buf);
        }
    }
}

/// Terminal position of `point` relative to `area`'s origin, saturating at
/// the terminal edges.
fn offset(area: CellArea, point: Point) -> (u16, u16) {
    let origin = from_cell_area(area);
    let clamp = |v: f32| v.round().clamp(0.0, f32::from(u16::MAX)) as u16;
    (clamp(origin.x() + point.x), clamp(origin.y() + point.y))
}
