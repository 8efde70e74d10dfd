//! Terminal host for the headless styling layer.
//!
//! Supplies the host capabilities the core consumes (caption measurement and
//! screen bounds) for a ratatui terminal, positions cell subviews in terminal
//! cells, and renders laid out cells.

mod list_widget;
mod measure;

pub use list_widget::{row_height, stack_cells, DialogListWidget, TerminalPositioning};
pub use measure::{from_cell_area, to_cell_area, TerminalMeasurer, TerminalScreen};
