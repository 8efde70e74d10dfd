//! Headless view state mutated by style hooks and the keyboard container.
//!
//! Nothing in here draws. Hosts read these values to position their own
//! widgets; the terminal host in [`crate::view`] is one such reader.
//!
//! # Module Structure
//!
//! - `cell`: CellView, CaptionLabel, Decoration - one visible row
//! - `surface`: ListView, BackgroundView, DialogView - the list and its wrappers

pub mod cell;
pub mod surface;

pub use cell::{CaptionLabel, CellView, Decoration};
pub use surface::{BackgroundView, DialogView, ListView};
