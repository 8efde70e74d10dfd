//! Dialog list styling (dialog-style)
//!
//! Styling and adaptive layout for sectioned list dialogs:
//!
//! - [`style`]: pluggable strategies that align caption columns across rows
//!   and style each row before and after the host positions it
//! - [`layout`]: per-row controllers that run those hooks with a guard
//!   against repeated layout at an unchanged frame
//! - [`keyboard`]: a container that keeps the list above the on-screen
//!   keyboard, driven by asynchronous notifications
//!
//! Everything here is headless. Hosts supply text measurement and screen
//! bounds; [`view`] supplies them for a ratatui terminal.

pub mod config;
pub mod keyboard;
pub mod layout;
pub mod logging;
pub mod model;
pub mod style;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod tests;
