//! Keyboard-aware layout.
//!
//! - `notify`: notification types, the UI-thread hub and scoped subscriptions
//! - `container`: KeyboardAwareContainer, which resizes the row list

pub mod container;
pub mod notify;

pub use container::{table_with_background, FrameAnimation, KeyboardAwareContainer, KeyboardResize};
pub use notify::{
    AnimationCurve, HubClosed, KeyboardEventKind, KeyboardHub, KeyboardNotification,
    KeyboardPoster, KeyboardRegistrar, Subscription,
};

use crate::model::Rect;

/// Host screen service.
pub trait ScreenService {
    /// Full screen bounds in screen coordinates.
    fn bounds(&self) -> Rect;
}

/// A screen whose bounds never change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScreen(pub Rect);

impl ScreenService for FixedScreen {
    fn bounds(&self) -> Rect {
        self.0
    }
}
