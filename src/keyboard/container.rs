//! A container that keeps the row list above the on-screen keyboard.

use super::notify::{
    AnimationCurve, KeyboardEventKind, KeyboardNotification, KeyboardRegistrar, Subscription,
};
use super::ScreenService;
use crate::model::{Point, Rect};
use crate::view_state::{BackgroundView, ListView};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tracing::{debug, trace};

/// Visual transition of the list frame, for the host to animate.
///
/// The container's state already holds `to` when this is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameAnimation {
    /// List frame before the resize.
    pub from: Rect,
    /// List frame after the resize.
    pub to: Rect,
    /// Keyboard animation duration.
    pub duration: Duration,
    /// Keyboard animation curve.
    pub curve: AnimationCurve,
}

/// Outcome of handling one notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyboardResize {
    /// Attached to a display surface: the list was resized and the host
    /// should animate the change.
    Animated(FrameAnimation),
    /// Not attached: the list was resized with no animation.
    Immediate {
        /// New list frame.
        frame: Rect,
    },
    /// The keyboard is gone; a layout pass was requested.
    Relayout,
}

/// Stacks an optional background and the row list, and shrinks the list while
/// the keyboard covers part of the screen.
///
/// Subscribes to will-show, will-hide and did-hide on construction. The
/// subscriptions are owned by the container and released with it, so a torn
/// down container is never notified.
#[derive(Debug)]
pub struct KeyboardAwareContainer {
    frame: Rect,
    background: Option<BackgroundView>,
    list: ListView,
    /// Always within `[0, frame.height]`.
    keyboard_intrusion: f32,
    /// Container origin in screen coordinates while on an active display.
    attachment: Option<Point>,
    needs_layout: bool,
    inbox: Receiver<KeyboardNotification>,
    subscriptions: Vec<Subscription>,
}

impl KeyboardAwareContainer {
    /// Wrap `list` (and `background`, drawn behind it) in a container at
    /// `frame`, subscribing through `registrar`.
    pub fn new(
        frame: Rect,
        background: Option<BackgroundView>,
        list: ListView,
        registrar: &KeyboardRegistrar,
    ) -> Self {
        let (inbox_tx, inbox) = mpsc::channel();
        let subscriptions = [
            KeyboardEventKind::WillShow,
            KeyboardEventKind::WillHide,
            KeyboardEventKind::DidHide,
        ]
        .into_iter()
        .map(|kind| registrar.subscribe(kind, inbox_tx.clone()))
        .collect();

        let mut container = Self {
            frame,
            background,
            list,
            keyboard_intrusion: 0.0,
            attachment: None,
            needs_layout: true,
            inbox,
            subscriptions,
        };
        container.layout_subviews();
        container
    }

    /// Container geometry in its parent's coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the container; takes effect on the next layout pass.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.clamp_intrusion();
        self.needs_layout = true;
    }

    /// The row list.
    pub fn list(&self) -> &ListView {
        &self.list
    }

    /// Mutable access to the row list.
    pub fn list_mut(&mut self) -> &mut ListView {
        &mut self.list
    }

    /// The background, if any.
    pub fn background(&self) -> Option<&BackgroundView> {
        self.background.as_ref()
    }

    /// Height currently covered by the keyboard.
    pub fn keyboard_intrusion(&self) -> f32 {
        self.keyboard_intrusion
    }

    /// Whether a layout pass has been requested.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Live notification subscriptions held by this container.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Mark the container as shown on an active display, with its top-left
    /// corner at `origin_in_screen`.
    pub fn attach(&mut self, origin_in_screen: Point) {
        self.attachment = Some(origin_in_screen);
    }

    /// Mark the container as off-screen.
    pub fn detach(&mut self) {
        self.attachment = None;
    }

    /// Whether the container is on an active display.
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Child visuals bottom to top: background first, list always last.
    pub fn children(&self) -> Vec<Rect> {
        self.background
            .iter()
            .map(|b| b.frame)
            .chain(std::iter::once(self.list.frame))
            .collect()
    }

    /// Size the children: the background fills the container, the list keeps
    /// its origin and spans the container width and the height the keyboard
    /// leaves. Idempotent.
    pub fn layout_subviews(&mut self) {
        self.clamp_intrusion();
        let bounds = Rect::ZERO.with_size(self.frame.size);
        if let Some(background) = &mut self.background {
            background.frame = bounds;
        }
        self.list.frame = Rect::new(
            self.list.frame.x(),
            self.list.frame.y(),
            self.frame.width(),
            self.frame.height() - self.keyboard_intrusion,
        );
        self.needs_layout = false;
    }

    fn clamp_intrusion(&mut self) {
        self.keyboard_intrusion = self
            .keyboard_intrusion
            .min(self.frame.height().max(0.0));
    }

    /// Run [`KeyboardAwareContainer::layout_subviews`] if one was requested.
    pub fn layout_if_needed(&mut self) -> bool {
        if self.needs_layout {
            self.layout_subviews();
            return true;
        }
        false
    }

    /// Handle every notification delivered since the last call, in order.
    pub fn process_notifications(&mut self, screen: &dyn ScreenService) -> Vec<KeyboardResize> {
        let pending: Vec<KeyboardNotification> = self.inbox.try_iter().collect();
        pending
            .iter()
            .map(|notification| self.handle(notification, screen))
            .collect()
    }

    /// Handle one notification. State is final when this returns.
    pub fn handle(
        &mut self,
        notification: &KeyboardNotification,
        screen: &dyn ScreenService,
    ) -> KeyboardResize {
        match notification.kind {
            KeyboardEventKind::WillShow | KeyboardEventKind::WillHide => {
                self.resize_for_keyboard(notification, screen)
            }
            KeyboardEventKind::DidHide => {
                self.keyboard_intrusion = 0.0;
                self.needs_layout = true;
                debug!("Keyboard hidden, relayout requested");
                KeyboardResize::Relayout
            }
        }
    }

    fn resize_for_keyboard(
        &mut self,
        notification: &KeyboardNotification,
        screen: &dyn ScreenService,
    ) -> KeyboardResize {
        let intrusion = self.intrusion_for(notification, screen.bounds());
        self.keyboard_intrusion = intrusion;

        let from = self.list.frame;
        let to = from.with_height(self.frame.height() - intrusion);
        self.list.frame = to;

        debug!(
            kind = ?notification.kind,
            intrusion,
            list_height = to.height(),
            attached = self.is_attached(),
            "Resized list for keyboard"
        );

        if self.is_attached() {
            KeyboardResize::Animated(FrameAnimation {
                from,
                to,
                duration: notification.animation_duration.unwrap_or_default(),
                curve: notification.animation_curve.unwrap_or_default(),
            })
        } else {
            KeyboardResize::Immediate { frame: to }
        }
    }

    /// Height of the list the keyboard covers.
    fn intrusion_for(&self, notification: &KeyboardNotification, screen: Rect) -> f32 {
        // Missing frames read as "no keyboard".
        let begin = notification
            .begin_frame
            .unwrap_or_default()
            .intersection(&screen);
        let mut end = notification
            .end_frame
            .unwrap_or_default()
            .intersection(&screen);

        // A keyboard as tall as the screen was reported in the other orientation.
        if end.height() == screen.height() {
            end = end.transposed();
        }

        let mut intrusion = end.height().max(0.0);

        if let Some(origin) = self.attachment {
            let available = screen.height() - origin.y - intrusion;
            intrusion = intrusion.min(self.list.frame.height() - available);
        }

        let clamped = intrusion.max(0.0).min(self.frame.height().max(0.0));
        trace!(?begin, ?end, raw = intrusion, clamped, "Keyboard intrusion");
        clamped
    }

    /// Release the notification subscriptions and drop the container.
    pub fn teardown(self) {
        debug!(
            subscriptions = self.subscriptions.len(),
            "Tearing down keyboard-aware container"
        );
    }
}

/// Put `list` over `background` in a keyboard-aware container occupying the
/// list's current frame.
pub fn table_with_background(
    mut list: ListView,
    background: BackgroundView,
    registrar: &KeyboardRegistrar,
) -> KeyboardAwareContainer {
    let frame = list.frame;
    list.frame.origin = Point::ZERO;
    KeyboardAwareContainer::new(frame, Some(background), list, registrar)
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
