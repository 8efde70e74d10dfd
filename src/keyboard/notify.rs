//! Keyboard notifications and their delivery onto the UI thread.
//!
//! The host posts notifications from wherever the platform delivers them,
//! through a [`KeyboardPoster`] (`Send`). The UI thread calls
//! [`KeyboardHub::dispatch`], which forwards each one to the inbox of every
//! live subscriber of that kind. Subscribers drain their inbox on the same
//! thread, so handlers never overlap with layout passes or with each other.
//!
//! A [`Subscription`] unregisters itself when dropped: once a subscriber is
//! gone nothing is ever forwarded to it again.

use crate::model::Rect;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use thiserror::Error;
use tracing::trace;

/// The three keyboard events the container listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardEventKind {
    /// The keyboard is about to appear or change frame.
    WillShow,
    /// The keyboard is about to disappear.
    WillHide,
    /// The keyboard finished disappearing.
    DidHide,
}

/// Timing curve of the keyboard's own animation, reused for the resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationCurve {
    /// Slow start and end.
    #[default]
    EaseInOut,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Constant speed.
    Linear,
}

impl AnimationCurve {
    /// Decode a platform curve identifier (0..=3). Unknown values yield `None`.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::EaseInOut),
            1 => Some(Self::EaseIn),
            2 => Some(Self::EaseOut),
            3 => Some(Self::Linear),
            _ => None,
        }
    }
}

/// One keyboard notification.
///
/// Payload fields are optional: platforms omit them on some events, and a
/// missing frame is read as "no keyboard".
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardNotification {
    /// Which event this is.
    pub kind: KeyboardEventKind,
    /// Keyboard frame before the transition, in screen coordinates.
    pub begin_frame: Option<Rect>,
    /// Keyboard frame after the transition, in screen coordinates.
    pub end_frame: Option<Rect>,
    /// Duration of the keyboard's animation.
    pub animation_duration: Option<Duration>,
    /// Curve of the keyboard's animation.
    pub animation_curve: Option<AnimationCurve>,
}

impl KeyboardNotification {
    fn frames(kind: KeyboardEventKind, begin: Rect, end: Rect) -> Self {
        Self {
            kind,
            begin_frame: Some(begin),
            end_frame: Some(end),
            animation_duration: None,
            animation_curve: None,
        }
    }

    /// Will-show with both frames.
    pub fn will_show(begin: Rect, end: Rect) -> Self {
        Self::frames(KeyboardEventKind::WillShow, begin, end)
    }

    /// Will-hide with both frames.
    pub fn will_hide(begin: Rect, end: Rect) -> Self {
        Self::frames(KeyboardEventKind::WillHide, begin, end)
    }

    /// Did-hide, which carries no payload the container reads.
    pub fn did_hide() -> Self {
        Self {
            kind: KeyboardEventKind::DidHide,
            begin_frame: None,
            end_frame: None,
            animation_duration: None,
            animation_curve: None,
        }
    }

    /// Attach animation parameters.
    pub fn with_animation(mut self, duration: Duration, curve: AnimationCurve) -> Self {
        self.animation_duration = Some(duration);
        self.animation_curve = Some(curve);
        self
    }
}

/// Returned when posting to a hub that no longer exists.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("keyboard hub closed; dropped {0:?} notification")]
pub struct HubClosed(pub KeyboardEventKind);

/// Thread-safe handle the host uses to post notifications.
#[derive(Debug, Clone)]
pub struct KeyboardPoster {
    sender: Sender<KeyboardNotification>,
}

impl KeyboardPoster {
    /// Queue a notification for the next [`KeyboardHub::dispatch`].
    ///
    /// # Errors
    /// [`HubClosed`] if the hub was dropped.
    pub fn post(&self, notification: KeyboardNotification) -> Result<(), HubClosed> {
        let kind = notification.kind;
        self.sender.send(notification).map_err(|_| HubClosed(kind))
    }
}

#[derive(Debug)]
struct Listener {
    id: u64,
    kind: KeyboardEventKind,
    inbox: Sender<KeyboardNotification>,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl Registry {
    fn remove(&mut self, id: u64) {
        self.listeners.retain(|l| l.id != id);
    }
}

/// UI-thread handle for registering subscribers.
#[derive(Debug, Clone)]
pub struct KeyboardRegistrar {
    registry: Rc<RefCell<Registry>>,
}

impl KeyboardRegistrar {
    /// Forward every `kind` notification to `inbox` until the returned token
    /// is dropped.
    pub fn subscribe(
        &self,
        kind: KeyboardEventKind,
        inbox: Sender<KeyboardNotification>,
    ) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener { id, kind, inbox });

        Subscription {
            id,
            kind,
            registry: Rc::downgrade(&self.registry),
        }
    }
}

/// Scoped registration; unregisters on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    kind: KeyboardEventKind,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Event kind this token listens to.
    pub fn kind(&self) -> KeyboardEventKind {
        self.kind
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
            trace!(id = self.id, kind = ?self.kind, "Keyboard subscription released");
        }
    }
}

/// Owns the notification queue and the subscriber registry. Lives on the UI
/// thread.
#[derive(Debug)]
pub struct KeyboardHub {
    registry: Rc<RefCell<Registry>>,
    sender: Sender<KeyboardNotification>,
    receiver: Receiver<KeyboardNotification>,
}

impl Default for KeyboardHub {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardHub {
    /// Empty hub.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            registry: Rc::default(),
            sender,
            receiver,
        }
    }

    /// Handle for posting from any thread.
    pub fn poster(&self) -> KeyboardPoster {
        KeyboardPoster {
            sender: self.sender.clone(),
        }
    }

    /// Handle for subscribing on the UI thread.
    pub fn registrar(&self) -> KeyboardRegistrar {
        KeyboardRegistrar {
            registry: Rc::clone(&self.registry),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Forward every queued notification to its subscribers.
    ///
    /// Listeners whose inbox is gone are pruned. Returns how many deliveries
    /// were made.
    pub fn dispatch(&self) -> usize {
        let mut delivered = 0;
        let mut registry = self.registry.borrow_mut();

        for notification in self.receiver.try_iter() {
            registry.listeners.retain(|listener| {
                if listener.kind != notification.kind {
                    return true;
                }
                let alive = listener.inbox.send(notification.clone()).is_ok();
                if alive {
                    delivered += 1;
                }
                alive
            });
        }

        if delivered > 0 {
            trace!(delivered, "Dispatched keyboard notifications");
        }
        delivered
    }
}
