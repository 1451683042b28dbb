//! Toast-style notification presenter
//!
//! Each notification is a dismissible banner appended to the document body
//! plus one deferred lifecycle task: after the visible period the banner
//! fades, and after the fade it is removed. The lifecycle is an explicit
//! state machine (`Shown` → `FadingOut` → `Removed`) driven by the task and
//! observable through [`Notifier::state`]; manual dismissal aborts the task,
//! so a timer can never fire against an element that is already gone.
//!
//! There is no queue and no cap: every [`Notifier::show`] call creates an
//! independent banner and task, and concurrent notifications stack.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::Config;
use crate::constants::{
    ATTR_DISMISS, CLASS_FADE_OUT, DISMISS_LABEL, NOTIFICATION_BASE_CLASSES, NOTIFICATION_FADE_MS,
    NOTIFICATION_ROW_CLASSES, NOTIFICATION_VISIBLE_MS,
};
use crate::dom::{Document, Element, NodeId};
use crate::icons;

/// Identifies one notification across its whole lifecycle
pub type NotificationId = Uuid;

/// Notification severity, controlling banner color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Default for Severity {
    fn default() -> Self {
        Self::Info
    }
}

impl Severity {
    /// Parse a severity tag; unrecognized tags fall back to `Info`
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Lifecycle state of a notification banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationState {
    /// Fully visible
    Shown,
    /// Fade class applied, removal pending
    FadingOut,
    /// No longer in the document
    Removed,
}

struct ActiveNotification {
    node_id: NodeId,
    state: NotificationState,
    handle: Option<JoinHandle<()>>,
}

/// Presents dismissible notification banners on a shared document
#[derive(Clone)]
pub struct Notifier {
    document: Arc<Mutex<Document>>,
    active: Arc<Mutex<HashMap<NotificationId, ActiveNotification>>>,
    visible_ms: u64,
    fade_ms: u64,
}

impl Notifier {
    /// Create a notifier with the standard timings
    pub fn new(document: Arc<Mutex<Document>>) -> Self {
        Self::with_timings(document, NOTIFICATION_VISIBLE_MS, NOTIFICATION_FADE_MS)
    }

    /// Create a notifier with the timings from a loaded configuration
    pub fn with_config(document: Arc<Mutex<Document>>, config: &Config) -> Self {
        Self::with_timings(document, config.notifications.visible_ms, config.notifications.fade_ms)
    }

    pub fn with_timings(document: Arc<Mutex<Document>>, visible_ms: u64, fade_ms: u64) -> Self {
        Self {
            document,
            active: Arc::new(Mutex::new(HashMap::new())),
            visible_ms,
            fade_ms,
        }
    }

    /// Show a notification banner and schedule its fade and removal
    ///
    /// The banner is appended to the document body synchronously; the
    /// lifecycle task runs on the ambient Tokio runtime.
    pub fn show(&self, message: &str, severity: Severity) -> NotificationId {
        let id = Uuid::new_v4();
        let banner = build_banner(id, message, severity);
        let node_id = banner.node_id();

        if let Ok(mut document) = self.document.lock() {
            document.append_to_body(banner);
        }

        if let Ok(mut active) = self.active.lock() {
            active.insert(
                id,
                ActiveNotification {
                    node_id,
                    state: NotificationState::Shown,
                    handle: None,
                },
            );
        }

        let handle = self.spawn_lifecycle(id, node_id);
        if let Ok(mut active) = self.active.lock() {
            if let Some(entry) = active.get_mut(&id) {
                entry.handle = Some(handle);
            }
        }

        id
    }

    /// Dismiss a notification immediately, cancelling its pending fade and
    /// removal. Dismissing an id that is no longer active is a no-op.
    pub fn dismiss(&self, id: NotificationId) {
        let entry = match self.active.lock() {
            Ok(mut active) => active.remove(&id),
            Err(_) => None,
        };

        if let Some(mut entry) = entry {
            if let Some(handle) = entry.handle.take() {
                handle.abort();
            }
            if let Ok(mut document) = self.document.lock() {
                document.remove_node(entry.node_id);
            }
        }
    }

    /// Current lifecycle state; ids that were never shown or are already
    /// removed report `Removed`
    #[must_use]
    pub fn state(&self, id: NotificationId) -> NotificationState {
        match self.active.lock() {
            Ok(active) => active.get(&id).map(|entry| entry.state).unwrap_or(NotificationState::Removed),
            Err(_) => NotificationState::Removed,
        }
    }

    /// Number of notifications currently on screen
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.lock().map(|active| active.len()).unwrap_or(0)
    }

    fn spawn_lifecycle(&self, id: NotificationId, node_id: NodeId) -> JoinHandle<()> {
        let document = Arc::clone(&self.document);
        let active = Arc::clone(&self.active);
        let visible = Duration::from_millis(self.visible_ms);
        let fade = Duration::from_millis(self.fade_ms);

        tokio::spawn(async move {
            tokio::time::sleep(visible).await;

            if let Ok(mut document) = document.lock() {
                if let Some(banner) = document.node_mut(node_id) {
                    banner.add_class(CLASS_FADE_OUT);
                }
            }
            if let Ok(mut active) = active.lock() {
                if let Some(entry) = active.get_mut(&id) {
                    entry.state = NotificationState::FadingOut;
                }
            }

            tokio::time::sleep(fade).await;

            if let Ok(mut document) = document.lock() {
                document.remove_node(node_id);
            }
            if let Ok(mut active) = active.lock() {
                active.remove(&id);
            }
        })
    }
}

/// Build the banner element: severity colors and icon, message text, and a
/// close control carrying the notification id for the page's click wiring
fn build_banner(id: NotificationId, message: &str, severity: Severity) -> Element {
    let style = icons::severity_style(severity);

    let mut banner = Element::new("div");
    banner.add_classes(NOTIFICATION_BASE_CLASSES);
    banner.add_classes(style.classes);

    let mut row = Element::new("div");
    row.add_classes(NOTIFICATION_ROW_CLASSES);

    let mut icon = Element::new("i");
    icon.add_class("fas");
    icon.add_class(style.icon);

    let mut text = Element::new("span");
    text.add_class("font-semibold");
    text.set_text(message);

    let mut close = Element::new("button");
    close.add_class("ml-4");
    close.add_class("hover:opacity-70");
    close.set_attribute(ATTR_DISMISS, &id.to_string());
    close.set_attribute("aria-label", DISMISS_LABEL);
    let mut close_icon = Element::new("i");
    close_icon.add_class("fas");
    close_icon.add_class("fa-times");
    close.append_child(close_icon);

    row.append_child(icon);
    row.append_child(text);
    row.append_child(close);
    banner.append_child(row);
    banner
}
