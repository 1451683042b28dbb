//! Perito UI - Shared helper library for the SistemaPerito front-end
//!
//! This library provides the cross-cutting helpers the SistemaPerito pages
//! share: calendar-date formatting and validation, toast-style notifications
//! with a cancellable fade/remove lifecycle, JSON preference persistence,
//! element visibility and scroll helpers, text formatting, and a uniform
//! fetch-error funnel.
//!
//! Side-effecting helpers take their dependencies explicitly - the document
//! tree, a storage backend, a clock, a diagnostics sink - so every failure
//! path is observable in tests. No public operation panics or returns an
//! error for the failure classes the pages swallow: storage problems and
//! missing elements are logged and absorbed.
//!
//! # Modules
//!
//! * [`bootstrap`] - Page-ready rewrites (footer year, tooltip conversion)
//! * [`config`] - Library configuration management
//! * [`constants`] - Shared magic strings, CSS conventions, and timings
//! * [`dom`] - Owned page model and visibility/scroll helpers
//! * [`fetch`] - Uniform fetch-error handling
//! * [`icons`] - Severity icon and color vocabulary
//! * [`logger`] - Diagnostics sink and file-logging setup
//! * [`notify`] - Notification presenter and lifecycle
//! * [`prefs`] - Preference persistence
//! * [`utils`] - Date and text utility functions

/// Page-ready initialization pass
pub mod bootstrap;

/// Configuration module for managing library settings
pub mod config;

/// Shared constants and conventions
pub mod constants;

/// Owned page model and element helpers
pub mod dom;

/// Uniform fetch-error funnel
pub mod fetch;

/// Severity icon and color definitions for notification banners
pub mod icons;

/// Diagnostics sink and logging setup
pub mod logger;

/// Toast-style notification presenter
pub mod notify;

/// Preference persistence layer
pub mod prefs;

/// Utility functions for date and text handling
pub mod utils;

// Re-export the helper surface for convenient access
pub use bootstrap::{on_page_ready, Clock, SystemClock};
pub use config::Config;
pub use dom::{scroll_to_element, toggle_element, Document, Element, ScrollBehavior, ScrollTarget};
pub use fetch::handle_fetch_error;
pub use logger::Diagnostics;
pub use notify::{NotificationId, NotificationState, Notifier, Severity};
pub use prefs::{FileStorage, MemoryStorage, PreferenceStore, StorageBackend, StorageError};
pub use utils::date::{days_between, format_long_date, is_date_range_valid, is_valid_date};
pub use utils::text::{capitalize, truncate, truncate_default};
