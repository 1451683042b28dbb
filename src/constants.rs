//! Constants used throughout the library
//!
//! This module centralizes magic strings, CSS conventions, and other constant
//! values shared by the SistemaPerito pages.

// Persistent storage
/// Prefix prepended to every preference key to avoid collisions with other
/// data stored under the same origin
pub const STORAGE_PREFIX: &str = "sistemaPerito";
/// Preference file name used by the file-backed storage implementation
pub const STORAGE_FILE_NAME: &str = "preferences.json";
/// Application directory name under the platform config/data directories
pub const APP_DIR_NAME: &str = "sistema-perito";

// Notification timings
/// How long a notification stays fully visible, in milliseconds
pub const NOTIFICATION_VISIBLE_MS: u64 = 5000;
/// Fade-out transition length before the element is removed, in milliseconds
pub const NOTIFICATION_FADE_MS: u64 = 300;

// CSS class conventions consumed by the page stylesheets
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_FADE_IN: &str = "animate-fade-in";
pub const CLASS_FADE_OUT: &str = "opacity-0";
pub const CLASS_TOOLTIP: &str = "tooltip";
/// Base classes for a notification banner: fixed corner, highest layer
pub const NOTIFICATION_BASE_CLASSES: &str = "fixed top-4 right-4 z-50 p-4 rounded-lg shadow-lg animate-fade-in";
pub const NOTIFICATION_ROW_CLASSES: &str = "flex items-center space-x-3";

// Attribute conventions
pub const ATTR_TITLE: &str = "title";
pub const ATTR_TOOLTIP: &str = "data-tooltip";
/// Attribute carrying the notification id on the banner close control
pub const ATTR_DISMISS: &str = "data-dismiss";

// User-facing messages (Spanish, fixed locale)
pub const MSG_FETCH_ERROR: &str = "Error al conectar con el servidor";
pub const DISMISS_LABEL: &str = "Cerrar";

// Page bootstrap
/// Footer year literal rewritten to the current year on page ready
pub const FOOTER_YEAR_LITERAL: &str = "2025";

// Text formatting
/// Default maximum length for truncated text
pub const TRUNCATE_DEFAULT_LEN: usize = 50;
