//! Uniform fetch-error funnel
//!
//! Every failed request is handled the same way regardless of cause: the
//! underlying error goes to the diagnostics sink and the log, and the user
//! sees one fixed Spanish message as an error notification. Network
//! failures, timeouts, and parse errors are deliberately indistinguishable
//! to the user.

use crate::constants::MSG_FETCH_ERROR;
use crate::logger::Diagnostics;
use crate::notify::{NotificationId, Notifier, Severity};

/// Log a failed request and surface the generic connection-error banner
pub fn handle_fetch_error(notifier: &Notifier, diagnostics: &Diagnostics, error: &anyhow::Error) -> NotificationId {
    diagnostics.record(format!("request failed: {error:#}"));
    log::error!("request failed: {error:#}");
    notifier.show(MSG_FETCH_ERROR, Severity::Error)
}
