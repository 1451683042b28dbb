//! Severity icon and color service for notification banners
//!
//! This module centralizes the visual vocabulary of notifications: the Font
//! Awesome icon and the banner color classes each severity maps to, matching
//! the styling conventions of the SistemaPerito stylesheets.

use crate::notify::Severity;

/// Visual style for a notification banner
#[derive(Debug, Clone, Copy)]
pub struct SeverityStyle {
    /// Font Awesome icon class for the leading icon element
    pub icon: &'static str,
    /// Background, text, and border classes for the banner itself
    pub classes: &'static str,
}

/// Get the banner style for a severity
#[must_use]
pub fn severity_style(severity: Severity) -> SeverityStyle {
    match severity {
        Severity::Success => SeverityStyle {
            icon: "fa-check-circle",
            classes: "bg-green-100 text-green-800 border-l-4 border-green-500",
        },
        Severity::Error => SeverityStyle {
            icon: "fa-times-circle",
            classes: "bg-red-100 text-red-800 border-l-4 border-red-500",
        },
        Severity::Warning => SeverityStyle {
            icon: "fa-exclamation-triangle",
            classes: "bg-yellow-100 text-yellow-800 border-l-4 border-yellow-500",
        },
        Severity::Info => SeverityStyle {
            icon: "fa-info-circle",
            classes: "bg-blue-100 text-blue-800 border-l-4 border-blue-500",
        },
    }
}
