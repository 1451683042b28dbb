//! Diagnostics sink and log initialization
//!
//! Public helper operations never surface their internal failures to callers;
//! they record them here instead. The [`Diagnostics`] sink is injectable so
//! hosts (and tests) can observe swallowed failures, and
//! [`init_file_logging`] wires the `log` facade to a file for host
//! applications that want the same entries on disk.

use chrono::Utc;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Shared diagnostics sink that can be cloned across the library's services
#[derive(Clone)]
pub struct Diagnostics {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record a diagnostic entry
    pub fn record(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(formatted_message);
        }
    }

    /// Get all recorded entries, newest first
    pub fn entries(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            let mut sorted_entries = entries.clone();
            sorted_entries.reverse();
            sorted_entries
        } else {
            Vec::new()
        }
    }

    /// Clear all recorded entries
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize file logging for a host application
///
/// Routes everything emitted through the `log` facade to `path` with
/// timestamped, leveled lines. Call at most once per process.
pub fn init_file_logging(path: &Path, level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::log_file(path)?)
        .apply()?;
    Ok(())
}
