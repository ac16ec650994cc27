//! Remote logging and navigation analytics.

use strato_core::error::Result;

use crate::dispatch::PendingJson;
use crate::session::SessionAttach;

use super::Strato;

/// Log severities understood by the backend. `Event` entries feed the custom
/// event analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
    Event,
}

impl LogLevel {
    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Event => "EVENT",
        }
    }
}

/// Outcome of a navigation log attempt: skipped when no session exists yet.
pub enum NavigationOutcome {
    Sent(PendingJson),
    Skipped,
}

impl Strato {
    pub fn log_debug(&self, line: &str) -> Result<PendingJson> {
        self.log(LogLevel::Debug, line, None)
    }

    pub fn log_info(&self, line: &str) -> Result<PendingJson> {
        self.log(LogLevel::Info, line, None)
    }

    pub fn log_warning(&self, line: &str) -> Result<PendingJson> {
        self.log(LogLevel::Warning, line, None)
    }

    pub fn log_error(&self, line: &str) -> Result<PendingJson> {
        self.log(LogLevel::Error, line, None)
    }

    pub fn log_fatal(&self, line: &str) -> Result<PendingJson> {
        self.log(LogLevel::Fatal, line, None)
    }

    /// Log a custom analytics event. Unlike plain log lines, events always
    /// name their category.
    pub fn log_event(&self, line: &str, category: &str) -> Result<PendingJson> {
        self.log(LogLevel::Event, line, Some(category))
    }

    /// Send one log line; `category` falls back to the configured default.
    pub fn log(&self, level: LogLevel, line: &str, category: Option<&str>) -> Result<PendingJson> {
        let category = category.unwrap_or(&self.cfg.default_log_category);
        let request = self
            .request("log", "log")?
            .field("category", category)
            .field("level", level.as_str())
            .field("log_line", line);
        Ok(self.dispatcher.submit(request))
    }

    /// Record a screen transition for usage-flow analytics. Requires a
    /// session; returns [`NavigationOutcome::Skipped`] without issuing the
    /// call when none exists.
    pub fn log_navigation(&self, screen_name: &str) -> Result<NavigationOutcome> {
        let request = self
            .request("log-navigation", "lognavigation")?
            .field("screen_name", screen_name);

        match self.session.attach(request) {
            (request, SessionAttach::Attached) => {
                Ok(NavigationOutcome::Sent(self.dispatcher.submit(request)))
            }
            (_, SessionAttach::Skipped) => {
                tracing::debug!(screen_name, "navigation log skipped: no session yet");
                Ok(NavigationOutcome::Skipped)
            }
        }
    }
}
