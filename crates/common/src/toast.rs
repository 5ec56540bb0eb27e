use serde::{Deserialize, Serialize};

pub const DEFAULT_SUMMARY: &str = "Unable to load data.";
/// Milliseconds a toast stays on screen when no life is given
pub const DEFAULT_LIFE: u64 = 5000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warn,
    #[default]
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied toast fields. Anything left unset falls back to the
/// defaults applied by [`ToastOptions::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life: Option<u64>,
}

impl ToastOptions {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Some(Severity::Error),
            summary: Some(summary.into()),
            detail: Some(detail.into()),
            life: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_life(mut self, life: u64) -> Self {
        self.life = Some(life);
        self
    }

    pub fn resolve(self) -> ToastMessage {
        ToastMessage {
            severity: self.severity.unwrap_or_default(),
            summary: self.summary.unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            detail: self.detail.unwrap_or_default(),
            life: self.life.unwrap_or(DEFAULT_LIFE),
        }
    }
}

/// A fully resolved toast, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastMessage {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// Display time in milliseconds
    pub life: u64,
}

impl Default for ToastMessage {
    fn default() -> Self {
        ToastOptions::default().resolve()
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn add(&self, options: ToastOptions);

    fn error(&self, summary: &str, detail: &str) {
        self.add(ToastOptions::error(summary, detail));
    }
}

/// Drops every notification. Used when running under test.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn add(&self, _options: ToastOptions) {}
}

/// Emits each notification as a tracing event at the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn add(&self, options: ToastOptions) {
        let ToastMessage {
            severity,
            summary,
            detail,
            life,
        } = options.resolve();

        match severity {
            Severity::Error => tracing::error!(life, "{}: {}", summary, detail),
            Severity::Warn => tracing::warn!(life, "{}: {}", summary, detail),
            Severity::Info | Severity::Success => {
                tracing::info!(life, %severity, "{}: {}", summary, detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_resolve_to_defaults() {
        let message = ToastOptions::default().resolve();
        assert_eq!(message.severity, Severity::Error);
        assert_eq!(message.summary, "Unable to load data.");
        assert_eq!(message.detail, "");
        assert_eq!(message.life, 5000);
    }

    #[test]
    fn test_explicit_fields_win() {
        let message = ToastOptions::error("Error fetching buckets", "boom")
            .with_life(3000)
            .with_severity(Severity::Warn)
            .resolve();

        assert_eq!(message.severity, Severity::Warn);
        assert_eq!(message.summary, "Error fetching buckets");
        assert_eq!(message.detail, "boom");
        assert_eq!(message.life, 3000);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
    }
}
