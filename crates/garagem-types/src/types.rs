use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::NotifyError;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Kind of a user-facing status message; doubles as its CSS class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Info,
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Default time a status message stays visible
pub const DEFAULT_STATUS_DURATION: Duration = Duration::from_millis(3500);

/// Time error messages raised by the storage layer stay visible
pub const STORAGE_ERROR_DURATION: Duration = Duration::from_millis(5000);

/// Capability to surface a transient message to the user
pub trait Notifier {
    fn notify(
        &self,
        message: &str,
        kind: MessageKind,
        duration: Duration,
    ) -> Result<(), NotifyError>;
}

/// Notifier that drops every message
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(
        &self,
        _message: &str,
        _kind: MessageKind,
        _duration: Duration,
    ) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kind_css_class() {
        assert_eq!(MessageKind::default(), MessageKind::Info);
        assert_eq!(MessageKind::Success.css_class(), "success");
        assert_eq!(MessageKind::Error.to_string(), "error");
    }

    #[test]
    fn test_output_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
        let parsed: OutputFormat = serde_json::from_str("\"table\"").unwrap();
        assert_eq!(parsed, OutputFormat::Table);
    }
}
