//! User-facing status line.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLevel::Info => f.write_str("info"),
            StatusLevel::Warning => f.write_str("warning"),
            StatusLevel::Error => f.write_str("error"),
        }
    }
}

/// Last message shown to the user. Setting a status also logs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

impl Status {
    pub fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        let status = Self {
            level,
            message: message.into(),
        };
        status.log();
        status
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, message)
    }

    fn log(&self) {
        match self.level {
            StatusLevel::Info => tracing::info!("{}", self.message),
            StatusLevel::Warning => tracing::warn!("{}", self.message),
            StatusLevel::Error => tracing::error!("{}", self.message),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self {
            level: StatusLevel::Info,
            message: "Ready.".to_string(),
        }
    }
}

impl From<&crate::AssetCsvError> for Status {
    fn from(e: &crate::AssetCsvError) -> Self {
        Status::new(e.level(), e.to_string())
    }
}
