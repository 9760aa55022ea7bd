//! Diagnostic sink gated by build mode.
//!
//! Development builds surface every recoverable failure through `tracing`;
//! production builds stay silent.

use crate::config::BuildMode;

#[cfg(test)]
pub(crate) mod capture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub struct Logger {
    mode: BuildMode,
}

impl Logger {
    pub fn new(mode: BuildMode) -> Self {
        Self { mode }
    }

    pub fn is_enabled(&self) -> bool {
        self.mode == BuildMode::Development
    }

    pub fn log(&self, message: &str, level: LogLevel) {
        if !self.is_enabled() {
            return;
        }

        match level {
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warn => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }
    }

    pub fn warn(&self, message: &str) {
        self.log(message, LogLevel::Warn);
    }

    pub fn error(&self, message: &str) {
        self.log(message, LogLevel::Error);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(BuildMode::default())
    }
}
