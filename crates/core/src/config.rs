//! Configuration for the capture boundary.
//!
//! The only runtime knob is how panics intercepted by `try_catch` are
//! reported. The configuration is immutable after construction and can be
//! loaded from the environment or embedded in a host application's JSON
//! configuration.

use crate::capture::install_panic_hook;
use crate::constants::{CONFIG_LOG_TARGET, FAULTLINE_PANIC_REPORT_VAR};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a panic raised inside a capture boundary is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanicReport {
    /// Leave the process panic hook untouched
    #[default]
    Default,
    /// Print nothing for panics that a boundary will capture
    Quiet,
    /// Emit a `tracing` event instead of writing to stderr
    Trace,
}

impl fmt::Display for PanicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PanicReport::Default => "default",
            PanicReport::Quiet => "quiet",
            PanicReport::Trace => "trace",
        };
        f.write_str(name)
    }
}

impl FromStr for PanicReport {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(PanicReport::Default),
            "quiet" => Ok(PanicReport::Quiet),
            "trace" => Ok(PanicReport::Trace),
            other => Err(Error::configuration(format!(
                "unknown panic report mode '{other}', expected one of: default, quiet, trace"
            ))),
        }
    }
}

/// Capture boundary settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptureConfig {
    pub panic_report: PanicReport,
}

impl CaptureConfig {
    #[must_use]
    pub fn with_panic_report(mut self, panic_report: PanicReport) -> Self {
        self.panic_report = panic_report;
        self
    }

    /// Read `FAULTLINE_PANIC_REPORT`; an unset variable yields the defaults
    pub fn from_env() -> Result<Self> {
        let config = match std::env::var(FAULTLINE_PANIC_REPORT_VAR) {
            Ok(raw) => Self::default().with_panic_report(raw.parse()?),
            Err(std::env::VarError::NotPresent) => Self::default(),
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(Error::configuration(format!(
                    "{FAULTLINE_PANIC_REPORT_VAR} is not valid unicode"
                )))
            }
        };

        tracing::debug!(
            target: CONFIG_LOG_TARGET,
            panic_report = %config.panic_report,
            "loaded capture configuration from environment"
        );
        Ok(config)
    }

    /// Parse a JSON object such as `{"panic_report": "quiet"}`
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|error| {
            Error::configuration(format!("invalid capture configuration: {error}"))
        })
    }

    /// Install the panic hook this configuration asks for
    pub fn apply(&self) -> Result<()> {
        install_panic_hook(self)
    }
}
