//! Boundary tracking and the optional panic hook.
//!
//! `catch_unwind` intercepts the unwind, but the process panic hook still runs
//! first and by default prints the panic to stderr. With a non-default
//! [`PanicReport`] the hook installed here silences (or traces) panics raised
//! while the current thread is inside a capture boundary, and forwards every
//! other panic to the previously installed hook.

use super::panic_message;
use crate::config::{CaptureConfig, PanicReport};
use crate::constants::CAPTURE_LOG_TARGET;
use crate::errors::{Error, Result};
use once_cell::sync::OnceCell;
use std::cell::Cell;
use std::panic;

thread_local! {
    static BOUNDARY_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Mode of the hook installed for this process, if any
static INSTALLED: OnceCell<PanicReport> = OnceCell::new();

/// Marks the current thread as inside a boundary until dropped
pub(super) struct BoundaryGuard;

impl Drop for BoundaryGuard {
    fn drop(&mut self) {
        BOUNDARY_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

pub(super) fn enter() -> BoundaryGuard {
    BOUNDARY_DEPTH.with(|depth| depth.set(depth.get() + 1));
    BoundaryGuard
}

/// Whether the current thread is running inside a capture boundary
pub fn inside_boundary() -> bool {
    BOUNDARY_DEPTH.with(|depth| depth.get() > 0)
}

/// Install the panic hook described by `config`.
///
/// `PanicReport::Default` leaves the process hook untouched. Any other mode
/// is installed at most once per process: asking again for the same mode is a
/// no-op, asking for a different one is a configuration error.
pub fn install_panic_hook(config: &CaptureConfig) -> Result<()> {
    let requested = config.panic_report;
    if requested == PanicReport::Default {
        return Ok(());
    }

    let active = *INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !inside_boundary() {
                previous(info);
                return;
            }
            if requested == PanicReport::Trace {
                tracing::warn!(
                    target: CAPTURE_LOG_TARGET,
                    location = ?info.location(),
                    detail = %panic_message(info.payload()),
                    "panic inside capture boundary"
                );
            }
        }));
        tracing::debug!(
            target: CAPTURE_LOG_TARGET,
            mode = %requested,
            "installed capture panic hook"
        );
        requested
    });

    if active == requested {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "capture panic hook already installed in '{active}' mode, cannot switch to '{requested}'"
        )))
    }
}
