//! Process-wide behaviour of the capture boundary: the panic hook and its
//! configuration. These tests share one process hook, so they run serially.

use faultline_core::capture::{inside_boundary, install_panic_hook, scoped};
use faultline_core::constants::{FAULTLINE_LOG_VAR, FAULTLINE_PANIC_REPORT_VAR};
use faultline_core::{to_error, try_catch, CaptureConfig, Either, Error, PanicReport};
use serial_test::serial;
use std::cell::RefCell;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env(FAULTLINE_LOG_VAR))
        .with_test_writer()
        .try_init();
}

#[test]
#[serial]
fn quiet_hook_installs_once_and_refuses_other_modes() {
    init_tracing();

    let quiet = CaptureConfig::default().with_panic_report(PanicReport::Quiet);
    install_panic_hook(&quiet).unwrap();
    quiet.apply().unwrap();

    let conflict = install_panic_hook(&quiet.with_panic_report(PanicReport::Trace)).unwrap_err();
    assert!(matches!(conflict, Error::Configuration { .. }));
    assert!(conflict.to_string().contains("'quiet'"));

    install_panic_hook(&CaptureConfig::default()).unwrap();
}

#[test]
#[serial]
fn captured_panics_still_classify_with_hook_installed() {
    init_tracing();
    CaptureConfig::default()
        .with_panic_report(PanicReport::Quiet)
        .apply()
        .unwrap();

    let result: Either<Error, u8> = try_catch(|| panic!("silenced"), to_error);

    assert!(matches!(result, Either::Left(Error::Panicked { ref message }) if message == "silenced"));
    assert!(!inside_boundary());
}

#[test]
#[serial]
fn panics_outside_a_boundary_still_unwind() {
    init_tracing();
    CaptureConfig::default()
        .with_panic_report(PanicReport::Quiet)
        .apply()
        .unwrap();

    let joined = std::thread::spawn(|| {
        assert!(!inside_boundary());
        panic!("not captured");
    })
    .join();

    assert!(joined.is_err());
}

#[test]
#[serial]
fn resources_are_released_when_a_boundary_catches() {
    init_tracing();
    let events = RefCell::new(Vec::new());

    let result = try_catch(
        || {
            scoped(
                "lock",
                |name: &mut &str| events.borrow_mut().push(format!("release {name}")),
                |_| -> u32 { panic!("worker died") },
            )
        },
        |fault| {
            events.borrow_mut().push(format!("classify {fault}"));
            fault.kind()
        },
    );

    assert_eq!(result, Either::Left("panic"));
    assert_eq!(
        *events.borrow(),
        vec!["release lock".to_string(), "classify worker died".to_string()]
    );
}

#[test]
#[serial]
fn configuration_is_read_from_the_environment() {
    std::env::set_var(FAULTLINE_PANIC_REPORT_VAR, "Quiet");
    let config = CaptureConfig::from_env();
    std::env::remove_var(FAULTLINE_PANIC_REPORT_VAR);

    assert_eq!(config.unwrap().panic_report, PanicReport::Quiet);
}
