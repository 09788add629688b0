/// Constants used throughout the faultline codebase
// Environment variable names
pub const FAULTLINE_PANIC_REPORT_VAR: &str = "FAULTLINE_PANIC_REPORT";
pub const FAULTLINE_LOG_VAR: &str = "FAULTLINE_LOG";

// Tracing targets
pub const CAPTURE_LOG_TARGET: &str = "faultline::capture";
pub const CONFIG_LOG_TARGET: &str = "faultline::config";

// Rendering of a panic payload that is neither `&str` nor `String`
pub const OPAQUE_PANIC_PAYLOAD: &str = "Box<dyn Any>";
