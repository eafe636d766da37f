/// This config file lists out all the default values for the main ROOMCHECK env configs.
/// All can be overridden by an ENV var of the same name. These should only be
/// primitive types.

/// base URL of the booking server hosting the availability endpoint
pub static ROOMCHECK_SERVER_URL: &'static str = "http://localhost:8080";

/// timeout for the availability-check HTTP request
pub static ROOMCHECK_HTTP_TIMEOUT_MS: usize = 10_000;

/// lifetime of a toast notification before it auto-dismisses
pub static ROOMCHECK_TOAST_TIMER_MS: usize = 3000;

/// display and wire format for arrival/departure dates
pub static ROOMCHECK_DATE_FORMAT: &'static str = "%Y-%m-%d";
