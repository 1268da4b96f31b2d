use std::panic::Location;

/// Log a broken precondition with the caller's location.
///
/// Returns `cond` so callers can bail out: `if report_if(bad, "...") { return; }`.
/// Never panics; the caller decides how to clamp or ignore.
#[track_caller]
pub fn report_if(cond: bool, what: &str) -> bool {
    if cond {
        let loc = Location::caller();
        tracing::error!(file = loc.file(), line = loc.line(), "precondition failed: {}", what);
    }
    cond
}
