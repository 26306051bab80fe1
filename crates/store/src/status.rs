//! Shared request-lifecycle markers and transitions.
//!
//! `status` is a deliberately overloaded string: the pending marker
//! while a request is in flight, the read marker after a successful
//! list/get, or a human-readable success message after a write. The
//! notification layer keys off these values, so they are defined once
//! here rather than scattered per slice.

/// Stored in `status` while a request is in flight.
pub const LOADING: &str = "loading";

/// Stored in `status` after a successful read (list / get-by-id).
pub const FULFILLED: &str = "fulfilled";

/// Enter the pending phase: mark the slice loading, drop any stale error.
pub(crate) fn set_pending(status: &mut Option<String>, error: &mut Option<String>) {
    *status = Some(LOADING.to_string());
    *error = None;
}

/// Record a successful completion with the given status text.
pub(crate) fn set_fulfilled(status: &mut Option<String>, error: &mut Option<String>, text: &str) {
    *status = Some(text.to_string());
    *error = None;
}

/// Record a terminal failure: the message is stored verbatim and the
/// pending marker is cleared.
pub(crate) fn set_rejected(
    status: &mut Option<String>,
    error: &mut Option<String>,
    message: String,
) {
    *status = None;
    *error = Some(message);
}
