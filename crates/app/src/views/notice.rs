//! Transient notifications derived from a slice's status/error pair.
//!
//! A failure always surfaces as an error notice. A status string other
//! than the lifecycle markers surfaces with its severity decided by the
//! text itself: success when it reads as one, error otherwise. The
//! pending marker and the read-completion marker are never shown.
//! Dismissal is the slice's `reset_status()`.

use cinelog_store::status;

/// Severity of a notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A dismissible, transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

/// Derive the notice (if any) for a slice's current request state.
pub fn from_request_state(status: Option<&str>, error: Option<&str>) -> Option<Notice> {
    if let Some(message) = error {
        return Some(Notice {
            message: message.to_string(),
            severity: Severity::Error,
        });
    }
    match status {
        Some(text) if text != status::LOADING && text != status::FULFILLED => Some(Notice {
            message: text.to_string(),
            severity: if text.contains("success") {
                Severity::Success
            } else {
                Severity::Error
            },
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_success_messages_surface_as_success() {
        let notice = from_request_state(Some("Movie created successfully!"), None)
            .expect("a write success must surface");
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.message, "Movie created successfully!");
    }

    #[test]
    fn errors_win_over_status() {
        let notice = from_request_state(Some("loading"), Some("Error getting movies 500"))
            .expect("an error must surface");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, "Error getting movies 500");
    }

    #[test]
    fn lifecycle_markers_are_silent() {
        assert_eq!(from_request_state(Some("loading"), None), None);
        assert_eq!(from_request_state(Some("fulfilled"), None), None);
        assert_eq!(from_request_state(None, None), None);
    }
}
