//! Capture log collaborator seam.
//!
//! The menu never owns or mutates a log; it only reads formatted entries.
//! How entries get in (append, wraparound, triggers) is the log's business.

/// Read access to a bounded buffer of formatted text entries.
///
/// Implementations are caller-owned and must outlive any menu that
/// references them.
pub trait CaptureLog {
    /// Number of stored entries.
    fn entry_count(&self) -> usize;

    /// Formatted text of entry `index`.
    ///
    /// Only meaningful for `index < entry_count()`.
    fn entry_text(&self, index: usize) -> &str;
}

impl<T: CaptureLog + ?Sized> CaptureLog for &T {
    fn entry_count(&self) -> usize {
        (**self).entry_count()
    }

    fn entry_text(&self, index: usize) -> &str {
        (**self).entry_text(index)
    }
}
