//! Stable error codes shared by the HTTP layer.

/// Maps a domain error onto the string code returned to the browser.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;

    /// Whether resubmitting the same request later could succeed.
    fn retryable(&self) -> bool {
        false
    }
}
