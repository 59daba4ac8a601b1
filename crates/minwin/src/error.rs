//! Library error types

use thiserror::Error;

/// Errors raised while opening or configuring a window
///
/// Nothing in this library aborts the process; every fallible path returns
/// one of these and leaves the decision to the caller.
#[derive(Error, Debug)]
pub enum WindowError {
    /// The display server connection could not be opened
    #[error("no display connection available")]
    DisplayUnavailable,

    /// The native window (or its window class) could not be created
    #[error("window creation failed: {0}")]
    CreationFailed(String),

    /// The window configuration was rejected
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = WindowError::CreationFailed("CreateWindowExW failed (error 8)".to_string());
        assert_eq!(
            err.to_string(),
            "window creation failed: CreateWindowExW failed (error 8)"
        );

        let err = WindowError::DisplayUnavailable;
        assert_eq!(err.to_string(), "no display connection available");
    }
}
