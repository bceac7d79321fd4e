#![forbid(unsafe_code)]

//! Attach-time errors.

use std::fmt;

/// Failure to attach the widget to its host container.
///
/// Attachment is the only fallible widget operation: everything after it is
/// either infallible or reported asynchronously through events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachError {
    /// The host container the widget should mount into does not exist.
    MissingContainer,
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContainer => write!(f, "host container element not found"),
        }
    }
}

impl std::error::Error for AttachError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_container() {
        let message = AttachError::MissingContainer.to_string();
        assert!(message.contains("container"));
    }

    #[test]
    fn is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&AttachError::MissingContainer);
    }
}
