// SPDX-License-Identifier: MIT

//! The `errors` module defines `ignore`'s [`Error`] type, [`ErrorKind`] with their accompanying trait & method implementations.

use std::error::Error as StdErr;
use std::fmt::{Display, Formatter, Result};

/// `enum` containing the possible kinds of errors for `ignore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The first argument names no known command.
    UnknownCommand,

    /// The command arguments could not be parsed.
    InvalidArguments,

    /// The current working directory could not be determined.
    LocateWorkingDir,

    /// The HTTP stack failed to complete a request or read its body.
    Transport,

    /// The catalog answered the template listing with a non-success status.
    CatalogStatus,

    /// The template listing is not a JSON array of strings.
    MalformedListing,

    /// Writing the generated output (file or stream) failed.
    WriteOutput,

    /// Error type for arbitrary (no fixed rule) errors.
    Other,
}

/// `struct` containing `ignore`'s error content.
#[derive(Debug)]
pub struct Error {
    /// The kind of error as enumerated in [`ErrorKind`].
    kind: ErrorKind,

    /// Free-form message, overrides the kind's default message when not empty.
    message: String,

    /// Optional field containing error resulting in this error.
    error: Option<Box<dyn StdErr + Send + Sync>>,
}

/// Method implementations for [`Error`].
impl Error {
    /// Creates a new [`Error`] from a supplied [`ErrorKind`] & `Into<Box<dyn std::error::Error>>`
    /// (type that can be converted into a boxable error struct).
    pub fn new<T>(error_kind: ErrorKind, error_source: T) -> Self
    where
        T: Into<Box<dyn StdErr + Send + Sync>>,
    {
        Self {
            kind: error_kind,
            message: "".to_owned(),
            error: Some(error_source.into()),
        }
    }

    /// Creates a new [`Error`] of the supplied kind carrying a custom message.
    pub fn with_message<S: Into<String>>(error_kind: ErrorKind, message: S) -> Self {
        Self {
            kind: error_kind,
            message: message.into(),
            error: None,
        }
    }

    /// Returns the error's [`ErrorKind`].
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result {
        if !self.message.is_empty() {
            return write!(f, "{}", &self.message);
        }

        let message = match self.kind() {
            ErrorKind::UnknownCommand => "Unknown command",
            ErrorKind::InvalidArguments => "Invalid command arguments",
            ErrorKind::LocateWorkingDir => "Failed to locate the current working directory",
            ErrorKind::Transport => "Failed to reach the template catalog",
            ErrorKind::CatalogStatus => "The template catalog rejected the listing request",
            ErrorKind::MalformedListing => "The template catalog returned a malformed listing",
            ErrorKind::WriteOutput => "Failed to write the generated output",
            ErrorKind::Other => "User defined error with no payload encountered",
        };

        match &self.error {
            Some(err) => write!(f, "{}: {}", message, err),
            None => write!(f, "{}", message),
        }
    }
}

impl StdErr for Error {
    fn source(&self) -> Option<&(dyn StdErr + 'static)> {
        match &self.error {
            Some(err) => Some(&**err),
            None => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self {
            kind: error_kind,
            message: "".to_owned(),
            error: None,
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::with_message(ErrorKind::Other, message)
    }
}
