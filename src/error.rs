#![allow(non_shorthand_field_patterns)]
#![doc = "Error type returned by the fallible parsing edges of the crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint, so the lint is disabled
//! for this module.
//!
//! The text transformations themselves are total and never produce an
//! [`Error`]. Only [`Slug::parse`](crate::Slug::parse) and
//! [`Value::from_json`](crate::Value::from_json) can fail.

/// Unified error type returned by slug validation and JSON value parsing.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Returned when text violates the invariants of a validated type.
    #[error("invalid input: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps JSON decoding errors raised while building a [`Value`](crate::Value).
    #[error("failed to parse value: {source}")]
    Parse {
        /// Source decoding error from serde_json.
        source: serde_json::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse {
            source
        }
    }
}
