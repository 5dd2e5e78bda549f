// STC - stc-error
// Module: STC Error Types
//
// Copyright (c) 2026 The STC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error type for the STC container crates.

use core::fmt;

use crate::codes;

/// `Error` categories for STC operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Checked element access failures
    Access     = 1,
    /// Fixed-capacity violations
    Capacity   = 2,
    /// Map key failures
    Key        = 3,
    /// Internal consistency failures
    Validation = 4,
}

impl ErrorCategory {
    /// Human-readable name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Capacity => "capacity",
            Self::Key => "key",
            Self::Validation => "validation",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// STC `Error` type
///
/// The error type used across the STC containers. It carries a category, a
/// stable numeric code from [`crate::codes`], and a static message, so it
/// is `Copy` and never allocates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Checked access past the live prefix of a container.
    #[must_use]
    pub const fn out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Access, codes::OUT_OF_RANGE, message)
    }

    /// Access to a variant alternative that is not active.
    #[must_use]
    pub const fn bad_access(message: &'static str) -> Self {
        Self::new(ErrorCategory::Access, codes::BAD_ACCESS, message)
    }

    /// A fixed-capacity container asked to exceed its capacity.
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// A lookup key absent from a sorted-key map.
    #[must_use]
    pub const fn key_not_found(message: &'static str) -> Self {
        Self::new(ErrorCategory::Key, codes::KEY_NOT_FOUND, message)
    }

    /// Checks whether this error is a checked-index failure.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        self.code == codes::OUT_OF_RANGE
    }

    /// Checks whether this error is a wrong-alternative failure.
    #[must_use]
    pub const fn is_bad_access(&self) -> bool {
        self.code == codes::BAD_ACCESS
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] {}", self.category, self.code, self.message)
    }
}

impl core::error::Error for Error {}
