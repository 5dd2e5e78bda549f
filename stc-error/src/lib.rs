// STC - stc-error
// Module: STC Error Handling
//
// Copyright (c) 2026 The STC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! STC error handling library
//!
//! This library provides the error type shared by the STC container crates.
//! It is `no_std`, allocation-free, and every error value is `Copy`: an
//! error is a category, a stable numeric code, and a static message.
//!
//! # Error Categories
//!
//! Errors are organized into categories, each with its own range of error
//! codes:
//!
//! ## Access Errors (1000-1999)
//! - Checked element access past the live prefix of a vector
//! - Reading a variant alternative that is not active
//!
//! ## Capacity Errors (2000-2999)
//! - A fixed-capacity container asked to hold more than its capacity
//!
//! ## Key Errors (3000-3999)
//! - Lookup keys absent from a sorted-key map, duplicate construction keys
//!
//! ## Validation Errors (5000-5999)
//! - Internal consistency failures
//!
//! # Usage
//!
//! ```
//! use stc_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Access,
//!     codes::OUT_OF_RANGE,
//!     "vector index past the live prefix",
//! );
//! assert!(error.is_out_of_range());
//!
//! // Factory helpers for the common cases
//! let error = Error::bad_access("the requested alternative is not active");
//! assert_eq!(error.code, codes::BAD_ACCESS);
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error codes for STC
pub mod codes;
/// Error and error handling types
pub mod errors;

// Re-export key types
pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for STC operations.
///
/// This type alias uses `stc_error::Error` as the error type and is
/// suitable for `no_std` environments.
pub type Result<T> = core::result::Result<T, Error>;
