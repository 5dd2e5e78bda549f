// STC - stc-containers
//
// Copyright (c) 2026 The STC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity, stack-allocated generic containers.
//!
//! Every container in this crate keeps its storage inline and never touches
//! the heap; capacity is part of the type and never grows. The crate is
//! `no_std` and allocation-free:
//!
//! - [`Vector`] - a bounded contiguous sequence with the mutation surface
//!   of a growable vector (insert, remove, resize, retain) but a capacity
//!   fixed at the type level.
//! - [`Variant`] - a tagged union over a tuple of alternative types, with
//!   index- and type-directed checked access and visitor dispatch.
//! - Tuple capability traits ([`tuple::Indexed`], [`tuple::Case`],
//!   [`tuple::Concat`], [`tuple::Apply`], [`tuple::Unpack`]) and
//!   [`TupleView`] windows over native Rust tuples.
//! - [`SortedMap`] - an immutable-key map pairing a sorted key array
//!   (binary search) with a heterogeneous value tuple.
//!
//! # Error tiers
//!
//! Programmer errors (capacity exceeded, index past the logical length on
//! unchecked paths, absent map keys) panic. Checked access (`Vector::at`,
//! `Variant::at`, `Variant::at_t`) reports recoverable
//! [`stc_error::Error`] values instead.
//!
//! # Feature Flags
//!
//! - `std`: reserved for std-only conveniences (the library itself never
//!   needs it)
//! - `log`: emits trace events through the `log` facade
//! - Default: pure `no_std` without allocation

#![cfg_attr(not(any(feature = "std", test)), no_std)]

// Core library is always available
extern crate core;

#[cfg(any(feature = "std", test))]
extern crate std;

/// Sorted-key associative map over a heterogeneous value tuple
pub mod map;
/// Prelude module for consistent imports
pub mod prelude;
/// Capability traits over native tuples
pub mod tuple;
/// Tagged union over a tuple of alternatives
pub mod variant;
/// Bounded vector with inline storage
pub mod vector;
/// Non-owning compile-time windows over tuples
pub mod view;

// Shared instrumentation for lifetime tests
#[cfg(test)]
pub(crate) mod testing;

// Re-export error related types for convenience
pub use stc_error::{Error, ErrorCategory, codes};

/// Result type alias for STC operations using `stc_error::Error`
pub type StcResult<T> = core::result::Result<T, Error>;

pub use map::{CmpFn, Compare, KeyValuePairs, NaturalOrder, SortedMap, sorted_map, sorted_map_by};
pub use tuple::{Apply, Arity, Case, Concat, FnCase, Indexed, Unpack, concat, get, get_mut, unwrap_then_do};
pub use variant::Variant;
pub use vector::Vector;
pub use view::{TupleView, view};
