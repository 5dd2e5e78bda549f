// STC - stc-containers
// Module: Prelude - consistent imports for users of the crate
//
// Copyright (c) 2026 The STC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! One-stop imports for the container types and their capability traits.
//!
//! ```
//! use stc_containers::prelude::*;
//!
//! let mut vec: Vector<i32, 4> = vector![1, 2, 3];
//! vec.push(4);
//! assert!(vec.is_full());
//! ```

pub use crate::map::{
    CmpFn, Compare, KeyValuePairs, NaturalOrder, SortedMap, sorted_map, sorted_map_by,
};
pub use crate::tuple::{
    Apply, Arity, Case, Concat, Flatten, FnCase, Indexed, Unpack, concat, get, get_mut,
    unwrap_then_do,
};
pub use crate::variant::{Alternatives, HeadDefault, TypeLookup, Variant};
pub use crate::vector::{IntoIter, Vector};
pub use crate::view::{TupleView, view};
pub use crate::{StcResult, vector};
pub use stc_error::{Error, ErrorCategory, Result, codes};
