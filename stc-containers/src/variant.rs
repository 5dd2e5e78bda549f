// STC - stc-containers
// Module: Variant - tagged union over a tuple of alternatives
//
// Copyright (c) 2026 The STC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Allow unsafe code for the union storage and manual alternative lifetimes
#![allow(unsafe_code)]

//! Tagged union with manual alternative lifetime management.
//!
//! `Variant<A>` stores exactly one value out of the alternative tuple `A`
//! (for example `Variant<(i32, bool)>`) in a `#[repr(C)]` union sized and
//! aligned for the widest alternative. A `u8` discriminant records which
//! alternative is live; construction, reassignment, and drop keep the
//! discriminant and the live value in lockstep.
//!
//! # Invariants
//!
//! 1. Exactly one alternative is live at any time
//! 2. `selected` always equals the live alternative's index
//! 3. Every union field lives at offset zero (`#[repr(C)]`)
//!
//! Index-directed access ([`Variant::at`]) is compile-time bounded by the
//! [`Indexed`] impls of the alternative tuple; type-directed access
//! ([`Variant::at_t`], [`Variant::holds`]) resolves the alternative by a
//! first-match `TypeId` scan, so duplicated alternative types are allowed
//! and the first occurrence wins.

use core::any::TypeId;
use core::fmt;
use core::mem::{ManuallyDrop, MaybeUninit};

use crate::StcResult;
use crate::tuple::{Case, Indexed, for_each_arity};
use stc_error::Error;

/// A tuple of types usable as the alternative set of a [`Variant`].
///
/// # Safety
///
/// `Storage` must be a `#[repr(C)]` union with one field per tuple element,
/// in order, each of type `ManuallyDrop<T_i>`, and `drop_alternative`
/// must drop exactly the alternative named by `index`.
pub unsafe trait Alternatives {
    /// Union storage sized and aligned for every alternative.
    type Storage;

    /// Number of alternatives.
    const COUNT: usize;

    /// Drops the alternative `index` in place.
    ///
    /// # Safety
    ///
    /// Alternative `index` must be live in `storage`; after the call it no
    /// longer is.
    unsafe fn drop_alternative(storage: *mut Self::Storage, index: usize);
}

/// Alternative sets whose first alternative is default-constructible.
pub trait HeadDefault: Alternatives {
    /// Writes a default-constructed first alternative into `storage`.
    ///
    /// # Safety
    ///
    /// `storage` must be valid for writes and hold no live alternative.
    unsafe fn write_head(storage: *mut Self::Storage);
}

/// Runtime type-to-index resolution over an alternative set.
///
/// Requires `'static` alternatives; index-directed access does not.
pub trait TypeLookup: Alternatives {
    /// Index of the first alternative with the given `TypeId`.
    fn position_of(id: TypeId) -> Option<usize>;
}

/// One-of-N storage cell with a runtime discriminant.
pub struct Variant<A: Alternatives> {
    /// Invariant: `selected < A::COUNT` and names the live alternative
    selected: u8,
    storage: MaybeUninit<A::Storage>,
}

impl<A: Alternatives> Variant<A> {
    /// Index of the live alternative.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.selected as usize
    }

    /// Number of alternatives in this variant type.
    #[must_use]
    pub const fn alternatives() -> usize {
        A::COUNT
    }

    /// Checked access to alternative `I`.
    ///
    /// # Errors
    ///
    /// Fails with a `BAD_ACCESS` error when `I` is not the live
    /// alternative. An `I` outside the alternative count does not compile.
    pub fn at<const I: usize>(&self) -> StcResult<&<A as Indexed<I>>::At>
    where
        A: Indexed<I>,
    {
        if self.index() == I {
            // SAFETY: the discriminant says alternative I is live, and every
            // union field sits at offset zero.
            Ok(unsafe { &*self.storage.as_ptr().cast::<<A as Indexed<I>>::At>() })
        } else {
            Err(Error::bad_access("requested alternative is not active"))
        }
    }

    /// Checked exclusive access to alternative `I`.
    ///
    /// # Errors
    ///
    /// Fails with a `BAD_ACCESS` error when `I` is not the live
    /// alternative.
    pub fn at_mut<const I: usize>(&mut self) -> StcResult<&mut <A as Indexed<I>>::At>
    where
        A: Indexed<I>,
    {
        if self.index() == I {
            // SAFETY: as in `at`
            Ok(unsafe { &mut *self.storage.as_mut_ptr().cast::<<A as Indexed<I>>::At>() })
        } else {
            Err(Error::bad_access("requested alternative is not active"))
        }
    }
}

impl<A: Alternatives + TypeLookup> Variant<A> {
    /// Constructs a variant holding `value`.
    ///
    /// The alternative is selected by the first exact type match in `A`.
    ///
    /// # Panics
    ///
    /// Panics when `U` is not one of the alternatives; passing a
    /// non-alternative type is a contract violation.
    #[track_caller]
    #[must_use]
    pub fn new<U: 'static>(value: U) -> Self {
        let Some(index) = A::position_of(TypeId::of::<U>()) else {
            panic!("type is not an alternative of this variant");
        };
        let mut storage = MaybeUninit::<A::Storage>::uninit();
        // SAFETY: position_of matched U's TypeId, so the alternative at
        // `index` has type U; the union places every field at offset zero.
        unsafe { storage.as_mut_ptr().cast::<U>().write(value) };
        Self {
            selected: index as u8,
            storage,
        }
    }

    /// Replaces the held value, destroying the previous alternative and
    /// updating the discriminant.
    ///
    /// # Panics
    ///
    /// Panics when `U` is not one of the alternatives.
    #[track_caller]
    pub fn set<U: 'static>(&mut self, value: U) {
        let Some(index) = A::position_of(TypeId::of::<U>()) else {
            panic!("type is not an alternative of this variant");
        };
        // SAFETY: `selected` names the live alternative; after dropping it
        // the storage is free for the new value, which is written before
        // the discriminant changes hands.
        unsafe {
            A::drop_alternative(self.storage.as_mut_ptr(), self.index());
            self.storage.as_mut_ptr().cast::<U>().write(value);
        }
        self.selected = index as u8;
    }

    /// Whether the live alternative is the (first) alternative of type `U`.
    #[must_use]
    pub fn holds<U: 'static>(&self) -> bool {
        A::position_of(TypeId::of::<U>()) == Some(self.index())
    }

    /// Checked access to the live value as type `U`.
    ///
    /// # Errors
    ///
    /// Fails with a `BAD_ACCESS` error when the alternative of type `U` is
    /// not the live one.
    pub fn at_t<U: 'static>(&self) -> StcResult<&U> {
        if self.holds::<U>() {
            // SAFETY: `holds` confirmed the live alternative has type U
            Ok(unsafe { &*self.storage.as_ptr().cast::<U>() })
        } else {
            Err(Error::bad_access("requested alternative is not active"))
        }
    }

    /// Checked exclusive access to the live value as type `U`.
    ///
    /// # Errors
    ///
    /// Fails with a `BAD_ACCESS` error when the alternative of type `U` is
    /// not the live one.
    pub fn at_t_mut<U: 'static>(&mut self) -> StcResult<&mut U> {
        if self.holds::<U>() {
            // SAFETY: as in `at_t`
            Ok(unsafe { &mut *self.storage.as_mut_ptr().cast::<U>() })
        } else {
            Err(Error::bad_access("requested alternative is not active"))
        }
    }
}

impl<A: Alternatives + HeadDefault> Default for Variant<A> {
    /// Activates alternative 0, default-constructed.
    fn default() -> Self {
        let mut storage = MaybeUninit::<A::Storage>::uninit();
        // SAFETY: the storage is fresh and holds no live alternative
        unsafe { A::write_head(storage.as_mut_ptr()) };
        Self {
            selected: 0,
            storage,
        }
    }
}

impl<A: Alternatives> Drop for Variant<A> {
    fn drop(&mut self) {
        // SAFETY: `selected` names the live alternative; it is dropped
        // exactly once here.
        unsafe { A::drop_alternative(self.storage.as_mut_ptr(), self.index()) };
    }
}

macro_rules! impl_variant_storage {
    ($n:tt, $u:ident; $(($T:ident, $idx:tt, $field:ident)),+) => {
        /// Backing union storage for an alternative tuple of this arity.
        #[repr(C)]
        #[allow(dead_code)] // fields are reached through offset-zero casts only
        pub union $u<$($T),+> {
            $($field: ManuallyDrop<$T>,)+
        }

        // SAFETY: the union is #[repr(C)] with one ManuallyDrop field per
        // alternative in declaration order, so every field sits at offset
        // zero and the union is sized/aligned for the widest alternative.
        unsafe impl<$($T),+> Alternatives for ($($T,)+) {
            type Storage = $u<$($T),+>;

            const COUNT: usize = $n;

            unsafe fn drop_alternative(storage: *mut Self::Storage, index: usize) {
                match index {
                    $(
                        // SAFETY: caller guarantees alternative `index` is live
                        $idx => unsafe { storage.cast::<$T>().drop_in_place() },
                    )+
                    _ => {}
                }
            }
        }

        impl<$($T: 'static),+> TypeLookup for ($($T,)+) {
            fn position_of(id: TypeId) -> Option<usize> {
                $(
                    if id == TypeId::of::<$T>() {
                        return Some($idx);
                    }
                )+
                None
            }
        }

        impl<$($T),+> Variant<($($T,)+)> {
            /// Dispatches `visitor` to the live alternative.
            ///
            /// # Errors
            ///
            /// Fails with a `BAD_ACCESS` error if the discriminant matches
            /// no alternative; unreachable while the invariants hold.
            pub fn visit<R, V>(&mut self, mut visitor: V) -> StcResult<R>
            where
                $(V: Case<$T, Output = R>,)+
            {
                match self.selected {
                    $(
                        // SAFETY: the discriminant names the live alternative
                        $idx => Ok(visitor.call(unsafe {
                            &mut *self.storage.as_mut_ptr().cast::<$T>()
                        })),
                    )+
                    _ => Err(Error::bad_access("no alternative matches the discriminant")),
                }
            }
        }

        impl<$($T: Clone),+> Clone for Variant<($($T,)+)> {
            fn clone(&self) -> Self {
                let mut storage = MaybeUninit::<$u<$($T),+>>::uninit();
                match self.selected {
                    $(
                        // SAFETY: the discriminant names the live alternative;
                        // the clone is written into the same slot of the copy
                        $idx => unsafe {
                            storage
                                .as_mut_ptr()
                                .cast::<$T>()
                                .write((*self.storage.as_ptr().cast::<$T>()).clone());
                        },
                    )+
                    _ => unreachable!(),
                }
                Self {
                    selected: self.selected,
                    storage,
                }
            }
        }

        impl<$($T: fmt::Debug),+> fmt::Debug for Variant<($($T,)+)> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.selected {
                    $(
                        // SAFETY: the discriminant names the live alternative
                        $idx => f
                            .debug_tuple("Variant")
                            .field(unsafe { &*self.storage.as_ptr().cast::<$T>() })
                            .finish(),
                    )+
                    _ => unreachable!(),
                }
            }
        }

        impl<$($T: PartialEq),+> PartialEq for Variant<($($T,)+)> {
            fn eq(&self, other: &Self) -> bool {
                if self.selected != other.selected {
                    return false;
                }
                match self.selected {
                    $(
                        // SAFETY: both discriminants name this alternative
                        $idx => unsafe {
                            *self.storage.as_ptr().cast::<$T>()
                                == *other.storage.as_ptr().cast::<$T>()
                        },
                    )+
                    _ => unreachable!(),
                }
            }
        }
    };
}
for_each_arity!(impl_variant_storage);

macro_rules! impl_variant_head {
    ($n:tt, $u:ident; ($H:ident, $hidx:tt, $hfield:ident) $(, ($T:ident, $idx:tt, $field:ident))*) => {
        impl<$H: Default $(, $T)*> HeadDefault for ($H, $($T,)*) {
            unsafe fn write_head(storage: *mut Self::Storage) {
                // SAFETY: caller guarantees the storage is writable and empty
                unsafe { storage.cast::<$H>().write($H::default()) };
            }
        }
    };
}
for_each_arity!(impl_variant_head);
