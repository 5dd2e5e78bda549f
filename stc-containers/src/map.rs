// STC - stc-containers
// Module: SortedMap - sorted-key map over a heterogeneous value tuple
//
// Copyright (c) 2026 The STC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Sorted-key associative map with heterogeneous values.
//!
//! [`SortedMap<K, V, C, N>`] pairs a sorted key array with a value tuple
//! `V` of arity `N`. Lookup is a binary search over the keys; access to
//! the matching value is dispatched through a runtime `match` over the
//! compile-time-bounded arity, the same dispatch shape as
//! `Variant::visit`.
//!
//! Maps are built with [`sorted_map`] (natural `Ord` order) or
//! [`sorted_map_by`] from a tuple of `(key, value)` pairs. Keys are sorted
//! once at construction: each key is stored together with the slot of its
//! value in the tuple and the (key, slot) pairs are sorted as a unit, so a
//! key always resolves to the value it was originally paired with,
//! wherever sorting moved it.
//!
//! # Invariants
//!
//! 1. `keys` is sorted by the comparator and duplicate-free
//! 2. The slot stored with each key names that key's original value
//! 3. The key set is immutable after construction; values may be mutated
//!    in place through visitation

use core::cmp::Ordering;

use crate::tuple::{Apply, Case, Indexed, for_each_arity};

/// Key ordering used by a [`SortedMap`].
pub trait Compare<K> {
    /// Total order over keys.
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering;
}

/// The `Ord`-derived key ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<K: Ord> Compare<K> for NaturalOrder {
    #[inline]
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Adapts a closure into a [`Compare`] ordering.
#[derive(Debug, Clone, Copy)]
pub struct CmpFn<F>(pub F);

impl<K, F> Compare<K> for CmpFn<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        (self.0)(lhs, rhs)
    }
}

/// An immutable-key map from `N` keys to the slots of a heterogeneous
/// value tuple `V`.
#[derive(Debug, Clone)]
pub struct SortedMap<K, V, C, const N: usize> {
    /// Sorted (key, value-slot) pairs
    keys: [(K, usize); N],
    values: V,
    cmp: C,
}

/// A tuple of `(key, value)` pairs convertible into a [`SortedMap`].
///
/// Implemented for pair tuples of every supported arity; the pairs type
/// fixes the key type, the value tuple, and the arity.
pub trait KeyValuePairs<K, C> {
    /// The map this pair list builds.
    type Map;

    /// Consumes the pairs into a map sorted by `cmp`.
    fn into_map(self, cmp: C) -> Self::Map;
}

/// Builds a [`SortedMap`] from `(key, value)` pairs in natural key order.
///
/// Duplicate keys violate the construction contract and make lookups
/// undefined (checked in debug builds).
///
/// ```
/// use stc_containers::{FnCase, sorted_map};
///
/// let mut map = sorted_map((("b", 2_u32), ("a", 1_u32)));
/// let value = map.visit_at(&"a", FnCase(|value: &mut u32| *value));
/// assert_eq!(value, 1);
/// ```
#[must_use]
pub fn sorted_map<K, P>(pairs: P) -> P::Map
where
    K: Ord,
    P: KeyValuePairs<K, NaturalOrder>,
{
    pairs.into_map(NaturalOrder)
}

/// Builds a [`SortedMap`] from `(key, value)` pairs with a custom key
/// ordering.
#[must_use]
pub fn sorted_map_by<K, C, P>(pairs: P, cmp: C) -> P::Map
where
    C: Compare<K>,
    P: KeyValuePairs<K, C>,
{
    pairs.into_map(cmp)
}

impl<K, V, C: Compare<K>, const N: usize> SortedMap<K, V, C, N> {
    /// Number of entries (the tuple arity).
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` for the zero-arity map.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Sorted position of `key`.
    ///
    /// Binary search: upper bound, then one step back.
    ///
    /// # Panics
    ///
    /// Panics when the key is absent; callers must only ask for keys the
    /// map was built with.
    #[track_caller]
    #[must_use]
    pub fn idx(&self, key: &K) -> usize {
        let upper = self
            .keys
            .partition_point(|(existing, _)| self.cmp.compare(existing, key) != Ordering::Greater);
        assert!(upper > 0, "key not present in map");
        let position = upper - 1;
        assert!(
            self.cmp.compare(&self.keys[position].0, key) == Ordering::Equal,
            "key not present in map"
        );
        position
    }

    /// Whether `key` was one of the construction keys.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.keys
            .binary_search_by(|(existing, _)| self.cmp.compare(existing, key))
            .is_ok()
    }

    /// The keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter().map(|(key, _)| key)
    }

    /// Positional access into the value tuple.
    #[must_use]
    pub fn value_at<const I: usize>(&self) -> &<V as Indexed<I>>::At
    where
        V: Indexed<I>,
    {
        self.values.at()
    }

    /// Positional exclusive access into the value tuple.
    #[must_use]
    pub fn value_at_mut<const I: usize>(&mut self) -> &mut <V as Indexed<I>>::At
    where
        V: Indexed<I>,
    {
        self.values.at_mut()
    }

    /// Value slot for `key`: the tuple position of the value originally
    /// paired with it.
    #[track_caller]
    fn slot_of(&self, key: &K) -> usize {
        self.keys[self.idx(key)].1
    }
}

macro_rules! impl_sorted_map {
    ($n:tt, $u:ident; $(($T:ident, $idx:tt, $field:ident)),+) => {
        impl<K, C: Compare<K>, $($T),+> KeyValuePairs<K, C> for ($((K, $T),)+) {
            type Map = SortedMap<K, ($($T,)+), C, $n>;

            fn into_map(self, cmp: C) -> Self::Map {
                let ($($field,)+) = self;
                // Joint sort of (key, slot) pairs keeps every key aligned
                // with the value it arrived with.
                let mut keys = [$(($field.0, $idx),)+];
                keys.sort_unstable_by(|a, b| cmp.compare(&a.0, &b.0));
                debug_assert!(
                    keys.windows(2)
                        .all(|pair| cmp.compare(&pair[0].0, &pair[1].0) == Ordering::Less),
                    "duplicate keys supplied at map construction"
                );
                #[cfg(feature = "log")]
                log::trace!("sorted-key map built over {} keys", $n);
                SortedMap {
                    keys,
                    values: ($($field.1,)+),
                    cmp,
                }
            }
        }

        impl<K, C: Compare<K>, $($T),+> SortedMap<K, ($($T,)+), C, $n> {
            /// Applies `visitor` to the value originally paired with `key`.
            ///
            /// # Panics
            ///
            /// Panics when the key is absent, like [`SortedMap::idx`].
            #[track_caller]
            pub fn visit_at<R, V>(&mut self, key: &K, mut visitor: V) -> R
            where
                $(V: Case<$T, Output = R>,)+
            {
                match self.slot_of(key) {
                    $($idx => visitor.call(&mut self.values.$idx),)+
                    _ => unreachable!("value slot derived from a validated key"),
                }
            }

            /// Invokes the value paired with `key` as a callable, with the
            /// elements of `args` as its argument list.
            ///
            /// # Panics
            ///
            /// Panics when the key is absent, like [`SortedMap::idx`].
            #[track_caller]
            pub fn call_at<Args, R>(&mut self, key: &K, args: Args) -> R
            where
                $($T: Apply<Args, Output = R>,)+
            {
                match self.slot_of(key) {
                    $($idx => self.values.$idx.apply(args),)+
                    _ => unreachable!("value slot derived from a validated key"),
                }
            }
        }
    };
}
for_each_arity!(impl_sorted_map);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn call_at_reaches_the_value_paired_with_each_key() {
        let target = Cell::new(1_234_567_usize);

        let mut map = sorted_map((
            ("set0", || target.set(0)),
            ("set2", || target.set(2)),
            ("set3", || target.set(3)),
        ));

        map.call_at(&"set0", ());
        assert_eq!(target.get(), 0);
        map.call_at(&"set2", ());
        assert_eq!(target.get(), 2);
        map.call_at(&"set3", ());
        assert_eq!(target.get(), 3);
    }

    #[test]
    fn call_at_forwards_arguments() {
        let mut map = sorted_map((
            ("add", |a: i32, b: i32| a + b),
            ("mul", |a: i32, b: i32| a * b),
        ));

        assert_eq!(map.call_at(&"add", (6, 7)), 13);
        assert_eq!(map.call_at(&"mul", (6, 7)), 42);
    }

    enum Seen {
        Int(u32),
        Text(&'static str),
        Float(f64),
    }

    struct Record;

    impl Case<u32> for Record {
        type Output = Seen;

        fn call(&mut self, value: &mut u32) -> Seen {
            Seen::Int(*value)
        }
    }

    impl Case<&'static str> for Record {
        type Output = Seen;

        fn call(&mut self, value: &mut &'static str) -> Seen {
            Seen::Text(*value)
        }
    }

    impl Case<f64> for Record {
        type Output = Seen;

        fn call(&mut self, value: &mut f64) -> Seen {
            Seen::Float(*value)
        }
    }

    #[test]
    fn sorting_keeps_keys_paired_with_their_values() {
        // Keys arrive unsorted; sorting moves "b" and "c" but each key
        // must still reach the value it was constructed with.
        let mut map = sorted_map((("c", 10_u32), ("a", "alpha"), ("b", 2.5_f64)));

        assert!(matches!(map.visit_at(&"c", Record), Seen::Int(10)));
        assert!(matches!(map.visit_at(&"a", Record), Seen::Text("alpha")));
        assert!(matches!(map.visit_at(&"b", Record), Seen::Float(value) if value == 2.5));
    }

    #[test]
    fn keys_iterate_in_sorted_order() {
        let map = sorted_map((("c", 1), ("a", 2), ("b", 3)));
        let keys: Vec<&&str> = map.keys().collect();
        assert_eq!(keys, [&"a", &"b", &"c"]);
        assert_eq!(map.len(), 3);
        assert!(!map.is_empty());
    }

    #[test]
    fn idx_finds_sorted_positions() {
        let map = sorted_map((("c", 1), ("a", 2), ("b", 3)));
        assert_eq!(map.idx(&"a"), 0);
        assert_eq!(map.idx(&"b"), 1);
        assert_eq!(map.idx(&"c"), 2);
    }

    #[test]
    #[should_panic(expected = "key not present in map")]
    fn idx_panics_on_an_absent_key() {
        let map = sorted_map((("a", 1), ("b", 2)));
        map.idx(&"zzz");
    }

    #[test]
    fn contains_key_is_the_checked_lookup() {
        let map = sorted_map((("a", 1), ("b", 2)));
        assert!(map.contains_key(&"a"));
        assert!(!map.contains_key(&"zzz"));
    }

    #[test]
    fn positional_value_access() {
        let mut map = sorted_map((("b", 10_u32), ("a", "alpha")));
        assert_eq!(*map.value_at::<0>(), 10);
        assert_eq!(*map.value_at::<1>(), "alpha");

        *map.value_at_mut::<0>() = 11;
        assert!(matches!(map.visit_at(&"b", Record), Seen::Int(11)));
    }

    #[test]
    fn custom_comparator_orders_the_keys() {
        let mut map = sorted_map_by(
            ((3_i32, "three"), (1_i32, "one"), (2_i32, "two")),
            CmpFn(|a: &i32, b: &i32| b.cmp(a)),
        );

        // Reverse order: largest key first.
        assert_eq!(map.idx(&3), 0);
        assert_eq!(map.idx(&1), 2);

        // A closure cannot express the higher-ranked lifetime this visitor
        // needs (return borrows from the inner `&str`, not the `&mut`); a
        // named `fn` carries the explicit lifetime the compiler requires.
        fn deref_str<'a>(value: &mut &'a str) -> &'a str {
            *value
        }
        let name = map.visit_at(&2, crate::tuple::FnCase(deref_str));
        assert_eq!(name, "two");
    }

    #[test]
    fn values_can_be_mutated_through_visitation() {
        let mut map = sorted_map((("hits", 0_u32), ("misses", 0_u32)));

        for _ in 0..3 {
            map.visit_at(&"hits", crate::tuple::FnCase(|count: &mut u32| *count += 1));
        }
        let hits = map.visit_at(&"hits", crate::tuple::FnCase(|count: &mut u32| *count));
        assert_eq!(hits, 3);
    }
}
