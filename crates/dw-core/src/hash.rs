//! Fast hash map and hash set type aliases.
//!
//! Type aliases for [`FxHashMap`] and [`FxHashSet`] from the `rustc-hash`
//! crate. The Fx algorithm is considerably faster than the standard library's
//! SipHash for the small string-keyed tables this workspace uses, at the cost
//! of denial-of-service resistance (irrelevant for internal state).
//!
//! # Examples
//!
//! ```
//! use dw_core::{fx_hash_set, FxHashSet};
//!
//! let mut seen: FxHashSet<String> = fx_hash_set();
//! assert!(seen.insert("a.txt".to_owned()));
//! assert!(!seen.insert("a.txt".to_owned()));
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// The hasher used by [`FxHashMap`] and [`FxHashSet`].
pub type FxBuildHasher = rustc_hash::FxBuildHasher;

/// Creates a new empty [`FxHashMap`].
///
/// Equivalent to `FxHashMap::default()` but often more ergonomic thanks to
/// type inference at the call site.
#[inline]
#[must_use]
pub fn fx_hash_map<K, V>() -> FxHashMap<K, V> {
    FxHashMap::default()
}

/// Creates a new empty [`FxHashSet`].
///
/// Equivalent to `FxHashSet::default()` but often more ergonomic thanks to
/// type inference at the call site.
#[inline]
#[must_use]
pub fn fx_hash_set<V>() -> FxHashSet<V> {
    FxHashSet::default()
}
