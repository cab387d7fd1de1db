//! Map types used across the crate.
//!
//! FxHash by default; the `std-hash` feature switches to std's SipHash.

#[cfg(feature = "std-hash")]
pub mod map {
    pub type IndexMap<K, V> = indexmap::IndexMap<K, V>;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub type IndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
}
