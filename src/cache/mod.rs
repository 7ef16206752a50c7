//! File-backed cache for the three gateway collections.

pub mod store;

pub use store::{CacheAges, CacheStore, Cached, GALLERY_KEY, PACKAGES_KEY, TESTIMONIALS_KEY};
