//! Peppercorn Core - Domain types and the in-memory catalog store.
//!
//! This crate provides the authoritative state of a Peppercorn shop:
//! - [`types`] - Newtype wrappers for type-safe IDs, review scores, and badges
//! - [`models`] - Catalog entities and their insert/update payloads
//! - [`store`] - The process-lifetime [`store::CatalogStore`] holding all four
//!   collections and enforcing the derived-state invariants
//!
//! # Architecture
//!
//! The core crate contains only types and the synchronous store - no I/O, no
//! HTTP, no async. The `server` crate owns the REST boundary and hands every
//! request to a shared `CatalogStore` instance. Callers always receive owned
//! snapshots; no entity is shared by reference across the store boundary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod store;
pub mod types;

pub use models::*;
pub use store::{
    ALL_CATEGORIES, CatalogStore, ProductFilter, Seed, SeedCategory, SeedProduct, SeedReview,
    SortKey,
};
pub use types::*;
