//! Catalog entities and their insert/update payloads.
//!
//! Every entity struct here is a plain record that crosses the store boundary
//! by value. Wire names are camelCase to match the JSON REST surface, and all
//! monetary values are `rust_decimal::Decimal` serialized as exact base-10
//! strings.

pub mod cart;
pub mod category;
pub mod product;
pub mod review;

pub use cart::{CartItem, CartLine, NewCartItem};
pub use category::{Category, NewCategory};
pub use product::{NewProduct, Product, ProductUpdate};
pub use review::{NewReview, Review};
