//! Products domain module (catalog entity).
//!
//! This crate contains the business rules for catalog products, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod price;
pub mod product;

pub use price::Price;
pub use product::Product;
pub use stockroom_core::ProductId;
