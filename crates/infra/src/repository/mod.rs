//! Keyed product storage boundary.
//!
//! This module defines an infrastructure-facing abstraction for storing
//! products by id without making any storage assumptions, plus the in-memory
//! implementation used by the console.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryProductRepository;
pub use r#trait::ProductRepository;
