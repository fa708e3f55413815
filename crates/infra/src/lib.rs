//! Infrastructure layer: storage, use-case orchestration, config.

pub mod catalog_service;
pub mod config;
pub mod repository;

pub use catalog_service::ProductCatalogService;
pub use config::{CatalogConfig, ConfigError};
pub use repository::{InMemoryProductRepository, ProductRepository};
