//! Catalog use-cases (application-level orchestration).
//!
//! ```text
//! caller
//!   ↓
//! 1. Build + validate the product (domain)
//!   ↓
//! 2. Store / replace / remove it (repository, uniqueness + existence checks)
//!   ↓
//! result or DomainError, returned unchanged
//! ```
//!
//! This module contains no IO itself; it composes the `ProductRepository` trait.

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use stockroom_core::{DomainResult, ProductId};
use stockroom_products::Product;

use crate::repository::ProductRepository;

/// The only entry point the console talks to.
#[derive(Debug)]
pub struct ProductCatalogService<R> {
    repository: R,
}

impl<R> ProductCatalogService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    #[instrument(skip_all, fields(product_id = %id))]
    pub fn create_product(
        &self,
        id: ProductId,
        name: &str,
        description: &str,
        price: Decimal,
        stock_quantity: i32,
    ) -> DomainResult<Product> {
        let product = Product::create(id, name, description, price, stock_quantity)
            .inspect_err(|e| debug!(error = %e, "create rejected"))?;
        self.repository
            .create(product.clone())
            .inspect_err(|e| debug!(error = %e, "create rejected"))?;
        Ok(product)
    }

    pub fn find_product(&self, id: ProductId) -> Option<Product> {
        self.repository.find_by_id(id)
    }

    /// All products, ordered by id.
    pub fn list_products(&self) -> Vec<Product> {
        let mut products = self.repository.list_all();
        products.sort_by_key(Product::id_typed);
        products
    }

    /// Replace every field of product `id`. The id itself never changes.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn update_product(
        &self,
        id: ProductId,
        name: &str,
        description: &str,
        price: Decimal,
        stock_quantity: i32,
    ) -> DomainResult<Product> {
        let product = Product::create(id, name, description, price, stock_quantity)
            .inspect_err(|e| debug!(error = %e, "update rejected"))?;
        self.repository
            .update(product.clone())
            .inspect_err(|e| debug!(error = %e, "update rejected"))?;
        Ok(product)
    }

    #[instrument(skip_all, fields(product_id = %id))]
    pub fn delete_product(&self, id: ProductId) -> DomainResult<()> {
        self.repository
            .delete(id)
            .inspect_err(|e| debug!(error = %e, "delete rejected"))
    }
}
