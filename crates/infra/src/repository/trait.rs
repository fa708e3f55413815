use std::sync::Arc;

use stockroom_core::{DomainResult, ProductId};
use stockroom_products::Product;

/// Keyed CRUD storage for products.
///
/// Implementations must be safe to share between threads without external
/// locking, and every operation must be atomic with respect to the store:
///
/// - `create` is insert-if-absent (`DomainError::Duplicate` otherwise)
/// - `update` is replace-if-present (`DomainError::NotFound` otherwise)
/// - `delete` is remove-if-present (`DomainError::NotFound` otherwise)
///
/// A failed operation leaves the store exactly as it was. Lookups never fail
/// for a missing id.
pub trait ProductRepository: Send + Sync {
    fn create(&self, product: Product) -> DomainResult<()>;

    fn find_by_id(&self, id: ProductId) -> Option<Product>;

    /// Snapshot of every stored product, in no particular order.
    fn list_all(&self) -> Vec<Product>;

    fn update(&self, product: Product) -> DomainResult<()>;

    fn delete(&self, id: ProductId) -> DomainResult<()>;

    fn exists(&self, id: ProductId) -> bool;

    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn create(&self, product: Product) -> DomainResult<()> {
        (**self).create(product)
    }

    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).find_by_id(id)
    }

    fn list_all(&self) -> Vec<Product> {
        (**self).list_all()
    }

    fn update(&self, product: Product) -> DomainResult<()> {
        (**self).update(product)
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn exists(&self, id: ProductId) -> bool {
        (**self).exists(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
