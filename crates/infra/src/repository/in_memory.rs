use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use stockroom_core::{DomainError, DomainResult, ProductId};
use stockroom_products::Product;

use super::r#trait::ProductRepository;

/// In-memory product store.
///
/// Every mutation runs its existence check and its write under one write-lock
/// acquisition, so concurrent creators of the same id cannot both succeed.
/// No critical section can leave the map half-updated, so a poisoned lock is
/// recovered instead of failing every later call.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<ProductId, Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ProductId, Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn create(&self, product: Product) -> DomainResult<()> {
        let id = product.id_typed();
        let mut products = self.write();

        match products.entry(id) {
            Entry::Occupied(_) => {
                debug!(product_id = %id, "create rejected: duplicate id");
                Err(DomainError::duplicate(id))
            }
            Entry::Vacant(slot) => {
                slot.insert(product);
                debug!(product_id = %id, "product stored");
                Ok(())
            }
        }
    }

    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.read().get(&id).cloned()
    }

    fn list_all(&self) -> Vec<Product> {
        self.read().values().cloned().collect()
    }

    fn update(&self, product: Product) -> DomainResult<()> {
        let id = product.id_typed();
        let mut products = self.write();

        match products.entry(id) {
            Entry::Occupied(mut slot) => {
                slot.insert(product);
                debug!(product_id = %id, "product replaced");
                Ok(())
            }
            Entry::Vacant(_) => {
                debug!(product_id = %id, "update rejected: unknown id");
                Err(DomainError::not_found(id))
            }
        }
    }

    fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut products = self.write();

        match products.remove(&id) {
            Some(_) => {
                debug!(product_id = %id, "product removed");
                Ok(())
            }
            None => {
                debug!(product_id = %id, "delete rejected: unknown id");
                Err(DomainError::not_found(id))
            }
        }
    }

    fn exists(&self, id: ProductId) -> bool {
        self.read().contains_key(&id)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
