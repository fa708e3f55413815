use core::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::price::Price;

/// Entity: Product.
///
/// Immutable once built. Equality and hashing look at the id only, so two
/// snapshots of the same catalog item compare equal even when their other
/// fields differ.
///
/// Deserialization re-runs [`Product::create`], so stored or transmitted data
/// cannot smuggle in a blank name or a negative price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    stock_quantity: i32,
}

impl Product {
    /// Validate the fields and build a product.
    ///
    /// Blank text (empty after trimming) is rejected the same way as missing
    /// text. Text is stored as given, without trimming.
    pub fn create(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock_quantity: i32,
    ) -> DomainResult<Self> {
        let name = name.into();
        let description = description.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Name must not be empty"));
        }
        if description.trim().is_empty() {
            return Err(DomainError::validation(
                "description",
                "Description must not be empty",
            ));
        }
        let price = Price::new(price)?;
        if stock_quantity < 0 {
            return Err(DomainError::validation(
                "stock_quantity",
                "Quantity in stock must be greater than or equal to zero",
            ));
        }

        Ok(Self {
            id,
            name,
            description,
            price,
            stock_quantity,
        })
    }

    /// Build the replacement for this product: same id, fully re-validated fields.
    ///
    /// `self` is left untouched.
    pub fn update(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock_quantity: i32,
    ) -> DomainResult<Self> {
        Self::create(self.id, name, description, price, stock_quantity)
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock_quantity(&self) -> i32 {
        self.stock_quantity
    }
}

/// Unvalidated wire shape of a [`Product`].
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    description: String,
    price: Decimal,
    stock_quantity: i32,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Self::create(
            record.id,
            record.name,
            record.description,
            record.price,
            record.stock_quantity,
        )
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product{{id={}, name='{}', price={}, stock={}}}",
            self.id, self.name, self.price, self.stock_quantity
        )
    }
}
