//! Turning raw operator text into typed field values.
//!
//! Text fields are passed through trimmed; blank text is left for the domain
//! to reject. Numeric fields that cannot be read become
//! `DomainError::InvalidArgument`.

use core::str::FromStr;

use rust_decimal::Decimal;

use stockroom_core::{DomainError, DomainResult, ProductId};

pub fn parse_id(raw: &str) -> DomainResult<ProductId> {
    ProductId::from_str(raw)
}

pub fn parse_text(raw: &str) -> DomainResult<String> {
    Ok(raw.trim().to_string())
}

/// Exact decimal; the operator's scale is kept (`10.50` stays `10.50`).
pub fn parse_price(raw: &str) -> DomainResult<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|e| DomainError::invalid_argument(format!("Invalid value for price: {e}")))
}

pub fn parse_quantity(raw: &str) -> DomainResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|e| DomainError::invalid_argument(format!("Invalid value for quantity: {e}")))
}
