use serde::{Deserialize, Serialize};

use stockpile_core::{DomainError, DomainResult, ValueObject};

use crate::ids::{OrderId, Sku};

/// Value object: a request to reserve `qty` units of `sku` for an order.
///
/// Equality and hashing cover all three fields, so two lines of the same order
/// with different quantities are different order lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawOrderLine")]
pub struct OrderLine {
    order_id: OrderId,
    sku: Sku,
    qty: i64,
}

impl OrderLine {
    /// Build an order line. The quantity must be strictly positive.
    pub fn new(order_id: impl Into<OrderId>, sku: impl Into<Sku>, qty: i64) -> DomainResult<Self> {
        if qty <= 0 {
            return Err(DomainError::invalid_quantity(format!(
                "order line quantity must be positive (got {qty})"
            )));
        }
        Ok(Self {
            order_id: order_id.into(),
            sku: sku.into(),
            qty,
        })
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn qty(&self) -> i64 {
        self.qty
    }
}

impl ValueObject for OrderLine {}

/// Unvalidated wire shape; deserialization goes through `OrderLine::new`.
#[derive(Deserialize)]
struct RawOrderLine {
    order_id: OrderId,
    sku: Sku,
    qty: i64,
}

impl TryFrom<RawOrderLine> for OrderLine {
    type Error = DomainError;

    fn try_from(raw: RawOrderLine) -> Result<Self, Self::Error> {
        OrderLine::new(raw.order_id, raw.sku, raw.qty)
    }
}
