use std::collections::HashSet;

use chrono::NaiveDate;

use stockpile_core::{DomainError, DomainResult, Entity};

use crate::allocation::{AllocationError, AllocationOutcome};
use crate::ids::{BatchRef, Sku};
use crate::order_line::OrderLine;

/// Entity: a lot of stock for one SKU that order lines are allocated against.
///
/// `sku`, `eta` and the purchased quantity are fixed at construction; only the
/// allocation set changes afterwards. Callers sharing a batch across threads
/// must synchronize access themselves.
#[derive(Debug, Clone)]
pub struct Batch {
    reference: BatchRef,
    sku: Sku,
    eta: Option<NaiveDate>,
    purchased_quantity: i64,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    /// Create a batch with no allocations.
    ///
    /// `eta` of `None` means the stock is already on hand. A negative purchased
    /// quantity is rejected.
    pub fn new(
        reference: impl Into<BatchRef>,
        sku: impl Into<Sku>,
        purchased_quantity: i64,
        eta: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        if purchased_quantity < 0 {
            return Err(DomainError::invalid_quantity(format!(
                "purchased quantity cannot be negative (got {purchased_quantity})"
            )));
        }
        Ok(Self {
            reference: reference.into(),
            sku: sku.into(),
            eta,
            purchased_quantity,
            allocations: HashSet::new(),
        })
    }

    /// Batch of stock that is already in the warehouse.
    pub fn in_stock(
        reference: impl Into<BatchRef>,
        sku: impl Into<Sku>,
        purchased_quantity: i64,
    ) -> DomainResult<Self> {
        Self::new(reference, sku, purchased_quantity, None)
    }

    /// Batch of stock arriving on `eta`.
    pub fn with_eta(
        reference: impl Into<BatchRef>,
        sku: impl Into<Sku>,
        purchased_quantity: i64,
        eta: NaiveDate,
    ) -> DomainResult<Self> {
        Self::new(reference, sku, purchased_quantity, Some(eta))
    }

    pub fn reference(&self) -> &BatchRef {
        &self.reference
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    pub fn is_in_stock(&self) -> bool {
        self.eta.is_none()
    }

    pub fn purchased_quantity(&self) -> i64 {
        self.purchased_quantity
    }

    /// Sum of the quantities of all allocated lines.
    pub fn allocated_quantity(&self) -> i64 {
        self.allocations.iter().map(OrderLine::qty).sum()
    }

    /// Purchased quantity minus allocated quantity.
    pub fn available_quantity(&self) -> i64 {
        self.purchased_quantity - self.allocated_quantity()
    }

    /// Currently allocated lines, in no particular order.
    pub fn allocations(&self) -> impl Iterator<Item = &OrderLine> {
        self.allocations.iter()
    }

    pub fn is_allocated(&self, line: &OrderLine) -> bool {
        self.allocations.contains(line)
    }

    /// True iff the SKUs match and enough stock is available (boundary inclusive).
    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        self.check_allocatable(line).is_ok()
    }

    /// Allocate `line` against this batch.
    ///
    /// Allocating a line equal to one already held is a no-op reported as
    /// [`AllocationOutcome::AlreadyAllocated`]. When the line cannot be
    /// allocated the batch is left unchanged and the reason is returned.
    pub fn allocate(&mut self, line: OrderLine) -> Result<AllocationOutcome, AllocationError> {
        if self.allocations.contains(&line) {
            tracing::debug!(
                batch = %self.reference,
                order_id = %line.order_id(),
                "order line already allocated"
            );
            return Ok(AllocationOutcome::AlreadyAllocated);
        }

        if let Err(err) = self.check_allocatable(&line) {
            tracing::debug!(
                batch = %self.reference,
                order_id = %line.order_id(),
                reason = %err,
                "order line rejected"
            );
            return Err(err);
        }

        tracing::debug!(
            batch = %self.reference,
            order_id = %line.order_id(),
            sku = %line.sku(),
            qty = line.qty(),
            available = self.available_quantity() - line.qty(),
            "order line allocated"
        );
        self.allocations.insert(line);
        Ok(AllocationOutcome::Allocated)
    }

    /// Remove `line` if an equal line is allocated. Returns whether anything
    /// was removed.
    pub fn deallocate(&mut self, line: &OrderLine) -> bool {
        let removed = self.allocations.remove(line);
        if removed {
            tracing::debug!(
                batch = %self.reference,
                order_id = %line.order_id(),
                qty = line.qty(),
                available = self.available_quantity(),
                "order line deallocated"
            );
        }
        removed
    }

    fn check_allocatable(&self, line: &OrderLine) -> Result<(), AllocationError> {
        if self.sku != *line.sku() {
            return Err(AllocationError::SkuMismatch {
                batch: self.reference.clone(),
                batch_sku: self.sku.clone(),
                line_sku: line.sku().clone(),
            });
        }

        let available = self.available_quantity();
        if available < line.qty() {
            return Err(AllocationError::InsufficientStock {
                batch: self.reference.clone(),
                available,
                requested: line.qty(),
            });
        }
        Ok(())
    }
}

impl Entity for Batch {
    type Id = BatchRef;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

// Entity equality: same reference, same batch.
impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Batch {}
