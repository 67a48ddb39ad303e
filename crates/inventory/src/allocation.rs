//! Outcome and failure types for allocating order lines against a batch.

use thiserror::Error;

use stockpile_core::DomainError;

use crate::ids::{BatchRef, Sku};

/// Successful result of `Batch::allocate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// The line was not allocated before and now is.
    Allocated,
    /// An equal line was already allocated; nothing changed.
    AlreadyAllocated,
}

impl AllocationOutcome {
    /// Whether the call changed the batch.
    pub fn is_new(self) -> bool {
        matches!(self, AllocationOutcome::Allocated)
    }
}

/// Why a batch declined an order line. The batch is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("batch {batch} holds {batch_sku}, order line wants {line_sku}")]
    SkuMismatch {
        batch: BatchRef,
        batch_sku: Sku,
        line_sku: Sku,
    },

    #[error("batch {batch} has {available} available, order line wants {requested}")]
    InsufficientStock {
        batch: BatchRef,
        available: i64,
        requested: i64,
    },
}

impl From<AllocationError> for DomainError {
    fn from(err: AllocationError) -> Self {
        DomainError::invariant(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_invariant_violation() {
        let err = AllocationError::InsufficientStock {
            batch: BatchRef::from("batch-001"),
            available: 2,
            requested: 20,
        };

        let domain: DomainError = err.into();
        assert_eq!(
            domain,
            DomainError::invariant("batch batch-001 has 2 available, order line wants 20")
        );
    }

    #[test]
    fn only_allocated_is_new() {
        assert!(AllocationOutcome::Allocated.is_new());
        assert!(!AllocationOutcome::AlreadyAllocated.is_new());
    }
}
