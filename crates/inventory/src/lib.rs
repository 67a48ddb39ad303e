//! Inventory domain module: batches of stock and the order lines allocated
//! against them.
//!
//! Business rules only, implemented as deterministic, synchronous domain logic
//! (no IO, no HTTP, no storage). Choosing which batch a line should go to is
//! left to the caller.

pub mod allocation;
pub mod batch;
pub mod ids;
pub mod order_line;

pub use allocation::{AllocationError, AllocationOutcome};
pub use batch::Batch;
pub use ids::{BatchRef, OrderId, Sku};
pub use order_line::OrderLine;
