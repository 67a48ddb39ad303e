//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two order lines with the same order, SKU and quantity are
//! the same order line.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`OrderLine { order_id, sku, qty }`)
/// - **Entity**: has identity (`Batch` is identified by its reference)
///
/// The `Eq + Hash` bounds let value objects live in hash-based collections, so
/// membership checks compare every attribute without a linear scan.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
