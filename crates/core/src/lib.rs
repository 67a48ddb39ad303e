//! `stockpile-core` — domain building blocks shared by the stock modules.
//!
//! Pure domain primitives only: identity, value semantics and the domain error
//! model. Nothing here performs IO.

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
