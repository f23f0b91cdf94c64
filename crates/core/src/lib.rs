//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod money;
pub mod name;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use name::{ItemName, check_field};
pub use value_object::ValueObject;
