//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (`Money`, `ItemName`)
/// - **Entity**: has identity (an `Item`, identified by its name)
///
/// Value objects are immutable: to "modify" one, build a new one. Construction
/// goes through a validating constructor, so holding a value object means the
/// value already satisfies its rules.
///
/// ```ignore
/// let price = Money::new(dec!(10.50))?;
/// let same = Money::new(dec!(10.5))?;
/// assert_eq!(price, same);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
