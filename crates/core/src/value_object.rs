//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// `Price` of 20000 is the same price wherever it appears; a `Product` with
/// id 1 is an entity even if another product carries identical attributes.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
