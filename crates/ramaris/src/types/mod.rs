//! Core types for the Ramaris API
//!
//! Plain serde value types, one per endpoint contract. List and detail shapes
//! are separate types even where their fields overlap.

pub use health::*;
pub use pagination::*;
pub use strategy::*;
pub use user::*;
pub use wallet::*;

pub mod health;
pub mod pagination;
pub mod strategy;
pub mod user;
pub mod wallet;

/// Treats an explicit JSON `null` like a missing field.
///
/// Pair with `#[serde(default)]` so both absence and `null` decode to
/// `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;

    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
