//! A dynamic value model.
//!
//! [`Value`] can hold scalars, nested sequences and string-keyed mappings,
//! which lets heterogeneous data flow through the `underbar` operations.
mod compare;
mod conversion;
mod display;
mod value_core;

pub use value_core::Value;

/// The entries of a [`Value::Mapping`], in insertion order.
pub type Entries = indexmap::IndexMap<String, Value>;
