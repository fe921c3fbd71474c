//! Domain types, catalog store and generation use cases of the storefront.

pub mod domain;
pub mod shared;
pub mod usecases;
