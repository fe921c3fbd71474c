pub mod aggregate;
pub mod catalog;

pub use aggregate::{GeneratedProduct, Product, ProductDraft, ProductDto, ProductId};
pub use catalog::{Catalog, LOAD_FAILED_MESSAGE};
