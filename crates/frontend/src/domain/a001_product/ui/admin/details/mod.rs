//! Product form (MVVM)
//!
//! Structure:
//! - view_model.rs: ProductFormVm with RwSignals per field
//! - view.rs: ProductForm dialog

mod view;
mod view_model;

pub use view::ProductForm;
pub use view_model::ProductFormVm;
