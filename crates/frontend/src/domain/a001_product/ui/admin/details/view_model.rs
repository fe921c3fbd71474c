//! Product form - ViewModel
//!
//! Reactive edit buffer for one draft

use contracts::domain::a001_product::{ProductDraft, ProductId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProductFormVm {
    pub id: StoredValue<Option<ProductId>>,

    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub emoji: RwSignal<String>,
    pub theme_color: RwSignal<String>,

    /// True while the description is being generated; locks the form
    pub is_generating: RwSignal<bool>,
}

impl ProductFormVm {
    pub fn from_draft(draft: ProductDraft) -> Self {
        Self {
            id: StoredValue::new(draft.id),
            name: RwSignal::new(draft.name),
            description: RwSignal::new(draft.description),
            price: RwSignal::new(draft.price),
            emoji: RwSignal::new(draft.emoji),
            theme_color: RwSignal::new(draft.theme_color),
            is_generating: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.get_value().is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit_mode() {
            "Modify Listing"
        } else {
            "New Listing"
        }
    }

    /// Snapshot of the current field values
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            id: self.id.get_value(),
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            emoji: self.emoji.get_untracked(),
            theme_color: self.theme_color.get_untracked(),
        }
    }
}
