//! In-memory product catalog
//!
//! The catalog is the only stateful part of the application. It keeps the
//! products in insertion order together with the loading flag and the error
//! message of the initial fetch. Mutations never fail: validation belongs to
//! the form, not to the store.

use super::aggregate::{GeneratedProduct, Product, ProductDto, ProductId};
use crate::shared::genai::GenerativeClient;
use crate::usecases::u501_seed_catalog::{self, CatalogLoadError};

/// Message shown on the storefront when the initial fetch fails
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch initial listings. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    loading: bool,
    error: Option<String>,
    /// Next id to hand out. Only ever grows, so deleted ids are never reused.
    next_id: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: false,
            error: None,
            next_id: 1,
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    fn allocate_id(&mut self) -> ProductId {
        let id = ProductId::new(self.next_id);
        self.next_id += 1;
        id
    }

    // ========================================================================
    // Initial load
    // ========================================================================

    /// Fetch the seed catalog and apply the outcome.
    ///
    /// Runs `begin_load` and `finish_load` around the generation call. UI code
    /// that keeps the catalog inside a reactive signal calls the two halves
    /// directly so the signal is not borrowed across the await.
    pub async fn initialize(&mut self, client: &dyn GenerativeClient) {
        self.begin_load();
        let result = u501_seed_catalog::fetch_catalog(client).await;
        self.finish_load(result);
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a finished fetch: replace the whole collection on success,
    /// clear it and keep an error message on failure.
    pub fn finish_load(&mut self, result: Result<Vec<GeneratedProduct>, CatalogLoadError>) {
        match result {
            Ok(items) => {
                let products: Vec<Product> = items
                    .into_iter()
                    .map(|item| {
                        let id = self.allocate_id();
                        Product::from_dto(id, item.into_dto())
                    })
                    .collect();
                log::info!("catalog loaded with {} products", products.len());
                self.products = products;
                self.error = None;
            }
            Err(e) => {
                log::error!("catalog load failed: {}", e);
                self.products.clear();
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Replace the record with the same id in place, or append a new record
    /// with a fresh id. Returns the id of the stored record.
    pub fn upsert(&mut self, dto: ProductDto) -> ProductId {
        if let Some(index) = dto.id.and_then(|id| self.position(id)) {
            let product = &mut self.products[index];
            product.update(dto);
            log::debug!("catalog: updated product {}", product.id);
            return product.id;
        }

        let id = self.allocate_id();
        self.products.push(Product::from_dto(id, dto));
        log::debug!("catalog: added product {}", id);
        id
    }

    /// Remove the record with the given id. Absent ids are ignored.
    pub fn remove(&mut self, id: ProductId) {
        if let Some(index) = self.position(id) {
            self.products.remove(index);
            log::debug!("catalog: removed product {}", id);
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
