//! Turn an admin form draft into a complete save request
//!
//! An empty description is filled in by the generator. Generation is best
//! effort: any failure falls back to a fixed text and the save goes on.

use crate::domain::a001_product::{ProductDraft, ProductDto};
use crate::shared::genai::{GenerationRequest, GenerativeClient};
use crate::usecases::common::UseCaseMetadata;

pub const FALLBACK_DESCRIPTION: &str = "Description not available.";

pub struct SubmitListing;

impl UseCaseMetadata for SubmitListing {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "submit_listing"
    }
}

pub fn description_prompt(name: &str) -> String {
    format!(
        "Write a short, psychedelic-themed product description for: {}",
        name
    )
}

/// Resolve the draft into a save request. Never fails.
pub async fn submit_listing(client: &dyn GenerativeClient, draft: ProductDraft) -> ProductDto {
    if !draft.needs_description() {
        let description = draft.description.clone();
        return draft.into_dto(description);
    }

    let request = GenerationRequest::text(description_prompt(&draft.name));
    let description = match client.complete(request).await {
        Ok(text) => text,
        Err(e) => {
            log::warn!(
                "{}: description generation for '{}' failed, using fallback: {}",
                SubmitListing::full_name(),
                draft.name,
                e
            );
            FALLBACK_DESCRIPTION.to_string()
        }
    };
    draft.into_dto(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{Catalog, ProductDto, ProductId};
    use crate::shared::genai::GenerationError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Stub that records every prompt and replies with a fixed outcome
    struct StubClient {
        reply: Result<String, GenerationError>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl StubClient {
        fn replying(text: &str) -> Self {
            Self::with(Ok(text.to_string()))
        }

        fn failing(error: GenerationError) -> Self {
            Self::with(Err(error))
        }

        fn with(reply: Result<String, GenerationError>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait(?Send)]
    impl GenerativeClient for StubClient {
        async fn complete(&self, request: GenerationRequest) -> Result<String, GenerationError> {
            assert!(!request.is_structured());
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(request.prompt);
            self.reply.clone()
        }
    }

    fn draft(name: &str, description: &str, price: &str) -> ProductDraft {
        ProductDraft {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            ..ProductDraft::new_listing()
        }
    }

    fn seeded_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for name in ["Orange Sunshine", "Violet Hum"] {
            catalog.upsert(ProductDto {
                id: None,
                name: name.into(),
                description: "seeded".into(),
                price: 20.0,
                emoji: None,
                theme_color: None,
            });
        }
        catalog
    }

    #[tokio::test]
    async fn test_existing_description_skips_generation() {
        let client = StubClient::replying("should not be used");

        let dto = submit_listing(&client, draft("Mint Fractal", "Cool branches.", "18")).await;

        assert_eq!(client.calls(), 0);
        assert_eq!(dto.description, "Cool branches.");
        assert_eq!(dto.price, 18.0);
    }

    #[tokio::test]
    async fn test_failed_generation_uses_fallback_and_save_completes() {
        let client = StubClient::failing(GenerationError::Network("timeout".into()));
        let mut catalog = seeded_catalog();

        let dto = submit_listing(&client, draft("Blue Static", "", "22")).await;
        let id = catalog.upsert(dto);

        assert_eq!(client.calls(), 1);
        let stored = catalog.find_by_id(id).expect("saved product");
        assert_eq!(stored.description, FALLBACK_DESCRIPTION);
        assert_eq!(catalog.len(), 3);
    }

    #[tokio::test]
    async fn test_solar_flare_gets_generated_description_and_fresh_id() {
        let client = StubClient::replying("A blazing swirl of citrus light.");
        let mut catalog = seeded_catalog();
        let existing: Vec<ProductId> = catalog.products().iter().map(|p| p.id).collect();

        let dto = submit_listing(&client, draft("Solar Flare", "", "15")).await;
        let id = catalog.upsert(dto);

        let stored = catalog.find_by_id(id).expect("saved product");
        assert_eq!(stored.description, "A blazing swirl of citrus light.");
        assert!(!existing.contains(&id));
        assert_eq!(
            client.prompts.lock().unwrap().as_slice(),
            ["Write a short, psychedelic-themed product description for: Solar Flare"]
        );
    }

    #[tokio::test]
    async fn test_unparsable_price_becomes_zero() {
        let client = StubClient::replying("unused");
        let dto = submit_listing(&client, draft("Free Sample", "Gratis.", "twelve")).await;
        assert_eq!(dto.price, 0.0);
    }

    #[tokio::test]
    async fn test_empty_name_and_description_does_not_generate() {
        let client = StubClient::replying("unused");
        let dto = submit_listing(&client, draft("", "", "1")).await;
        assert_eq!(client.calls(), 0);
        assert_eq!(dto.description, "");
    }

    #[tokio::test]
    async fn test_whitespace_description_is_kept_without_generation() {
        let client = StubClient::replying("GENERATED");
        let dto = submit_listing(&client, draft("X", "   ", "5")).await;
        assert_eq!(client.calls(), 0);
        assert_eq!(dto.description, "   ");
    }

    #[tokio::test]
    async fn test_whitespace_name_still_generates_description() {
        let client = StubClient::replying("GENERATED");
        let dto = submit_listing(&client, draft("  ", "", "5")).await;
        assert_eq!(client.calls(), 1);
        assert_eq!(dto.description, "GENERATED");
    }

    #[tokio::test]
    async fn test_edit_keeps_id_and_position() {
        let client = StubClient::replying("Regenerated.");
        let mut catalog = seeded_catalog();
        let first = catalog.products()[0].clone();

        let mut edit = first.to_draft();
        edit.description.clear();
        edit.price = "42".into();
        let dto = submit_listing(&client, edit).await;
        let id = catalog.upsert(dto);

        assert_eq!(id, first.id);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].description, "Regenerated.");
        assert_eq!(catalog.products()[0].price, 42.0);
    }
}
