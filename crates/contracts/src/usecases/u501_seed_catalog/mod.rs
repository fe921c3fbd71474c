//! Seed the catalog with generated products at startup

use crate::domain::a001_product::GeneratedProduct;
use crate::shared::genai::{GenerationError, GenerationRequest, GenerativeClient, ResponseSchema};
use crate::usecases::common::UseCaseMetadata;
use thiserror::Error;

/// Number of products requested from the generator
pub const SEED_SIZE: usize = 4;

pub struct SeedCatalog;

impl UseCaseMetadata for SeedCatalog {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "seed_catalog"
    }
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("response does not match the catalog schema: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn seed_prompt(count: usize) -> String {
    format!(
        "Generate a list of {} fictional psychedelic-themed collectible art print products. \
         For each, include a creative name, a short, evocative description, a price (as a number), \
         a representative single emoji character, and a vibrant hex color code that matches the \
         theme (e.g., '#F97316' for orange sunshine).",
        count
    )
}

/// Array of products, every field required
pub fn catalog_schema() -> ResponseSchema {
    ResponseSchema::array_of(ResponseSchema::object_required([
        ("name", ResponseSchema::string()),
        ("description", ResponseSchema::string()),
        ("price", ResponseSchema::number()),
        ("emoji", ResponseSchema::string()),
        ("themeColor", ResponseSchema::string()),
    ]))
}

pub fn build_request() -> GenerationRequest {
    GenerationRequest::structured(seed_prompt(SEED_SIZE), catalog_schema())
}

/// Parse the whole reply. Any malformed item rejects the entire batch.
pub fn parse_catalog(text: &str) -> Result<Vec<GeneratedProduct>, CatalogLoadError> {
    let items: Vec<GeneratedProduct> = serde_json::from_str(text.trim())?;
    if items.len() != SEED_SIZE {
        log::warn!(
            "{}: asked for {} products, got {}",
            SeedCatalog::full_name(),
            SEED_SIZE,
            items.len()
        );
    }
    Ok(items)
}

pub async fn fetch_catalog(
    client: &dyn GenerativeClient,
) -> Result<Vec<GeneratedProduct>, CatalogLoadError> {
    log::info!("{}: requesting {} products", SeedCatalog::full_name(), SEED_SIZE);
    let text = client.complete(build_request()).await?;
    parse_catalog(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_structured_and_names_the_count() {
        let request = build_request();
        assert!(request.is_structured());
        assert!(request.prompt.contains("list of 4"));
    }

    #[test]
    fn test_schema_requires_all_product_fields() {
        let schema = catalog_schema();
        let item = schema.items.expect("array schema has items");
        assert_eq!(
            item.required,
            vec!["name", "description", "price", "emoji", "themeColor"]
        );
    }

    #[test]
    fn test_parse_catalog_accepts_surrounding_whitespace() {
        let text = "\n [ {\"name\":\"A\",\"description\":\"B\",\"price\":3,\"emoji\":\"🌀\",\"themeColor\":\"#111111\"} ] \n";
        let items = parse_catalog(text).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, 3.0);
    }

    #[test]
    fn test_parse_catalog_rejects_wrong_types() {
        let text = r##"[{"name":"A","description":"B","price":"cheap","emoji":"x","themeColor":"#111111"}]"##;
        assert!(matches!(
            parse_catalog(text),
            Err(CatalogLoadError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_catalog_rejects_non_array() {
        assert!(parse_catalog("{\"products\": []}").is_err());
        assert!(parse_catalog("").is_err());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(SeedCatalog::full_name(), "u501_seed_catalog");
    }
}
