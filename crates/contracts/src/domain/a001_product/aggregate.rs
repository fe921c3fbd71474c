use serde::{Deserialize, Serialize};
use std::fmt;

/// Border/accent color used when a product has no theme color
pub const DEFAULT_ACCENT_COLOR: &str = "#8B5CF6";

/// Price color used on collection cards when a product has no theme color
pub const DEFAULT_PRICE_COLOR: &str = "#F97316";

/// Card background used when a product has no theme color
pub const DEFAULT_CARD_BACKGROUND: &str = "#1F2937";

pub const DEFAULT_EMOJI: &str = "✨";

/// Alpha suffix appended to a hex theme color for translucent backgrounds
const TINT_ALPHA: &str = "50";

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(rename = "themeColor", default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
}

impl Product {
    pub fn from_dto(id: ProductId, dto: ProductDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            emoji: dto.emoji,
            theme_color: dto.theme_color,
        }
    }

    /// Replace every field except the id
    pub fn update(&mut self, dto: ProductDto) {
        self.name = dto.name;
        self.description = dto.description;
        self.price = dto.price;
        self.emoji = dto.emoji;
        self.theme_color = dto.theme_color;
    }

    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    pub fn emoji_or_default(&self) -> &str {
        self.emoji.as_deref().unwrap_or(DEFAULT_EMOJI)
    }

    pub fn accent_color(&self) -> &str {
        self.theme_color.as_deref().unwrap_or(DEFAULT_ACCENT_COLOR)
    }

    pub fn price_color(&self) -> &str {
        self.theme_color.as_deref().unwrap_or(DEFAULT_PRICE_COLOR)
    }

    /// Translucent theme tint, or the neutral card background
    pub fn card_background(&self) -> String {
        match self.theme_color.as_deref() {
            Some(color) => format!("{}{}", color, TINT_ALPHA),
            None => DEFAULT_CARD_BACKGROUND.to_string(),
        }
    }

    /// Short teaser for collection cards: first 50 characters and an ellipsis
    pub fn teaser(&self) -> String {
        let head: String = self.description.chars().take(50).collect();
        format!("{}...", head)
    }

    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            id: Some(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.to_string(),
            emoji: self.emoji.clone().unwrap_or_default(),
            // Stays empty unless the color is picked, so an untouched edit keeps `None`
            theme_color: self.theme_color.clone().unwrap_or_default(),
        }
    }
}

/// `$` followed by the amount with two decimals
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

// ============================================================================
// DTO
// ============================================================================

/// Fully resolved save request. `id: None` means "create".
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDto {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub emoji: Option<String>,
    pub theme_color: Option<String>,
}

// ============================================================================
// Draft (form buffer)
// ============================================================================

/// Raw admin form contents. Every field is kept as typed text until submit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub emoji: String,
    pub theme_color: String,
}

impl ProductDraft {
    /// Blank draft for "Add Listing"
    pub fn new_listing() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            emoji: String::new(),
            theme_color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Only a literally empty description triggers generation
    pub fn needs_description(&self) -> bool {
        self.description.is_empty() && !self.name.is_empty()
    }

    /// Unparsable, negative or non-finite input becomes zero
    pub fn parsed_price(&self) -> f64 {
        match self.price.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => value,
            _ => 0.0,
        }
    }

    pub fn into_dto(self, description: String) -> ProductDto {
        let price = self.parsed_price();
        ProductDto {
            id: self.id,
            name: self.name,
            description,
            price,
            emoji: non_empty(self.emoji),
            theme_color: non_empty(self.theme_color),
        }
    }
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self::new_listing()
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// Structured generation item
// ============================================================================

/// One element of the structured catalog response. All fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub emoji: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
}

impl GeneratedProduct {
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: None,
            name: self.name,
            description: self.description,
            price: if self.price.is_finite() && self.price >= 0.0 {
                self.price
            } else {
                0.0
            },
            emoji: non_empty(self.emoji),
            theme_color: non_empty(self.theme_color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(theme_color: Option<&str>) -> Product {
        Product {
            id: ProductId(7),
            name: "Cosmic Drift".into(),
            description: "A slow spiral of violet and gold across a perforated grid.".into(),
            price: 12.5,
            emoji: None,
            theme_color: theme_color.map(str::to_string),
        }
    }

    #[test]
    fn test_price_label_has_two_decimals() {
        assert_eq!(sample(None).price_label(), "$12.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(3.456), "$3.46");
    }

    #[test]
    fn test_theme_fallbacks() {
        let plain = sample(None);
        assert_eq!(plain.accent_color(), DEFAULT_ACCENT_COLOR);
        assert_eq!(plain.price_color(), DEFAULT_PRICE_COLOR);
        assert_eq!(plain.card_background(), DEFAULT_CARD_BACKGROUND);
        assert_eq!(plain.emoji_or_default(), DEFAULT_EMOJI);

        let themed = sample(Some("#22C55E"));
        assert_eq!(themed.accent_color(), "#22C55E");
        assert_eq!(themed.price_color(), "#22C55E");
        assert_eq!(themed.card_background(), "#22C55E50");
    }

    #[test]
    fn test_teaser_is_char_safe() {
        let mut product = sample(None);
        product.description = "é".repeat(60);
        let teaser = product.teaser();
        assert_eq!(teaser.chars().count(), 53);
        assert!(teaser.ends_with("..."));
    }

    #[test]
    fn test_parsed_price_coercion() {
        let mut draft = ProductDraft::new_listing();
        assert_eq!(draft.parsed_price(), 0.0);

        draft.price = "abc".into();
        assert_eq!(draft.parsed_price(), 0.0);

        draft.price = "-4".into();
        assert_eq!(draft.parsed_price(), 0.0);

        draft.price = "NaN".into();
        assert_eq!(draft.parsed_price(), 0.0);

        draft.price = " 19.99 ".into();
        assert_eq!(draft.parsed_price(), 19.99);
    }

    #[test]
    fn test_needs_description() {
        let mut draft = ProductDraft::new_listing();
        assert!(!draft.needs_description());

        draft.name = "Solar Flare".into();
        assert!(draft.needs_description());

        draft.description = "   ".into();
        assert!(!draft.needs_description());

        draft.description = String::new();
        draft.name = "  ".into();
        assert!(draft.needs_description());

        draft.name = String::new();
        assert!(!draft.needs_description());

        draft.name = "Solar Flare".into();
        draft.description = "Bright.".into();
        assert!(!draft.needs_description());
    }

    #[test]
    fn test_draft_round_trip_keeps_id_and_drops_empty_optionals() {
        let product = sample(Some("#22C55E"));
        let draft = product.to_draft();
        assert_eq!(draft.id, Some(ProductId(7)));
        assert_eq!(draft.price, "12.5");

        let mut draft = draft;
        draft.emoji = "  ".into();
        let dto = draft.into_dto("new text".into());
        assert_eq!(dto.id, Some(ProductId(7)));
        assert_eq!(dto.description, "new text");
        assert_eq!(dto.emoji, None);
        assert_eq!(dto.theme_color.as_deref(), Some("#22C55E"));
    }

    #[test]
    fn test_edit_without_theme_color_stays_unthemed() {
        let product = sample(None);
        let draft = product.to_draft();
        assert_eq!(draft.theme_color, "");

        let mut saved = product.clone();
        saved.update(draft.into_dto(product.description.clone()));
        assert_eq!(saved.theme_color, None);
        assert_eq!(saved.card_background(), DEFAULT_CARD_BACKGROUND);
        assert_eq!(saved.price_color(), DEFAULT_PRICE_COLOR);
    }

    #[test]
    fn test_generated_product_requires_every_field() {
        let missing_color = r#"{"name":"A","description":"B","price":1.0,"emoji":"🌀"}"#;
        assert!(serde_json::from_str::<GeneratedProduct>(missing_color).is_err());

        let full = r##"{"name":"A","description":"B","price":1.0,"emoji":"🌀","themeColor":"#000000"}"##;
        let item: GeneratedProduct = serde_json::from_str(full).unwrap();
        assert_eq!(item.theme_color, "#000000");
    }

    #[test]
    fn test_product_serializes_with_camel_case_theme() {
        let json = serde_json::to_value(sample(Some("#123456"))).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["themeColor"], "#123456");
        assert!(json.get("emoji").is_none());
    }
}
