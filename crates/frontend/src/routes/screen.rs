use contracts::domain::a001_product::{Product, ProductDraft, ProductId};

/// Which screen is visible. Each variant carries exactly the data it needs,
/// so a detail screen always has a product id and a form always has a draft.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    Collection,
    Detail(ProductId),
    AdminList,
    AdminForm(ProductDraft),
}

impl Screen {
    /// Entry point of the storefront; every return to the store lands here
    pub fn storefront_root() -> Self {
        Screen::Home
    }

    pub fn new_listing() -> Self {
        Screen::AdminForm(ProductDraft::new_listing())
    }

    pub fn edit_listing(product: &Product) -> Self {
        Screen::AdminForm(product.to_draft())
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Screen::AdminList | Screen::AdminForm(_))
    }

    pub fn form_draft(&self) -> Option<&ProductDraft> {
        match self {
            Screen::AdminForm(draft) => Some(draft),
            _ => None,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::storefront_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::DEFAULT_ACCENT_COLOR;

    fn product() -> Product {
        Product {
            id: ProductId(3),
            name: "Violet Hum".into(),
            description: "Soft drone.".into(),
            price: 30.5,
            emoji: Some("🔮".into()),
            theme_color: None,
        }
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Screen::default(), Screen::Home);
    }

    #[test]
    fn test_admin_variants() {
        assert!(Screen::AdminList.is_admin());
        assert!(Screen::new_listing().is_admin());
        assert!(!Screen::Home.is_admin());
        assert!(!Screen::Collection.is_admin());
        assert!(!Screen::Detail(ProductId(1)).is_admin());
    }

    #[test]
    fn test_new_listing_draft_is_blank_with_default_color() {
        let screen = Screen::new_listing();
        let draft = screen.form_draft().expect("form screen has a draft");
        assert!(draft.is_new());
        assert!(draft.name.is_empty());
        assert_eq!(draft.theme_color, DEFAULT_ACCENT_COLOR);
    }

    #[test]
    fn test_edit_listing_carries_product_fields() {
        let screen = Screen::edit_listing(&product());
        let draft = screen.form_draft().expect("form screen has a draft");
        assert_eq!(draft.id, Some(ProductId(3)));
        assert_eq!(draft.name, "Violet Hum");
        assert_eq!(draft.emoji, "🔮");
        assert_eq!(draft.price, "30.5");
    }

    #[test]
    fn test_non_form_screens_have_no_draft() {
        assert!(Screen::AdminList.form_draft().is_none());
        assert!(Screen::Detail(ProductId(1)).form_draft().is_none());
    }
}
