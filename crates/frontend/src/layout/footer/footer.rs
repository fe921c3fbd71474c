use leptos::prelude::*;

const FOOTER_NOTE: &str = "© 2025 Collector Hub. Inspired by unique collectible art print aesthetics.";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <p>{FOOTER_NOTE}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_seed_catalog::seed_prompt;

    #[test]
    fn test_footer_matches_catalog_wording() {
        assert!(FOOTER_NOTE.contains("collectible art print"));
        assert!(seed_prompt(4).contains("collectible art print"));
    }
}
