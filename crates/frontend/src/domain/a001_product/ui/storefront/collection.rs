use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

#[component]
pub fn CollectionPage() -> impl IntoView {
    let ctx = use_app_context();
    let products = move || ctx.catalog.with(|c| c.products().to_vec());

    view! {
        <section class="collection">
            <h2 class="collection__title">"Featured Collection: Collector's Cut"</h2>
            <div class="collection__grid">
                {move || {
                    products()
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let id = product.id;

    view! {
        <article class="product-card" style=format!("border-color: {};", product.accent_color())>
            <div
                class="product-card__media"
                style=format!("background-color: {};", product.card_background())
            >
                <span class="product-card__emoji">{product.emoji_or_default().to_string()}</span>
            </div>
            <h3 class="product-card__name">{product.name.clone()}</h3>
            <p class="product-card__teaser">{product.teaser()}</p>
            <div class="product-card__footer">
                <span class="product-card__price" style=format!("color: {};", product.price_color())>
                    {product.price_label()}
                </span>
                <Button
                    class="view-detail-button"
                    variant="secondary"
                    on_click=Callback::new(move |_| ctx.open_detail(id))
                >
                    "View Details"
                </Button>
            </div>
        </article>
    }
}
