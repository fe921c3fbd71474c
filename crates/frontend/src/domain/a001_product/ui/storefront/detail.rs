use crate::layout::global_context::use_app_context;
use crate::routes::screen::Screen;
use crate::shared::icons::icon;
use contracts::domain::a001_product::{Product, ProductId};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn ProductDetailPage(id: ProductId) -> impl IntoView {
    let ctx = use_app_context();
    let product = move || ctx.catalog.with(|c| c.find_by_id(id).cloned());
    let back = move |e: MouseEvent| {
        e.prevent_default();
        ctx.navigate(Screen::Collection);
    };

    move || match product() {
        Some(product) => view! { <ProductDetail product=product on_back=Callback::new(back) /> }.into_any(),
        None => {
            log::warn!("detail requested for unknown product {}", id);
            view! {
                <div class="detail detail--missing">
                    "Product not found. "
                    <a href="#" on:click=back>"Go back"</a>
                    "."
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn ProductDetail(product: Product, on_back: Callback<MouseEvent>) -> impl IntoView {
    view! {
        <div class="detail">
            <button class="detail__back" on:click=move |e| on_back.run(e)>
                {icon("back")}
                "Back to Collection"
            </button>
            <div class="detail__card">
                <div
                    class="detail__media"
                    style=format!(
                        "background-color: {}; border-color: {};",
                        product.card_background(),
                        product.accent_color(),
                    )
                >
                    <span class="detail__emoji">{product.emoji_or_default().to_string()}</span>
                </div>
                <div class="detail__info">
                    <h1 class="detail__name">{product.name.clone()}</h1>
                    <p class="detail__price">{product.price_label()}</p>
                    <h3 class="detail__label">"Description:"</h3>
                    <p class="detail__description">{product.description.clone()}</p>
                </div>
            </div>
        </div>
    }
}
