//! Storefront screens: home, collection grid, product detail

mod collection;
mod detail;
mod home;

pub use collection::CollectionPage;
pub use detail::ProductDetailPage;
pub use home::HomePage;

use crate::layout::global_context::use_app_context;
use crate::layout::Shell;
use crate::routes::screen::Screen;
use leptos::prelude::*;

/// Loading and load-failure states take over the whole content area
#[component]
pub fn Storefront() -> impl IntoView {
    let ctx = use_app_context();

    let content = move || {
        let (loading, error) = ctx
            .catalog
            .with(|c| (c.is_loading(), c.error().map(str::to_string)));

        if loading {
            return view! { <div class="status status--loading">"Entering the matrix..."</div> }
                .into_any();
        }
        if let Some(message) = error {
            return view! { <div class="status status--error">{message}</div> }.into_any();
        }

        match ctx.screen.get() {
            Screen::Collection => view! { <CollectionPage /> }.into_any(),
            Screen::Detail(id) => view! { <ProductDetailPage id=id /> }.into_any(),
            _ => view! { <HomePage /> }.into_any(),
        }
    };

    view! {
        <Shell>
            {content}
        </Shell>
    }
}
