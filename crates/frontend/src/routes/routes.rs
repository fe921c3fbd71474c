use crate::domain::a001_product::ui::admin::AdminPanel;
use crate::domain::a001_product::ui::storefront::Storefront;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;
// Screen switching is driven by AppGlobalContext::screen, no URL routing

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();
    let is_admin = Memo::new(move |_| ctx.screen.with(|s| s.is_admin()));

    view! {
        <Show when=move || is_admin.get() fallback=|| view! { <Storefront /> }>
            <AdminPanel />
        </Show>
    }
}
