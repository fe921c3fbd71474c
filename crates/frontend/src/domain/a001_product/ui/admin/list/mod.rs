use crate::domain::a001_product::ui::admin::details::ProductForm;
use crate::layout::global_context::use_app_context;
use crate::routes::screen::Screen;
use crate::shared::icons::icon;
use contracts::domain::a001_product::{Product, ProductId};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn AdminPanel() -> impl IntoView {
    let ctx = use_app_context();
    let items = move || ctx.catalog.with(|c| c.products().to_vec());

    let handle_create_new = move || ctx.navigate(Screen::new_listing());

    let handle_edit = move |product: &Product| ctx.navigate(Screen::edit_listing(product));

    let handle_delete = move |id: ProductId| {
        let confirmed = {
            if let Some(win) = web_sys::window() {
                win.confirm_with_message("Are you sure you want to delete this listing?")
                    .unwrap_or(false)
            } else {
                false
            }
        };
        if !confirmed {
            return;
        }
        ctx.delete_product(id);
    };

    view! {
        <div class="admin">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="admin__title">"Admin Panel"</h1>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctx.switch_to_store()
                    >
                        {icon("store")}
                        " View Store"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_create_new()
                    >
                        {icon("plus")}
                        " Add Listing"
                    </Button>
                </Space>
            </Flex>

            <div class="admin__grid">
                {move || items().into_iter().map(|product| {
                    let id = product.id;
                    let for_edit = product.clone();
                    view! {
                        <div class="admin-card" style=format!("border-color: {};", product.accent_color())>
                            <h3 class="admin-card__name">{product.name.clone()}</h3>
                            <p class="admin-card__description">{product.description.clone()}</p>
                            <p class="admin-card__price">{product.price_label()}</p>
                            <Space>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| handle_edit(&for_edit)
                                >
                                    {icon("edit")}
                                    " Edit"
                                </Button>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| handle_delete(id)
                                >
                                    {icon("delete")}
                                    " Delete"
                                </Button>
                            </Space>
                        </div>
                    }
                }).collect_view()}
            </div>

            {move || {
                ctx.screen
                    .with(|s| s.form_draft().cloned())
                    .map(|draft| view! { <ProductForm draft=draft /> })
            }}
        </div>
    }
}
