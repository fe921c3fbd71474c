//! Product form - View Component
//!
//! Add/edit dialog. An empty description is generated on save.

use super::view_model::ProductFormVm;
use crate::layout::global_context::use_app_context;
use crate::routes::screen::Screen;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::modal::Modal;
use contracts::domain::a001_product::aggregate::DEFAULT_ACCENT_COLOR;
use contracts::domain::a001_product::ProductDraft;
use contracts::usecases::u502_submit_listing::submit_listing;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ProductForm(draft: ProductDraft) -> impl IntoView {
    let ctx = use_app_context();
    let vm = ProductFormVm::from_draft(draft);

    let generating = Signal::derive(move || vm.is_generating.get());
    // An unset theme color is shown as the default accent but stays empty
    let shown_color = Signal::derive(move || {
        let color = vm.theme_color.get();
        if color.is_empty() {
            DEFAULT_ACCENT_COLOR.to_string()
        } else {
            color
        }
    });

    let handle_cancel = move || ctx.navigate(Screen::AdminList);

    // Save handler: the catalog is only touched once the draft is complete
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if vm.is_generating.get_untracked() {
            return;
        }

        let draft = vm.to_draft();
        vm.is_generating.set(draft.needs_description());
        let client = ctx.client();

        wasm_bindgen_futures::spawn_local(async move {
            let dto = submit_listing(client.as_ref(), draft).await;
            vm.is_generating.set(false);
            ctx.save_product(dto);
            ctx.navigate(Screen::AdminList);
        });
    };

    view! {
        <Modal
            title=vm.title().to_string()
            on_close=Callback::new(move |_| handle_cancel())
            accent=shown_color
            locked=generating
        >
            <form class="product-form" on:submit=handle_submit>
                <Input
                    name="name"
                    value=vm.name
                    on_input=Callback::new(move |v| vm.name.set(v))
                    placeholder="Product Name"
                    disabled=generating
                    required=true
                />
                <Textarea
                    name="description"
                    value=vm.description
                    on_input=Callback::new(move |v| vm.description.set(v))
                    placeholder="Description (leave blank to auto-generate)"
                    disabled=generating
                    rows=4
                />
                <div class="product-form__row">
                    <Input
                        name="price"
                        input_type="number"
                        value=vm.price
                        on_input=Callback::new(move |v| vm.price.set(v))
                        placeholder="Price"
                        min="0"
                        step="0.01"
                        disabled=generating
                        required=true
                    />
                    <Input
                        name="emoji"
                        value=vm.emoji
                        on_input=Callback::new(move |v| vm.emoji.set(v))
                        placeholder="Emoji (e.g., ✨)"
                        disabled=generating
                    />
                    <Input
                        name="themeColor"
                        input_type="color"
                        value=shown_color
                        on_input=Callback::new(move |v| vm.theme_color.set(v))
                        disabled=generating
                        class="form__input--color"
                    />
                </div>
                <div class="product-form__actions">
                    <Button
                        variant="secondary"
                        disabled=generating
                        on_click=Callback::new(move |_| handle_cancel())
                    >
                        "Cancel"
                    </Button>
                    <Button button_type="submit" disabled=generating>
                        {move || if generating.get() { "Generating..." } else { "Save" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
