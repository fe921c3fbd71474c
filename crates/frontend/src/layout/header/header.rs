use crate::layout::global_context::use_app_context;
use crate::routes::screen::Screen;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    let go = move |screen: Screen| {
        move |e: MouseEvent| {
            e.prevent_default();
            ctx.navigate(screen.clone());
        }
    };

    view! {
        <header data-zone="header" class="header">
            <h1 class="header__title" on:click=go(Screen::Home)>
                <span class="header__title-accent">"GG"</span>
                " COLLECTOR HUB"
            </h1>
            <nav class="header__nav">
                <a href="#" class="header__link" on:click=go(Screen::Home)>"Shop Home"</a>
                <a href="#" class="header__link" on:click=go(Screen::Collection)>"Products"</a>
                <a
                    href="#"
                    class="header__link"
                    on:click=move |e: MouseEvent| {
                        e.prevent_default();
                        ctx.switch_to_admin();
                    }
                >
                    "Admin Panel"
                </a>
            </nav>
        </header>
    }
}
