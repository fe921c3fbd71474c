use crate::layout::global_context::use_app_context;
use crate::routes::screen::Screen;
use crate::shared::components::ui::Button;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section id="home-view" class="home">
            <h2 class="home__title">"The Art of Perception"</h2>
            <p class="home__intro">
                "Welcome to the nexus of pattern, color, and design. Our collectible art prints are \
                 more than just paper; they are tangible representations of digital aesthetics, \
                 translating complex geometries and vibrant palettes into unique, limited-edition \
                 artifacts. Explore the gallery, dive into the philosophy behind the perforation, \
                 and secure your next masterpiece."
            </p>
            <Button
                class="home__cta"
                on_click=Callback::new(move |_| ctx.navigate(Screen::Collection))
            >
                "View the Collection Now →"
            </Button>
        </section>
    }
}
