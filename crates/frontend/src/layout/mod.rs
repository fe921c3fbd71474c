pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Storefront page frame.
///
/// ```text
/// +------------------------------+
/// |  Header (title + navigation) |
/// +------------------------------+
/// |           content            |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
///
/// The admin panel draws its own header and does not use this frame.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="storefront">
            <header::Header />
            <main class="storefront__main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
