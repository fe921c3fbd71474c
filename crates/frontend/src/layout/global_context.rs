use crate::routes::screen::Screen;
use contracts::domain::a001_product::{Catalog, ProductDto, ProductId};
use contracts::shared::genai::GenerativeClient;
use contracts::usecases::u501_seed_catalog;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use web_sys::window;

/// App-wide state: the catalog, the visible screen and the injected
/// generation client. Provided once by `App` through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub catalog: RwSignal<Catalog>,
    pub screen: RwSignal<Screen>,
    client: StoredValue<Arc<dyn GenerativeClient>>,
}

impl AppGlobalContext {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self {
            catalog: RwSignal::new(Catalog::new()),
            screen: RwSignal::new(Screen::default()),
            client: StoredValue::new(client),
        }
    }

    pub fn client(&self) -> Arc<dyn GenerativeClient> {
        self.client.get_value()
    }

    /// Kick off the one-time catalog fetch.
    ///
    /// Same steps as `Catalog::initialize`, split around the await so the
    /// signal is never borrowed while the request is in flight.
    pub fn load_catalog(&self) {
        self.catalog.update(|c| c.begin_load());

        let catalog = self.catalog;
        let client = self.client();
        spawn_local(async move {
            let result = u501_seed_catalog::fetch_catalog(client.as_ref()).await;
            catalog.update(|c| c.finish_load(result));
        });
    }

    pub fn navigate(&self, screen: Screen) {
        log::debug!("navigate: {:?}", screen);
        if !screen.is_admin() {
            scroll_to_top();
        }
        self.screen.set(screen);
    }

    pub fn open_detail(&self, id: ProductId) {
        self.navigate(Screen::Detail(id));
    }

    /// Leave the admin panel; the storefront always restarts at home
    pub fn switch_to_store(&self) {
        self.navigate(Screen::storefront_root());
    }

    pub fn switch_to_admin(&self) {
        self.navigate(Screen::AdminList);
    }

    pub fn save_product(&self, dto: ProductDto) {
        self.catalog.update(|c| {
            let id = c.upsert(dto);
            log::info!("listing {} saved", id);
        });
    }

    pub fn delete_product(&self, id: ProductId) {
        self.catalog.update(|c| c.remove(id));
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

fn scroll_to_top() {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
