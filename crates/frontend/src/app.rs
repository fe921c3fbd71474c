use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::Config;
use crate::shared::genai::GeminiClient;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::ConfigProvider;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let client = Arc::new(GeminiClient::from_config(&config.genai));

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(client);
    provide_context(ctx);

    ctx.load_catalog();

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
