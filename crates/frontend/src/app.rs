use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::config::load_client_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Embedded defaults are active until the served override (if any) arrives
    leptos::task::spawn_local(async move {
        let config = load_client_config().await;
        ctx.config.set(config);
        ctx.config_ready.set(true);
    });

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
