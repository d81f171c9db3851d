pub mod global_context;

use crate::shared::icons::icon;
use global_context::{use_app_context, Screen};
use leptos::prelude::*;
use thaw::*;

/// Application shell: a top bar and one content area.
///
/// ```text
/// +------------------------------------------+
/// |  TopBar (title, home)                    |
/// +------------------------------------------+
/// |  Content                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopBar />
            <div class="app-main">
                {center()}
            </div>
        </div>
    }
}

#[component]
fn TopBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                {icon("sehr")}
                <span class="top-header__title">"SEHR"</span>
                <span class="top-header__subtitle">"Women Development Department, Punjab"</span>
            </div>
            <Show when=move || ctx.screen.with(|s| *s != Screen::Home)>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| ctx.open_home()
                >
                    {icon("home")}
                    "Home"
                </Button>
            </Show>
        </header>
    }
}
