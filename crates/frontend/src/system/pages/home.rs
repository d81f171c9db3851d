use contracts::domain::common::RegistrationKind;
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;

fn kind_icon(kind: RegistrationKind) -> &'static str {
    match kind {
        RegistrationKind::Beautician => "beautician",
        RegistrationKind::DigitalSkills => "digital",
        RegistrationKind::Hospitality => "hospitality",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="home">
            <h2 class="home__title">"Skills training programmes"</h2>
            <p class="home__subtitle">"Choose a programme to register"</p>
            <div class="home__cards">
                {RegistrationKind::all().iter().copied().map(|kind| view! {
                    <button
                        type="button"
                        class="programme-card"
                        on:click=move |_| ctx.open_registration(kind)
                    >
                        <span class="programme-card__icon">{icon(kind_icon(kind))}</span>
                        <span class="programme-card__title">{kind.title()}</span>
                        {icon("chevron-right")}
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}
