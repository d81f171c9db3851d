use crate::domain::a001_beautician_registration::ui::details::BeauticianRegistration;
use crate::domain::a002_digital_skills_registration::ui::details::DigitalSkillsRegistration;
use crate::domain::a003_hospitality_registration::ui::details::HospitalityRegistration;
use crate::layout::global_context::{use_app_context, Screen};
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::tracking::TrackingPage;
use contracts::domain::common::RegistrationKind;
use leptos::prelude::*;
use thaw::Spinner;
// Screens are switched through AppGlobalContext::screen, no Router

#[component]
fn Content() -> impl IntoView {
    let ctx = use_app_context();

    move || match ctx.screen.get() {
        Screen::Home => view! { <HomePage /> }.into_any(),
        Screen::Registration(RegistrationKind::Beautician) => {
            view! { <BeauticianRegistration /> }.into_any()
        }
        Screen::Registration(RegistrationKind::DigitalSkills) => {
            view! { <DigitalSkillsRegistration /> }.into_any()
        }
        Screen::Registration(RegistrationKind::Hospitality) => {
            view! { <HospitalityRegistration /> }.into_any()
        }
        Screen::Tracking { kind, record } => view! { <TrackingPage kind=kind record=record /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show
            when=move || ctx.config_ready.get()
            fallback=|| view! { <div class="page-loading"><Spinner /></div> }
        >
            <Shell center=|| view! { <Content /> }.into_any() />
        </Show>
    }
}
