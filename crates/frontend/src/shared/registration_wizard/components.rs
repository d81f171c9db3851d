use leptos::prelude::*;
use thaw::*;

use super::view_model::Phase;

/// "Step 2 of 3" plus the step labels
#[component]
pub fn StepIndicator(labels: Vec<&'static str>, #[prop(into)] current: Signal<usize>) -> impl IntoView {
    let total = labels.len();

    view! {
        <div class="wizard-steps">
            <div class="wizard-steps__counter">
                {move || format!("Step {} of {}", current.get(), total)}
            </div>
            <ol class="wizard-steps__list">
                {labels.into_iter().enumerate().map(|(index, label)| {
                    let number = index + 1;
                    view! {
                        <li class=move || {
                            let step = current.get();
                            if step == number {
                                "wizard-steps__item wizard-steps__item--active"
                            } else if step > number {
                                "wizard-steps__item wizard-steps__item--done"
                            } else {
                                "wizard-steps__item"
                            }
                        }>
                            <span class="wizard-steps__number">{number}</span>
                            <span class="wizard-steps__label">{label}</span>
                        </li>
                    }
                }).collect_view()}
            </ol>
        </div>
    }
}

/// Dismissible error banner
#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <div class="wizard-banner">
                <MessageBar intent=MessageBarIntent::Error>
                    <div class="wizard-banner__body">
                        <span>{text}</span>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click=move |_| message.set(None)
                        >
                            "Dismiss"
                        </Button>
                    </div>
                </MessageBar>
            </div>
        })}
    }
}

#[component]
pub fn WizardNav(
    #[prop(into)] is_first: Signal<bool>,
    #[prop(into)] is_last: Signal<bool>,
    #[prop(into)] is_submitting: Signal<bool>,
    on_back: Callback<()>,
    on_next: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="wizard-nav">
            <Show when=move || !is_first.get()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_back.run(())
                    disabled=is_submitting
                >
                    "Back"
                </Button>
            </Show>
            <Show
                when=move || is_last.get()
                fallback=move || view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_next.run(())>
                        "Next"
                    </Button>
                }
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_submit.run(())
                    disabled=is_submitting
                >
                    {move || if is_submitting.get() { "Submitting..." } else { "Submit" }}
                </Button>
            </Show>
        </div>
    }
}

/// Hides the form until the existing-registration check is done
#[component]
pub fn WizardShell(
    title: &'static str,
    #[prop(into)] phase: Signal<Phase>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="registration">
            <h2 class="registration__title">{title}</h2>
            {move || match phase.get() {
                Phase::Checking => view! {
                    <div class="registration__status">
                        <Spinner />
                        <p>"Checking existing registration..."</p>
                    </div>
                }.into_any(),
                Phase::Redirecting => view! {
                    <div class="registration__status">
                        <Spinner />
                        <p>"You are already registered. Opening your registration..."</p>
                    </div>
                }.into_any(),
                Phase::Editing => children().into_any(),
            }}
        </div>
    }
}
