use leptos::prelude::*;

use super::group_class;

/// Native date picker, value in yyyy-mm-dd format
#[component]
pub fn DateInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    /// Receives yyyy-mm-dd, or "" when cleared
    on_change: Callback<String>,
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Latest selectable date, yyyy-mm-dd
    #[prop(optional, into)]
    max: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class=move || group_class("form__group", error)>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type="date"
                max=move || max.get()
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
