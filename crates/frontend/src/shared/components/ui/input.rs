use leptos::prelude::*;

use super::group_class;

/// Text input with label and inline error
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Message shown under the field, if any
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "tel", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Virtual keyboard hint: "numeric", "tel", "email"
    #[prop(optional, into)]
    inputmode: MaybeProp<String>,
    #[prop(optional)]
    max_length: Option<u32>,
    /// Marks the label with an asterisk
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    disabled: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_mode = move || inputmode.get().unwrap_or_default();

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
                type=input_t
                inputmode=input_mode
                maxlength=max_length.map(|n| n.to_string())
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=disabled
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
