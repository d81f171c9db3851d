use leptos::prelude::*;

use super::group_class;

/// Select component with a "not chosen" placeholder entry
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value, empty when nothing is selected
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Text of the empty entry
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let placeholder_text = move || placeholder.get().unwrap_or_else(|| "Select".to_string());

    view! {
        <div class=move || group_class("form__group", error)>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.with(|v| v.is_empty())>
                    {placeholder_text}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.with(|v| *v == val_clone);
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
