use contracts::shared::attachment::{format_size, FileReference, PickResult};
use leptos::prelude::*;

use super::group_class;

use crate::shared::file_picker::pick_from_event;
use crate::shared::icons::icon;

/// Attachment slot: a file chooser plus the list of stored files
#[component]
pub fn FileInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Files currently held by the slot
    #[prop(into)]
    files: Signal<Vec<FileReference>>,
    on_pick: Callback<PickResult>,
    /// Receives the index of the file to drop
    on_remove: Callback<usize>,
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Value for the `accept` attribute
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    /// Multi-file slots keep the chooser after the first file
    #[prop(optional)]
    multiple: bool,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let show_chooser = move || multiple || files.with(|f| f.is_empty());

    view! {
        <div class=move || group_class("form__group file-input", error)>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}

            <ul class="file-input__list">
                {move || files.get().into_iter().enumerate().map(|(index, file)| view! {
                    <li class="file-input__item">
                        {icon("file")}
                        <span class="file-input__name">{file.name.clone()}</span>
                        <span class="file-input__size">{format_size(file.size)}</span>
                        <button
                            type="button"
                            class="button button--ghost"
                            title="Remove"
                            on:click=move |_| on_remove.run(index)
                        >
                            {icon("remove")}
                        </button>
                    </li>
                }).collect_view()}
            </ul>

            <Show when=show_chooser>
                <input
                    id=input_id
                    class="form__file"
                    type="file"
                    accept=move || accept.get()
                    on:change=move |ev| {
                        let pick = pick_from_event(&ev);
                        on_pick.run(pick);
                    }
                />
            </Show>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
