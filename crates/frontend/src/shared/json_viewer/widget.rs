use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Save `content` as a JSON file through a temporary object URL
fn download_json(content: &str, file_name: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&wasm_bindgen::JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options) else {
        log::warn!("json viewer: could not build blob");
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    if let Some(link) = document
        .create_element("a")
        .ok()
        .and_then(|a| a.dyn_into::<web_sys::HtmlAnchorElement>().ok())
    {
        link.set_href(&url);
        link.set_download(file_name);
        link.click();
    }
    web_sys::Url::revoke_object_url(&url).ok();
}

#[component]
pub fn JsonViewer(
    /// JSON text to show
    json_content: String,
    #[prop(optional)] title: Option<String>,
    /// Name offered by the browser when saving
    #[prop(into, default = "registration.json".to_string())]
    file_name: String,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let content = StoredValue::new(json_content);
    let line_count = content.with_value(|c| c.lines().count());

    let handle_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        let text = content.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let promise = clipboard.write_text(&text);
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("json viewer: clipboard write failed: {:?}", e);
            }
        });
        set_copied.set(true);

        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    let handle_download = move |_| content.with_value(|c| download_json(c, &file_name));

    view! {
        <div class="json-viewer">
            <div class="json-viewer__header">
                <h3 class="json-viewer__title">
                    {title.unwrap_or_else(|| "Raw data".to_string())}
                </h3>
                <div class="json-viewer__actions">
                    <button
                        class="button button--secondary"
                        on:click=handle_copy
                        title="Copy to clipboard"
                    >
                        {move || if copied.get() {
                            view! { <>{icon("check")}{"Copied!"}</> }.into_any()
                        } else {
                            view! { <>{icon("copy")}{"Copy"}</> }.into_any()
                        }}
                    </button>
                    <button
                        class="button button--success"
                        on:click=handle_download
                        title="Save as file"
                    >
                        {icon("download")}
                        {"Save"}
                    </button>
                </div>
            </div>

            <div class="json-viewer__body">
                <pre class="json-viewer__content">{content.get_value()}</pre>
            </div>

            <div class="json-viewer__footer">
                {"Lines: "}
                <strong>{line_count}</strong>
            </div>
        </div>
    }
}
