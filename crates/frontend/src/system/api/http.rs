//! gloo-net implementation of `RegistrationApi`

use async_trait::async_trait;
use contracts::domain::common::{ApiEnvelope, RegistrationKind};
use contracts::shared::config::ClientConfig;
use contracts::shared::multipart::MultipartPayload;
use contracts::usecases::common::{ApiError, RegistrationApi};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, AbortSignal, FormData};

use crate::shared::file_picker;

pub struct HttpRegistrationApi {
    config: ClientConfig,
}

impl HttpRegistrationApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

/// Aborts the request when the timer fires; dropping it cancels the timer
struct Deadline {
    controller: AbortController,
    timeout_ms: u32,
    _timer: Timeout,
}

impl Deadline {
    fn start(timeout_ms: u32) -> Result<Self, ApiError> {
        let controller = AbortController::new().map_err(js_error)?;
        let handle = controller.clone();
        let timer = Timeout::new(timeout_ms, move || handle.abort());
        Ok(Self {
            controller,
            timeout_ms,
            _timer: timer,
        })
    }

    fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    fn expired(&self) -> bool {
        self.controller.signal().aborted()
    }

    fn network_error(&self, e: gloo_net::Error) -> ApiError {
        if self.expired() {
            ApiError::Timeout(self.timeout_ms)
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

async fn read_envelope(response: Response, deadline: &Deadline) -> Result<ApiEnvelope, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response.json::<ApiEnvelope>().await.map_err(|e| {
        if deadline.expired() {
            ApiError::Timeout(deadline.timeout_ms)
        } else {
            ApiError::Decode(e.to_string())
        }
    })
}

fn to_form_data(payload: &MultipartPayload) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in &payload.fields {
        form.append_with_str(name, value).map_err(js_error)?;
    }
    for (name, file) in &payload.files {
        let blob = file_picker::lookup(&file.handle).ok_or_else(|| {
            ApiError::Network(format!("attachment {} is no longer available", file.name))
        })?;
        form.append_with_blob_and_filename(name, &blob, &file.name)
            .map_err(js_error)?;
    }
    Ok(form)
}

#[async_trait(?Send)]
impl RegistrationApi for HttpRegistrationApi {
    async fn check_existing(
        &self,
        kind: RegistrationKind,
        identity_key: &str,
        timeout_ms: u32,
    ) -> Result<ApiEnvelope, ApiError> {
        let url = self
            .config
            .api_url(&kind.check_path(&urlencoding::encode(identity_key)));
        let deadline = Deadline::start(timeout_ms)?;

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .abort_signal(Some(&deadline.signal()))
            .send()
            .await
            .map_err(|e| deadline.network_error(e))?;

        read_envelope(response, &deadline).await
    }

    async fn submit(
        &self,
        kind: RegistrationKind,
        payload: MultipartPayload,
        timeout_ms: u32,
    ) -> Result<ApiEnvelope, ApiError> {
        let url = self.config.api_url(kind.submit_path());
        // Content-Type with the multipart boundary is set by the browser
        let body = to_form_data(&payload)?;
        let deadline = Deadline::start(timeout_ms)?;

        let response = Request::post(&url)
            .header("Accept", "application/json")
            .abort_signal(Some(&deadline.signal()))
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| deadline.network_error(e))?;

        read_envelope(response, &deadline).await
    }
}
