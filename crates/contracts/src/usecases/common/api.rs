//! REST seam of the registration backend
//!
//! The browser implementation lives in the frontend crate; tests use an
//! in-memory fake.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::common::{ApiEnvelope, RegistrationKind};
use crate::shared::multipart::MultipartPayload;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Futures are not `Send` in the browser, hence `?Send`
#[async_trait(?Send)]
pub trait RegistrationApi {
    /// `GET` the existence/tracking endpoint for `identity_key`
    async fn check_existing(
        &self,
        kind: RegistrationKind,
        identity_key: &str,
        timeout_ms: u32,
    ) -> Result<ApiEnvelope, ApiError>;

    /// `POST` the multipart payload to the family's endpoint
    async fn submit(
        &self,
        kind: RegistrationKind,
        payload: MultipartPayload,
        timeout_ms: u32,
    ) -> Result<ApiEnvelope, ApiError>;
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use tokio::sync::Notify;

    /// Scripted backend; records every call it receives
    #[derive(Default)]
    pub struct FakeApi {
        pub check_response: RefCell<Option<Result<ApiEnvelope, ApiError>>>,
        pub submit_responses: RefCell<VecDeque<Result<ApiEnvelope, ApiError>>>,
        pub check_calls: RefCell<Vec<(RegistrationKind, String)>>,
        pub submit_calls: RefCell<Vec<MultipartPayload>>,
        /// When set, `submit` waits for a notification before answering
        pub gate: Option<Rc<Notify>>,
    }

    impl FakeApi {
        pub fn on_check(self, response: Result<ApiEnvelope, ApiError>) -> Self {
            *self.check_response.borrow_mut() = Some(response);
            self
        }

        pub fn on_submit(self, response: Result<ApiEnvelope, ApiError>) -> Self {
            self.submit_responses.borrow_mut().push_back(response);
            self
        }

        pub fn gated(mut self, gate: Rc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }
    }

    #[async_trait(?Send)]
    impl RegistrationApi for FakeApi {
        async fn check_existing(
            &self,
            kind: RegistrationKind,
            identity_key: &str,
            _timeout_ms: u32,
        ) -> Result<ApiEnvelope, ApiError> {
            self.check_calls
                .borrow_mut()
                .push((kind, identity_key.to_string()));
            self.check_response
                .borrow()
                .clone()
                .unwrap_or_else(|| Ok(ApiEnvelope::default()))
        }

        async fn submit(
            &self,
            _kind: RegistrationKind,
            payload: MultipartPayload,
            _timeout_ms: u32,
        ) -> Result<ApiEnvelope, ApiError> {
            self.submit_calls.borrow_mut().push(payload);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.submit_responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
        }
    }

    pub fn envelope(json: &str) -> ApiEnvelope {
        serde_json::from_str(json).unwrap()
    }
}
