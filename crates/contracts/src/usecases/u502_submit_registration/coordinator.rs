//! Submission Coordinator
//!
//! One instance per form screen. Replays validation over every step,
//! serialises the form, sends it and maps the response. At most one
//! request is outstanding; a second call while one is in flight returns
//! `Busy` without touching the network.

use std::cell::{Cell, RefCell};

use chrono::Utc;
use uuid::Uuid;

use super::outcome::{SubmitOutcome, SUBMIT_FAILED_MESSAGE};
use super::SubmitRegistration;
use crate::domain::common::{build_payload, RegistrationForm, RegistrationRecord};
use crate::shared::validation::validate_all;
use crate::system::profile::{save_profile, ProfileStore};
use crate::usecases::common::{RegistrationApi, UseCaseMetadata};

pub struct SubmissionCoordinator<A, S> {
    api: A,
    store: S,
    timeout_ms: u32,
    in_flight: Cell<bool>,
    /// Idempotency token, reused across retries of the same form session
    client_request_id: RefCell<String>,
}

/// Clears the in-flight flag however the submission ends
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<A, S> SubmissionCoordinator<A, S>
where
    A: RegistrationApi,
    S: ProfileStore,
{
    pub fn new(api: A, store: S, timeout_ms: u32) -> Self {
        Self {
            api,
            store,
            timeout_ms,
            in_flight: Cell::new(false),
            client_request_id: RefCell::new(Uuid::new_v4().to_string()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    pub fn client_request_id(&self) -> String {
        self.client_request_id.borrow().clone()
    }

    pub async fn submit<F: RegistrationForm>(&self, form: &F) -> SubmitOutcome {
        let usecase = SubmitRegistration::full_name();

        if self.in_flight.get() {
            log::debug!("{}: submission already in flight, ignoring", usecase);
            return SubmitOutcome::Busy;
        }

        let errors = validate_all(form);
        if !errors.is_empty() {
            log::debug!("{}: {} invalid field(s), not sending", usecase, errors.len());
            return SubmitOutcome::Invalid(errors);
        }

        self.in_flight.set(true);
        let _guard = InFlight(&self.in_flight);

        let token = self.client_request_id();
        let payload = build_payload(form, &token);
        log::info!(
            "{}: sending {} ({} fields, {} files, request id {})",
            usecase,
            F::KIND.index(),
            payload.fields.len(),
            payload.files.len(),
            token
        );

        let envelope = match self.api.submit(F::KIND, payload, self.timeout_ms).await {
            Ok(envelope) => envelope,
            Err(e) => {
                log::error!("{}: submission failed: {}", usecase, e);
                return SubmitOutcome::Failed {
                    message: SUBMIT_FAILED_MESSAGE.to_string(),
                };
            }
        };

        if !envelope.success {
            log::warn!("{}: rejected by server: {:?}", usecase, envelope.message);
            return SubmitOutcome::rejected(&envelope);
        }

        let record = envelope
            .record()
            .unwrap_or(RegistrationRecord(serde_json::Value::Null));
        log::info!("{}: accepted, record id {:?}", usecase, record.id());

        // not fatal: the snapshot only feeds the next prefill
        if let Err(e) = save_profile(&self.store, &form.profile_snapshot(Utc::now())) {
            log::warn!("{}: could not store profile snapshot: {}", usecase, e);
        }

        *self.client_request_id.borrow_mut() = Uuid::new_v4().to_string();
        SubmitOutcome::Accepted { record }
    }
}
