//! Prefill / existing-record check, run once when a form screen mounts

use chrono::NaiveDate;

use super::CheckExistingRegistration;
use crate::domain::common::{RegistrationForm, RegistrationRecord};
use crate::system::profile::{load_profile, ProfileStore};
use crate::usecases::common::{RegistrationApi, UseCaseMetadata};

#[derive(Debug, Clone, PartialEq)]
pub enum PrefillOutcome<F> {
    /// The backend already holds a registration for the stored CNIC
    Existing(RegistrationRecord),
    /// Show the form, seeded from the profile when one is stored
    ShowForm(F),
}

/// Fails open: a failed lookup is logged and treated as "no record".
pub async fn check_existing_registration<F, A, S>(
    api: &A,
    store: &S,
    timeout_ms: u32,
    today: NaiveDate,
) -> PrefillOutcome<F>
where
    F: RegistrationForm,
    A: RegistrationApi + ?Sized,
    S: ProfileStore + ?Sized,
{
    let usecase = CheckExistingRegistration::full_name();
    let profile = load_profile(store);

    if let Some(key) = profile.as_ref().and_then(|p| p.identity_key()) {
        match api.check_existing(F::KIND, &key, timeout_ms).await {
            Ok(envelope) if envelope.success => {
                if let Some(record) = envelope.record() {
                    log::info!("{}: {} record found for stored CNIC", usecase, F::KIND.index());
                    return PrefillOutcome::Existing(record);
                }
                log::debug!("{}: success without data, showing form", usecase);
            }
            Ok(_) => log::debug!("{}: no existing {} record", usecase, F::KIND.index()),
            Err(e) => log::warn!("{}: existence check failed, showing form: {}", usecase, e),
        }
    } else {
        log::debug!("{}: no stored identity key, skipping lookup", usecase);
    }

    let mut form = F::default();
    if let Some(profile) = &profile {
        form.apply_profile(profile, today);
    }
    PrefillOutcome::ShowForm(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_beautician_registration::BeauticianForm;
    use crate::domain::common::RegistrationKind;
    use crate::system::profile::memory::MemoryStore;
    use crate::system::profile::USER_PROFILE_KEY;
    use crate::usecases::common::api::fake::{envelope, FakeApi};
    use crate::usecases::common::ApiError;

    const PROFILE: &str = r#"{"name":"Ayesha Khan","cnic":"35202-1234567-2","dob":"2000-06-15","contact":"03001234567","email":"","address":"Lahore"}"#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    #[tokio::test]
    async fn test_existing_record_short_circuits() {
        let api = FakeApi::default().on_check(Ok(envelope(
            r#"{"success":true,"data":{"id":7,"full_name":"Ayesha Khan"}}"#,
        )));
        let store = MemoryStore::with(USER_PROFILE_KEY, PROFILE);

        let outcome =
            check_existing_registration::<BeauticianForm, _, _>(&api, &store, 10_000, today()).await;

        match outcome {
            PrefillOutcome::Existing(record) => assert_eq!(record.id(), Some(7)),
            other => panic!("expected existing record, got {:?}", other),
        }
        assert_eq!(
            api.check_calls.borrow().as_slice(),
            &[(RegistrationKind::Beautician, "3520212345672".to_string())]
        );
    }

    #[tokio::test]
    async fn test_no_record_seeds_form_from_profile() {
        let api = FakeApi::default().on_check(Ok(envelope(r#"{"success":false}"#)));
        let store = MemoryStore::with(USER_PROFILE_KEY, PROFILE);

        let outcome =
            check_existing_registration::<BeauticianForm, _, _>(&api, &store, 10_000, today()).await;

        let PrefillOutcome::ShowForm(form) = outcome else {
            panic!("expected form");
        };
        assert_eq!(form.full_name, "Ayesha Khan");
        assert_eq!(form.cnic_no, "3520212345672");
        assert_eq!(form.age, Some(24));
    }

    #[tokio::test]
    async fn test_failed_check_fails_open() {
        let api = FakeApi::default().on_check(Err(ApiError::Timeout(10_000)));
        let store = MemoryStore::with(USER_PROFILE_KEY, PROFILE);

        let outcome =
            check_existing_registration::<BeauticianForm, _, _>(&api, &store, 10_000, today()).await;

        assert!(matches!(outcome, PrefillOutcome::ShowForm(_)));
    }

    #[tokio::test]
    async fn test_without_profile_no_lookup() {
        let api = FakeApi::default();
        let store = MemoryStore::default();

        let outcome =
            check_existing_registration::<BeauticianForm, _, _>(&api, &store, 10_000, today()).await;

        assert_eq!(outcome, PrefillOutcome::ShowForm(BeauticianForm::default()));
        assert!(api.check_calls.borrow().is_empty());
    }
}
