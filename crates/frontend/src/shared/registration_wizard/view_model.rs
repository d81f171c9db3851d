use chrono::NaiveDate;
use contracts::domain::common::options::ChoiceOption;
use contracts::domain::common::RegistrationForm;
use contracts::shared::attachment::{
    accept_pick, format_size, remove_attachment, AttachOutcome, AttachmentKind, FileReference,
    PickResult,
};
use contracts::shared::validation::{
    first_step_showing, first_step_with_errors, FieldValue, FormField, FormSchema, ValidationErrorMap,
};
use contracts::shared::wizard::StepSequencer;
use contracts::usecases::u501_check_existing_registration::{
    check_existing_registration, PrefillOutcome,
};
use contracts::usecases::u502_submit_registration::{SubmissionCoordinator, SubmitOutcome};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::collections::HashSet;
use std::rc::Rc;

use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::shared::date_utils::{input_date_value, parse_input_date, today};
use crate::shared::file_picker;
use crate::system::api::HttpRegistrationApi;
use crate::system::profile::LocalStorageProfileStore;

pub const STEP_ERRORS_MESSAGE: &str = "Please fill in all required fields correctly";

type Coordinator = SubmissionCoordinator<HttpRegistrationApi, LocalStorageProfileStore>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Existing-registration lookup in progress, form hidden
    Checking,
    /// A record exists; waiting out the delay before the tracking screen
    Redirecting,
    Editing,
}

/// Signals wired into one input widget
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub value: Signal<String>,
    pub on_change: Callback<String>,
    pub error: Signal<Option<String>>,
}

#[derive(Clone)]
pub struct AttachmentBinding {
    pub files: Signal<Vec<FileReference>>,
    pub on_pick: Callback<PickResult>,
    pub on_remove: Callback<usize>,
    pub error: Signal<Option<String>>,
    pub accept: String,
    pub multiple: bool,
}

/// ViewModel shared by the registration wizards
pub struct RegistrationWizardVm<F: RegistrationForm> {
    pub form: RwSignal<F>,
    pub step: RwSignal<StepSequencer>,
    pub phase: RwSignal<Phase>,
    pub errors: RwSignal<ValidationErrorMap>,
    pub banner: RwSignal<Option<String>>,
    banner_epoch: RwSignal<u32>,
    pub is_submitting: RwSignal<bool>,
    banner_ms: u32,
    max_attachment_bytes: u64,
    check_timeout_ms: u32,
    redirect_delay_ms: u32,
    ctx: AppGlobalContext,
    coordinator: StoredValue<Rc<Coordinator>, LocalStorage>,
}

impl<F: RegistrationForm> Clone for RegistrationWizardVm<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: RegistrationForm> Copy for RegistrationWizardVm<F> {}

impl<F: RegistrationForm> RegistrationWizardVm<F> {
    pub fn new(ctx: AppGlobalContext) -> Self {
        let config = ctx.config.get_untracked();
        let coordinator = SubmissionCoordinator::new(
            HttpRegistrationApi::new(config.clone()),
            LocalStorageProfileStore,
            config.api.submit_timeout_ms,
        );

        Self {
            form: RwSignal::new(F::default()),
            step: RwSignal::new(StepSequencer::for_form::<F>()),
            phase: RwSignal::new(Phase::Checking),
            errors: RwSignal::new(ValidationErrorMap::new()),
            banner: RwSignal::new(None),
            banner_epoch: RwSignal::new(0),
            is_submitting: RwSignal::new(false),
            banner_ms: config.form.error_banner_ms,
            max_attachment_bytes: config.form.max_attachment_bytes,
            check_timeout_ms: config.api.check_timeout_ms,
            redirect_delay_ms: config.form.redirect_delay_ms,
            ctx,
            coordinator: StoredValue::new_local(Rc::new(coordinator)),
        }
    }

    /// Run the existing-registration check, then either redirect or open
    /// the seeded form
    pub fn mount(&self) {
        let vm = *self;
        let coordinator = self.coordinator.get_value();

        // files still attached when the screen goes away are never sent
        let form = self.form;
        on_cleanup(move || {
            if let Some(abandoned) = form.try_with_untracked(|f| handles(f)) {
                file_picker::release_all(abandoned);
            }
        });

        leptos::task::spawn_local(async move {
            let outcome = check_existing_registration::<F, _, _>(
                coordinator.api(),
                coordinator.store(),
                vm.check_timeout_ms,
                today(),
            )
            .await;

            match outcome {
                PrefillOutcome::Existing(record) => {
                    vm.phase.set(Phase::Redirecting);
                    TimeoutFuture::new(vm.redirect_delay_ms).await;
                    // the user may have left the screen during the delay
                    let still_here = vm
                        .ctx
                        .screen
                        .with_untracked(|screen| *screen == Screen::Registration(F::KIND));
                    if still_here {
                        vm.ctx.open_tracking(F::KIND, record);
                    }
                }
                PrefillOutcome::ShowForm(seeded) => {
                    vm.form.set(seeded);
                    vm.phase.set(Phase::Editing);
                }
            }
        });
    }

    /// "2.0 MB"
    pub fn attachment_limit(&self) -> String {
        format_size(self.max_attachment_bytes)
    }

    pub fn current_step(&self) -> usize {
        self.step.with(|s| s.current())
    }

    pub fn is_first_step(&self) -> Signal<bool> {
        let step = self.step;
        Signal::derive(move || step.with(|s| s.is_first()))
    }

    pub fn is_last_step(&self) -> Signal<bool> {
        let step = self.step;
        Signal::derive(move || step.with(|s| s.is_last()))
    }

    /// Apply a change and drop the field's error.
    ///
    /// Files the change dropped from the form (a replaced slot, a cleared
    /// certificate) are released from the browser registry.
    pub fn edit(&self, name: &'static str, apply: impl FnOnce(&mut F)) {
        let mut dropped = Vec::new();
        self.form.update(|form| {
            let before = handles(form);
            apply(form);
            let after = handles(form);
            dropped.extend(before.difference(&after).cloned());
        });
        for handle in dropped {
            file_picker::release(&handle);
        }
        self.errors.update(|errors| {
            errors.remove(name);
        });
    }

    pub fn next(&self) {
        let mut sequencer = self.step.get_untracked();
        let result = self.form.with_untracked(|form| sequencer.advance(form));
        match result {
            Ok(transition) => {
                self.errors.set(ValidationErrorMap::new());
                if transition.moved() {
                    self.step.set(sequencer);
                    scroll_to_top();
                }
            }
            Err(errors) => {
                log::debug!("step {} has {} error(s)", sequencer.current(), errors.len());
                self.errors.set(errors);
                self.flash_banner(STEP_ERRORS_MESSAGE.to_string());
            }
        }
    }

    pub fn back(&self) {
        let mut sequencer = self.step.get_untracked();
        if sequencer.retreat().moved() {
            self.step.set(sequencer);
            scroll_to_top();
        }
    }

    pub fn submit(&self) {
        if self.is_submitting.get_untracked() {
            return;
        }
        let vm = *self;
        let form = self.form.get_untracked();
        let coordinator = self.coordinator.get_value();
        self.is_submitting.set(true);

        leptos::task::spawn_local(async move {
            let outcome = coordinator.submit(&form).await;
            vm.is_submitting.set(false);

            match outcome {
                SubmitOutcome::Accepted { record } => {
                    file_picker::release_all(handles(&form));
                    vm.ctx.open_tracking(F::KIND, record);
                }
                SubmitOutcome::Invalid(errors) => {
                    vm.rewind(first_step_with_errors(&form, &errors));
                    vm.errors.set(errors);
                    vm.flash_banner(STEP_ERRORS_MESSAGE.to_string());
                }
                SubmitOutcome::Rejected {
                    message,
                    field_errors,
                } => {
                    vm.rewind(first_step_showing::<F>(&field_errors));
                    vm.errors.set(field_errors);
                    vm.flash_banner(message);
                }
                SubmitOutcome::Failed { message } => vm.flash_banner(message),
                SubmitOutcome::Busy => {}
            }
        });
    }

    fn rewind(&self, step: Option<usize>) {
        let Some(step) = step else {
            return;
        };
        let mut sequencer = self.step.get_untracked();
        if sequencer.rewind_to(step).moved() {
            self.step.set(sequencer);
            scroll_to_top();
        }
    }

    /// Store a pick in `field`; a rejected pick leaves the slot untouched
    pub fn attach(&self, field: F::Field, pick: PickResult) {
        let picked_handle = match &pick {
            PickResult::Picked(file) => Some(file.handle.clone()),
            _ => None,
        };

        let mut draft = self.form.get_untracked();
        match accept_pick(&mut draft, field, pick, self.max_attachment_bytes) {
            AttachOutcome::Stored(file) => {
                log::debug!("{}: stored {} ({} bytes)", field.name(), file.name, file.size);
                self.edit(field.name(), move |form| *form = draft);
            }
            AttachOutcome::Cancelled => {}
            AttachOutcome::Rejected(e) => {
                if let Some(handle) = picked_handle {
                    file_picker::release(&handle);
                }
                self.flash_banner(e.to_string());
            }
        }
    }

    pub fn remove_file(&self, field: F::Field, index: usize) {
        self.edit(field.name(), |form| {
            remove_attachment(form, field, index);
        });
    }

    /// Show `message` in the banner; it clears itself after a while unless
    /// a newer message replaced it
    pub fn flash_banner(&self, message: String) {
        let epoch = self.banner_epoch.get_untracked().wrapping_add(1);
        self.banner_epoch.set(epoch);
        self.banner.set(Some(message));

        let banner = self.banner;
        let banner_epoch = self.banner_epoch;
        let delay = self.banner_ms;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if banner_epoch.try_get_untracked() == Some(epoch) {
                banner.set(None);
            }
        });
    }

    pub fn error(&self, name: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(name).map(str::to_string)))
    }

    pub fn text(
        &self,
        field: F::Field,
        get: fn(&F) -> &str,
        set: fn(&mut F, String),
    ) -> FieldBinding {
        let vm = *self;
        let form = self.form;
        FieldBinding {
            value: Signal::derive(move || form.with(|f| get(f).to_string())),
            on_change: Callback::new(move |value: String| vm.edit(field.name(), |f| set(f, value))),
            error: self.error(field.name()),
        }
    }

    pub fn choice<O: ChoiceOption>(
        &self,
        field: F::Field,
        get: fn(&F) -> Option<O>,
        set: fn(&mut F, Option<O>),
    ) -> FieldBinding {
        let vm = *self;
        let form = self.form;
        FieldBinding {
            value: Signal::derive(move || {
                form.with(|f| get(f).map(|o| o.value().to_string()).unwrap_or_default())
            }),
            on_change: Callback::new(move |value: String| {
                let option = O::from_value(&value);
                vm.edit(field.name(), |f| set(f, option));
            }),
            error: self.error(field.name()),
        }
    }

    /// Date of birth; also refreshes the derived age
    pub fn date_of_birth(&self, field: F::Field, get: fn(&F) -> Option<NaiveDate>) -> FieldBinding {
        let vm = *self;
        let form = self.form;
        FieldBinding {
            value: Signal::derive(move || form.with(|f| input_date_value(get(f)))),
            on_change: Callback::new(move |value: String| {
                let dob = parse_input_date(&value);
                vm.edit(field.name(), |f| f.set_date_of_birth(dob, today()));
                vm.errors.update(|errors| {
                    errors.remove("age");
                });
            }),
            error: self.error(field.name()),
        }
    }

    /// Read-only text derived from the form
    pub fn display(&self, render: fn(&F) -> String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(render))
    }

    pub fn attachment(&self, field: F::Field) -> AttachmentBinding {
        let vm = *self;
        let form = self.form;
        let slot = F::slot_spec(field);

        AttachmentBinding {
            files: Signal::derive(move || form.with(|f| slot_files(f, field))),
            on_pick: Callback::new(move |pick: PickResult| vm.attach(field, pick)),
            on_remove: Callback::new(move |index: usize| vm.remove_file(field, index)),
            error: self.error(field.name()),
            accept: slot
                .map(|s| AttachmentKind::accept_attr(s.kinds))
                .unwrap_or_default(),
            multiple: slot.map(|s| s.multiple).unwrap_or(false),
        }
    }
}

/// `(value, label)` pairs for a selector
pub fn choice_options<O: ChoiceOption>() -> Signal<Vec<(String, String)>> {
    Signal::derive(|| {
        O::all()
            .iter()
            .map(|o| (o.value().to_string(), o.label().to_string()))
            .collect()
    })
}

pub fn slot_files<F: FormSchema>(form: &F, field: F::Field) -> Vec<FileReference> {
    match form.value(field) {
        FieldValue::File(file) => file.cloned().into_iter().collect(),
        FieldValue::Files(files) => files.to_vec(),
        _ => Vec::new(),
    }
}

fn handles<F: RegistrationForm>(form: &F) -> HashSet<String> {
    form.file_parts()
        .into_iter()
        .map(|(_, file)| file.handle)
        .collect()
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_digital_skills_registration::{DigitalSkillsField, DigitalSkillsForm};

    fn file(name: &str) -> FileReference {
        FileReference::new(format!("h-{}", name), "application/pdf", name, 10)
    }

    #[test]
    fn test_slot_files_single_and_multi() {
        let mut form = DigitalSkillsForm::default();
        assert!(slot_files(&form, DigitalSkillsField::CnicFront).is_empty());

        form.cnic_front = Some(file("front.pdf"));
        form.educational_documents = vec![file("a.pdf"), file("b.pdf")];

        assert_eq!(slot_files(&form, DigitalSkillsField::CnicFront), vec![file("front.pdf")]);
        assert_eq!(slot_files(&form, DigitalSkillsField::EducationalDocuments).len(), 2);
        assert!(slot_files(&form, DigitalSkillsField::FullName).is_empty());
    }

    #[test]
    fn test_choice_options_follow_catalogue_order() {
        use contracts::domain::a003_hospitality_registration::options::Campus;
        use contracts::domain::common::options::MaritalStatus;

        let owner = Owner::new();
        owner.set();

        let statuses = choice_options::<MaritalStatus>().get_untracked();
        assert_eq!(statuses.len(), 4);
        assert_eq!(statuses[0], ("Single".to_string(), "Single".to_string()));

        let campuses = choice_options::<Campus>().get_untracked();
        assert_eq!(campuses[1].0, "Gujranwala");
        assert!(campuses[1].1.starts_with("TDCP-ITHM Gujranwala Campus"));
    }

    #[test]
    fn test_handles_cover_every_slot() {
        let mut form = DigitalSkillsForm::default();
        form.cnic_front = Some(file("front.pdf"));
        form.educational_documents = vec![file("a.pdf")];

        let handles = handles(&form);
        assert!(handles.contains("h-front.pdf"));
        assert!(handles.contains("h-a.pdf"));
        assert_eq!(handles.len(), 2);
    }
}
