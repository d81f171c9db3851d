use contracts::domain::a001_beautician_registration::{
    BeauticianField as F, BeauticianForm, SessionTiming, TrainingPlace,
};
use contracts::domain::common::options::{
    Disability, EducationLevel, EmploymentStatus, MaritalStatus,
};
use contracts::domain::common::RegistrationKind;
use contracts::shared::validation::formats::sanitize_cnic_input;
use contracts::shared::validation::{FormField, FormSchema};
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{DateInput, FileInput, Input, Select, Textarea};
use crate::shared::date_utils::{input_date_value, today};
use crate::shared::registration_wizard::{
    choice_options, ErrorBanner, RegistrationWizardVm, StepIndicator, WizardNav, WizardShell,
};

type Vm = RegistrationWizardVm<BeauticianForm>;

#[component]
pub fn BeauticianRegistration() -> impl IntoView {
    let vm = Vm::new(use_app_context());
    vm.mount();

    let labels: Vec<&'static str> = BeauticianForm::steps().iter().map(|s| s.label).collect();

    view! {
        <WizardShell title=RegistrationKind::Beautician.title() phase=vm.phase>
            <StepIndicator labels=labels.clone() current=Signal::derive(move || vm.current_step()) />
            <ErrorBanner message=vm.banner />
            <div class="wizard-step">
                {move || match vm.current_step() {
                    1 => personal_step(vm).into_any(),
                    2 => training_step(vm).into_any(),
                    _ => documents_step(vm).into_any(),
                }}
            </div>
            <WizardNav
                is_first=vm.is_first_step()
                is_last=vm.is_last_step()
                is_submitting=vm.is_submitting
                on_back=Callback::new(move |_| vm.back())
                on_next=Callback::new(move |_| vm.next())
                on_submit=Callback::new(move |_| vm.submit())
            />
        </WizardShell>
    }
}

fn personal_step(vm: Vm) -> impl IntoView {
    let full_name = vm.text(F::FullName, |f| f.full_name.as_str(), |f, v| f.full_name = v);
    let father_name = vm.text(F::FatherName, |f| f.father_name.as_str(), |f, v| f.father_name = v);
    let dob = vm.date_of_birth(F::DateOfBirth, |f| f.date_of_birth);
    let age = vm.display(|f| f.age.map(|a| a.to_string()).unwrap_or_default());
    let marital = vm.choice(F::MaritalStatus, |f| f.marital_status, |f, v| f.marital_status = v);
    let cnic = vm.text(F::CnicNo, |f| f.cnic_no.as_str(), |f, v| {
        f.cnic_no = sanitize_cnic_input(&v)
    });
    let email = vm.text(F::Email, |f| f.email.as_str(), |f, v| f.email = v);
    let address = vm.text(F::PresentAddress, |f| f.present_address.as_str(), |f, v| {
        f.present_address = v
    });
    let cell = vm.text(F::CellNo, |f| f.cell_no.as_str(), |f, v| f.cell_no = v);
    let emergency = vm.text(F::EmergencyCellNo, |f| f.emergency_cell_no.as_str(), |f, v| {
        f.emergency_cell_no = v
    });
    let employment = vm.choice(F::EmploymentStatus, |f| f.employment_status, |f, v| {
        f.employment_status = v
    });

    view! {
        <h3 class="wizard-step__title">"Personal Information"</h3>
        <Input label=F::FullName.label() required=true value=full_name.value on_input=full_name.on_change error=full_name.error />
        <Input label=F::FatherName.label() required=true value=father_name.value on_input=father_name.on_change error=father_name.error />
        <DateInput
            label=F::DateOfBirth.label()
            required=true
            value=dob.value
            on_change=dob.on_change
            error=dob.error
            max=input_date_value(Some(today()))
        />
        <Input label=F::Age.label() value=age error=vm.error("age") disabled=true />
        <Select
            label=F::MaritalStatus.label()
            required=true
            value=marital.value
            on_change=marital.on_change
            options={choice_options::<MaritalStatus>()}
            error=marital.error
        />
        <Input
            label=F::CnicNo.label()
            required=true
            value=cnic.value
            on_input=cnic.on_change
            error=cnic.error
            inputmode="numeric"
            max_length=13
            placeholder="13 digits without dashes"
        />
        <Input label=F::Email.label() input_type="email" value=email.value on_input=email.on_change error=email.error />
        <Textarea label=F::PresentAddress.label() required=true value=address.value on_input=address.on_change error=address.error />
        <Input
            label=F::CellNo.label()
            required=true
            input_type="tel"
            max_length=11
            placeholder="03XXXXXXXXX"
            value=cell.value
            on_input=cell.on_change
            error=cell.error
        />
        <Input
            label=F::EmergencyCellNo.label()
            required=true
            input_type="tel"
            max_length=11
            placeholder="03XXXXXXXXX"
            value=emergency.value
            on_input=emergency.on_change
            error=emergency.error
        />
        <Select
            label=F::EmploymentStatus.label()
            required=true
            value=employment.value
            on_change=employment.on_change
            options={choice_options::<EmploymentStatus>()}
            error=employment.error
        />
    }
}

fn training_step(vm: Vm) -> impl IntoView {
    let education = vm.choice(
        F::EducationalLevel,
        |f| f.educational_level,
        BeauticianForm::set_educational_level,
    );
    let other_education = vm.text(F::OtherEducationName, |f| f.other_education_name.as_str(), |f, v| {
        f.other_education_name = v
    });
    let place = vm.choice(F::PreferredTrainingPlace, |f| f.preferred_training_place, |f, v| {
        f.preferred_training_place = v
    });
    let timing = vm.choice(F::PreferredSessionTiming, |f| f.preferred_session_timing, |f, v| {
        f.preferred_session_timing = v
    });
    let disability = vm.choice(
        F::HasDisability,
        |f| f.has_disability,
        BeauticianForm::set_has_disability,
    );
    let disability_type = vm.text(F::DisabilityType, |f| f.disability_type.as_str(), |f, v| {
        f.disability_type = v
    });
    let special = vm.text(F::SpecialCondition, |f| f.special_condition.as_str(), |f, v| {
        f.special_condition = v
    });

    let form = vm.form;
    view! {
        <h3 class="wizard-step__title">"Education & Training"</h3>
        <Select
            label=F::EducationalLevel.label()
            required=true
            value=education.value
            on_change=education.on_change
            options={choice_options::<EducationLevel>()}
            error=education.error
        />
        <Show when=move || form.with(|f| f.educational_level == Some(EducationLevel::Others))>
            <Input
                label=F::OtherEducationName.label()
                required=true
                value=other_education.value
                on_input=other_education.on_change
                error=other_education.error
            />
        </Show>
        <Select
            label=F::PreferredTrainingPlace.label()
            required=true
            value=place.value
            on_change=place.on_change
            options={choice_options::<TrainingPlace>()}
            error=place.error
        />
        <Select
            label=F::PreferredSessionTiming.label()
            required=true
            value=timing.value
            on_change=timing.on_change
            options={choice_options::<SessionTiming>()}
            error=timing.error
        />
        <Select
            label=F::HasDisability.label()
            required=true
            value=disability.value
            on_change=disability.on_change
            options={choice_options::<Disability>()}
            error=disability.error
        />
        <Show when=move || form.with(|f| f.has_disability == Some(Disability::Yes))>
            <Input
                label=F::DisabilityType.label()
                required=true
                value=disability_type.value
                on_input=disability_type.on_change
                error=disability_type.error
            />
        </Show>
        <Textarea
            label=F::SpecialCondition.label()
            value=special.value
            on_input=special.on_change
            error=special.error
            placeholder="Anything we should know (optional)"
        />
    }
}

fn documents_step(vm: Vm) -> impl IntoView {
    let front = vm.attachment(F::CnicFront);
    let back = vm.attachment(F::CnicBack);
    let domicile = vm.attachment(F::Domicile);
    let certificate = vm.attachment(F::DisabilityCertificate);

    let form = vm.form;
    view! {
        <h3 class="wizard-step__title">"Documents"</h3>
        <p class="wizard-step__hint">{format!("Images or PDF, up to {} each", vm.attachment_limit())}</p>
        <FileInput
            label=F::CnicFront.label()
            required=true
            files=front.files
            on_pick=front.on_pick
            on_remove=front.on_remove
            error=front.error
            accept=front.accept
        />
        <FileInput
            label=F::CnicBack.label()
            required=true
            files=back.files
            on_pick=back.on_pick
            on_remove=back.on_remove
            error=back.error
            accept=back.accept
        />
        <FileInput
            label=F::Domicile.label()
            files=domicile.files
            on_pick=domicile.on_pick
            on_remove=domicile.on_remove
            error=domicile.error
            accept=domicile.accept
        />
        <Show when=move || form.with(|f| f.has_disability == Some(Disability::Yes))>
            <FileInput
                label=F::DisabilityCertificate.label()
                required=true
                files=certificate.files
                on_pick=certificate.on_pick
                on_remove=certificate.on_remove
                error=certificate.error
                accept=certificate.accept.clone()
            />
        </Show>
    }
}
