use contracts::domain::a003_hospitality_registration::{
    Campus, ClassTiming, HospitalityField as F, HospitalityForm, SessionDays,
};
use contracts::domain::common::options::{
    ChoiceOption, Disability, EducationLevel, EmploymentStatus, MaritalStatus,
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

type Vm = RegistrationWizardVm<HospitalityForm>;

#[component]
pub fn HospitalityRegistration() -> impl IntoView {
    let vm = Vm::new(use_app_context());
    vm.mount();

    let labels: Vec<&'static str> = HospitalityForm::steps().iter().map(|s| s.label).collect();

    view! {
        <WizardShell title=RegistrationKind::Hospitality.title() phase=vm.phase>
            <StepIndicator labels=labels.clone() current=Signal::derive(move || vm.current_step()) />
            <ErrorBanner message=vm.banner />
            <div class="wizard-step">
                {move || match vm.current_step() {
                    1 => personal_step(vm).into_any(),
                    2 => course_step(vm).into_any(),
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

/// Address and help-line numbers of the chosen campus
#[component]
fn CampusInfo(campus: Campus) -> impl IntoView {
    view! {
        <div class="campus-info">
            <p class="campus-info__address">{campus.address()}</p>
            <ul class="campus-info__contacts">
                {campus.contacts().iter().map(|contact| view! {
                    <li>
                        <span class="campus-info__kind">{contact.kind}": "</span>
                        <a href=format!("tel:{}", contact.number)>{contact.number}</a>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

fn course_step(vm: Vm) -> impl IntoView {
    let education = vm.choice(
        F::EducationalLevel,
        |f| f.educational_level,
        HospitalityForm::set_educational_level,
    );
    let other_education = vm.text(F::OtherEducationName, |f| f.other_education_name.as_str(), |f, v| {
        f.other_education_name = v
    });
    let place = vm.choice(
        F::PreferredTrainingPlace,
        |f| f.preferred_training_place,
        HospitalityForm::set_training_place,
    );
    let course = vm.choice(F::PreferredCourse, |f| f.preferred_course, |f, v| f.preferred_course = v);
    let days = vm.choice(F::PreferredSessionTiming, |f| f.preferred_session_timing, |f, v| {
        f.preferred_session_timing = v
    });
    let classes = vm.choice(F::PreferredClassesTiming, |f| f.preferred_classes_timing, |f, v| {
        f.preferred_classes_timing = v
    });
    let disability = vm.choice(
        F::HasDisability,
        |f| f.has_disability,
        HospitalityForm::set_has_disability,
    );
    let disability_type = vm.text(F::DisabilityType, |f| f.disability_type.as_str(), |f, v| {
        f.disability_type = v
    });
    let special = vm.text(F::SpecialCondition, |f| f.special_condition.as_str(), |f, v| {
        f.special_condition = v
    });

    let form = vm.form;
    // only the courses the selected campus runs
    let course_options = Signal::derive(move || {
        form.with(|f| {
            f.available_courses()
                .into_iter()
                .map(|c| (c.value().to_string(), c.label().to_string()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <h3 class="wizard-step__title">"Course"</h3>
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
            options={choice_options::<Campus>()}
            error=place.error
        />
        {move || form.with(|f| f.preferred_training_place).map(|campus| view! { <CampusInfo campus=campus /> })}
        <Select
            label=F::PreferredCourse.label()
            required=true
            value=course.value
            on_change=course.on_change
            options=course_options
            error=course.error
            placeholder="Select a campus first, then a course"
        />
        <Select
            label=F::PreferredSessionTiming.label()
            required=true
            value=days.value
            on_change=days.on_change
            options={choice_options::<SessionDays>()}
            error=days.error
        />
        <Select
            label=F::PreferredClassesTiming.label()
            required=true
            value=classes.value
            on_change=classes.on_change
            options={choice_options::<ClassTiming>()}
            error=classes.error
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
    let front = vm.attachment(F::CnicFrontPath);
    let back = vm.attachment(F::CnicBackPath);
    let domicile = vm.attachment(F::DomicilePath);
    let certificate = vm.attachment(F::DisabilityCertificatePath);

    let form = vm.form;
    view! {
        <h3 class="wizard-step__title">"Documents"</h3>
        <p class="wizard-step__hint">{format!("Images or PDF, up to {} each", vm.attachment_limit())}</p>
        <FileInput
            label=F::CnicFrontPath.label()
            required=true
            files=front.files
            on_pick=front.on_pick
            on_remove=front.on_remove
            error=front.error
            accept=front.accept
        />
        <FileInput
            label=F::CnicBackPath.label()
            required=true
            files=back.files
            on_pick=back.on_pick
            on_remove=back.on_remove
            error=back.error
            accept=back.accept
        />
        <FileInput
            label=F::DomicilePath.label()
            files=domicile.files
            on_pick=domicile.on_pick
            on_remove=domicile.on_remove
            error=domicile.error
            accept=domicile.accept
        />
        <Show when=move || form.with(|f| f.has_disability == Some(Disability::Yes))>
            <FileInput
                label=F::DisabilityCertificatePath.label()
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
