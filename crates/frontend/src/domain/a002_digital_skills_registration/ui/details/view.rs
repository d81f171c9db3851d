use contracts::domain::a002_digital_skills_registration::form::{MAX_AGE, MIN_AGE};
use contracts::domain::a002_digital_skills_registration::{
    DigitalSkillsField as F, DigitalSkillsForm, MobileNetwork,
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

type Vm = RegistrationWizardVm<DigitalSkillsForm>;

#[component]
pub fn DigitalSkillsRegistration() -> impl IntoView {
    let vm = Vm::new(use_app_context());
    vm.mount();

    let labels: Vec<&'static str> = DigitalSkillsForm::steps().iter().map(|s| s.label).collect();

    view! {
        <WizardShell title=RegistrationKind::DigitalSkills.title() phase=vm.phase>
            <StepIndicator labels=labels.clone() current=Signal::derive(move || vm.current_step()) />
            <ErrorBanner message=vm.banner />
            <div class="wizard-step">
                {move || match vm.current_step() {
                    1 => personal_step(vm).into_any(),
                    2 => education_step(vm).into_any(),
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
    let dob = vm.date_of_birth(F::Dob, |f| f.dob);
    let age = vm.display(|f| f.age.map(|a| a.to_string()).unwrap_or_default());
    let marital = vm.choice(F::MaritalStatus, |f| f.marital_status, |f, v| f.marital_status = v);
    let cnic = vm.text(F::CnicNo, |f| f.cnic_no.as_str(), |f, v| {
        f.cnic_no = sanitize_cnic_input(&v)
    });
    let network = vm.choice(
        F::MobileNetwork,
        |f| f.mobile_network,
        DigitalSkillsForm::set_mobile_network,
    );
    let other_network = vm.text(F::OtherNetworkName, |f| f.other_network_name.as_str(), |f, v| {
        f.other_network_name = v
    });
    let email = vm.text(F::Email, |f| f.email.as_str(), |f, v| f.email = v);
    let address = vm.text(F::PresentAddress, |f| f.present_address.as_str(), |f, v| {
        f.present_address = v
    });
    let cell = vm.text(F::CellNo, |f| f.cell_no.as_str(), |f, v| f.cell_no = v);
    let disability = vm.choice(
        F::HasDisability,
        |f| f.has_disability,
        DigitalSkillsForm::set_has_disability,
    );
    let disability_type = vm.text(F::DisabilityType, |f| f.disability_type.as_str(), |f, v| {
        f.disability_type = v
    });

    let form = vm.form;
    view! {
        <h3 class="wizard-step__title">"Personal Information"</h3>
        <Input label=F::FullName.label() required=true value=full_name.value on_input=full_name.on_change error=full_name.error />
        <Input label=F::FatherName.label() required=true value=father_name.value on_input=father_name.on_change error=father_name.error />
        <DateInput
            label=F::Dob.label()
            required=true
            value=dob.value
            on_change=dob.on_change
            error=dob.error
            max=input_date_value(Some(today()))
        />
        <Input label=F::Age.label() value=age error=vm.error("age") disabled=true />
        <p class="wizard-step__hint">{format!("Applicants must be {} to {} years old", MIN_AGE, MAX_AGE)}</p>
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
        <Select
            label=F::MobileNetwork.label()
            required=true
            value=network.value
            on_change=network.on_change
            options={choice_options::<MobileNetwork>()}
            error=network.error
        />
        <Show when=move || form.with(|f| f.mobile_network == Some(MobileNetwork::AnyOther))>
            <Input
                label=F::OtherNetworkName.label()
                required=true
                value=other_network.value
                on_input=other_network.on_change
                error=other_network.error
            />
        </Show>
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
        <Select
            label=F::HasDisability.label()
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
    }
}

fn education_step(vm: Vm) -> impl IntoView {
    let employment = vm.choice(F::EmploymentStatus, |f| f.employment_status, |f, v| {
        f.employment_status = v
    });
    let education = vm.choice(
        F::EducationalLevel,
        |f| f.educational_level,
        DigitalSkillsForm::set_educational_level,
    );
    let other_education = vm.text(F::OtherEducationName, |f| f.other_education_name.as_str(), |f, v| {
        f.other_education_name = v
    });
    let institute = vm.text(F::LastDegreeInstitute, |f| f.last_degree_institute.as_str(), |f, v| {
        f.last_degree_institute = v
    });
    let discipline = vm.text(F::Discipline, |f| f.discipline.as_str(), |f, v| f.discipline = v);
    let specialization = vm.text(F::Specialization, |f| f.specialization.as_str(), |f, v| {
        f.specialization = v
    });
    let special = vm.text(F::SpecialCondition, |f| f.special_condition.as_str(), |f, v| {
        f.special_condition = v
    });

    let form = vm.form;
    view! {
        <h3 class="wizard-step__title">"Education & Employment"</h3>
        <Select
            label=F::EmploymentStatus.label()
            required=true
            value=employment.value
            on_change=employment.on_change
            options={choice_options::<EmploymentStatus>()}
            error=employment.error
        />
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
        <Input label=F::LastDegreeInstitute.label() value=institute.value on_input=institute.on_change error=institute.error />
        <Input label=F::Discipline.label() value=discipline.value on_input=discipline.on_change error=discipline.error />
        <Input label=F::Specialization.label() value=specialization.value on_input=specialization.on_change error=specialization.error />
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
    let documents = vm.attachment(F::EducationalDocuments);
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
        <FileInput
            label=F::EducationalDocuments.label()
            files=documents.files
            on_pick=documents.on_pick
            on_remove=documents.on_remove
            error=documents.error
            accept=documents.accept
            multiple=documents.multiple
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
