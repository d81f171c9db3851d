use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::common::options::{
    choice_value, ChoiceOption, Disability, EducationLevel, EmploymentStatus, MaritalStatus,
    OTHERS, YES,
};
use crate::domain::common::registration::{
    date_text, marital_text, number_text, parse_date, seed, RegistrationForm, RegistrationKind,
};
use crate::shared::attachment::{AttachmentSlots, FileReference, SlotMut, SlotSpec, IMAGES_OR_PDF};
use crate::shared::validation::formats::{
    age_on, check_age_range, check_cnic, check_email, check_field, check_mobile, normalize_cnic,
};
use crate::shared::validation::{
    ConditionalRule, FieldValue, FormField, FormSchema, StepDefinition, ValidationErrorMap,
};
use crate::system::profile::UserProfile;

pub const MIN_AGE: u32 = 16;
pub const MAX_AGE: u32 = 60;

/// Value of the "other network" option
pub const ANY_OTHER: &str = "Any Other";

/// Multipart key of the multi-file slot
const EDUCATIONAL_DOCUMENTS_PART: &str = "educational_documents[]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileNetwork {
    Jazz,
    Zong,
    Telenor,
    Ufone,
    AnyOther,
}

impl ChoiceOption for MobileNetwork {
    fn all() -> &'static [Self] {
        &[
            MobileNetwork::Jazz,
            MobileNetwork::Zong,
            MobileNetwork::Telenor,
            MobileNetwork::Ufone,
            MobileNetwork::AnyOther,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            MobileNetwork::Jazz => "Jazz",
            MobileNetwork::Zong => "Zong",
            MobileNetwork::Telenor => "Telenor",
            MobileNetwork::Ufone => "Ufone",
            MobileNetwork::AnyOther => ANY_OTHER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitalSkillsField {
    FullName,
    FatherName,
    Dob,
    Age,
    MaritalStatus,
    CnicNo,
    MobileNetwork,
    OtherNetworkName,
    Email,
    PresentAddress,
    CellNo,
    HasDisability,
    DisabilityType,
    EmploymentStatus,
    EducationalLevel,
    OtherEducationName,
    LastDegreeInstitute,
    Discipline,
    Specialization,
    SpecialCondition,
    CnicFront,
    CnicBack,
    Domicile,
    EducationalDocuments,
    DisabilityCertificate,
}

impl FormField for DigitalSkillsField {
    fn name(&self) -> &'static str {
        match self {
            DigitalSkillsField::FullName => "full_name",
            DigitalSkillsField::FatherName => "father_name",
            DigitalSkillsField::Dob => "dob",
            DigitalSkillsField::Age => "age",
            DigitalSkillsField::MaritalStatus => "marital_status",
            DigitalSkillsField::CnicNo => "cnic_no",
            DigitalSkillsField::MobileNetwork => "mobile_network",
            DigitalSkillsField::OtherNetworkName => "other_network_name",
            DigitalSkillsField::Email => "email",
            DigitalSkillsField::PresentAddress => "present_address",
            DigitalSkillsField::CellNo => "cell_no",
            DigitalSkillsField::HasDisability => "has_disability",
            DigitalSkillsField::DisabilityType => "disability_type",
            DigitalSkillsField::EmploymentStatus => "employment_status",
            DigitalSkillsField::EducationalLevel => "educational_level",
            DigitalSkillsField::OtherEducationName => "other_education_name",
            DigitalSkillsField::LastDegreeInstitute => "last_degree_institute",
            DigitalSkillsField::Discipline => "discipline",
            DigitalSkillsField::Specialization => "specialization",
            DigitalSkillsField::SpecialCondition => "special_condition",
            DigitalSkillsField::CnicFront => "cnic_front",
            DigitalSkillsField::CnicBack => "cnic_back",
            DigitalSkillsField::Domicile => "domicile",
            DigitalSkillsField::EducationalDocuments => "educational_documents",
            DigitalSkillsField::DisabilityCertificate => "disability_certificate",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DigitalSkillsField::FullName => "Full name",
            DigitalSkillsField::FatherName => "Father's name",
            DigitalSkillsField::Dob => "Date of birth",
            DigitalSkillsField::Age => "Age",
            DigitalSkillsField::MaritalStatus => "Marital status",
            DigitalSkillsField::CnicNo => "CNIC",
            DigitalSkillsField::MobileNetwork => "Mobile network",
            DigitalSkillsField::OtherNetworkName => "Network name",
            DigitalSkillsField::Email => "Email",
            DigitalSkillsField::PresentAddress => "Present address",
            DigitalSkillsField::CellNo => "Phone number",
            DigitalSkillsField::HasDisability => "Disability status",
            DigitalSkillsField::DisabilityType => "Disability type",
            DigitalSkillsField::EmploymentStatus => "Employment status",
            DigitalSkillsField::EducationalLevel => "Educational level",
            DigitalSkillsField::OtherEducationName => "Education level name",
            DigitalSkillsField::LastDegreeInstitute => "Last degree institute",
            DigitalSkillsField::Discipline => "Discipline",
            DigitalSkillsField::Specialization => "Specialization",
            DigitalSkillsField::SpecialCondition => "Special condition",
            DigitalSkillsField::CnicFront => "CNIC Front",
            DigitalSkillsField::CnicBack => "CNIC Back",
            DigitalSkillsField::Domicile => "Domicile",
            DigitalSkillsField::EducationalDocuments => "Educational documents",
            DigitalSkillsField::DisabilityCertificate => "Disability certificate",
        }
    }
}

use DigitalSkillsField as F;

const STEPS: &[StepDefinition<DigitalSkillsField>] = &[
    StepDefinition {
        label: "Personal Information",
        optional: &[F::Email, F::HasDisability],
        required: &[
            F::FullName,
            F::FatherName,
            F::Dob,
            F::Age,
            F::CnicNo,
            F::PresentAddress,
            F::CellNo,
            F::MaritalStatus,
            F::MobileNetwork,
        ],
        conditional: &[
            ConditionalRule::new(F::OtherNetworkName, F::MobileNetwork, ANY_OTHER),
            ConditionalRule::new(F::DisabilityType, F::HasDisability, YES),
        ],
    },
    StepDefinition {
        label: "Education & Employment",
        optional: &[F::LastDegreeInstitute, F::Discipline, F::Specialization, F::SpecialCondition],
        required: &[F::EmploymentStatus, F::EducationalLevel],
        conditional: &[ConditionalRule::new(
            F::OtherEducationName,
            F::EducationalLevel,
            OTHERS,
        )],
    },
    StepDefinition {
        label: "Documents",
        optional: &[F::Domicile, F::EducationalDocuments],
        required: &[F::CnicFront, F::CnicBack],
        conditional: &[ConditionalRule::new(
            F::DisabilityCertificate,
            F::HasDisability,
            YES,
        )],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct DigitalSkillsForm {
    pub full_name: String,
    pub father_name: String,
    pub dob: Option<NaiveDate>,
    pub age: Option<u32>,
    pub marital_status: Option<MaritalStatus>,
    pub cnic_no: String,
    pub mobile_network: Option<MobileNetwork>,
    pub other_network_name: String,
    pub email: String,
    pub present_address: String,
    pub cell_no: String,
    pub has_disability: Option<Disability>,
    pub disability_type: String,
    pub employment_status: Option<EmploymentStatus>,
    pub educational_level: Option<EducationLevel>,
    pub other_education_name: String,
    pub last_degree_institute: String,
    pub discipline: String,
    pub specialization: String,
    pub special_condition: String,
    pub cnic_front: Option<FileReference>,
    pub cnic_back: Option<FileReference>,
    pub domicile: Option<FileReference>,
    pub educational_documents: Vec<FileReference>,
    pub disability_certificate: Option<FileReference>,
}

impl Default for DigitalSkillsForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            father_name: String::new(),
            dob: None,
            age: None,
            marital_status: None,
            cnic_no: String::new(),
            mobile_network: None,
            other_network_name: String::new(),
            email: String::new(),
            present_address: String::new(),
            cell_no: String::new(),
            has_disability: Some(Disability::No),
            disability_type: String::new(),
            employment_status: None,
            educational_level: None,
            other_education_name: String::new(),
            last_degree_institute: String::new(),
            discipline: String::new(),
            specialization: String::new(),
            special_condition: String::new(),
            cnic_front: None,
            cnic_back: None,
            domicile: None,
            educational_documents: Vec::new(),
            disability_certificate: None,
        }
    }
}

impl DigitalSkillsForm {
    pub fn set_mobile_network(&mut self, network: Option<MobileNetwork>) {
        self.mobile_network = network;
        if network != Some(MobileNetwork::AnyOther) {
            self.other_network_name.clear();
        }
    }

    pub fn set_educational_level(&mut self, level: Option<EducationLevel>) {
        self.educational_level = level;
        if level != Some(EducationLevel::Others) {
            self.other_education_name.clear();
        }
    }

    pub fn set_has_disability(&mut self, value: Option<Disability>) {
        self.has_disability = value;
        if value != Some(Disability::Yes) {
            self.disability_type.clear();
            self.disability_certificate = None;
        }
    }
}

impl FormSchema for DigitalSkillsForm {
    type Field = DigitalSkillsField;

    fn steps() -> &'static [StepDefinition<DigitalSkillsField>] {
        STEPS
    }

    fn value(&self, field: DigitalSkillsField) -> FieldValue<'_> {
        match field {
            F::FullName => FieldValue::Text(&self.full_name),
            F::FatherName => FieldValue::Text(&self.father_name),
            F::Dob => FieldValue::Date(self.dob),
            F::Age => FieldValue::Number(self.age),
            F::MaritalStatus => FieldValue::Choice(self.marital_status.map(|o| o.value())),
            F::CnicNo => FieldValue::Text(&self.cnic_no),
            F::MobileNetwork => FieldValue::Choice(self.mobile_network.map(|o| o.value())),
            F::OtherNetworkName => FieldValue::Text(&self.other_network_name),
            F::Email => FieldValue::Text(&self.email),
            F::PresentAddress => FieldValue::Text(&self.present_address),
            F::CellNo => FieldValue::Text(&self.cell_no),
            F::HasDisability => FieldValue::Choice(self.has_disability.map(|o| o.value())),
            F::DisabilityType => FieldValue::Text(&self.disability_type),
            F::EmploymentStatus => FieldValue::Choice(self.employment_status.map(|o| o.value())),
            F::EducationalLevel => FieldValue::Choice(self.educational_level.map(|o| o.value())),
            F::OtherEducationName => FieldValue::Text(&self.other_education_name),
            F::LastDegreeInstitute => FieldValue::Text(&self.last_degree_institute),
            F::Discipline => FieldValue::Text(&self.discipline),
            F::Specialization => FieldValue::Text(&self.specialization),
            F::SpecialCondition => FieldValue::Text(&self.special_condition),
            F::CnicFront => FieldValue::File(self.cnic_front.as_ref()),
            F::CnicBack => FieldValue::File(self.cnic_back.as_ref()),
            F::Domicile => FieldValue::File(self.domicile.as_ref()),
            F::EducationalDocuments => FieldValue::Files(&self.educational_documents),
            F::DisabilityCertificate => FieldValue::File(self.disability_certificate.as_ref()),
        }
    }

    fn check_formats(&self, step: usize, errors: &mut ValidationErrorMap) {
        if step != 1 {
            return;
        }
        check_field(errors, F::CnicNo.name(), &self.cnic_no, check_cnic);
        check_field(errors, F::CellNo.name(), &self.cell_no, check_mobile);
        check_field(errors, F::Email.name(), &self.email, check_email);
        if let Some(age) = self.age {
            if let Err(message) = check_age_range(age, MIN_AGE, MAX_AGE) {
                errors.insert_if_absent(F::Age.name(), message);
            }
        }
    }
}

impl AttachmentSlots for DigitalSkillsForm {
    fn slot_spec(field: DigitalSkillsField) -> Option<SlotSpec> {
        match field {
            F::CnicFront | F::CnicBack | F::Domicile | F::DisabilityCertificate => {
                Some(SlotSpec::single(IMAGES_OR_PDF))
            }
            F::EducationalDocuments => Some(SlotSpec::multiple(IMAGES_OR_PDF)),
            _ => None,
        }
    }

    fn slot_mut(&mut self, field: DigitalSkillsField) -> Option<SlotMut<'_>> {
        match field {
            F::CnicFront => Some(SlotMut::Single(&mut self.cnic_front)),
            F::CnicBack => Some(SlotMut::Single(&mut self.cnic_back)),
            F::Domicile => Some(SlotMut::Single(&mut self.domicile)),
            F::DisabilityCertificate => Some(SlotMut::Single(&mut self.disability_certificate)),
            F::EducationalDocuments => Some(SlotMut::Multi(&mut self.educational_documents)),
            _ => None,
        }
    }
}

impl RegistrationForm for DigitalSkillsForm {
    const KIND: RegistrationKind = RegistrationKind::DigitalSkills;

    fn identity_key(&self) -> String {
        normalize_cnic(self.cnic_no.trim())
    }

    fn apply_profile(&mut self, profile: &UserProfile, today: NaiveDate) {
        seed(&mut self.full_name, &profile.name);
        seed(&mut self.cnic_no, &normalize_cnic(&profile.cnic));
        seed(&mut self.cell_no, &profile.contact);
        seed(&mut self.email, &profile.email);
        seed(&mut self.present_address, &profile.address);
        if self.dob.is_none() {
            if let Some(dob) = parse_date(&profile.dob) {
                self.set_date_of_birth(Some(dob), today);
            }
        }
    }

    fn profile_snapshot(&self, updated_at: DateTime<Utc>) -> UserProfile {
        UserProfile {
            name: self.full_name.trim().to_string(),
            cnic: self.identity_key(),
            dob: date_text(self.dob),
            contact: self.cell_no.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.present_address.trim().to_string(),
            course: None,
            last_updated: Some(updated_at),
        }
    }

    fn set_date_of_birth(&mut self, dob: Option<NaiveDate>, today: NaiveDate) {
        self.dob = dob;
        self.age = dob.and_then(|d| age_on(d, today));
    }

    fn text_fields(&self) -> Vec<(&'static str, String)> {
        let text = |value: &String| value.trim().to_string();
        vec![
            (F::FullName.name(), text(&self.full_name)),
            (F::FatherName.name(), text(&self.father_name)),
            (F::Dob.name(), date_text(self.dob)),
            (F::Age.name(), number_text(self.age)),
            (F::MaritalStatus.name(), marital_text(self.marital_status)),
            (F::CnicNo.name(), self.identity_key()),
            (F::MobileNetwork.name(), choice_value(self.mobile_network).to_string()),
            (F::OtherNetworkName.name(), text(&self.other_network_name)),
            (F::Email.name(), text(&self.email)),
            (F::PresentAddress.name(), text(&self.present_address)),
            (F::CellNo.name(), text(&self.cell_no)),
            (F::HasDisability.name(), choice_value(self.has_disability).to_string()),
            (F::DisabilityType.name(), text(&self.disability_type)),
            (F::EmploymentStatus.name(), choice_value(self.employment_status).to_string()),
            (F::EducationalLevel.name(), choice_value(self.educational_level).to_string()),
            (F::OtherEducationName.name(), text(&self.other_education_name)),
            (F::LastDegreeInstitute.name(), text(&self.last_degree_institute)),
            (F::Discipline.name(), text(&self.discipline)),
            (F::Specialization.name(), text(&self.specialization)),
            (F::SpecialCondition.name(), text(&self.special_condition)),
        ]
    }

    fn file_parts(&self) -> Vec<(&'static str, FileReference)> {
        let mut parts: Vec<(&'static str, FileReference)> = [
            (F::CnicFront, &self.cnic_front),
            (F::CnicBack, &self.cnic_back),
            (F::Domicile, &self.domicile),
            (F::DisabilityCertificate, &self.disability_certificate),
        ]
        .into_iter()
        .filter_map(|(field, file)| file.clone().map(|f| (field.name(), f)))
        .collect();
        parts.extend(
            self.educational_documents
                .iter()
                .cloned()
                .map(|f| (EDUCATIONAL_DOCUMENTS_PART, f)),
        );
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::build_payload;
    use crate::shared::attachment::{accept_pick, remove_attachment, AttachOutcome, PickResult};
    use crate::shared::validation::{validate_all, validate_step};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    fn doc(name: &str) -> FileReference {
        FileReference::new(format!("h-{}", name), "application/pdf", name, 500)
    }

    fn valid_form() -> DigitalSkillsForm {
        let mut form = DigitalSkillsForm {
            full_name: "Sana Tariq".into(),
            father_name: "Tariq Mehmood".into(),
            marital_status: Some(MaritalStatus::Married),
            cnic_no: "3310012345678".into(),
            mobile_network: Some(MobileNetwork::Jazz),
            present_address: "Faisalabad".into(),
            cell_no: "03451234567".into(),
            employment_status: Some(EmploymentStatus::Student),
            educational_level: Some(EducationLevel::FaFsc),
            cnic_front: Some(doc("front.pdf")),
            cnic_back: Some(doc("back.pdf")),
            ..Default::default()
        };
        form.set_date_of_birth(NaiveDate::from_ymd_opt(2003, 2, 1), today());
        form
    }

    #[test]
    fn test_defaults_to_no_disability() {
        let form = DigitalSkillsForm::default();
        assert_eq!(form.has_disability, Some(Disability::No));
        assert!(!validate_step(&form, 1).contains("has_disability"));
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_all(&valid_form()).is_empty());
    }

    #[test]
    fn test_any_other_network_requires_name() {
        let mut form = valid_form();
        form.set_mobile_network(Some(MobileNetwork::AnyOther));
        assert_eq!(
            validate_step(&form, 1).get("other_network_name"),
            Some("Network name is required")
        );
        form.other_network_name = "SCOM".into();
        assert!(validate_step(&form, 1).is_empty());

        form.set_mobile_network(Some(MobileNetwork::Zong));
        assert!(form.other_network_name.is_empty());
    }

    #[test]
    fn test_age_outside_range() {
        let mut form = valid_form();
        form.set_date_of_birth(NaiveDate::from_ymd_opt(2012, 1, 1), today());
        assert_eq!(form.age, Some(13));
        assert_eq!(
            validate_step(&form, 1).get("age"),
            Some("Age must be between 16 and 60 years")
        );

        form.set_date_of_birth(NaiveDate::from_ymd_opt(1964, 1, 10), today());
        assert_eq!(form.age, Some(61));
        assert!(validate_step(&form, 1).contains("age"));
    }

    #[test]
    fn test_future_dob_leaves_age_required() {
        let mut form = valid_form();
        form.set_date_of_birth(NaiveDate::from_ymd_opt(2030, 1, 1), today());
        assert_eq!(validate_step(&form, 1).get("age"), Some("Age is required"));
    }

    #[test]
    fn test_disability_checked_on_first_step() {
        let mut form = valid_form();
        form.set_has_disability(Some(Disability::Yes));
        assert!(validate_step(&form, 1).contains("disability_type"));
        assert!(validate_step(&form, 3).contains("disability_certificate"));
    }

    #[test]
    fn test_educational_documents_append_and_remove() {
        let mut form = valid_form();
        for name in ["matric.pdf", "fsc.pdf", "cert.pdf"] {
            let outcome = accept_pick(
                &mut form,
                F::EducationalDocuments,
                PickResult::Picked(doc(name)),
                2 * 1024 * 1024,
            );
            assert!(matches!(outcome, AttachOutcome::Stored(_)));
        }
        assert_eq!(form.educational_documents.len(), 3);

        remove_attachment(&mut form, F::EducationalDocuments, 1).unwrap();
        let names: Vec<_> = form.educational_documents.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["matric.pdf", "cert.pdf"]);
        assert!(form.cnic_front.is_some());

        let payload = build_payload(&form, "t");
        assert_eq!(payload.files_named("educational_documents[]").count(), 2);
        assert_eq!(payload.field("registration_type"), Some("digital_skills_course"));
    }
}
