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
    age_on, check_cnic, check_email, check_field, check_mobile, normalize_cnic,
};
use crate::shared::validation::{
    ConditionalRule, FieldValue, FormField, FormSchema, StepDefinition, ValidationErrorMap,
};
use crate::system::profile::UserProfile;

// ============================================================================
// Options
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingPlace {
    Faisalabad,
    Lahore,
    Multan,
    Rawalpindi,
}

impl ChoiceOption for TrainingPlace {
    fn all() -> &'static [Self] {
        &[
            TrainingPlace::Faisalabad,
            TrainingPlace::Lahore,
            TrainingPlace::Multan,
            TrainingPlace::Rawalpindi,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            TrainingPlace::Faisalabad => "Faisalabad",
            TrainingPlace::Lahore => "Lahore",
            TrainingPlace::Multan => "Multan",
            TrainingPlace::Rawalpindi => "Rawalpindi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTiming {
    Morning,
    Afternoon,
    Evening,
}

impl ChoiceOption for SessionTiming {
    fn all() -> &'static [Self] {
        &[
            SessionTiming::Morning,
            SessionTiming::Afternoon,
            SessionTiming::Evening,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            SessionTiming::Morning => "9am-12pm",
            SessionTiming::Afternoon => "1pm-4pm",
            SessionTiming::Evening => "5pm-8pm",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SessionTiming::Morning => "Morning : 9am to 12pm",
            SessionTiming::Afternoon => "Afternoon : 1pm to 4pm",
            SessionTiming::Evening => "Evening : 5pm to 8pm",
        }
    }
}

// ============================================================================
// Fields
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeauticianField {
    FullName,
    FatherName,
    DateOfBirth,
    Age,
    MaritalStatus,
    CnicNo,
    Email,
    PresentAddress,
    CellNo,
    EmergencyCellNo,
    EmploymentStatus,
    EducationalLevel,
    OtherEducationName,
    PreferredTrainingPlace,
    PreferredSessionTiming,
    HasDisability,
    DisabilityType,
    SpecialCondition,
    CnicFront,
    CnicBack,
    Domicile,
    DisabilityCertificate,
}

impl FormField for BeauticianField {
    fn name(&self) -> &'static str {
        match self {
            BeauticianField::FullName => "full_name",
            BeauticianField::FatherName => "father_name",
            BeauticianField::DateOfBirth => "date_of_birth",
            BeauticianField::Age => "age",
            BeauticianField::MaritalStatus => "marital_status",
            BeauticianField::CnicNo => "cnic_no",
            BeauticianField::Email => "email",
            BeauticianField::PresentAddress => "present_address",
            BeauticianField::CellNo => "cell_no",
            BeauticianField::EmergencyCellNo => "emergency_cell_no",
            BeauticianField::EmploymentStatus => "employment_status",
            BeauticianField::EducationalLevel => "educational_level",
            BeauticianField::OtherEducationName => "other_education_name",
            BeauticianField::PreferredTrainingPlace => "preferred_training_place",
            BeauticianField::PreferredSessionTiming => "preferred_session_timing",
            BeauticianField::HasDisability => "has_disability",
            BeauticianField::DisabilityType => "disability_type",
            BeauticianField::SpecialCondition => "special_condition",
            BeauticianField::CnicFront => "cnic_front",
            BeauticianField::CnicBack => "cnic_back",
            BeauticianField::Domicile => "domicile",
            BeauticianField::DisabilityCertificate => "disability_certificate",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            BeauticianField::FullName => "Full name",
            BeauticianField::FatherName => "Father's name",
            BeauticianField::DateOfBirth => "Date of birth",
            BeauticianField::Age => "Age",
            BeauticianField::MaritalStatus => "Marital status",
            BeauticianField::CnicNo => "CNIC",
            BeauticianField::Email => "Email",
            BeauticianField::PresentAddress => "Present address",
            BeauticianField::CellNo => "Phone number",
            BeauticianField::EmergencyCellNo => "Emergency contact",
            BeauticianField::EmploymentStatus => "Employment status",
            BeauticianField::EducationalLevel => "Educational level",
            BeauticianField::OtherEducationName => "Education level name",
            BeauticianField::PreferredTrainingPlace => "Training location",
            BeauticianField::PreferredSessionTiming => "Session timing",
            BeauticianField::HasDisability => "Disability status",
            BeauticianField::DisabilityType => "Disability type",
            BeauticianField::SpecialCondition => "Special condition",
            BeauticianField::CnicFront => "CNIC Front",
            BeauticianField::CnicBack => "CNIC Back",
            BeauticianField::Domicile => "Domicile",
            BeauticianField::DisabilityCertificate => "Disability certificate",
        }
    }
}

use BeauticianField as F;

const STEPS: &[StepDefinition<BeauticianField>] = &[
    StepDefinition {
        label: "Personal Information",
        optional: &[F::Email],
        required: &[
            F::FullName,
            F::FatherName,
            F::DateOfBirth,
            F::Age,
            F::MaritalStatus,
            F::CnicNo,
            F::PresentAddress,
            F::CellNo,
            F::EmergencyCellNo,
            F::EmploymentStatus,
        ],
        conditional: &[],
    },
    StepDefinition {
        label: "Education & Training",
        optional: &[F::SpecialCondition],
        required: &[
            F::EducationalLevel,
            F::PreferredTrainingPlace,
            F::PreferredSessionTiming,
            F::HasDisability,
        ],
        conditional: &[
            ConditionalRule::new(F::OtherEducationName, F::EducationalLevel, OTHERS),
            ConditionalRule::new(F::DisabilityType, F::HasDisability, YES),
        ],
    },
    StepDefinition {
        label: "Documents",
        optional: &[F::Domicile],
        required: &[F::CnicFront, F::CnicBack],
        conditional: &[ConditionalRule::new(
            F::DisabilityCertificate,
            F::HasDisability,
            YES,
        )],
    },
];

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeauticianForm {
    pub full_name: String,
    pub father_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub age: Option<u32>,
    pub marital_status: Option<MaritalStatus>,
    pub cnic_no: String,
    pub email: String,
    pub present_address: String,
    pub cell_no: String,
    pub emergency_cell_no: String,
    pub employment_status: Option<EmploymentStatus>,
    pub educational_level: Option<EducationLevel>,
    pub other_education_name: String,
    pub preferred_training_place: Option<TrainingPlace>,
    pub preferred_session_timing: Option<SessionTiming>,
    pub has_disability: Option<Disability>,
    pub disability_type: String,
    pub special_condition: String,
    pub cnic_front: Option<FileReference>,
    pub cnic_back: Option<FileReference>,
    pub domicile: Option<FileReference>,
    pub disability_certificate: Option<FileReference>,
}

impl BeauticianForm {
    /// Leaving "Others" drops the free-text education name
    pub fn set_educational_level(&mut self, level: Option<EducationLevel>) {
        self.educational_level = level;
        if level != Some(EducationLevel::Others) {
            self.other_education_name.clear();
        }
    }

    /// "No" drops the disability type and certificate
    pub fn set_has_disability(&mut self, value: Option<Disability>) {
        self.has_disability = value;
        if value != Some(Disability::Yes) {
            self.disability_type.clear();
            self.disability_certificate = None;
        }
    }
}

impl FormSchema for BeauticianForm {
    type Field = BeauticianField;

    fn steps() -> &'static [StepDefinition<BeauticianField>] {
        STEPS
    }

    fn value(&self, field: BeauticianField) -> FieldValue<'_> {
        match field {
            F::FullName => FieldValue::Text(&self.full_name),
            F::FatherName => FieldValue::Text(&self.father_name),
            F::DateOfBirth => FieldValue::Date(self.date_of_birth),
            F::Age => FieldValue::Number(self.age),
            F::MaritalStatus => FieldValue::Choice(self.marital_status.map(|o| o.value())),
            F::CnicNo => FieldValue::Text(&self.cnic_no),
            F::Email => FieldValue::Text(&self.email),
            F::PresentAddress => FieldValue::Text(&self.present_address),
            F::CellNo => FieldValue::Text(&self.cell_no),
            F::EmergencyCellNo => FieldValue::Text(&self.emergency_cell_no),
            F::EmploymentStatus => FieldValue::Choice(self.employment_status.map(|o| o.value())),
            F::EducationalLevel => FieldValue::Choice(self.educational_level.map(|o| o.value())),
            F::OtherEducationName => FieldValue::Text(&self.other_education_name),
            F::PreferredTrainingPlace => {
                FieldValue::Choice(self.preferred_training_place.map(|o| o.value()))
            }
            F::PreferredSessionTiming => {
                FieldValue::Choice(self.preferred_session_timing.map(|o| o.value()))
            }
            F::HasDisability => FieldValue::Choice(self.has_disability.map(|o| o.value())),
            F::DisabilityType => FieldValue::Text(&self.disability_type),
            F::SpecialCondition => FieldValue::Text(&self.special_condition),
            F::CnicFront => FieldValue::File(self.cnic_front.as_ref()),
            F::CnicBack => FieldValue::File(self.cnic_back.as_ref()),
            F::Domicile => FieldValue::File(self.domicile.as_ref()),
            F::DisabilityCertificate => FieldValue::File(self.disability_certificate.as_ref()),
        }
    }

    fn check_formats(&self, step: usize, errors: &mut ValidationErrorMap) {
        if step != 1 {
            return;
        }
        check_field(errors, F::CnicNo.name(), &self.cnic_no, check_cnic);
        check_field(errors, F::CellNo.name(), &self.cell_no, check_mobile);
        check_field(errors, F::EmergencyCellNo.name(), &self.emergency_cell_no, check_mobile);
        check_field(errors, F::Email.name(), &self.email, check_email);
    }
}

impl AttachmentSlots for BeauticianForm {
    fn slot_spec(field: BeauticianField) -> Option<SlotSpec> {
        match field {
            F::CnicFront | F::CnicBack | F::Domicile | F::DisabilityCertificate => {
                Some(SlotSpec::single(IMAGES_OR_PDF))
            }
            _ => None,
        }
    }

    fn slot_mut(&mut self, field: BeauticianField) -> Option<SlotMut<'_>> {
        match field {
            F::CnicFront => Some(SlotMut::Single(&mut self.cnic_front)),
            F::CnicBack => Some(SlotMut::Single(&mut self.cnic_back)),
            F::Domicile => Some(SlotMut::Single(&mut self.domicile)),
            F::DisabilityCertificate => Some(SlotMut::Single(&mut self.disability_certificate)),
            _ => None,
        }
    }
}

impl RegistrationForm for BeauticianForm {
    const KIND: RegistrationKind = RegistrationKind::Beautician;

    fn identity_key(&self) -> String {
        normalize_cnic(self.cnic_no.trim())
    }

    fn apply_profile(&mut self, profile: &UserProfile, today: NaiveDate) {
        seed(&mut self.full_name, &profile.name);
        seed(&mut self.cnic_no, &normalize_cnic(&profile.cnic));
        seed(&mut self.cell_no, &profile.contact);
        seed(&mut self.email, &profile.email);
        seed(&mut self.present_address, &profile.address);
        if self.date_of_birth.is_none() {
            if let Some(dob) = parse_date(&profile.dob) {
                self.set_date_of_birth(Some(dob), today);
            }
        }
    }

    fn profile_snapshot(&self, updated_at: DateTime<Utc>) -> UserProfile {
        UserProfile {
            name: self.full_name.trim().to_string(),
            cnic: self.identity_key(),
            dob: date_text(self.date_of_birth),
            contact: self.cell_no.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.present_address.trim().to_string(),
            course: None,
            last_updated: Some(updated_at),
        }
    }

    fn set_date_of_birth(&mut self, dob: Option<NaiveDate>, today: NaiveDate) {
        self.date_of_birth = dob;
        self.age = dob.and_then(|d| age_on(d, today));
    }

    fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (F::FullName.name(), self.full_name.trim().to_string()),
            (F::FatherName.name(), self.father_name.trim().to_string()),
            (F::DateOfBirth.name(), date_text(self.date_of_birth)),
            (F::Age.name(), number_text(self.age)),
            (F::MaritalStatus.name(), marital_text(self.marital_status)),
            (F::CnicNo.name(), self.identity_key()),
            (F::Email.name(), self.email.trim().to_string()),
            (F::PresentAddress.name(), self.present_address.trim().to_string()),
            (F::CellNo.name(), self.cell_no.trim().to_string()),
            (F::EmergencyCellNo.name(), self.emergency_cell_no.trim().to_string()),
            (F::EmploymentStatus.name(), choice_value(self.employment_status).to_string()),
            (F::EducationalLevel.name(), choice_value(self.educational_level).to_string()),
            (F::OtherEducationName.name(), self.other_education_name.trim().to_string()),
            (
                F::PreferredTrainingPlace.name(),
                choice_value(self.preferred_training_place).to_string(),
            ),
            (
                F::PreferredSessionTiming.name(),
                choice_value(self.preferred_session_timing).to_string(),
            ),
            (F::HasDisability.name(), choice_value(self.has_disability).to_string()),
            (F::DisabilityType.name(), self.disability_type.trim().to_string()),
            (F::SpecialCondition.name(), self.special_condition.trim().to_string()),
        ]
    }

    fn file_parts(&self) -> Vec<(&'static str, FileReference)> {
        [
            (F::CnicFront, &self.cnic_front),
            (F::CnicBack, &self.cnic_back),
            (F::Domicile, &self.domicile),
            (F::DisabilityCertificate, &self.disability_certificate),
        ]
        .into_iter()
        .filter_map(|(field, file)| file.clone().map(|f| (field.name(), f)))
        .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::shared::validation::{first_step_showing, validate_all, validate_step};

    #[test]
    fn test_valid_form_passes_every_step() {
        let form = valid_form();
        for step in 1..=BeauticianForm::total_steps() {
            assert!(validate_step(&form, step).is_empty(), "step {}", step);
        }
    }

    #[test]
    fn test_empty_form_step_one_lists_required_fields() {
        let errors = validate_step(&BeauticianForm::default(), 1);
        for field in [
            "full_name",
            "father_name",
            "date_of_birth",
            "age",
            "marital_status",
            "cnic_no",
            "present_address",
            "cell_no",
            "emergency_cell_no",
            "employment_status",
        ] {
            assert!(errors.contains(field), "missing {}", field);
        }
        assert!(!errors.contains("email"));
        assert_eq!(errors.get("cnic_no"), Some("CNIC is required"));
    }

    #[test]
    fn test_bad_cnic_flagged_even_if_rest_valid() {
        let mut form = valid_form();
        form.cnic_no = "3520212345673".into();
        let errors = validate_step(&form, 1);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("cnic_no"), Some("Last digit must be even"));
    }

    #[test]
    fn test_server_errors_land_on_their_step() {
        let mut errors = ValidationErrorMap::new();
        errors.insert("domicile", "unreadable scan");
        assert_eq!(first_step_showing::<BeauticianForm>(&errors), Some(3));

        errors.insert("cnic_no", "already registered");
        assert_eq!(first_step_showing::<BeauticianForm>(&errors), Some(1));
    }

    #[test]
    fn test_optional_and_conditional_fields_have_a_step() {
        for field in [F::Email, F::SpecialCondition, F::DisabilityType, F::DisabilityCertificate] {
            assert!(STEPS.iter().any(|step| step.shows(field.name())), "{:?}", field);
        }
    }

    #[test]
    fn test_dashed_or_padded_cnic_is_flagged() {
        for raw in ["35202-1234567-2", " 3520212345672 "] {
            let mut form = valid_form();
            form.cnic_no = raw.into();
            let errors = validate_step(&form, 1);
            assert_eq!(errors.get("cnic_no"), Some("CNIC must be exactly 13 digits"), "{:?}", raw);
        }
    }

    #[test]
    fn test_bad_mobiles_and_email() {
        let mut form = valid_form();
        form.cell_no = "3001234567".into();
        form.emergency_cell_no = "0300123456".into();
        form.email = "nope".into();
        let errors = validate_step(&form, 1);
        assert!(errors.contains("cell_no"));
        assert!(errors.contains("emergency_cell_no"));
        assert!(errors.contains("email"));
    }

    #[test]
    fn test_disability_requires_type_and_certificate() {
        let mut form = valid_form();
        form.set_has_disability(Some(Disability::Yes));
        assert_eq!(validate_step(&form, 2).get("disability_type"), Some("Disability type is required"));
        assert!(validate_step(&form, 3).contains("disability_certificate"));

        form.disability_type = "Hearing".into();
        form.disability_certificate = Some(file("cert.pdf", 10));
        assert!(validate_all(&form).is_empty());

        form.set_has_disability(Some(Disability::No));
        assert!(form.disability_type.is_empty());
        assert!(form.disability_certificate.is_none());
        assert!(validate_all(&form).is_empty());
    }

    #[test]
    fn test_others_requires_education_name() {
        let mut form = valid_form();
        form.set_educational_level(Some(EducationLevel::Others));
        assert!(validate_step(&form, 2).contains("other_education_name"));
        form.other_education_name = "Diploma".into();
        assert!(validate_step(&form, 2).is_empty());
        form.set_educational_level(Some(EducationLevel::Matric));
        assert!(form.other_education_name.is_empty());
    }

    #[test]
    fn test_missing_documents() {
        let mut form = valid_form();
        form.cnic_back = None;
        let errors = validate_step(&form, 3);
        assert_eq!(errors.get("cnic_back"), Some("CNIC Back is required"));
    }

    #[test]
    fn test_profile_seeds_only_blank_fields() {
        let mut form = BeauticianForm {
            full_name: "Edited Name".into(),
            ..Default::default()
        };
        let profile = UserProfile {
            name: "Stored Name".into(),
            cnic: "35202-1234567-2".into(),
            dob: "2000-06-15".into(),
            contact: "03001234567".into(),
            email: "s@example.pk".into(),
            address: "Lahore".into(),
            ..Default::default()
        };
        form.apply_profile(&profile, today());
        assert_eq!(form.full_name, "Edited Name");
        assert_eq!(form.cnic_no, "3520212345672");
        assert_eq!(form.age, Some(24));
        assert_eq!(form.cell_no, "03001234567");
        assert_eq!(form.present_address, "Lahore");
    }

    #[test]
    fn test_snapshot_and_payload() {
        let form = valid_form();
        let snapshot = form.profile_snapshot(Utc::now());
        assert_eq!(snapshot.cnic, "3520212345672");
        assert_eq!(snapshot.dob, "2000-06-15");
        assert_eq!(snapshot.contact, "03001234567");

        let payload = crate::domain::common::build_payload(&form, "token-1");
        assert_eq!(payload.field("registration_type"), Some("beautician_course"));
        assert_eq!(payload.field("client_request_id"), Some("token-1"));
        assert_eq!(payload.field("has_disability"), Some("0"));
        assert_eq!(payload.field("domicile"), None);
        assert_eq!(payload.files_named("cnic_front").count(), 1);
        assert_eq!(payload.files.len(), 2);
    }
}
