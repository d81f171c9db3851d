use chrono::{DateTime, NaiveDate, Utc};

use super::options::{Campus, ClassTiming, Course, SessionDays};
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

pub const COURSE_NOT_OFFERED: &str = "Selected course is not offered at this campus";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HospitalityField {
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
    PreferredCourse,
    PreferredTrainingPlace,
    PreferredSessionTiming,
    PreferredClassesTiming,
    HasDisability,
    DisabilityType,
    SpecialCondition,
    CnicFrontPath,
    CnicBackPath,
    DomicilePath,
    DisabilityCertificatePath,
}

impl FormField for HospitalityField {
    fn name(&self) -> &'static str {
        match self {
            HospitalityField::FullName => "full_name",
            HospitalityField::FatherName => "father_name",
            HospitalityField::DateOfBirth => "date_of_birth",
            HospitalityField::Age => "age",
            HospitalityField::MaritalStatus => "marital_status",
            HospitalityField::CnicNo => "cnic_no",
            HospitalityField::Email => "email",
            HospitalityField::PresentAddress => "present_address",
            HospitalityField::CellNo => "cell_no",
            HospitalityField::EmergencyCellNo => "emergency_cell_no",
            HospitalityField::EmploymentStatus => "employment_status",
            HospitalityField::EducationalLevel => "educational_level",
            HospitalityField::OtherEducationName => "other_education_name",
            HospitalityField::PreferredCourse => "preferred_course",
            HospitalityField::PreferredTrainingPlace => "preferred_training_place",
            HospitalityField::PreferredSessionTiming => "preferred_session_timing",
            HospitalityField::PreferredClassesTiming => "preferred_classes_timing",
            HospitalityField::HasDisability => "has_disability",
            HospitalityField::DisabilityType => "disability_type",
            HospitalityField::SpecialCondition => "special_condition",
            HospitalityField::CnicFrontPath => "cnic_front_path",
            HospitalityField::CnicBackPath => "cnic_back_path",
            HospitalityField::DomicilePath => "domicile_path",
            HospitalityField::DisabilityCertificatePath => "disability_certificate_path",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            HospitalityField::FullName => "Full name",
            HospitalityField::FatherName => "Father's name",
            HospitalityField::DateOfBirth => "Date of birth",
            HospitalityField::Age => "Age",
            HospitalityField::MaritalStatus => "Marital status",
            HospitalityField::CnicNo => "CNIC",
            HospitalityField::Email => "Email",
            HospitalityField::PresentAddress => "Present address",
            HospitalityField::CellNo => "Phone number",
            HospitalityField::EmergencyCellNo => "Emergency contact",
            HospitalityField::EmploymentStatus => "Employment status",
            HospitalityField::EducationalLevel => "Educational level",
            HospitalityField::OtherEducationName => "Education level name",
            HospitalityField::PreferredCourse => "Course selection",
            HospitalityField::PreferredTrainingPlace => "Training location",
            HospitalityField::PreferredSessionTiming => "Session days",
            HospitalityField::PreferredClassesTiming => "Class timing",
            HospitalityField::HasDisability => "Disability status",
            HospitalityField::DisabilityType => "Disability type",
            HospitalityField::SpecialCondition => "Special condition",
            HospitalityField::CnicFrontPath => "CNIC Front",
            HospitalityField::CnicBackPath => "CNIC Back",
            HospitalityField::DomicilePath => "Domicile",
            HospitalityField::DisabilityCertificatePath => "Disability certificate",
        }
    }
}

use HospitalityField as F;

const STEPS: &[StepDefinition<HospitalityField>] = &[
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
        label: "Course",
        optional: &[F::SpecialCondition],
        required: &[
            F::EducationalLevel,
            F::PreferredCourse,
            F::PreferredTrainingPlace,
            F::PreferredSessionTiming,
            F::PreferredClassesTiming,
            F::HasDisability,
        ],
        conditional: &[
            ConditionalRule::new(F::OtherEducationName, F::EducationalLevel, OTHERS),
            ConditionalRule::new(F::DisabilityType, F::HasDisability, YES),
        ],
    },
    StepDefinition {
        label: "Documents",
        optional: &[F::DomicilePath],
        required: &[F::CnicFrontPath, F::CnicBackPath],
        conditional: &[ConditionalRule::new(
            F::DisabilityCertificatePath,
            F::HasDisability,
            YES,
        )],
    },
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HospitalityForm {
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
    pub preferred_course: Option<Course>,
    pub preferred_training_place: Option<Campus>,
    pub preferred_session_timing: Option<SessionDays>,
    pub preferred_classes_timing: Option<ClassTiming>,
    pub has_disability: Option<Disability>,
    pub disability_type: String,
    pub special_condition: String,
    pub cnic_front_path: Option<FileReference>,
    pub cnic_back_path: Option<FileReference>,
    pub domicile_path: Option<FileReference>,
    pub disability_certificate_path: Option<FileReference>,
}

impl HospitalityForm {
    /// Switching campus drops a course the new campus does not offer
    pub fn set_training_place(&mut self, campus: Option<Campus>) {
        self.preferred_training_place = campus;
        match (campus, self.preferred_course) {
            (Some(campus), Some(course)) if !course.offered_at(campus) => {
                self.preferred_course = None
            }
            (None, _) => self.preferred_course = None,
            _ => {}
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
            self.disability_certificate_path = None;
        }
    }

    /// Courses selectable for the current campus
    pub fn available_courses(&self) -> Vec<Course> {
        self.preferred_training_place
            .map(|campus| campus.courses())
            .unwrap_or_default()
    }
}

impl FormSchema for HospitalityForm {
    type Field = HospitalityField;

    fn steps() -> &'static [StepDefinition<HospitalityField>] {
        STEPS
    }

    fn value(&self, field: HospitalityField) -> FieldValue<'_> {
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
            F::PreferredCourse => FieldValue::Choice(self.preferred_course.map(|o| o.value())),
            F::PreferredTrainingPlace => {
                FieldValue::Choice(self.preferred_training_place.map(|o| o.value()))
            }
            F::PreferredSessionTiming => {
                FieldValue::Choice(self.preferred_session_timing.map(|o| o.value()))
            }
            F::PreferredClassesTiming => {
                FieldValue::Choice(self.preferred_classes_timing.map(|o| o.value()))
            }
            F::HasDisability => FieldValue::Choice(self.has_disability.map(|o| o.value())),
            F::DisabilityType => FieldValue::Text(&self.disability_type),
            F::SpecialCondition => FieldValue::Text(&self.special_condition),
            F::CnicFrontPath => FieldValue::File(self.cnic_front_path.as_ref()),
            F::CnicBackPath => FieldValue::File(self.cnic_back_path.as_ref()),
            F::DomicilePath => FieldValue::File(self.domicile_path.as_ref()),
            F::DisabilityCertificatePath => {
                FieldValue::File(self.disability_certificate_path.as_ref())
            }
        }
    }

    fn check_formats(&self, step: usize, errors: &mut ValidationErrorMap) {
        match step {
            1 => {
                check_field(errors, F::CnicNo.name(), &self.cnic_no, check_cnic);
                check_field(errors, F::CellNo.name(), &self.cell_no, check_mobile);
                check_field(errors, F::EmergencyCellNo.name(), &self.emergency_cell_no, check_mobile);
                check_field(errors, F::Email.name(), &self.email, check_email);
            }
            2 => {
                if let (Some(course), Some(campus)) =
                    (self.preferred_course, self.preferred_training_place)
                {
                    if !course.offered_at(campus) {
                        errors.insert_if_absent(F::PreferredCourse.name(), COURSE_NOT_OFFERED);
                    }
                }
            }
            _ => {}
        }
    }
}

impl AttachmentSlots for HospitalityForm {
    fn slot_spec(field: HospitalityField) -> Option<SlotSpec> {
        match field {
            F::CnicFrontPath | F::CnicBackPath | F::DomicilePath | F::DisabilityCertificatePath => {
                Some(SlotSpec::single(IMAGES_OR_PDF))
            }
            _ => None,
        }
    }

    fn slot_mut(&mut self, field: HospitalityField) -> Option<SlotMut<'_>> {
        match field {
            F::CnicFrontPath => Some(SlotMut::Single(&mut self.cnic_front_path)),
            F::CnicBackPath => Some(SlotMut::Single(&mut self.cnic_back_path)),
            F::DomicilePath => Some(SlotMut::Single(&mut self.domicile_path)),
            F::DisabilityCertificatePath => {
                Some(SlotMut::Single(&mut self.disability_certificate_path))
            }
            _ => None,
        }
    }
}

impl RegistrationForm for HospitalityForm {
    const KIND: RegistrationKind = RegistrationKind::Hospitality;

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
            course: self.preferred_course.map(|c| c.value().to_string()),
            last_updated: Some(updated_at),
        }
    }

    fn set_date_of_birth(&mut self, dob: Option<NaiveDate>, today: NaiveDate) {
        self.date_of_birth = dob;
        self.age = dob.and_then(|d| age_on(d, today));
    }

    fn text_fields(&self) -> Vec<(&'static str, String)> {
        let text = |value: &String| value.trim().to_string();
        vec![
            (F::FullName.name(), text(&self.full_name)),
            (F::FatherName.name(), text(&self.father_name)),
            (F::DateOfBirth.name(), date_text(self.date_of_birth)),
            (F::Age.name(), number_text(self.age)),
            (F::MaritalStatus.name(), marital_text(self.marital_status)),
            (F::CnicNo.name(), self.identity_key()),
            (F::Email.name(), text(&self.email)),
            (F::PresentAddress.name(), text(&self.present_address)),
            (F::CellNo.name(), text(&self.cell_no)),
            (F::EmergencyCellNo.name(), text(&self.emergency_cell_no)),
            (F::EmploymentStatus.name(), choice_value(self.employment_status).to_string()),
            (F::EducationalLevel.name(), choice_value(self.educational_level).to_string()),
            (F::OtherEducationName.name(), text(&self.other_education_name)),
            (F::PreferredCourse.name(), choice_value(self.preferred_course).to_string()),
            (
                F::PreferredTrainingPlace.name(),
                choice_value(self.preferred_training_place).to_string(),
            ),
            (
                F::PreferredSessionTiming.name(),
                choice_value(self.preferred_session_timing).to_string(),
            ),
            (
                F::PreferredClassesTiming.name(),
                choice_value(self.preferred_classes_timing).to_string(),
            ),
            (F::HasDisability.name(), choice_value(self.has_disability).to_string()),
            (F::DisabilityType.name(), text(&self.disability_type)),
            (F::SpecialCondition.name(), text(&self.special_condition)),
        ]
    }

    fn file_parts(&self) -> Vec<(&'static str, FileReference)> {
        [
            (F::CnicFrontPath, &self.cnic_front_path),
            (F::CnicBackPath, &self.cnic_back_path),
            (F::DomicilePath, &self.domicile_path),
            (F::DisabilityCertificatePath, &self.disability_certificate_path),
        ]
        .into_iter()
        .filter_map(|(field, file)| file.clone().map(|f| (field.name(), f)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{validate_all, validate_step};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    fn image(name: &str) -> FileReference {
        FileReference::new(format!("h-{}", name), "image/png", name, 2048)
    }

    fn valid_form() -> HospitalityForm {
        let mut form = HospitalityForm {
            full_name: "Hina Aslam".into(),
            father_name: "Aslam Pervaiz".into(),
            marital_status: Some(MaritalStatus::Single),
            cnic_no: "3410112345674".into(),
            present_address: "Gujranwala".into(),
            cell_no: "03121234567".into(),
            emergency_cell_no: "03131234567".into(),
            employment_status: Some(EmploymentStatus::Unemployed),
            educational_level: Some(EducationLevel::Matric),
            preferred_training_place: Some(Campus::Gujranwala),
            preferred_course: Some(Course::BakingPatisserie),
            preferred_session_timing: Some(SessionDays::ThursdaySaturday),
            preferred_classes_timing: Some(ClassTiming::Morning),
            has_disability: Some(Disability::No),
            cnic_front_path: Some(image("front.png")),
            cnic_back_path: Some(image("back.png")),
            ..Default::default()
        };
        form.set_date_of_birth(NaiveDate::from_ymd_opt(1999, 12, 31), today());
        form
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_all(&valid_form()).is_empty());
    }

    #[test]
    fn test_course_must_be_offered_at_campus() {
        let mut form = valid_form();
        form.preferred_course = Some(Course::RetailSkills);
        assert_eq!(validate_step(&form, 2).get("preferred_course"), Some(COURSE_NOT_OFFERED));
    }

    #[test]
    fn test_switching_campus_drops_unavailable_course() {
        let mut form = valid_form();
        form.set_training_place(Some(Campus::Lahore));
        form.preferred_course = Some(Course::TravelAirline);

        form.set_training_place(Some(Campus::Multan));
        assert_eq!(form.preferred_course, None);
        assert_eq!(
            validate_step(&form, 2).get("preferred_course"),
            Some("Course selection is required")
        );

        form.preferred_course = Some(Course::CulinaryArts);
        form.set_training_place(Some(Campus::Faisalabad));
        assert_eq!(form.preferred_course, Some(Course::CulinaryArts));
    }

    #[test]
    fn test_class_timing_required() {
        let mut form = valid_form();
        form.preferred_classes_timing = None;
        assert_eq!(
            validate_step(&form, 2).get("preferred_classes_timing"),
            Some("Class timing is required")
        );
    }

    #[test]
    fn test_slots_use_path_names() {
        let mut form = valid_form();
        form.cnic_front_path = None;
        form.set_has_disability(Some(Disability::Yes));
        let errors = validate_step(&form, 3);
        assert!(errors.contains("cnic_front_path"));
        assert!(errors.contains("disability_certificate_path"));

        let payload = crate::domain::common::build_payload(&valid_form(), "t");
        assert_eq!(payload.files_named("cnic_back_path").count(), 1);
        assert_eq!(payload.field("registration_type"), Some("hospitality_course"));
    }

    #[test]
    fn test_snapshot_records_course() {
        let snapshot = valid_form().profile_snapshot(Utc::now());
        assert_eq!(snapshot.course.as_deref(), Some("Baking & Patisserie"));
        assert_eq!(snapshot.dob, "1999-12-31");
    }
}
