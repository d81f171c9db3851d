//! Selector options shared by the registration forms
//!
//! `value()` is what goes over the wire and what conditional rules compare
//! against; `label()` is what the user sees.

pub trait ChoiceOption: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    fn all() -> &'static [Self];

    fn value(&self) -> &'static str;

    fn label(&self) -> &'static str {
        self.value()
    }

    fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.value() == value)
    }
}

/// Value of the "Others" education option, the trigger for `other_education_name`
pub const OTHERS: &str = "Others";
/// Value of "has disability = yes"
pub const YES: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    Single,
    Married,
    Widow,
    Divorcee,
}

impl ChoiceOption for MaritalStatus {
    fn all() -> &'static [Self] {
        &[
            MaritalStatus::Single,
            MaritalStatus::Married,
            MaritalStatus::Widow,
            MaritalStatus::Divorcee,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Widow => "Widow",
            MaritalStatus::Divorcee => "Divorcee",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentStatus {
    Unemployed,
    Student,
    SelfEmployed,
    Job,
}

impl ChoiceOption for EmploymentStatus {
    fn all() -> &'static [Self] {
        &[
            EmploymentStatus::Unemployed,
            EmploymentStatus::Student,
            EmploymentStatus::SelfEmployed,
            EmploymentStatus::Job,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            EmploymentStatus::Unemployed => "Unemployed",
            EmploymentStatus::Student => "Student",
            EmploymentStatus::SelfEmployed => "Self-employment / Small Business",
            EmploymentStatus::Job => "Job",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EmploymentStatus::SelfEmployed => "Self-employed",
            EmploymentStatus::Job => "Employed",
            other => other.value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    BsHonors,
    BaBsc,
    FaFsc,
    Matric,
    Middle,
    Primary,
    Literate,
    Illiterate,
    Others,
}

impl ChoiceOption for EducationLevel {
    fn all() -> &'static [Self] {
        &[
            EducationLevel::BsHonors,
            EducationLevel::BaBsc,
            EducationLevel::FaFsc,
            EducationLevel::Matric,
            EducationLevel::Middle,
            EducationLevel::Primary,
            EducationLevel::Literate,
            EducationLevel::Illiterate,
            EducationLevel::Others,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            EducationLevel::BsHonors => "BS Honors (16 Years Edu)",
            EducationLevel::BaBsc => "BA/BSC (14 Years Edu)",
            EducationLevel::FaFsc => "FA/FSC",
            EducationLevel::Matric => "Matric",
            EducationLevel::Middle => "Middle",
            EducationLevel::Primary => "Primary",
            EducationLevel::Literate => "literate",
            EducationLevel::Illiterate => "Illiterate",
            EducationLevel::Others => OTHERS,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EducationLevel::BsHonors => "BS Honors (16 Years)",
            EducationLevel::BaBsc => "BA/BSC (14 Years)",
            EducationLevel::Literate => "Literate",
            other => other.value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disability {
    Yes,
    No,
}

impl ChoiceOption for Disability {
    fn all() -> &'static [Self] {
        &[Disability::Yes, Disability::No]
    }

    fn value(&self) -> &'static str {
        match self {
            Disability::Yes => YES,
            Disability::No => "0",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Disability::Yes => "Yes",
            Disability::No => "No",
        }
    }
}

/// Wire value of an optional selection, `""` when nothing is selected
pub fn choice_value<O: ChoiceOption>(option: Option<O>) -> &'static str {
    option.map(|o| o.value()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_round_trips_every_option() {
        for level in EducationLevel::all() {
            assert_eq!(EducationLevel::from_value(level.value()), Some(*level));
        }
        assert_eq!(EmploymentStatus::from_value("Self-employment / Small Business"), Some(EmploymentStatus::SelfEmployed));
        assert_eq!(MaritalStatus::from_value("single"), None);
    }

    #[test]
    fn test_choice_value_blank_when_unset() {
        assert_eq!(choice_value::<Disability>(None), "");
        assert_eq!(choice_value(Some(Disability::Yes)), "1");
    }
}
