//! Declarative step tables and the generic step validator
//!
//! A form describes its steps as static data: which fields are required and
//! which are required only while another field holds a sentinel value. One
//! routine evaluates those tables for every form, and the form adds its
//! format checks on top.

use super::error_map::ValidationErrorMap;
use crate::shared::attachment::FileReference;
use chrono::NaiveDate;
use std::fmt::Debug;

/// A typed field of a form
pub trait FormField: Copy + Eq + Debug + Send + Sync + 'static {
    /// Wire name, used as multipart key and error-map key
    fn name(&self) -> &'static str;

    /// Human label, used in messages
    fn label(&self) -> &'static str;
}

/// Current value of a field, as seen by the validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// Wire value of the selected option
    Choice(Option<&'static str>),
    Date(Option<NaiveDate>),
    Number(Option<u32>),
    File(Option<&'a FileReference>),
    Files(&'a [FileReference]),
}

impl FieldValue<'_> {
    /// Empty after trimming, nothing selected, or no attachment
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Choice(c) => c.is_none(),
            FieldValue::Date(d) => d.is_none(),
            FieldValue::Number(n) => n.is_none(),
            FieldValue::File(f) => f.is_none(),
            FieldValue::Files(files) => files.is_empty(),
        }
    }

    /// Whether the field currently holds `sentinel`
    pub fn equals(&self, sentinel: &str) -> bool {
        match self {
            FieldValue::Text(s) => *s == sentinel,
            FieldValue::Choice(Some(c)) => *c == sentinel,
            _ => false,
        }
    }
}

/// `dependent` is required only while `trigger` equals `trigger_value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalRule<F: 'static> {
    pub dependent: F,
    pub trigger: F,
    pub trigger_value: &'static str,
}

impl<F: FormField> ConditionalRule<F> {
    pub const fn new(dependent: F, trigger: F, trigger_value: &'static str) -> Self {
        Self {
            dependent,
            trigger,
            trigger_value,
        }
    }

    pub fn is_active<S>(&self, form: &S) -> bool
    where
        S: FormSchema<Field = F> + ?Sized,
    {
        form.value(self.trigger).equals(self.trigger_value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StepDefinition<F: 'static> {
    pub label: &'static str,
    pub required: &'static [F],
    pub conditional: &'static [ConditionalRule<F>],
    /// Shown on this step but never required
    pub optional: &'static [F],
}

impl<F: FormField> StepDefinition<F> {
    /// Whether the field called `name` is rendered on this step
    pub fn shows(&self, name: &str) -> bool {
        self.required
            .iter()
            .chain(self.optional)
            .chain(self.conditional.iter().flat_map(|rule| [&rule.dependent, &rule.trigger]))
            .any(|field| field.name() == name)
    }
}

pub trait FormSchema {
    type Field: FormField;

    /// Ordered steps; step numbers are 1-based indexes into this slice
    fn steps() -> &'static [StepDefinition<Self::Field>];

    fn value(&self, field: Self::Field) -> FieldValue<'_>;

    /// Format checks for the fields of `step`.
    ///
    /// Called after the required/conditional pass, so implementations use
    /// `insert_if_absent` and skip blank optional values.
    fn check_formats(&self, _step: usize, _errors: &mut ValidationErrorMap) {}

    fn total_steps() -> usize {
        Self::steps().len()
    }
}

pub fn required_message(label: &str) -> String {
    format!("{} is required", label)
}

/// Validate one step against the form as it is right now.
///
/// Pure: the same form and step always give the same map. Unknown step
/// numbers validate to an empty map.
pub fn validate_step<S: FormSchema>(form: &S, step: usize) -> ValidationErrorMap {
    let mut errors = ValidationErrorMap::new();
    let Some(definition) = step.checked_sub(1).and_then(|i| S::steps().get(i)) else {
        return errors;
    };

    for field in definition.required {
        if form.value(*field).is_blank() {
            errors.insert_if_absent(field.name(), required_message(field.label()));
        }
    }

    for rule in definition.conditional {
        if rule.is_active(form) && form.value(rule.dependent).is_blank() {
            errors.insert_if_absent(rule.dependent.name(), required_message(rule.dependent.label()));
        }
    }

    form.check_formats(step, &mut errors);
    errors
}

/// Replay every step, first error per field wins
pub fn validate_all<S: FormSchema>(form: &S) -> ValidationErrorMap {
    let mut errors = ValidationErrorMap::new();
    for step in 1..=S::total_steps() {
        errors.merge(validate_step(form, step));
    }
    errors
}

/// First step (1-based) that has an error in `errors`, if any.
///
/// Lets a screen jump back to the offending step after a failed submit.
pub fn first_step_with_errors<S: FormSchema>(form: &S, errors: &ValidationErrorMap) -> Option<usize> {
    (1..=S::total_steps()).find(|step| {
        validate_step(form, *step)
            .iter()
            .any(|(field, _)| errors.contains(field))
    })
}

/// First step (1-based) showing any field named in `errors`.
///
/// Unlike `first_step_with_errors` this does not replay validation, so it
/// also places errors the server raised against locally valid values.
pub fn first_step_showing<S: FormSchema>(errors: &ValidationErrorMap) -> Option<usize> {
    S::steps()
        .iter()
        .position(|step| errors.iter().any(|(field, _)| step.shows(field)))
        .map(|index| index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum PetField {
        Name,
        HasPet,
        PetName,
    }

    impl FormField for PetField {
        fn name(&self) -> &'static str {
            match self {
                PetField::Name => "name",
                PetField::HasPet => "has_pet",
                PetField::PetName => "pet_name",
            }
        }

        fn label(&self) -> &'static str {
            match self {
                PetField::Name => "Name",
                PetField::HasPet => "Pet status",
                PetField::PetName => "Pet name",
            }
        }
    }

    #[derive(Default)]
    struct PetForm {
        name: String,
        has_pet: Option<&'static str>,
        pet_name: String,
    }

    const STEPS: &[StepDefinition<PetField>] = &[
        StepDefinition {
            label: "One",
            optional: &[],
            required: &[PetField::Name],
            conditional: &[],
        },
        StepDefinition {
            label: "Two",
            optional: &[],
            required: &[PetField::HasPet],
            conditional: &[ConditionalRule::new(PetField::PetName, PetField::HasPet, "1")],
        },
    ];

    impl FormSchema for PetForm {
        type Field = PetField;

        fn steps() -> &'static [StepDefinition<PetField>] {
            STEPS
        }

        fn value(&self, field: PetField) -> FieldValue<'_> {
            match field {
                PetField::Name => FieldValue::Text(&self.name),
                PetField::HasPet => FieldValue::Choice(self.has_pet),
                PetField::PetName => FieldValue::Text(&self.pet_name),
            }
        }
    }

    #[test]
    fn test_whitespace_is_blank() {
        let form = PetForm {
            name: "   ".into(),
            ..Default::default()
        };
        let errors = validate_step(&form, 1);
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_conditional_rule_only_when_triggered() {
        let mut form = PetForm {
            has_pet: Some("0"),
            ..Default::default()
        };
        assert!(validate_step(&form, 2).is_empty());

        form.has_pet = Some("1");
        let errors = validate_step(&form, 2);
        assert_eq!(errors.get("pet_name"), Some("Pet name is required"));
    }

    #[test]
    fn test_unknown_step_is_empty() {
        let form = PetForm::default();
        assert!(validate_step(&form, 0).is_empty());
        assert!(validate_step(&form, 3).is_empty());
    }

    #[test]
    fn test_validate_all_covers_every_step() {
        let form = PetForm::default();
        let errors = validate_all(&form);
        assert!(errors.contains("name"));
        assert!(errors.contains("has_pet"));
        assert_eq!(first_step_with_errors(&form, &errors), Some(1));
    }

    #[test]
    fn test_first_step_showing_places_server_errors() {
        let mut errors = ValidationErrorMap::new();
        assert_eq!(first_step_showing::<PetForm>(&errors), None);

        errors.insert("pet_name", "taken");
        assert_eq!(first_step_showing::<PetForm>(&errors), Some(2));

        errors.insert("name", "already registered");
        assert_eq!(first_step_showing::<PetForm>(&errors), Some(1));

        let mut unknown = ValidationErrorMap::new();
        unknown.insert("captcha", "wrong");
        assert_eq!(first_step_showing::<PetForm>(&unknown), None);
    }

    #[test]
    fn test_validation_is_repeatable() {
        let form = PetForm {
            has_pet: Some("1"),
            ..Default::default()
        };
        assert_eq!(validate_all(&form), validate_all(&form));
    }
}
