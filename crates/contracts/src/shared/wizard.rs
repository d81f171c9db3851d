//! Step Sequencer
//!
//! Finite-state machine over `Step(1..=N)`. Advancing is gated by the step
//! validator; going back never is. Visual effects (scrolling, animation)
//! belong to the caller and are keyed off the returned transition.

use super::validation::{validate_step, FormSchema, ValidationErrorMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTransition {
    Moved { from: usize, to: usize },
    /// Already at a bound
    Stayed(usize),
}

impl StepTransition {
    pub fn moved(&self) -> bool {
        matches!(self, StepTransition::Moved { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSequencer {
    current: usize,
    total: usize,
}

impl StepSequencer {
    /// Starts at step 1. A form with no steps is treated as a single step.
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn for_form<S: FormSchema>() -> Self {
        Self::new(S::total_steps())
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Validate the current step and move forward when it is clean.
    ///
    /// On errors the state is unchanged and the map is returned. At the
    /// terminal step a clean validation still leaves the sequencer there.
    pub fn advance<S: FormSchema>(&mut self, form: &S) -> Result<StepTransition, ValidationErrorMap> {
        let errors = validate_step(form, self.current);
        if !errors.is_empty() {
            return Err(errors);
        }
        if self.is_last() {
            return Ok(StepTransition::Stayed(self.current));
        }
        let from = self.current;
        self.current += 1;
        Ok(StepTransition::Moved {
            from,
            to: self.current,
        })
    }

    pub fn retreat(&mut self) -> StepTransition {
        if self.is_first() {
            return StepTransition::Stayed(self.current);
        }
        let from = self.current;
        self.current -= 1;
        StepTransition::Moved {
            from,
            to: self.current,
        }
    }

    /// Jump back to an earlier step, e.g. the first one with errors after a
    /// failed submit. Forward jumps are ignored.
    pub fn rewind_to(&mut self, step: usize) -> StepTransition {
        if step >= 1 && step < self.current {
            let from = self.current;
            self.current = step;
            StepTransition::Moved { from, to: step }
        } else {
            StepTransition::Stayed(self.current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{FieldValue, FormField, StepDefinition};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Only;

    impl FormField for Only {
        fn name(&self) -> &'static str {
            "only"
        }

        fn label(&self) -> &'static str {
            "Only"
        }
    }

    #[derive(Default)]
    struct OneField {
        only: String,
    }

    const STEPS: &[StepDefinition<Only>] = &[
        StepDefinition {
            label: "A",
            optional: &[],
            required: &[Only],
            conditional: &[],
        },
        StepDefinition {
            label: "B",
            optional: &[],
            required: &[],
            conditional: &[],
        },
        StepDefinition {
            label: "C",
            optional: &[],
            required: &[],
            conditional: &[],
        },
    ];

    impl FormSchema for OneField {
        type Field = Only;

        fn steps() -> &'static [StepDefinition<Only>] {
            STEPS
        }

        fn value(&self, _field: Only) -> FieldValue<'_> {
            FieldValue::Text(&self.only)
        }
    }

    #[test]
    fn test_advance_blocked_by_errors() {
        let mut seq = StepSequencer::for_form::<OneField>();
        let form = OneField::default();
        let errors = seq.advance(&form).unwrap_err();
        assert!(errors.contains("only"));
        assert_eq!(seq.current(), 1);
    }

    #[test]
    fn test_advance_until_terminal_then_stay() {
        let mut seq = StepSequencer::for_form::<OneField>();
        let form = OneField { only: "x".into() };
        assert_eq!(seq.advance(&form), Ok(StepTransition::Moved { from: 1, to: 2 }));
        assert_eq!(seq.advance(&form), Ok(StepTransition::Moved { from: 2, to: 3 }));
        assert_eq!(seq.advance(&form), Ok(StepTransition::Stayed(3)));
        assert!(seq.is_last());
    }

    #[test]
    fn test_retreat_never_validates_and_stops_at_one() {
        let mut seq = StepSequencer::for_form::<OneField>();
        let mut form = OneField { only: "x".into() };
        seq.advance(&form).unwrap();
        form.only.clear();
        assert_eq!(seq.retreat(), StepTransition::Moved { from: 2, to: 1 });
        assert_eq!(seq.retreat(), StepTransition::Stayed(1));
        assert_eq!(seq.current(), 1);
    }

    #[test]
    fn test_rewind_only_goes_back() {
        let mut seq = StepSequencer::new(3);
        let form = OneField { only: "x".into() };
        seq.advance(&form).unwrap();
        seq.advance(&form).unwrap();
        assert_eq!(seq.rewind_to(5), StepTransition::Stayed(3));
        assert_eq!(seq.rewind_to(1), StepTransition::Moved { from: 3, to: 1 });
    }
}
