//! Form validator: owns the field-to-rule mapping and aggregates outcomes.

use log::debug;

use crate::error::UnknownFieldError;
use crate::result::ValidationResult;
use crate::rule::Rule;
use crate::selector::rule_for;
use crate::validatable::{FormContainer, Validatable};

/// One form field registered for validation, with its assigned rule.
///
/// The rule assignment is fixed at construction and never reassigned; the
/// value is always read live through the handle.
struct TrackedField<F> {
    handle: F,
    rule: Rule,
}

/// Runs validation for one form.
///
/// Construction scans the form once for fields carrying a validation marker
/// and assigns each a rule keyed by its classification. The host invokes
/// [`validate_field`](Self::validate_field) when a field loses focus and
/// [`validate_all`](Self::validate_all) when the form is submitted, suppressing
/// the submission when the latter returns `false`.
pub struct FormValidator<F: Validatable> {
    fields: Vec<TrackedField<F>>,
}

impl<F: Validatable> FormValidator<F> {
    /// Attaches a validator to a form container.
    ///
    /// Attaching twice to the same container produces two independent
    /// validators; they share no state.
    pub fn attach<C>(container: &C) -> Self
    where
        C: FormContainer<Field = F>,
    {
        let fields: Vec<_> = container
            .validatable_fields()
            .into_iter()
            .map(|handle| {
                let classification = handle.classification().unwrap_or_default();
                let rule = rule_for(&classification);
                TrackedField { handle, rule }
            })
            .collect();

        debug!("validator attached, tracking {} field(s)", fields.len());

        Self { fields }
    }

    /// Validates a single field and marks it errored or valid.
    ///
    /// Returns [`UnknownFieldError`] for a handle the validator never
    /// registered; that is a programmer error, not a recoverable condition.
    pub fn validate_field(&self, field: &F) -> Result<ValidationResult, UnknownFieldError> {
        let field_id = field.field_id();
        let tracked = self
            .fields
            .iter()
            .find(|tracked| tracked.handle.field_id() == field_id)
            .ok_or_else(|| UnknownFieldError::new(field_id))?;

        Ok(Self::run(tracked))
    }

    /// Validates every tracked field, in registration order.
    ///
    /// Returns `true` iff every field is valid. Does not stop at the first
    /// failure: every field is evaluated and marked, so the form shows its
    /// complete state.
    pub fn validate_all(&self) -> bool {
        let mut all_valid = true;

        for tracked in &self.fields {
            if Self::run(tracked).is_invalid() {
                all_valid = false;
            }
        }

        all_valid
    }

    /// Number of tracked fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Check if the validator tracks no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Runs one field's rule on its live value and pushes the marking side
    /// effect through the handle.
    fn run(tracked: &TrackedField<F>) -> ValidationResult {
        let result = tracked.rule.validate(&tracked.handle.value());

        match &result {
            ValidationResult::Valid => tracked.handle.clear_error(),
            ValidationResult::Invalid(msg) => tracked.handle.set_error(msg.clone()),
        }

        debug!("validated '{}': {:?}", tracked.handle.field_id(), result);

        result
    }
}
