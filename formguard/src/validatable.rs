//! Host-side traits for fields that participate in validation.

/// A form field the validator can read and mark.
///
/// This is the boundary to the presentation host: the validator reads the live
/// value and classification through it, and pushes the errored/valid marking
/// back through [`set_error`](Self::set_error) /
/// [`clear_error`](Self::clear_error).
pub trait Validatable {
    /// Stable identity of the field, used for lookup.
    fn field_id(&self) -> String;

    /// The field's current value, read live.
    fn value(&self) -> String;

    /// The field's most specific (last-applied) classification marker, if it
    /// has one.
    fn classification(&self) -> Option<String>;

    /// Show the field's error-message element with the given text and apply
    /// the errored indicator.
    fn set_error(&self, msg: impl Into<String>);

    /// Hide the field's error-message element and apply the valid indicator.
    fn clear_error(&self);
}

/// A form container that can enumerate its validatable fields.
pub trait FormContainer {
    /// The field handle type this container yields.
    type Field: Validatable;

    /// All fields carrying a validation marker, in document order.
    fn validatable_fields(&self) -> Vec<Self::Field>;
}
