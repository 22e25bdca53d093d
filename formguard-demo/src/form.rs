//! In-memory form host.
//!
//! Stands in for the document: fields carry marker lists, an error-message
//! slot, and an outline state, and the form enumerates the fields that opted
//! into validation.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use formguard::prelude::*;

/// Marker a field must carry to participate in validation.
pub const VALIDATION_MARKER: &str = "validated";

/// Unique identifier for a form field instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Outline drawn around a field after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outline {
    /// Not validated yet.
    #[default]
    None,
    /// Last validation failed.
    Errored,
    /// Last validation passed.
    Valid,
}

/// Internal state for a form field
#[derive(Debug, Default)]
struct FieldInner {
    /// Current text value
    value: String,
    /// Error-message element content, shown while `Some`
    error: Option<String>,
    /// Visual indicator state
    outline: Outline,
}

/// A text field with shared interior state.
///
/// Clones share the same underlying state, so a handle held by the validator
/// observes values typed through any other handle.
#[derive(Debug)]
pub struct Field {
    id: FieldId,
    markers: Vec<String>,
    inner: Arc<RwLock<FieldInner>>,
}

impl Field {
    /// Creates a field carrying the given markers, in application order.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: FieldId::new(),
            markers: markers.into_iter().map(Into::into).collect(),
            inner: Arc::new(RwLock::new(FieldInner::default())),
        }
    }

    /// Set the field's value, as if the user typed into it.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
    }

    /// Get the field's current value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Content of the error-message element, if currently shown.
    pub fn error(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.error.clone())
    }

    /// Current outline state.
    pub fn outline(&self) -> Outline {
        self.inner
            .read()
            .map(|guard| guard.outline)
            .unwrap_or_default()
    }

    /// Whether this field opted into validation.
    pub fn is_validatable(&self) -> bool {
        self.markers.iter().any(|marker| marker == VALIDATION_MARKER)
    }
}

impl Clone for Field {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            markers: self.markers.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Validatable for Field {
    fn field_id(&self) -> String {
        self.id.to_string()
    }

    fn value(&self) -> String {
        Field::value(self)
    }

    fn classification(&self) -> Option<String> {
        self.markers.last().cloned()
    }

    fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
            guard.outline = Outline::Errored;
        }
    }

    fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = None;
            guard.outline = Outline::Valid;
        }
    }
}

/// An in-memory form: a flat list of fields in document order.
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, returning a handle that shares its state.
    pub fn add_field(&mut self, field: Field) -> Field {
        self.fields.push(field.clone());
        field
    }
}

impl FormContainer for Form {
    type Field = Field;

    fn validatable_fields(&self) -> Vec<Field> {
        self.fields
            .iter()
            .filter(|field| field.is_validatable())
            .cloned()
            .collect()
    }
}
