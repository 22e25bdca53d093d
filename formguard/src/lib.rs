//! Form validation engine.
//!
//! Maps each form field to a validation rule by its classification marker, runs
//! rules on blur and on submit, and aggregates pass/fail state for the whole
//! form. The presentation host stays behind the [`Validatable`] /
//! [`FormContainer`] boundary, so the validation decisions are testable without
//! a live document.
//!
//! # Example
//!
//! ```ignore
//! use formguard::prelude::*;
//!
//! let validator = FormValidator::attach(&form);
//!
//! // when a field loses focus
//! let result = validator.validate_field(&field)?;
//!
//! // when the form is submitted
//! if validator.validate_all() {
//!     // allow the submission to proceed
//! }
//! ```

pub mod error;
pub mod range;
pub mod result;
pub mod rule;
pub mod selector;
pub mod validatable;
pub mod validator;

pub use error::UnknownFieldError;
pub use range::LengthRange;
pub use result::ValidationResult;
pub use rule::{BoundedPattern, Rule};
pub use selector::rule_for;
pub use validatable::{FormContainer, Validatable};
pub use validator::FormValidator;

pub mod prelude {
    pub use crate::error::UnknownFieldError;
    pub use crate::range::LengthRange;
    pub use crate::result::ValidationResult;
    pub use crate::rule::{BoundedPattern, Rule};
    pub use crate::selector::rule_for;
    pub use crate::validatable::{FormContainer, Validatable};
    pub use crate::validator::FormValidator;
}
