//! Validation rules.

use regex::Regex;

use crate::range::LengthRange;
use crate::result::ValidationResult;

/// Matches any value, including the empty string.
const MATCH_ANYTHING: &str = r"[\s\S]*";

/// A self-contained validity check for one field value.
///
/// The rule set is closed: fields receive a variant through
/// [`rule_for`](crate::selector::rule_for) and every variant is evaluated
/// through [`Rule::validate`].
#[derive(Debug, Clone)]
pub enum Rule {
    /// Accepts every value.
    NoOp,
    /// Bounds the value's character count and tests it against a pattern.
    BoundedPattern(BoundedPattern),
}

impl Rule {
    /// Validates a field value.
    pub fn validate(&self, value: &str) -> ValidationResult {
        match self {
            Self::NoOp => ValidationResult::Valid,
            Self::BoundedPattern(rule) => rule.validate(value),
        }
    }
}

/// Range-bounded pattern rule for text values.
#[derive(Debug, Clone)]
pub struct BoundedPattern {
    pattern: Regex,
    range: LengthRange,
}

impl BoundedPattern {
    /// Creates a rule that only bounds the value's length.
    pub fn new(range: LengthRange) -> Self {
        Self::with_pattern(range, MATCH_ANYTHING)
    }

    /// Creates a rule with an explicit pattern.
    ///
    /// Panics when the pattern does not compile; rule patterns are fixed at
    /// construction time and a bad one is a programmer error.
    pub fn with_pattern(range: LengthRange, pattern: &str) -> Self {
        let pattern = Regex::new(pattern).expect("Invalid regex pattern");
        Self { pattern, range }
    }

    /// Validates a text value.
    ///
    /// The character count is checked against the range first; a value that
    /// fails it never reports a pattern failure in the same call.
    pub fn validate(&self, value: &str) -> ValidationResult {
        let length = value.chars().count();

        if !self.range.contains(length) {
            return ValidationResult::Invalid(format!(
                "Text length must be between {} and {}",
                self.range.min(),
                self.range.max()
            ));
        }

        if !self.pattern.is_match(value) {
            return ValidationResult::Invalid("Value does not match the expected pattern".into());
        }

        ValidationResult::Valid
    }
}
