//! Classification-keyed rule selection.

use crate::range::LengthRange;
use crate::rule::{BoundedPattern, Rule};

/// Letters and whitespace only.
const NAME_PATTERN: &str = r"^[a-zA-Z\s]+$";

/// Selects the rule for a classification marker.
///
/// Recognized markers are `text`, `name`, and `password`; anything else
/// degrades to [`Rule::NoOp`]. Every call returns a fresh rule instance, so
/// fields never share rule objects.
pub fn rule_for(classification: &str) -> Rule {
    match classification {
        "text" => Rule::BoundedPattern(BoundedPattern::new(LengthRange::new(0, 32))),
        "name" => Rule::BoundedPattern(BoundedPattern::with_pattern(
            LengthRange::new(0, 32),
            NAME_PATTERN,
        )),
        "password" => Rule::BoundedPattern(BoundedPattern::new(LengthRange::new(0, 64))),
        _ => Rule::NoOp,
    }
}
