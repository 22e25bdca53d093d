use formguard::rule::Rule;
use formguard::selector::rule_for;

#[test]
fn test_text_rule_bounds_length() {
    let rule = rule_for("text");
    assert!(rule.validate("hello").is_valid());
    assert!(rule.validate("").is_invalid());
    assert!(rule.validate(&"a".repeat(33)).is_invalid());
}

#[test]
fn test_name_rule_accepts_letters_and_whitespace() {
    let rule = rule_for("name");
    assert!(rule.validate("Ada Lovelace").is_valid());
}

#[test]
fn test_name_rule_rejects_digits() {
    let rule = rule_for("name");
    let result = rule.validate("123");
    assert!(result.is_invalid());
    assert_eq!(
        result.message(),
        Some("Value does not match the expected pattern")
    );
}

#[test]
fn test_password_rule_allows_64_characters() {
    let rule = rule_for("password");
    assert!(rule.validate(&"x".repeat(64)).is_valid());
    assert!(rule.validate(&"x".repeat(65)).is_invalid());
}

#[test]
fn test_password_rule_allows_symbols() {
    let rule = rule_for("password");
    assert!(rule.validate("p@ss w0rd!").is_valid());
}

#[test]
fn test_unknown_marker_selects_noop() {
    let rule = rule_for("bogus-key");
    assert!(matches!(rule, Rule::NoOp));
    assert!(rule.validate("").is_valid());
    assert!(rule.validate(&"a".repeat(1000)).is_valid());
}

#[test]
fn test_empty_marker_selects_noop() {
    assert!(matches!(rule_for(""), Rule::NoOp));
}
