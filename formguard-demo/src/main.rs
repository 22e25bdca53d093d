//! Demo bootstrap: builds an in-memory form, attaches validation, and runs a
//! blur-then-submit session against it.

mod form;

use form::{Field, Form, Outline, VALIDATION_MARKER};
use formguard::prelude::*;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    // the form a page would declare: one marker to opt into validation, the
    // last marker classifies the field
    let mut form = Form::new();
    let username = form.add_field(Field::new([VALIDATION_MARKER, "name"]));
    let password = form.add_field(Field::new([VALIDATION_MARKER, "password"]));
    let comment = form.add_field(Field::new([VALIDATION_MARKER, "text"]));
    let nickname = form.add_field(Field::new([VALIDATION_MARKER]));

    let validator = FormValidator::attach(&form);

    // the user types a name and tabs away; blur validates just that field
    username.set_value("Margaret Ada");
    let result = validator
        .validate_field(&username)
        .expect("field is registered");
    println!("blur on {}: {:?}", username.field_id(), result);

    // first submit attempt, with the remaining fields untouched
    submit(&form, &validator);

    // fill in the rest and retry
    password.set_value("correct horse battery");
    comment.set_value("hello");
    nickname.set_value("mags");
    submit(&form, &validator);
}

/// Submit handler: the default action proceeds only when the whole form is
/// valid.
fn submit(form: &Form, validator: &FormValidator<Field>) {
    if validator.validate_all() {
        println!("form accepted, submission proceeds");
        return;
    }

    println!("form rejected, submission suppressed");
    for field in form.validatable_fields() {
        if field.outline() == Outline::Errored {
            let message = field.error().unwrap_or_default();
            println!("  {}: {}", field.field_id(), message);
        }
    }
}
