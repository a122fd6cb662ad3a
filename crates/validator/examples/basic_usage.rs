//! Basic usage example for fieldguard

use fieldguard::prelude::*;

fn main() {
    let mut fields = FieldSet::from(vec![
        Field::new("name", "Ana", rules![required(), min(3), max(64)]),
        Field::new("email", "ana@example", rules![required(), email()]),
        Field::new("password", "hunter2", rules![required(), strong_password()]),
        Field::new("age", 17, rules![required(), min(18)]),
    ]);

    // Re-parameterize a template right before validating.
    fields.set_rules(
        "age",
        rules![required(), min(18).with_message("You must be an adult to sign up")],
    );

    for field in &fields {
        println!("{field}");
    }

    match Validator::new().validate(&fields).into_result() {
        Ok(()) => println!("\n✓ all fields are valid"),
        Err(errors) => {
            println!("\n✗ {} field(s) failed:", errors.len());
            for (field, message) in &errors {
                println!("  {field}: {message}");
            }
        }
    }
}
