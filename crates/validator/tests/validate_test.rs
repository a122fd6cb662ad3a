//! End-to-end validation of a realistic sign-up form.

use fieldguard::patterns;
use fieldguard::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

// ============================================================================
// SAMPLE DATA
// ============================================================================

#[derive(Debug, Clone)]
struct SampleUser {
    id: String,
    name: String,
    email: String,
    phone: String,
    cpf_cnpj: String,
    password: String,
    age: i64,
    job: String,
    address: Address,
}

#[derive(Debug, Clone, Default)]
struct Address {
    street: String,
    number: String,
    postal_code: String,
    neighborhood: String,
    city: String,
    state: String,
}

#[fixture]
fn user() -> SampleUser {
    SampleUser {
        id: "f51abc35-4aa1-439b-a985-6d56439901d9".into(),
        name: "some random name rodriguez".into(),
        email: "user@user.com".into(),
        phone: "+55 99988-7766".into(),
        cpf_cnpj: "85.200.013/0001-67".into(),
        password: "^123!q@w#e4R5T6Y$".into(),
        age: 25,
        job: "software developer".into(),
        address: Address {
            street: "Praça Coronel Ernesto Muniz Barreto".into(),
            number: "15".into(),
            postal_code: "49750-970".into(),
            neighborhood: "brotherhood".into(),
            ..Address::default()
        },
    }
}

fn jobs() -> [&'static str; 12] {
    [
        "software developer",
        "designer",
        "devops engineer",
        "po",
        "techlead",
        "scrum master",
        "ceo",
        "marketing",
        "sales",
        "cs",
        "spider-man",
        "",
    ]
}

fn sample_fields(user: &SampleUser) -> FieldSet {
    let address = &user.address;
    FieldSet::from(vec![
        Field::new("id", &user.id, rules![required(), uuid_string()]),
        Field::new("name", &user.name, rules![required(), max(128), min(3)]),
        Field::new(
            "email",
            &user.email,
            rules![email(), required_unless([&user.cpf_cnpj, &user.phone])],
        ),
        Field::new(
            "phone",
            &user.phone,
            rules![phone(), required_unless([&user.email, &user.cpf_cnpj])],
        ),
        Field::new(
            "cpf/cnpj",
            &user.cpf_cnpj,
            rules![cpf_cnpj(), required_unless([&user.email, &user.phone])],
        ),
        Field::new("password", &user.password, rules![required(), strong_password()]),
        Field::new("age", user.age, rules![min(18), max(60)]),
        Field::new("job", &user.job, rules![one_of(jobs())]),
        Field::new("address_street", &address.street, rules![required(), max(128)]),
        Field::new(
            "address_number",
            &address.number,
            rules![required(), matches([&*patterns::ADDRESS_NUMBER])],
        ),
        Field::new(
            "address_neighborhood",
            &address.neighborhood,
            rules![required(), max(128)],
        ),
        Field::new(
            "address_city",
            &address.city,
            rules![required_unless([&address.postal_code]), max(128)],
        ),
        Field::new(
            "address_state",
            &address.state,
            rules![required_unless([&address.postal_code]), max(2)],
        ),
        Field::new("address_cep", &address.postal_code, rules![postal_code()]),
    ])
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[rstest]
fn validation_success(user: SampleUser) {
    let fields = sample_fields(&user);
    let (errors, ok) = validate(&fields);

    assert!(ok, "unexpected errors: {errors}");
    assert!(errors.is_empty());
}

#[rstest]
fn validation_failure(mut user: SampleUser) {
    user.name = "pepsimaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaannn".into();
    user.age = 17;
    user.address.postal_code = String::new();
    user.job = "pepsiman".into();
    user.password = "ZkJ{[!#".into();
    user.cpf_cnpj = "tananana tananana tananana pepsimaaaaan".into();

    let max_name_chars = i64::try_from(user.name.chars().count()).unwrap() - 1;
    let age_message = "Your beard doesn't fool me!";

    let mut fields = sample_fields(&user);
    fields
        .set_rules("name", rules![required(), max(max_name_chars)])
        .set_rules("age", rules![required(), min(18).with_message(age_message)]);

    let (errors, ok) = validate(&fields);
    let messages = Messages::default();

    assert!(!ok);
    assert_eq!(errors.get("name"), Some(messages.max_chars(max_name_chars).as_str()));
    assert_eq!(errors.get("age"), Some(age_message));
    assert_eq!(errors.get("address_city"), Some(messages.mandatory_field.as_str()));
    assert_eq!(errors.get("address_state"), Some(messages.mandatory_field.as_str()));
    assert_eq!(errors.get("job"), Some(messages.unacceptable_value.as_str()));
    assert_eq!(errors.get("password"), Some(messages.weak_password.as_str()));
    assert_eq!(errors.get("cpf/cnpj"), Some(messages.invalid_format.as_str()));
    assert_eq!(errors.len(), 7);
}

#[test]
fn empty_rule_list_is_always_valid() {
    let fields = FieldSet::from(vec![
        Field::new("anything", Value::other(&[1, 2]), Rules::new()),
        Field::new("nothing", Value::Null, rules![]),
    ]);
    assert!(validate(&fields).1);
}

#[test]
fn later_rules_are_skipped_after_a_failure() {
    let fields = FieldSet::from(vec![
        Field::new("first", "", rules![required(), max(0).with_message("unreachable")]),
        Field::new("second", "ok", rules![required()]),
    ]);

    let (errors, ok) = validate(&fields);
    assert!(!ok);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("first"), Some("This field is required"));
}

#[rstest]
fn upsert_replaces_template_field(user: SampleUser) {
    let mut fields = sample_fields(&user);
    fields.upsert_field("age", Field::new("age", 70, rules![max(65)]));

    let (errors, _) = validate(&fields);
    assert_eq!(errors.get("age"), Some("Maximum value: 65"));
    assert_eq!(fields.len(), 14);
}

#[test]
fn errors_serialize_as_flat_object() {
    let fields = FieldSet::from(vec![Field::new("email", "qqq@aaa", rules![email()])]);
    let (errors, _) = validate(&fields);

    let json = serde_json::to_string(&errors).unwrap();
    assert_eq!(json, r#"{"email":"Invalid format"}"#);
}

#[test]
fn report_into_result_propagates() {
    fn register(fields: &FieldSet) -> Result<(), ErrorMap> {
        Validator::new().validate(fields).into_result()?;
        Ok(())
    }

    let bad = FieldSet::from(vec![Field::new("pwd", "password", rules![strong_password()])]);
    let err = register(&bad).unwrap_err();
    assert_eq!(err.get("pwd"), Some("Password is too weak"));

    let good = FieldSet::from(vec![Field::new("pwd", "$s3NH@!X", rules![strong_password()])]);
    assert!(register(&good).is_ok());
}

#[test]
fn translated_catalog() {
    let messages = Messages::from_json(
        r#"{
            "mandatory_field": "Campo obrigatório",
            "max_chars": "Máximo de {limit} caracteres"
        }"#,
    )
    .unwrap();
    let validator = Validator::with_messages(messages);

    let fields = FieldSet::from(vec![
        Field::new("name", "", rules![required()]),
        Field::new("state", "MGX", rules![max(2)]),
    ]);
    let report = validator.validate(&fields);

    assert_eq!(report.errors().get("name"), Some("Campo obrigatório"));
    assert_eq!(report.errors().get("state"), Some("Máximo de 2 caracteres"));
}
