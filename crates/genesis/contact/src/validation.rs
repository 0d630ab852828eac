//! Field rules shared by the form and the backend

use crate::project::ProjectType;
use crate::submission::{ContactInput, ContactSubmission, Field};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::OnceLock;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Machine-readable kind of a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// Missing field or wrong JSON type
    InvalidType,
    /// Shorter than the minimum length
    TooSmall,
    /// Does not match the expected string format
    InvalidString,
    /// Not one of the allowed values
    InvalidEnumValue,
    /// Body is not valid JSON
    InvalidJson,
    /// Body exceeds the size the server accepts
    TooBig,
}

/// One broken rule, addressed by its JSON path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Empty for violations about the body as a whole
    pub path: Vec<String>,
    pub code: ViolationCode,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: Field, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.as_str().to_string()],
            code,
            message: message.into(),
        }
    }

    pub fn body(code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            code,
            message: message.into(),
        }
    }

    pub fn field(&self) -> Option<Field> {
        match self.path.as_slice() {
            [key] => Field::parse(key),
            _ => None,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.message)
        }
    }
}

/// Non-empty list of violations, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} validation error(s): {}", .0.len(), summary(.0))]
pub struct ValidationErrors(Vec<FieldViolation>);

fn summary(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.0
    }

    /// First message reported for a field, for inline display
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|v| v.field() == Some(field))
            .map(|v| v.message.as_str())
    }

    /// Fields with at least one violation, without duplicates
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = self.0.iter().filter_map(FieldViolation::field).collect();
        fields.dedup();
        fields
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldViolation;
    type IntoIter = std::vec::IntoIter<FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

/// Standard address grammar: local part, `@`, dotted domain with a 2+ letter TLD
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_pattern().is_match(email)
}

fn check_field(field: Field, value: &str, violations: &mut Vec<FieldViolation>) {
    match field {
        Field::Name => {
            if value.chars().count() < NAME_MIN_CHARS {
                violations.push(FieldViolation::new(
                    field,
                    ViolationCode::TooSmall,
                    "Name must be at least 2 characters",
                ));
            }
        }
        Field::Email => {
            if !is_valid_email(value) {
                violations.push(FieldViolation::new(
                    field,
                    ViolationCode::InvalidString,
                    "Invalid email address",
                ));
            }
        }
        Field::Project => {
            if value.is_empty() {
                violations.push(FieldViolation::new(
                    field,
                    ViolationCode::TooSmall,
                    "Please select a project type",
                ));
            } else if value.parse::<ProjectType>().is_err() {
                violations.push(FieldViolation::new(
                    field,
                    ViolationCode::InvalidEnumValue,
                    "Invalid project type",
                ));
            }
        }
        Field::Message => {
            if value.chars().count() < MESSAGE_MIN_CHARS {
                violations.push(FieldViolation::new(
                    field,
                    ViolationCode::TooSmall,
                    "Message must be at least 10 characters",
                ));
            }
        }
    }
}

fn build(input: &ContactInput) -> Result<ContactSubmission, ValidationErrors> {
    let normalized = ContactInput::new(
        input.name.trim(),
        input.email.trim(),
        input.project.trim(),
        input.message.trim(),
    );

    let mut violations = Vec::new();
    for field in Field::ALL {
        check_field(field, normalized.get(field), &mut violations);
    }
    if !violations.is_empty() {
        return Err(ValidationErrors(violations));
    }

    let project = normalized
        .project
        .parse::<ProjectType>()
        .map_err(|e| ValidationErrors(vec![FieldViolation::new(
            Field::Project,
            ViolationCode::InvalidEnumValue,
            e.to_string(),
        )]))?;

    Ok(ContactSubmission {
        name: normalized.name,
        email: normalized.email,
        project,
        message: normalized.message,
    })
}

/// Validate raw form input
///
/// Surrounding whitespace is trimmed before the rules run; the returned
/// submission carries the trimmed values. Pure: the same input always
/// yields the same result.
pub fn validate(input: &ContactInput) -> Result<ContactSubmission, ValidationErrors> {
    build(input)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate an untrusted JSON object
///
/// Missing and non-string fields are reported alongside rule violations of
/// the fields that are present, so an empty object yields one violation per
/// field.
pub fn validate_value(value: &Value) -> Result<ContactSubmission, ValidationErrors> {
    let object = match value {
        Value::Object(map) => map,
        other => {
            return Err(ValidationErrors(vec![FieldViolation::body(
                ViolationCode::InvalidType,
                format!("Expected object, received {}", json_type(other)),
            )]))
        }
    };

    let mut input = ContactInput::default();
    let mut type_errors = Vec::new();
    for field in Field::ALL {
        match object.get(field.as_str()) {
            Some(Value::String(s)) => input.set(field, s.as_str()),
            None => type_errors.push(FieldViolation::new(
                field,
                ViolationCode::InvalidType,
                "Required",
            )),
            Some(other) => type_errors.push(FieldViolation::new(
                field,
                ViolationCode::InvalidType,
                format!("Expected string, received {}", json_type(other)),
            )),
        }
    }

    if type_errors.is_empty() {
        return build(&input);
    }

    // Rule checks only for the fields that had a usable string
    let broken: Vec<Field> = type_errors.iter().filter_map(FieldViolation::field).collect();
    let mut violations = Vec::new();
    for field in Field::ALL {
        if broken.contains(&field) {
            violations.extend(type_errors.iter().filter(|v| v.field() == Some(field)).cloned());
        } else {
            check_field(field, input.get(field).trim(), &mut violations);
        }
    }
    Err(ValidationErrors(violations))
}

/// Parse and validate a raw request body
///
/// An empty body counts as `{}`. Invalid JSON yields a single body-level
/// violation.
pub fn parse_body(body: &[u8]) -> Result<ContactSubmission, ValidationErrors> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return validate_value(&Value::Object(Map::new()));
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        ValidationErrors(vec![FieldViolation::body(
            ViolationCode::InvalidJson,
            format!("Malformed JSON body: {}", e),
        )])
    })?;
    validate_value(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn input(name: &str, email: &str, project: &str, message: &str) -> ContactInput {
        ContactInput::new(name, email, project, message)
    }

    #[test]
    fn accepts_well_formed_input() {
        let submission = validate(&input(
            "Anna",
            "anna@example.com",
            "website",
            "This is long enough.",
        ))
        .unwrap();
        assert_eq!(submission.name(), "Anna");
        assert_eq!(submission.project(), ProjectType::Website);
    }

    #[test]
    fn short_message_is_reported() {
        let errors = validate(&input("Al", "x@x.com", "website", "short")).unwrap_err();
        assert_eq!(errors.fields(), vec![Field::Message]);
        assert_eq!(
            errors.message_for(Field::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn one_letter_name_is_reported_with_the_message() {
        let errors = validate(&input("A", "x@x.com", "website", "short")).unwrap_err();
        assert_eq!(errors.fields(), vec![Field::Name, Field::Message]);
    }

    #[test]
    fn bad_email_is_the_only_violation() {
        let errors = validate(&input(
            "Anna",
            "bad-email",
            "website",
            "This is long enough.",
        ))
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.fields(), vec![Field::Email]);
        assert_eq!(errors.as_slice()[0].code, ViolationCode::InvalidString);
    }

    #[test]
    fn project_must_be_selected_and_known() {
        let errors = validate(&input("Anna", "a@b.io", "", "This is long enough.")).unwrap_err();
        assert_eq!(errors.message_for(Field::Project), Some("Please select a project type"));

        let errors =
            validate(&input("Anna", "a@b.io", "spaceship", "This is long enough.")).unwrap_err();
        assert_eq!(errors.as_slice()[0].code, ViolationCode::InvalidEnumValue);
    }

    #[test]
    fn whitespace_is_trimmed_before_length_checks() {
        let errors = validate(&input("  A  ", "a@b.io", "other", "          x")).unwrap_err();
        assert_eq!(errors.fields(), vec![Field::Name, Field::Message]);

        let ok = validate(&input(" Jan ", " jan@example.com ", "other", "Hello, I need a site"))
            .unwrap();
        assert_eq!(ok.name(), "Jan");
        assert_eq!(ok.email(), "jan@example.com");
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert!(validate(&input("Łó", "a@b.io", "other", "日本語のメッセージです")).is_ok());
    }

    #[test]
    fn email_grammar() {
        for good in ["x@x.com", "first.last+tag@sub.example.org", "o'neil@example.ie"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in [
            "bad-email",
            "@example.com",
            "a@b",
            "a@b.c",
            ".a@example.com",
            "a..b@example.com",
            "a@-b.com",
            "a b@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn empty_object_yields_four_required_violations() {
        let errors = validate_value(&json!({})).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors
            .iter()
            .all(|v| v.code == ViolationCode::InvalidType && v.message == "Required"));
        assert_eq!(
            errors.fields(),
            vec![Field::Name, Field::Email, Field::Project, Field::Message]
        );
    }

    #[test]
    fn wrong_types_and_rule_violations_are_combined() {
        let errors = validate_value(&json!({
            "name": 42,
            "email": "nope",
            "project": "website",
            "message": "This is long enough."
        }))
        .unwrap_err();
        assert_eq!(errors.fields(), vec![Field::Name, Field::Email]);
        assert_eq!(
            errors.message_for(Field::Name),
            Some("Expected string, received number")
        );
    }

    #[test]
    fn non_object_body_is_rejected() {
        let errors = validate_value(&json!(["a"])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.as_slice()[0].path.is_empty());
    }

    #[test]
    fn parse_body_handles_empty_and_malformed_input() {
        assert_eq!(parse_body(b"").unwrap_err().len(), 4);
        assert_eq!(parse_body(b"  \n").unwrap_err().len(), 4);

        let errors = parse_body(b"{not json").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.as_slice()[0].code, ViolationCode::InvalidJson);
    }

    #[test]
    fn violations_serialize_with_path_code_and_message() {
        let errors = validate(&input("Anna", "bad", "website", "This is long enough.")).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            json!([{ "path": ["email"], "code": "invalid_string", "message": "Invalid email address" }])
        );
    }

    proptest! {
        #[test]
        fn validate_is_pure(
            name in ".{0,12}",
            email in "[a-z.@]{0,16}",
            project in prop_oneof![Just("website".to_string()), ".{0,8}"],
            message in ".{0,24}",
        ) {
            let raw = input(&name, &email, &project, &message);
            prop_assert_eq!(validate(&raw), validate(&raw));
        }

        #[test]
        fn server_and_client_rules_agree(
            name in "[A-Za-z ]{0,8}",
            message in "[a-z ]{0,16}",
        ) {
            let raw = input(&name, "jan@example.com", "tutorial", &message);
            let body = serde_json::to_value(&raw).unwrap();
            prop_assert_eq!(validate(&raw), validate_value(&body));
        }
    }
}
