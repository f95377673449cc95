//! Turns `validator` failures into the first human readable rule message.
//!
//! Fields are checked in the order the caller lists them. Within a field the
//! rules rank as `required`, `email`, then length bounds, so the reported
//! message is the first rule a client would trip over.

use validator::{ValidationError, ValidationErrors};

/// Message builders for the rules the commands use
pub struct RuleMessage;

impl RuleMessage {
    pub fn required(field: &str) -> String {
        format!("The {} field is required.", attribute(field))
    }

    pub fn email(field: &str) -> String {
        format!("The {} field must be a valid email address.", attribute(field))
    }

    pub fn max(field: &str, max: u64) -> String {
        format!(
            "The {} field must not be greater than {} characters.",
            attribute(field),
            max
        )
    }

    pub fn min(field: &str, min: u64) -> String {
        format!("The {} field must be at least {} characters.", attribute(field), min)
    }

    pub fn confirmed(field: &str) -> String {
        format!("The {} field confirmation does not match.", attribute(field))
    }

    pub fn taken(field: &str) -> String {
        format!("The {} has already been taken.", attribute(field))
    }

    fn invalid(field: &str) -> String {
        format!("The {} field is invalid.", attribute(field))
    }
}

/// First failing rule among `fields`, in order
pub fn first_violation(errors: Option<&ValidationErrors>, fields: &[&str]) -> Option<String> {
    let field_errors = errors?.field_errors();

    fields.iter().find_map(|field| {
        field_errors
            .get(*field)
            .and_then(|errors| errors.iter().min_by_key(|e| rank(e)))
            .map(|error| describe(field, error))
    })
}

fn rank(error: &ValidationError) -> u8 {
    match &*error.code {
        "required" => 0,
        "email" => 1,
        "max" | "min" => 2,
        _ => 3,
    }
}

fn describe(field: &str, error: &ValidationError) -> String {
    let bound = |name: &str| error.params.get(name).and_then(|v| v.as_u64());

    match &*error.code {
        "required" => RuleMessage::required(field),
        "email" => RuleMessage::email(field),
        "max" => bound("max")
            .map(|max| RuleMessage::max(field, max))
            .unwrap_or_else(|| RuleMessage::invalid(field)),
        "min" => bound("min")
            .map(|min| RuleMessage::min(field, min))
            .unwrap_or_else(|| RuleMessage::invalid(field)),
        _ => RuleMessage::invalid(field),
    }
}

fn attribute(field: &str) -> String {
    field.replace('_', " ")
}

/// Trim surrounding whitespace and treat a blank value as absent
pub(crate) fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Secrets keep their whitespace; only an empty value counts as absent
pub(crate) fn normalize_secret(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn error(code: &'static str, param: Option<(&'static str, u64)>) -> ValidationError {
        let mut error = ValidationError::new(code);
        if let Some((name, value)) = param {
            error.add_param(Cow::Borrowed(name), &value);
        }
        error
    }

    #[test]
    fn test_fields_are_checked_in_given_order() {
        let mut errors = ValidationErrors::new();
        errors.add("password", error("required", None));
        errors.add("name", error("max", Some(("max", 255))));

        let message = first_violation(Some(&errors), &["name", "email", "password"]);
        assert_eq!(
            message.as_deref(),
            Some("The name field must not be greater than 255 characters.")
        );
    }

    #[test]
    fn test_email_rule_outranks_length() {
        let mut errors = ValidationErrors::new();
        errors.add("email", error("max", Some(("max", 255))));
        errors.add("email", error("email", None));

        let message = first_violation(Some(&errors), &["email"]);
        assert_eq!(message.as_deref(), Some("The email field must be a valid email address."));
    }

    #[test]
    fn test_no_errors_yields_none() {
        assert_eq!(first_violation(None, &["name"]), None);

        let mut errors = ValidationErrors::new();
        errors.add("password", error("min", Some(("min", 6))));
        assert_eq!(first_violation(Some(&errors), &["name", "email"]), None);
    }

    #[test]
    fn test_attribute_names_use_spaces() {
        assert_eq!(
            RuleMessage::required("password_confirmation"),
            "The password confirmation field is required."
        );
        assert_eq!(RuleMessage::taken("email"), "The email has already been taken.");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Some("  Dune ".to_string())), Some("Dune".to_string()));
        assert_eq!(normalize(Some("   ".to_string())), None);
        assert_eq!(normalize_secret(Some(" pass ".to_string())), Some(" pass ".to_string()));
        assert_eq!(normalize_secret(Some(String::new())), None);
    }
}
