//! # Contact Form Validation
//!
//! Shared by the front end (inline errors, submission blocked) and the server
//! (422 response). Each failure carries a stable translation key so both sides
//! render the same message in the active language.

use crate::dto::contact::ContactRequest;
use lib_utils::{validate_email, validate_max_length, validate_not_empty};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_PHONE_LEN: usize = 32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Department,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Department => "department",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    InvalidEmail,
    TooLong,
    UnknownDepartment,
}

impl FieldErrorKind {
    pub fn translation_key(&self) -> &'static str {
        match self {
            FieldErrorKind::Required => "contact.errors.required",
            FieldErrorKind::InvalidEmail => "contact.errors.email",
            FieldErrorKind::TooLong => "contact.errors.tooLong",
            FieldErrorKind::UnknownDepartment => "contact.errors.department",
        }
    }
}

/// One invalid field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{}: {}", .field.as_str(), .key)]
pub struct FieldError {
    pub field: ContactField,
    pub kind: FieldErrorKind,
    /// Translation key of the message shown beside the field.
    pub key: String,
}

impl FieldError {
    pub fn new(field: ContactField, kind: FieldErrorKind) -> Self {
        Self {
            field,
            kind,
            key: kind.translation_key().to_string(),
        }
    }
}

/// Every invalid field of one submission, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} invalid contact field(s)", .0.len())]
pub struct ContactFormErrors(pub Vec<FieldError>);

impl ContactFormErrors {
    pub fn for_field(&self, field: ContactField) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

/// Validate a submission. Name, email and message are required; email must
/// look like an address; the message is capped at `max_message_len` characters.
pub fn validate_contact(
    request: &ContactRequest,
    max_message_len: usize,
) -> Result<(), ContactFormErrors> {
    let mut errors = Vec::new();
    let mut push = |field, kind| errors.push(FieldError::new(field, kind));

    if validate_not_empty(&request.name, "Name").is_err() {
        push(ContactField::Name, FieldErrorKind::Required);
    } else if validate_max_length(request.name.trim(), MAX_NAME_LEN, "Name").is_err() {
        push(ContactField::Name, FieldErrorKind::TooLong);
    }

    if validate_not_empty(&request.email, "Email").is_err() {
        push(ContactField::Email, FieldErrorKind::Required);
    } else if validate_email(&request.email).is_err() {
        push(ContactField::Email, FieldErrorKind::InvalidEmail);
    }

    if validate_max_length(request.phone.trim(), MAX_PHONE_LEN, "Phone").is_err() {
        push(ContactField::Phone, FieldErrorKind::TooLong);
    }

    if !request.department.trim().is_empty() && request.department().is_none() {
        push(ContactField::Department, FieldErrorKind::UnknownDepartment);
    }

    if validate_not_empty(&request.message, "Message").is_err() {
        push(ContactField::Message, FieldErrorKind::Required);
    } else if validate_max_length(request.message.trim(), max_message_len, "Message").is_err() {
        push(ContactField::Message, FieldErrorKind::TooLong);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ContactFormErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactRequest {
        ContactRequest {
            name: "Mona Hassan".to_string(),
            email: "mona@example.com".to_string(),
            phone: String::new(),
            department: "operations".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(validate_contact(&valid(), 5000), Ok(()));
    }

    #[test]
    fn test_required_fields_reported_in_form_order() {
        // Arrange
        let request = ContactRequest::default();

        // Act
        let errors = validate_contact(&request, 5000).unwrap_err();

        // Assert
        let fields: Vec<_> = errors.iter().map(|error| error.field).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert!(errors.iter().all(|error| error.key == "contact.errors.required"));
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let request = ContactRequest {
            name: "   ".to_string(),
            ..valid()
        };
        let errors = validate_contact(&request, 5000).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.for_field(ContactField::Name).unwrap().kind,
            FieldErrorKind::Required
        );
    }

    #[test]
    fn test_malformed_email_and_department() {
        let request = ContactRequest {
            email: "mona-at-example".to_string(),
            department: "finance".to_string(),
            ..valid()
        };
        let errors = validate_contact(&request, 5000).unwrap_err();
        assert_eq!(
            errors.for_field(ContactField::Email).unwrap().key,
            "contact.errors.email"
        );
        assert_eq!(
            errors.for_field(ContactField::Department).unwrap().kind,
            FieldErrorKind::UnknownDepartment
        );
    }

    #[test]
    fn test_message_length_limit() {
        let request = ContactRequest {
            message: "x".repeat(11),
            ..valid()
        };
        let errors = validate_contact(&request, 10).unwrap_err();
        assert_eq!(
            errors.for_field(ContactField::Message).unwrap().kind,
            FieldErrorKind::TooLong
        );
        assert_eq!(errors.to_string(), "1 invalid contact field(s)");
    }

    #[test]
    fn test_field_error_wire_format() {
        let error = FieldError::new(ContactField::Email, FieldErrorKind::InvalidEmail);
        assert_eq!(
            serde_json::to_string(&error).unwrap(),
            r#"{"field":"email","kind":"invalid_email","key":"contact.errors.email"}"#
        );
    }
}
