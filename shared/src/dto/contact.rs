use crate::validation::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contact form submission.
///
/// `phone` and `department` may be empty; an empty department means
/// "not selected".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub department: String,
    pub message: String,
}

impl ContactRequest {
    /// Copy with surrounding whitespace removed from every field.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            department: self.department.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Selected department, `None` when empty or unknown.
    pub fn department(&self) -> Option<Department> {
        self.department.trim().parse().ok()
    }
}

/// Departments a message can be routed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    General,
    Operations,
    Hr,
    Media,
    Sustainability,
    Procurement,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::General,
        Department::Operations,
        Department::Hr,
        Department::Media,
        Department::Sustainability,
        Department::Procurement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::General => "general",
            Department::Operations => "operations",
            Department::Hr => "hr",
            Department::Media => "media",
            Department::Sustainability => "sustainability",
            Department::Procurement => "procurement",
        }
    }

    /// Translation key of the option label.
    pub fn label_key(&self) -> String {
        format!("contact.form.departments.{}", self.as_str())
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|department| department.as_str() == s)
            .ok_or_else(|| format!("unknown department: {s}"))
    }
}

/// Acknowledgement of an accepted message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactResponse {
    /// Opaque reference the sender can quote in follow-ups.
    pub reference: String,
    pub message: String,
}

/// Error body returned by every API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    /// Stable machine code, e.g. `Validation` or `NotFound`.
    pub code: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_to_empty() {
        let request: ContactRequest = serde_json::from_str(
            r#"{ "name": "Mona", "email": "mona@example.com", "message": "Hi" }"#,
        )
        .unwrap();
        assert!(request.phone.is_empty());
        assert_eq!(request.department(), None);
    }

    #[test]
    fn test_department_parsing() {
        let request = ContactRequest {
            department: " hr ".to_string(),
            ..Default::default()
        };
        assert_eq!(request.department(), Some(Department::Hr));
        assert_eq!(Department::Hr.label_key(), "contact.form.departments.hr");
        assert!("finance".parse::<Department>().is_err());
        assert_eq!(
            serde_json::to_string(&Department::Procurement).unwrap(),
            "\"procurement\""
        );
    }

    #[test]
    fn test_error_response_omits_empty_fields() {
        let body = ErrorResponse {
            error: "Not found".to_string(),
            code: "NotFound".to_string(),
            fields: Vec::new(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"Not found","code":"NotFound"}"#
        );
    }
}
