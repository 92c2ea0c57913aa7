use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::RelayError;

pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const MESSAGE_MAX: usize = 1000;

/// Fields read from the body of `POST /api/send-contact`.
///
/// A field is `None` when the key is absent or its value is falsy, so that
/// case is reported as a missing field (400).
#[derive(Debug, Default, PartialEq)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("body is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("body is JSON null")]
    Null,
}

/// A submission that passed validation. All fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Payload for the mail provider's `POST /emails`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

impl ContactRequest {
    /// Parses the raw body regardless of its content type.
    ///
    /// Non-object JSON yields an empty request. Only text, non-zero numbers
    /// and `true` count as field values.
    pub fn from_body(body: &[u8]) -> Result<Self, BodyError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Err(BodyError::Null),
            Value::Object(mut fields) => Ok(ContactRequest {
                name: text_field(fields.remove("name")),
                email: text_field(fields.remove("email")),
                message: text_field(fields.remove("message")),
            }),
            _ => Ok(ContactRequest::default()),
        }
    }

    pub fn validate(self) -> Result<ContactSubmission, RelayError> {
        let name = required(self.name);
        let email = required(self.email);
        let message = required(self.message);

        let (Some(name), Some(email), Some(message)) = (name, email, message) else {
            return Err(RelayError::MissingFields);
        };

        check_length("Name", &name, NAME_MAX)?;
        check_length("E-Mail", &email, EMAIL_MAX)?;
        check_length("Nachricht", &message, MESSAGE_MAX)?;

        if !looks_like_email(&email) {
            return Err(RelayError::InvalidEmail);
        }

        Ok(ContactSubmission { name, email, message })
    }
}

impl ContactSubmission {
    pub fn to_email(&self, from: &str, to: &[String]) -> OutgoingEmail {
        let name = escape_html(&self.name);
        let email = escape_html(&self.email);
        let message = escape_html(&self.message).replace('\n', "<br>");

        OutgoingEmail {
            from: from.to_string(),
            to: to.to_vec(),
            subject: format!("Neue Kontaktanfrage von {}", self.name),
            html: format!(
                "<h2>Neue Kontaktanfrage</h2>\n\
                 <p><strong>Name:</strong> {}</p>\n\
                 <p><strong>E-Mail:</strong> {}</p>\n\
                 <p><strong>Nachricht:</strong></p>\n\
                 <p>{}</p>",
                name, email, message
            ),
            reply_to: Some(self.email.clone()),
        }
    }
}

fn text_field(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), RelayError> {
    if value.chars().count() > max {
        return Err(RelayError::FieldTooLong { field, max });
    }
    Ok(())
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn reads_body_without_caring_about_shape_of_values() {
        let request =
            ContactRequest::from_body(br#"{"name": 42, "email": "ada@example.com", "message": true}"#)
                .unwrap();
        assert_eq!(request.name.as_deref(), Some("42"));
        assert_eq!(request.message.as_deref(), Some("true"));
    }

    #[test]
    fn falsy_values_count_as_absent() {
        let request =
            ContactRequest::from_body(br#"{"name": 0, "email": false, "message": null}"#).unwrap();
        assert_eq!(request, ContactRequest::default());

        let request = ContactRequest::from_body(br#"{"name": ["Ada"], "email": {}}"#).unwrap();
        assert_eq!(request, ContactRequest::default());
    }

    #[test]
    fn non_object_json_is_an_empty_request() {
        let bodies: [&[u8]; 3] = [b"5", b"\"Ada\"", b"[1, 2]"];
        for body in bodies {
            assert_eq!(ContactRequest::from_body(body).unwrap(), ContactRequest::default());
        }
    }

    #[test]
    fn unreadable_and_null_bodies_fail_to_parse() {
        assert!(matches!(ContactRequest::from_body(b"name=Ada"), Err(BodyError::Json(_))));
        assert!(matches!(ContactRequest::from_body(b""), Err(BodyError::Json(_))));
        assert!(matches!(ContactRequest::from_body(b"null"), Err(BodyError::Null)));
    }

    #[test]
    fn trims_fields() {
        let submission = request("  Ada ", " ada@example.com\n", "\tHallo ")
            .validate()
            .unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Hallo");
    }

    #[test]
    fn blank_field_counts_as_missing() {
        let err = request("Ada", "ada@example.com", "   ").validate().unwrap_err();
        assert!(matches!(err, RelayError::MissingFields));

        let err = ContactRequest {
            name: Some("Ada".into()),
            email: None,
            message: Some("Hi".into()),
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, RelayError::MissingFields));
    }

    #[test]
    fn enforces_form_limits() {
        let long_name = "a".repeat(NAME_MAX + 1);
        let err = request(&long_name, "ada@example.com", "Hi").validate().unwrap_err();
        assert!(matches!(err, RelayError::FieldTooLong { field: "Name", max: NAME_MAX }));

        let exact = "ü".repeat(MESSAGE_MAX);
        assert!(request("Ada", "ada@example.com", &exact).validate().is_ok());

        let err = request("Ada", "ada@example.com", &format!("{}x", exact))
            .validate()
            .unwrap_err();
        assert!(matches!(err, RelayError::FieldTooLong { field: "Nachricht", .. }));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["ada", "@example.com", "ada@", "ada@@example.com", "a da@example.com"] {
            let err = request("Ada", bad, "Hi").validate().unwrap_err();
            assert!(matches!(err, RelayError::InvalidEmail), "accepted {}", bad);
        }
    }

    #[test]
    fn builds_escaped_email() {
        let submission = ContactSubmission {
            name: "Ada <script>".to_string(),
            email: "ada@example.com".to_string(),
            message: "Zeile 1\nZeile 2 & \"mehr\"".to_string(),
        };
        let email = submission.to_email(
            "upward Solution <onboarding@resend.dev>",
            &["owner@example.com".to_string()],
        );

        assert_eq!(email.subject, "Neue Kontaktanfrage von Ada <script>");
        assert_eq!(email.to, vec!["owner@example.com".to_string()]);
        assert_eq!(email.reply_to.as_deref(), Some("ada@example.com"));
        assert!(email.html.starts_with("<h2>Neue Kontaktanfrage</h2>"));
        assert!(email.html.contains("<strong>Name:</strong> Ada &lt;script&gt;"));
        assert!(email.html.contains("Zeile 1<br>Zeile 2 &amp; &quot;mehr&quot;"));
        assert!(!email.html.contains("<script>"));
    }

    #[test]
    fn reply_to_is_serialized_as_snake_case() {
        let email = OutgoingEmail {
            from: "a@b.c".into(),
            to: vec!["d@e.f".into()],
            subject: "s".into(),
            html: "h".into(),
            reply_to: None,
        };
        let value = serde_json::to_value(&email).unwrap();
        assert!(value.get("reply_to").is_none());
        assert_eq!(value["to"][0], "d@e.f");
    }
}
