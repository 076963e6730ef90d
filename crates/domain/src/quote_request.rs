//! Quote request: a customer-submitted lead.
//!
//! Quote requests are append-only: once accepted they are never updated or
//! deleted. A [`QuoteRequest`] can only be obtained from a
//! [`NewQuoteRequest`] that passed validation, so a partially-valid record
//! never exists.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::{MaisonError, ValidationError, ValidationErrors};
use crate::id::QuoteRequestId;
use crate::time::Timestamp;

/// Minimum number of characters in [`NewQuoteRequest::nom`].
pub const NOM_MIN_CHARS: usize = 2;

/// Minimum number of characters in [`NewQuoteRequest::message`].
pub const MESSAGE_MIN_CHARS: usize = 10;

/// User input for a quote request, before validation.
///
/// Missing JSON fields decode as empty strings so that they surface as
/// field-level violations rather than as a malformed payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewQuoteRequest {
    pub nom: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl NewQuoteRequest {
    /// Check every field and collect all violations.
    ///
    /// Lengths are counted in characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns the list of violated rules, one per invalid field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.nom.chars().count() < NOM_MIN_CHARS {
            errors.push(ValidationError::NameTooShort { min: NOM_MIN_CHARS });
        }
        if !self.email.validate_email() || !has_public_domain(&self.email) {
            errors.push(ValidationError::InvalidEmail);
        }
        if self.service.is_empty() {
            errors.push(ValidationError::MissingService);
        }
        if self.message.chars().count() < MESSAGE_MIN_CHARS {
            errors.push(ValidationError::MessageTooShort {
                min: MESSAGE_MIN_CHARS,
            });
        }
        errors.into_result()
    }

    /// Validate and turn the input into a stored record.
    ///
    /// # Errors
    ///
    /// Returns [`MaisonError::Validation`] if any field is invalid.
    pub fn accept(
        self,
        id: QuoteRequestId,
        created_at: Timestamp,
    ) -> Result<QuoteRequest, MaisonError> {
        self.validate()?;
        Ok(QuoteRequest {
            id,
            nom: self.nom,
            email: self.email,
            service: self.service,
            message: self.message,
            created_at,
        })
    }
}

/// The domain part must be dotted and end in a label of at least two
/// ASCII letters (`example.ci`, not `localhost` or `[127.0.0.1]`).
fn has_public_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((rest, tld)) => {
            !rest.is_empty() && tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic())
        }
        None => false,
    }
}

/// A validated, stored quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub id: QuoteRequestId,
    pub nom: String,
    pub email: String,
    pub service: String,
    pub message: String,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> NewQuoteRequest {
        NewQuoteRequest {
            nom: "Awa Koné".to_string(),
            email: "awa.kone@example.ci".to_string(),
            service: "Jardinage".to_string(),
            message: "Entretien mensuel d'un jardin de 200 m².".to_string(),
        }
    }

    fn ts() -> Timestamp {
        "2025-03-01T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn should_accept_valid_input() {
        let id = QuoteRequestId::new();
        let request = valid_input().accept(id, ts()).unwrap();
        assert_eq!(request.id, id);
        assert_eq!(request.nom, "Awa Koné");
        assert_eq!(request.created_at, ts());
    }

    #[test]
    fn should_reject_single_character_name() {
        let input = NewQuoteRequest {
            nom: "A".to_string(),
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("nom"),
            Some(&ValidationError::NameTooShort { min: 2 })
        );
    }

    #[test]
    fn should_count_characters_not_bytes() {
        let input = NewQuoteRequest {
            nom: "Éa".to_string(),
            message: "éééééééééé".to_string(),
            ..valid_input()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn should_reject_malformed_email() {
        for email in [
            "not-an-email",
            "",
            "awa@",
            "@example.ci",
            "a@b",
            "jean@localhost",
            "x@[127.0.0.1]",
            "awa@example.c",
        ] {
            let input = NewQuoteRequest {
                email: email.to_string(),
                ..valid_input()
            };
            let errors = input.validate().unwrap_err();
            assert_eq!(errors.get("email"), Some(&ValidationError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn should_accept_dotted_domains() {
        for email in ["jean@example.com", "awa.kone@mail.example.ci", "k+devis@abidjan.net"] {
            let input = NewQuoteRequest {
                email: email.to_string(),
                ..valid_input()
            };
            assert!(input.validate().is_ok(), "{email}");
        }
    }

    #[test]
    fn should_reject_empty_service() {
        let input = NewQuoteRequest {
            service: String::new(),
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.get("service"), Some(&ValidationError::MissingService));
    }

    #[test]
    fn should_reject_short_message() {
        let input = NewQuoteRequest {
            message: "Bonjour".to_string(),
            ..valid_input()
        };
        let result = input.accept(QuoteRequestId::new(), ts());
        match result {
            Err(MaisonError::Validation(errors)) => {
                assert_eq!(
                    errors.get("message"),
                    Some(&ValidationError::MessageTooShort { min: 10 })
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn should_report_every_invalid_field_in_order() {
        let errors = NewQuoteRequest::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(ValidationError::field).collect();
        assert_eq!(fields, vec!["nom", "email", "service", "message"]);
    }

    #[test]
    fn should_decode_missing_fields_as_empty() {
        let input: NewQuoteRequest = serde_json::from_str(r#"{"nom": "Awa"}"#).unwrap();
        assert_eq!(input.nom, "Awa");
        assert!(input.email.is_empty());
    }

    #[test]
    fn should_serialize_created_at_in_camel_case() {
        let request = valid_input().accept(QuoteRequestId::new(), ts()).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["createdAt"], "2025-03-01T10:00:00Z");
        assert!(json.get("created_at").is_none());
        assert_eq!(json["id"], request.id.to_string());
    }
}
