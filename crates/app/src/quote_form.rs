//! Quote form: the submission flow behind the "demander un devis" form.
//!
//! ```text
//!            validate ok              submit ok
//! Editing ───────────────► Submitting ─────────► Succeeded
//!    ▲  │ validate fails        │
//!    │  └── stays in Editing    │ rejected / unavailable
//!    │                          ▼
//!    └────── resume_editing ── Failed
//! ```
//!
//! Field-level validation runs locally before anything is sent. There is no
//! automatic retry: after a failure the user edits and submits again.

use maisonci_domain::error::{MaisonError, ValidationError, ValidationErrors};
use maisonci_domain::quote_request::{NewQuoteRequest, QuoteRequest};

use crate::ports::QuoteRequestSubmitter;

/// Where the form currently is in the submission flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    /// The request was stored; the fields have been cleared.
    Succeeded(QuoteRequest),
    Failed(SubmissionFailure),
}

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// The receiving side refused the values.
    Rejected(ValidationErrors),
    /// The receiving side could not be reached or failed internally.
    Unavailable(String),
}

/// Toast-style message shown after a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub destructive: bool,
}

const SENT: Notification = Notification {
    title: "Demande envoyée !",
    description: "Nous vous contacterons rapidement pour discuter de votre projet.",
    destructive: false,
};

const FAILED: Notification = Notification {
    title: "Erreur",
    description: "Une erreur s'est produite. Veuillez réessayer.",
    destructive: true,
};

/// A quote form and its submission state.
#[derive(Debug, Clone)]
pub struct QuoteForm {
    fields: NewQuoteRequest,
    errors: ValidationErrors,
    state: FormState,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self::open()
    }
}

impl QuoteForm {
    /// Open an empty form, in [`FormState::Editing`].
    #[must_use]
    pub fn open() -> Self {
        Self {
            fields: NewQuoteRequest::default(),
            errors: ValidationErrors::new(),
            state: FormState::Editing,
        }
    }

    /// Open a form with the service already chosen (e.g. from a service card).
    #[must_use]
    pub fn open_for_service(service: impl Into<String>) -> Self {
        let mut form = Self::open();
        form.fields.service = service.into();
        form
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn fields(&self) -> &NewQuoteRequest {
        &self.fields
    }

    /// Message to display next to `field`, if it is currently invalid.
    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    #[must_use]
    pub fn field_errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Notification for the last finished submission, if any.
    #[must_use]
    pub fn notification(&self) -> Option<Notification> {
        match self.state {
            FormState::Succeeded(_) => Some(SENT),
            FormState::Failed(_) => Some(FAILED),
            FormState::Editing | FormState::Submitting => None,
        }
    }

    pub fn set_nom(&mut self, nom: impl Into<String>) {
        self.edit().nom = nom.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.edit().email = email.into();
    }

    pub fn set_service(&mut self, service: impl Into<String>) {
        self.edit().service = service.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.edit().message = message.into();
    }

    /// Leave [`FormState::Failed`] (or an interrupted
    /// [`FormState::Submitting`]) and go back to editing, keeping the fields.
    pub fn resume_editing(&mut self) {
        if matches!(self.state, FormState::Failed(_) | FormState::Submitting) {
            self.state = FormState::Editing;
        }
    }

    /// Validate locally, then hand the fields to `submitter`.
    ///
    /// - Local validation failure: stays in [`FormState::Editing`] with
    ///   per-field errors; `submitter` is not called.
    /// - Success: [`FormState::Succeeded`], fields and errors cleared.
    /// - Rejection or transport error: [`FormState::Failed`], fields kept.
    pub async fn submit<S>(&mut self, submitter: &S) -> &FormState
    where
        S: QuoteRequestSubmitter,
    {
        self.state = FormState::Editing;
        if let Err(errors) = self.fields.validate() {
            self.errors = errors;
            return &self.state;
        }
        self.errors = ValidationErrors::new();

        self.state = FormState::Submitting;
        self.state = match submitter.submit(self.fields.clone()).await {
            Ok(created) => {
                self.fields = NewQuoteRequest::default();
                FormState::Succeeded(created)
            }
            Err(MaisonError::Validation(errors)) => {
                self.errors = errors.clone();
                FormState::Failed(SubmissionFailure::Rejected(errors))
            }
            Err(err) => {
                tracing::warn!(error = %err, "quote request submission failed");
                FormState::Failed(SubmissionFailure::Unavailable(err.to_string()))
            }
        };
        &self.state
    }

    /// Switch back to editing before a change; a successful form starts a
    /// fresh request.
    fn edit(&mut self) -> &mut NewQuoteRequest {
        if matches!(self.state, FormState::Succeeded(_)) {
            self.errors = ValidationErrors::new();
        }
        self.state = FormState::Editing;
        &mut self.fields
    }
}
