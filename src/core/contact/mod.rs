//! Contact form lifecycle
//!
//! The form moves `Idle -> Submitting -> Submitted -> Idle`. A failed
//! submission lands in `Failed`, keeps the typed fields, and can be retried.
//! Each attempt carries a [`Ticket`]; completions and timers that arrive with a
//! ticket that is no longer current are dropped.

#[cfg(feature = "ssr")]
pub mod api;

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

#[cfg(feature = "ssr")]
pub use api::{ContactApiError, ContactApiState, contact_router};

/// Endpoint accepting contact submissions
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Default server-side handling delay for a submission
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1000);

/// Upper bound on how long a submission may take before it counts as failed
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// How long the success state is shown before the form resets
pub const SUBMITTED_DWELL: Duration = Duration::from_secs(3);

/// Default maximum message length in characters
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 5000;

/// Form fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Input element id
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

/// Payload sent to the submission endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Check every field, collecting all problems
    pub fn validate(&self, max_message_len: usize) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ValidationError::EmptyEmail);
        } else if !is_valid_email(email) {
            errors.push(ValidationError::InvalidEmail);
        }

        let message_len = self.message.trim().chars().count();
        if message_len == 0 {
            errors.push(ValidationError::EmptyMessage);
        } else if message_len > max_message_len {
            errors.push(ValidationError::MessageTooLong {
                max: max_message_len,
                actual: message_len,
            });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// `local@domain.tld` with no whitespace and no empty labels
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Field-level validation problems
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    EmptyName,
    EmptyEmail,
    InvalidEmail,
    EmptyMessage,
    MessageTooLong { max: usize, actual: usize },
}

impl ValidationError {
    /// Field the problem belongs to
    pub fn field(&self) -> ContactField {
        match self {
            ValidationError::EmptyName => ContactField::Name,
            ValidationError::EmptyEmail | ValidationError::InvalidEmail => ContactField::Email,
            ValidationError::EmptyMessage | ValidationError::MessageTooLong { .. } => {
                ContactField::Message
            }
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "Name is required"),
            ValidationError::EmptyEmail => write!(f, "Email is required"),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email"),
            ValidationError::EmptyMessage => write!(f, "Message is required"),
            ValidationError::MessageTooLong { max, actual } => {
                write!(f, "Message is too long ({} chars, max {})", actual, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Transport-level submission failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Request never reached the server or the response was unreadable
    Network(String),
    /// Server answered with a non-success status
    Server { status: u16, message: String },
    /// Server refused the fields, e.g. under a stricter length limit
    Rejected(Vec<ValidationError>),
    /// No answer within [`SUBMIT_TIMEOUT`]
    Timeout,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Network(msg) => write!(f, "Network error: {}", msg),
            SubmitError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            SubmitError::Rejected(errors) => {
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(f, "Rejected by the server: {}", messages.join("; "))
            }
            SubmitError::Timeout => write!(f, "The request timed out"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Error body returned by the submission endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactErrorBody {
    pub error: String,
    pub code: String,
    #[serde(default)]
    pub details: Vec<String>,
    /// Structured form of `details`, for mapping back onto the fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ValidationError>,
}

/// Submission collaborator
pub trait ContactTransport {
    fn send(&self, request: &ContactRequest) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Submit lifecycle phase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(SubmitError),
}

impl FormPhase {
    /// Fields accept input and the form accepts a submit
    pub fn is_editable(&self) -> bool {
        matches!(self, FormPhase::Idle | FormPhase::Failed(_))
    }
}

/// Identifies one submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A started submission: the ticket to report back with and the payload to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: ContactRequest,
}

/// Why a submit was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A submission is in flight or the success message is showing
    Busy,
    /// Fields failed validation; phase unchanged
    Invalid(Vec<ValidationError>),
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::Busy => write!(f, "A submission is already in progress"),
            ContactError::Invalid(errors) => {
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(f, "{}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for ContactError {}

/// Contact form state machine
#[derive(Debug, Clone)]
pub struct ContactFormController {
    fields: ContactRequest,
    phase: FormPhase,
    active: Option<Ticket>,
    next_ticket: u64,
    max_message_len: usize,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::with_max_message_len(DEFAULT_MAX_MESSAGE_LEN)
    }

    pub fn with_max_message_len(max_message_len: usize) -> Self {
        Self {
            fields: ContactRequest::default(),
            phase: FormPhase::Idle,
            active: None,
            next_ticket: 0,
            max_message_len,
        }
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn fields(&self) -> &ContactRequest {
        &self.fields
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.fields.field(field)
    }

    /// Update one field. Ignored while a submission is in flight or the
    /// success message is showing. Returns true if the value was stored.
    pub fn on_field_change(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if !self.phase.is_editable() {
            return false;
        }
        *self.fields.field_mut(field) = value.into();
        true
    }

    /// Validate and start a submission.
    ///
    /// On success the phase is `Submitting` and the fields are frozen until
    /// [`complete`](Self::complete) is called with the returned ticket.
    pub fn on_submit(&mut self) -> Result<Submission, ContactError> {
        if !self.phase.is_editable() {
            return Err(ContactError::Busy);
        }
        self.fields
            .validate(self.max_message_len)
            .map_err(ContactError::Invalid)?;

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.active = Some(ticket);
        self.phase = FormPhase::Submitting;

        Ok(Submission {
            ticket,
            request: self.fields.clone(),
        })
    }

    /// Resubmit the kept fields after a failure
    pub fn retry(&mut self) -> Result<Submission, ContactError> {
        if !matches!(self.phase, FormPhase::Failed(_)) {
            return Err(ContactError::Busy);
        }
        self.on_submit()
    }

    /// Report the outcome of the submission identified by `ticket`.
    ///
    /// Success clears every field and shows the confirmation; failure keeps
    /// the fields for a retry. Returns false for stale tickets.
    pub fn complete(&mut self, ticket: Ticket, result: Result<(), SubmitError>) -> bool {
        if self.active != Some(ticket) || self.phase != FormPhase::Submitting {
            return false;
        }
        match result {
            Ok(()) => {
                self.fields = ContactRequest::default();
                self.phase = FormPhase::Submitted;
            }
            Err(err) => {
                self.active = None;
                self.phase = FormPhase::Failed(err);
            }
        }
        true
    }

    /// The confirmation dwell for `ticket` is over; return to `Idle`
    pub fn dwell_elapsed(&mut self, ticket: Ticket) -> bool {
        if self.active != Some(ticket) || self.phase != FormPhase::Submitted {
            return false;
        }
        self.active = None;
        self.phase = FormPhase::Idle;
        true
    }

    /// Invalidate any outstanding attempt so late callbacks become no-ops
    pub fn teardown(&mut self) {
        self.active = None;
    }
}

impl Default for ContactFormController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormController {
        let mut form = ContactFormController::new();
        form.on_field_change(ContactField::Name, "Alice");
        form.on_field_change(ContactField::Email, "a@x.com");
        form.on_field_change(ContactField::Message, "hi");
        form
    }

    #[test]
    fn test_full_lifecycle() {
        let mut form = filled();

        let submission = form.on_submit().unwrap();
        assert_eq!(form.phase(), &FormPhase::Submitting);
        assert_eq!(submission.request.name, "Alice");
        assert_eq!(submission.request.email, "a@x.com");
        assert_eq!(submission.request.message, "hi");

        assert!(form.complete(submission.ticket, Ok(())));
        assert_eq!(form.phase(), &FormPhase::Submitted);
        assert!(form.fields().is_empty());

        assert!(form.dwell_elapsed(submission.ticket));
        assert_eq!(form.phase(), &FormPhase::Idle);
        assert!(form.fields().is_empty());
    }

    #[test]
    fn test_fields_frozen_while_submitting() {
        let mut form = filled();
        form.on_submit().unwrap();

        for field in ContactField::ALL {
            assert!(!form.on_field_change(field, "changed"));
        }
        assert_eq!(form.field(ContactField::Name), "Alice");
        assert_eq!(form.field(ContactField::Email), "a@x.com");
        assert_eq!(form.field(ContactField::Message), "hi");
    }

    #[test]
    fn test_fields_frozen_while_submitted() {
        let mut form = filled();
        let submission = form.on_submit().unwrap();
        form.complete(submission.ticket, Ok(()));

        assert!(!form.on_field_change(ContactField::Name, "Bob"));
        assert_eq!(form.field(ContactField::Name), "");
    }

    #[test]
    fn test_submit_is_noop_unless_idle() {
        let mut form = filled();
        form.on_submit().unwrap();
        assert_eq!(form.on_submit(), Err(ContactError::Busy));
        assert_eq!(form.phase(), &FormPhase::Submitting);
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut form = ContactFormController::new();
        form.on_field_change(ContactField::Email, "not-an-email");

        let err = form.on_submit().unwrap_err();
        assert_eq!(
            err,
            ContactError::Invalid(vec![
                ValidationError::EmptyName,
                ValidationError::InvalidEmail,
                ValidationError::EmptyMessage,
            ])
        );
        assert_eq!(form.phase(), &FormPhase::Idle);
    }

    #[test]
    fn test_failure_keeps_fields_and_retries() {
        let mut form = filled();
        let first = form.on_submit().unwrap();

        assert!(form.complete(first.ticket, Err(SubmitError::Timeout)));
        assert_eq!(form.phase(), &FormPhase::Failed(SubmitError::Timeout));
        assert_eq!(form.field(ContactField::Name), "Alice");

        let second = form.retry().unwrap();
        assert_ne!(first.ticket, second.ticket);
        assert_eq!(form.phase(), &FormPhase::Submitting);

        assert!(form.complete(second.ticket, Ok(())));
        assert_eq!(form.phase(), &FormPhase::Submitted);
    }

    #[test]
    fn test_edits_allowed_after_failure() {
        let mut form = filled();
        let submission = form.on_submit().unwrap();
        form.complete(
            submission.ticket,
            Err(SubmitError::Network("offline".to_string())),
        );

        assert!(form.on_field_change(ContactField::Message, "hello again"));
        assert_eq!(form.field(ContactField::Message), "hello again");
    }

    #[test]
    fn test_retry_requires_failure() {
        let mut form = filled();
        assert_eq!(form.retry(), Err(ContactError::Busy));
        assert_eq!(form.phase(), &FormPhase::Idle);
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut form = filled();
        let first = form.on_submit().unwrap();
        form.complete(first.ticket, Err(SubmitError::Timeout));
        let second = form.retry().unwrap();

        // Late answer for the abandoned attempt
        assert!(!form.complete(first.ticket, Ok(())));
        assert_eq!(form.phase(), &FormPhase::Submitting);

        form.complete(second.ticket, Ok(()));
        assert!(!form.dwell_elapsed(first.ticket));
        assert_eq!(form.phase(), &FormPhase::Submitted);
    }

    #[test]
    fn test_teardown_drops_late_callbacks() {
        let mut form = filled();
        let submission = form.on_submit().unwrap();
        form.teardown();

        assert!(!form.complete(submission.ticket, Ok(())));
        assert_eq!(form.field(ContactField::Name), "Alice");
    }

    #[test]
    fn test_dwell_only_from_submitted() {
        let mut form = filled();
        let submission = form.on_submit().unwrap();
        assert!(!form.dwell_elapsed(submission.ticket));
        assert_eq!(form.phase(), &FormPhase::Submitting);
    }

    #[test]
    fn test_email_validation() {
        for good in ["a@x.com", "jane.doe@mail.vt.edu", "x+tag@sub.example.org"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in ["", "plain", "@x.com", "a@", "a@x", "a@@x.com", "a @x.com", "a@x..com", "a@.com"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_message_length_limit() {
        let request = ContactRequest {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            message: "x".repeat(11),
        };
        assert_eq!(
            request.validate(10),
            Err(vec![ValidationError::MessageTooLong { max: 10, actual: 11 }])
        );
        assert!(request.validate(11).is_ok());
    }

    #[test]
    fn test_whitespace_only_fields_are_empty() {
        let request = ContactRequest {
            name: "   ".to_string(),
            email: "a@x.com".to_string(),
            message: "\n\t".to_string(),
        };
        let errors = request.validate(DEFAULT_MAX_MESSAGE_LEN).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyName, ValidationError::EmptyMessage]);
    }

    #[test]
    fn test_validation_error_fields() {
        assert_eq!(ValidationError::InvalidEmail.field(), ContactField::Email);
        assert_eq!(
            ValidationError::MessageTooLong { max: 1, actual: 2 }.field(),
            ContactField::Message
        );
        assert_eq!(ValidationError::EmptyName.to_string(), "Name is required");
    }

    #[test]
    fn test_server_rejection_keeps_fields_for_editing() {
        let mut form = filled();
        let submission = form.on_submit().unwrap();
        let refused = vec![ValidationError::MessageTooLong { max: 1, actual: 2 }];

        assert!(form.complete(submission.ticket, Err(SubmitError::Rejected(refused.clone()))));
        assert_eq!(form.phase(), &FormPhase::Failed(SubmitError::Rejected(refused)));
        assert_eq!(form.field(ContactField::Message), "hi");
        assert!(form.on_field_change(ContactField::Message, "h"));
    }

    #[test]
    fn test_validation_error_wire_shape() {
        let json = serde_json::to_string(&ValidationError::MessageTooLong { max: 3, actual: 5 }).unwrap();
        assert_eq!(json, r#"{"kind":"message_too_long","max":3,"actual":5}"#);
        let back: ValidationError = serde_json::from_str(r#"{"kind":"empty_name"}"#).unwrap();
        assert_eq!(back, ValidationError::EmptyName);
    }

    #[test]
    fn test_submit_error_display() {
        assert_eq!(SubmitError::Timeout.to_string(), "The request timed out");
        assert_eq!(
            SubmitError::Server {
                status: 500,
                message: "boom".to_string()
            }
            .to_string(),
            "Server error (500): boom"
        );
    }

    struct FixedTransport(Result<(), SubmitError>);

    impl ContactTransport for FixedTransport {
        async fn send(&self, _request: &ContactRequest) -> Result<(), SubmitError> {
            self.0.clone()
        }
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_transport_outcome_drives_phase() {
        let mut form = filled();
        let submission = form.on_submit().unwrap();
        let result = FixedTransport(Err(SubmitError::Timeout))
            .send(&submission.request)
            .await;
        form.complete(submission.ticket, result);
        assert!(matches!(form.phase(), FormPhase::Failed(_)));

        let retry = form.retry().unwrap();
        let result = FixedTransport(Ok(())).send(&retry.request).await;
        form.complete(retry.ticket, result);
        assert_eq!(form.phase(), &FormPhase::Submitted);
    }
}
