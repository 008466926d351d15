//! Browser side of the contact submission

use futures::future::{AbortHandle, Abortable, abortable};
use gloo_net::http::Request;
use std::future::Future;

use crate::core::contact::{
    CONTACT_ENDPOINT, ContactErrorBody, ContactRequest, ContactTransport, SubmitError,
};

/// Posts contact requests as JSON to the site's own endpoint
#[derive(Clone, Copy, Debug)]
pub struct HttpContactTransport {
    endpoint: &'static str,
}

impl HttpContactTransport {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }
}

impl Default for HttpContactTransport {
    fn default() -> Self {
        Self::new(CONTACT_ENDPOINT)
    }
}

/// Aborts the underlying fetch when the send future is dropped
#[cfg(feature = "hydrate")]
struct AbortOnDrop(web_sys::AbortController);

#[cfg(feature = "hydrate")]
impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl ContactTransport for HttpContactTransport {
    async fn send(&self, request: &ContactRequest) -> Result<(), SubmitError> {
        let builder = Request::post(self.endpoint);

        #[cfg(feature = "hydrate")]
        let abort_guard = web_sys::AbortController::new().ok().map(AbortOnDrop);
        #[cfg(feature = "hydrate")]
        let builder = builder.abort_signal(abort_guard.as_ref().map(|g| g.0.signal()).as_ref());

        let response = builder
            .json(request)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.json::<ContactErrorBody>().await.ok();
        Err(rejection(status, body, response.status_text()))
    }
}

/// Error for a non-success answer. Field problems the server reports are kept
/// structured so the form can show them inline.
fn rejection(status: u16, body: Option<ContactErrorBody>, status_text: String) -> SubmitError {
    match body {
        Some(body) if !body.fields.is_empty() => SubmitError::Rejected(body.fields),
        Some(body) => SubmitError::Server {
            status,
            message: body.error,
        },
        None => SubmitError::Server {
            status,
            message: status_text,
        },
    }
}

/// Send through `transport`, giving up after [`SUBMIT_TIMEOUT`](crate::core::contact::SUBMIT_TIMEOUT)
#[cfg(feature = "hydrate")]
pub async fn send_with_timeout(
    transport: &impl ContactTransport,
    request: &ContactRequest,
) -> Result<(), SubmitError> {
    use crate::core::contact::SUBMIT_TIMEOUT;
    use futures::future::{Either, select};
    use gloo_timers::future::TimeoutFuture;
    use std::pin::pin;

    let send = pin!(transport.send(request));
    let timeout = pin!(TimeoutFuture::new(SUBMIT_TIMEOUT.as_millis() as u32));

    match select(send, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(SubmitError::Timeout),
    }
}

/// The task driving the current submission.
///
/// Aborting drops the task's future, which cancels the request and any timer
/// it is waiting on. Starting a new task aborts the previous one.
#[derive(Debug, Default)]
pub struct InFlight {
    handle: Option<AbortHandle>,
}

impl InFlight {
    pub fn track<F: Future>(&mut self, task: F) -> Abortable<F> {
        self.abort();
        let (task, handle) = abortable(task);
        self.handle = Some(handle);
        task
    }

    pub fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Text shown under the form after a failed attempt
pub fn failure_message(err: &SubmitError) -> String {
    match err {
        SubmitError::Timeout => "The server took too long to answer. Please try again.".to_string(),
        SubmitError::Network(_) => {
            "Couldn't reach the server. Check your connection and try again.".to_string()
        }
        SubmitError::Rejected(_) => "Please fix the highlighted fields and try again.".to_string(),
        SubmitError::Server { message, .. } if !message.is_empty() => message.clone(),
        SubmitError::Server { status, .. } => {
            format!("Something went wrong (status {}). Please try again.", status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::ValidationError;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(HttpContactTransport::default().endpoint, "/api/contact");
    }

    fn error_body(fields: Vec<ValidationError>) -> ContactErrorBody {
        ContactErrorBody {
            error: "Invalid submission: Message is too long (5 chars, max 3)".to_string(),
            code: "MESSAGE_TOO_LONG".to_string(),
            details: fields.iter().map(|e| e.to_string()).collect(),
            fields,
        }
    }

    #[test]
    fn test_field_problems_become_rejection() {
        let fields = vec![ValidationError::MessageTooLong { max: 3, actual: 5 }];
        let err = rejection(400, Some(error_body(fields.clone())), "Bad Request".to_string());
        assert_eq!(err, SubmitError::Rejected(fields));
    }

    #[test]
    fn test_body_without_fields_keeps_server_text() {
        let err = rejection(400, Some(error_body(Vec::new())), "Bad Request".to_string());
        assert_eq!(
            err,
            SubmitError::Server {
                status: 400,
                message: "Invalid submission: Message is too long (5 chars, max 3)".to_string(),
            }
        );
    }

    #[test]
    fn test_unreadable_body_falls_back_to_status_text() {
        let err = rejection(502, None, "Bad Gateway".to_string());
        assert_eq!(
            err,
            SubmitError::Server {
                status: 502,
                message: "Bad Gateway".to_string(),
            }
        );
    }

    #[test]
    fn test_failure_message_prefers_server_text() {
        let err = SubmitError::Server {
            status: 400,
            message: "Invalid submission: Name is required".to_string(),
        };
        assert_eq!(failure_message(&err), "Invalid submission: Name is required");
    }

    #[test]
    fn test_failure_message_without_server_text() {
        let err = SubmitError::Server {
            status: 502,
            message: String::new(),
        };
        assert!(failure_message(&err).contains("502"));
    }

    #[test]
    fn test_failure_message_timeout_and_network() {
        assert!(failure_message(&SubmitError::Timeout).contains("too long"));
        assert!(failure_message(&SubmitError::Network("offline".into())).contains("connection"));
        assert!(failure_message(&SubmitError::Rejected(Vec::new())).contains("highlighted"));
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_aborted_task_never_finishes() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let finished = Arc::new(AtomicBool::new(false));
        let mut in_flight = InFlight::default();

        let flag = finished.clone();
        let task = in_flight.track(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            flag.store(true, Ordering::SeqCst);
        });
        in_flight.abort();

        assert!(task.await.is_err());
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_new_task_aborts_previous() {
        let mut in_flight = InFlight::default();
        let first = in_flight.track(futures::future::pending::<()>());
        let second = in_flight.track(async { 7 });

        assert!(first.await.is_err());
        assert_eq!(second.await, Ok(7));
    }
}
