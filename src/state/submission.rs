//! Submission lifecycle: status state machine and the controller that owns it

use crate::api::ContactApi;
use crate::state::ContactForm;

/// Fixed confirmation shown after an accepted submission
pub const CONFIRMATION_MESSAGE: &str = "Thanks! We will be in touch shortly.";

/// Outcome of the most recent submit attempt.
///
/// One tagged state so that illegal combinations (pending with an error
/// showing, success and failure at once) cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// No attempt in flight, no prior result shown
    #[default]
    Idle,
    /// A request is in flight
    Pending,
    /// The last attempt was accepted
    Succeeded(String),
    /// The last attempt failed (transport error or server rejection)
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Owns the submit lifecycle: guards against concurrent submits, snapshots
/// the form, calls the Contact API, and reduces the result into
/// [`SubmissionStatus`].
pub struct SubmissionController<C> {
    client: C,
    status: SubmissionStatus,
}

impl<C: ContactApi> SubmissionController<C> {
    /// The API client is injected here; the controller never reads ambient
    /// configuration.
    pub fn new(client: C) -> Self {
        Self {
            client,
            status: SubmissionStatus::default(),
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Run one submit attempt against the Contact API.
    ///
    /// No-op while a request is already in flight. On acceptance the form is
    /// reset to its empty default; on any failure the entered values are left
    /// untouched so the user can correct and retry. Every path out of the
    /// network call resolves to `Succeeded` or `Failed`.
    pub async fn submit(&mut self, form: &mut ContactForm) {
        if self.status.is_pending() {
            tracing::debug!("submit ignored: a request is already in flight");
            return;
        }

        // Clears any previously shown banner before the response arrives
        self.status = SubmissionStatus::Pending;
        let snapshot = form.data().clone();

        match self.client.submit(&snapshot).await {
            Ok(()) => {
                tracing::info!("contact submission accepted");
                self.status = SubmissionStatus::Succeeded(CONFIRMATION_MESSAGE.to_string());
                form.reset();
            }
            Err(err) => {
                tracing::warn!("contact submission failed: {err}");
                self.status = SubmissionStatus::Failed(err.to_string());
            }
        }
    }
}
