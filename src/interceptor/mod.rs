//! Submission interceptor
//!
//! Binds to a form, suppresses its native submission and posts the fields
//! asynchronously instead. Every submission carries a generation number; only
//! the completion of the most recent generation is rendered, so a slow early
//! response can never overwrite the outcome of a later one.

mod endpoint;
mod feedback;

pub use endpoint::{EndpointMode, EndpointPolicy, DEFAULT_ENDPOINT_PATH};
pub use feedback::{FeedbackAction, FeedbackMode, FeedbackPolicy};

use crate::client::{RequestFailure, SubmitTransport};
use crate::state::{Document, FormSubmission, Selector, SubmitEvent};
use thiserror::Error;
use url::Url;

/// Monotonic submission counter
pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("no form matches selector `{selector}`")]
    FormNotFound { selector: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("bound form `{0}` is no longer in the document")]
    FormMissing(String),

    #[error("cannot resolve endpoint `{path}`: {source}")]
    InvalidEndpoint {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

/// A request ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub generation: Generation,
    pub url: Url,
    pub body: FormSubmission,
}

/// A settled request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub generation: Generation,
    pub outcome: Result<String, RequestFailure>,
}

/// What [`Interceptor::settle`] did with a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Rendered(FeedbackAction),
    /// Superseded by a later submission; nothing rendered
    Stale,
}

#[derive(Debug, Clone)]
pub struct Interceptor {
    selector: Selector,
    base_url: Url,
    endpoint: EndpointPolicy,
    feedback: FeedbackPolicy,
    latest: Generation,
    in_flight: usize,
}

impl Interceptor {
    /// Bind to the form matching `selector`, which must already exist
    pub fn bind(
        document: &Document,
        selector: &str,
        base_url: Url,
        endpoint: EndpointPolicy,
        feedback: FeedbackPolicy,
    ) -> Result<Self, BindError> {
        let parsed = Selector::parse(selector);
        if document.form(&parsed).is_none() {
            if let Selector::Tag(tag) = &parsed {
                if document.form(&Selector::Id(tag.clone())).is_some() {
                    tracing::warn!("Selector `{selector}` is a tag name; did you mean `#{tag}`?");
                }
            }
            return Err(BindError::FormNotFound {
                selector: selector.to_string(),
            });
        }

        tracing::debug!("Bound submission interceptor to {parsed}");
        Ok(Self {
            selector: parsed,
            base_url,
            endpoint,
            feedback,
            latest: 0,
            in_flight: 0,
        })
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn state(&self) -> SubmitState {
        if self.in_flight > 0 {
            SubmitState::Submitting
        } else {
            SubmitState::Idle
        }
    }

    /// Generation of the most recent submission (0 before the first)
    pub fn latest_generation(&self) -> Generation {
        self.latest
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Submit handler: suppress navigation and build the request
    pub fn intercept(
        &mut self,
        document: &Document,
        event: &mut SubmitEvent,
    ) -> Result<PendingRequest, SubmitError> {
        event.prevent_default();

        let form = document
            .form(&self.selector)
            .ok_or_else(|| SubmitError::FormMissing(self.selector.to_string()))?;
        let body = form.serialize();
        let url = self
            .endpoint
            .resolve(&self.base_url, document, form)
            .map_err(|source| SubmitError::InvalidEndpoint {
                path: self.endpoint.path(document, form),
                source,
            })?;

        self.latest += 1;
        self.in_flight += 1;
        tracing::info!(
            "Submitting {} (generation {}, {} fields)",
            url,
            self.latest,
            body.pairs().len()
        );

        Ok(PendingRequest {
            generation: self.latest,
            url,
            body,
        })
    }

    /// Fire a submit event at the bound form and intercept it.
    ///
    /// Returns `None` when the bound form has left the document.
    pub fn submit(&mut self, document: &mut Document) -> Option<Result<PendingRequest, SubmitError>> {
        let selector = self.selector.clone();
        document.dispatch_submit(&selector, |doc, event| self.intercept(doc, event))
    }

    /// Send the request. Exactly one call to the transport.
    pub async fn dispatch<T>(transport: &T, pending: PendingRequest) -> Completion
    where
        T: SubmitTransport + ?Sized,
    {
        let outcome = transport.post_form(&pending.url, &pending.body).await;
        Completion {
            generation: pending.generation,
            outcome,
        }
    }

    /// Settle a completion: leave `Submitting` once nothing is in flight, and
    /// render feedback only if it belongs to the latest submission.
    pub fn settle(&mut self, document: &mut Document, completion: Completion) -> Applied {
        self.in_flight = self.in_flight.saturating_sub(1);

        if let Err(failure) = &completion.outcome {
            tracing::warn!("Submission {} failed: {failure}", completion.generation);
        }

        if completion.generation != self.latest {
            tracing::debug!(
                "Dropping stale completion {} (latest is {})",
                completion.generation,
                self.latest
            );
            return Applied::Stale;
        }

        Applied::Rendered(self.feedback.render(document, &completion.outcome))
    }
}
