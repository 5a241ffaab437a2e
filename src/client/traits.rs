//! Trait abstraction for the submission transport to enable mocking in tests

use super::error::RequestFailure;
use crate::state::FormSubmission;
use async_trait::async_trait;
use url::Url;

/// Sends a serialized form to an endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// POST `body` URL-encoded to `url`.
    ///
    /// Returns the response body on a 2xx status. Any other status, and any
    /// transport-level error, is a [`RequestFailure`].
    async fn post_form(&self, url: &Url, body: &FormSubmission) -> Result<String, RequestFailure>;
}
