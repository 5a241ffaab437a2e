//! Where a submission is posted

use crate::state::{Document, ProfileForm};
use serde::{Deserialize, Serialize};
use url::Url;

/// Path the profile form posts to unless configured otherwise
pub const DEFAULT_ENDPOINT_PATH: &str = "/updateuser";

/// Endpoint selection, as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointMode {
    #[default]
    Fixed,
    FormAction,
}

/// How the interceptor picks the request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointPolicy {
    /// Always post to this path
    Fixed(String),
    /// Post to the form's `action`, or the current page when it has none
    FormAction,
}

impl EndpointPolicy {
    pub fn path(&self, document: &Document, form: &ProfileForm) -> String {
        match self {
            Self::Fixed(path) => path.clone(),
            Self::FormAction => document.submission_target(form),
        }
    }

    /// Absolute URL for a submission of `form`
    ///
    /// Relative paths resolve against the current page, not the server root.
    pub fn resolve(
        &self,
        base: &Url,
        document: &Document,
        form: &ProfileForm,
    ) -> Result<Url, url::ParseError> {
        let page = base.join(&document.page_path)?;
        page.join(&self.path(document, form))
    }
}

impl Default for EndpointPolicy {
    fn default() -> Self {
        Self::Fixed(DEFAULT_ENDPOINT_PATH.to_string())
    }
}
