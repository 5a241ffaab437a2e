//! HTTP client module for form submission

mod error;
mod http;
mod traits;

pub use error::RequestFailure;
pub use http::{HttpClient, DEFAULT_TIMEOUT};
pub use traits::SubmitTransport;

#[cfg(test)]
pub use traits::MockSubmitTransport;
