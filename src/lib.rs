//! Profile form submission
//!
//! Intercepts a profile form's submit, posts the fields to the server
//! asynchronously and reports success or failure on the page it came from.
//!
//! - [`state`]: the page model (forms, result container, popups)
//! - [`interceptor`]: the submit handler and its generation guard
//! - [`client`]: the HTTP transport
//! - [`app`] and [`ui`]: the terminal front end

pub mod app;
pub mod client;
pub mod config;
pub mod interceptor;
pub mod platform;
pub mod state;
pub mod ui;
