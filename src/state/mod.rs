//! Page state module

mod banner;
mod document;
mod forms;
mod submission;

pub use banner::*;
pub use document::*;
pub use forms::*;
pub use submission::*;
