//! Form domain layer
//!
//! Type-safe form handling for the profile page.

mod field;
mod form_state;

pub use field::{FieldKind, FormField};
pub use form_state::{Form, ProfileForm, PROFILE_FORM_ID, REFERRAL_SERVICES};
