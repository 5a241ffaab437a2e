//! Form state management and the profile form

use super::field::FormField;
use crate::state::FormSubmission;

/// Referral services listed on the profile page, in display order
pub const REFERRAL_SERVICES: [(&str, &str); 8] = [
    ("Sofi_money", "SoFi Money"),
    ("Sofi_invest", "SoFi Invest"),
    ("Robinhood", "Robinhood"),
    ("Amazon", "Amazon"),
    ("Airbnb", "Airbnb"),
    ("Grubhub", "Grubhub"),
    ("Doordash", "DoorDash"),
    ("Uber", "Uber"),
];

/// Element id of the profile form
pub const PROFILE_FORM_ID: &str = "profileform";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// A form element: its id, optional `action` attribute, and ordered fields
#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub id: String,
    pub action: Option<String>,
    pub fields: Vec<FormField>,
    /// Index into the visible fields; `visible_count()` is the submit button row
    pub active_field_index: usize,
}

impl ProfileForm {
    pub fn new(id: &str, fields: Vec<FormField>) -> Self {
        Self {
            id: id.to_string(),
            action: None,
            fields,
            active_field_index: 0,
        }
    }

    /// The referral profile form with every service field empty
    pub fn referral_profile() -> Self {
        let fields = REFERRAL_SERVICES
            .iter()
            .map(|(name, label)| FormField::text(name, label))
            .collect();
        Self::new(PROFILE_FORM_ID, fields)
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }

    /// The `action` attribute, treating an empty one as unset
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref().filter(|a| !a.trim().is_empty())
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Set a field value by name, returning false when no such field exists
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.set_text(value);
                true
            }
            None => false,
        }
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| !f.is_hidden())
    }

    pub fn visible_count(&self) -> usize {
        self.visible_fields().count()
    }

    /// Returns true if the submit button row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.visible_count()
    }

    /// Snapshot the current field values, skipping disabled and unnamed fields
    pub fn serialize(&self) -> FormSubmission {
        FormSubmission::new(
            self.fields
                .iter()
                .filter(|f| f.is_successful())
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect(),
        )
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::referral_profile()
    }
}

impl Form for ProfileForm {
    fn field_count(&self) -> usize {
        self.visible_count() + 1 // visible fields, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.visible_count());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.fields.iter_mut().filter(|f| !f.is_hidden()).nth(index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.visible_fields().nth(index)
    }
}
