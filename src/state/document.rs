//! In-process page model: forms, result container, popups and console

use super::banner::Banner;
use super::forms::ProfileForm;
use std::collections::VecDeque;
use std::fmt;

/// Element id of the result container
pub const RESULT_CONTAINER_ID: &str = "alertresult";

/// A simple selector: `#id` or a bare tag name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Tag(String),
}

impl Selector {
    pub fn parse(selector: &str) -> Self {
        let selector = selector.trim();
        match selector.strip_prefix('#') {
            Some(id) => Self::Id(id.to_string()),
            None => Self::Tag(selector.to_ascii_lowercase()),
        }
    }

    fn matches(&self, form: &ProfileForm) -> bool {
        match self {
            Self::Id(id) => form.id == *id,
            Self::Tag(tag) => tag == "form",
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// Event handed to submit handlers
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    pub form_id: String,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form_id: &str) -> Self {
        Self {
            form_id: form_id.to_string(),
            default_prevented: false,
        }
    }

    /// Suppress the native form submission
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The page the profile form lives on
#[derive(Debug, Clone)]
pub struct Document {
    /// Path of the current page, used when a form has no action
    pub page_path: String,
    forms: Vec<ProfileForm>,
    container_html: String,
    container_writes: usize,
    popups: VecDeque<String>,
    console: Vec<String>,
    navigation: Option<String>,
}

impl Document {
    pub fn new(page_path: &str) -> Self {
        Self {
            page_path: page_path.to_string(),
            forms: Vec::new(),
            container_html: String::new(),
            container_writes: 0,
            popups: VecDeque::new(),
            console: Vec::new(),
            navigation: None,
        }
    }

    pub fn with_form(mut self, form: ProfileForm) -> Self {
        self.add_form(form);
        self
    }

    pub fn add_form(&mut self, form: ProfileForm) {
        self.forms.push(form);
    }

    /// First form matching `selector`
    pub fn form(&self, selector: &Selector) -> Option<&ProfileForm> {
        self.forms.iter().find(|f| selector.matches(f))
    }

    pub fn form_mut(&mut self, selector: &Selector) -> Option<&mut ProfileForm> {
        self.forms.iter_mut().find(|f| selector.matches(f))
    }

    /// Remove a form by id, returning it if present
    pub fn remove_form(&mut self, id: &str) -> Option<ProfileForm> {
        let index = self.forms.iter().position(|f| f.id == id)?;
        Some(self.forms.remove(index))
    }

    /// Where a native submission of `form` would navigate
    pub fn submission_target(&self, form: &ProfileForm) -> String {
        form.action()
            .map(str::to_string)
            .unwrap_or_else(|| self.page_path.clone())
    }

    /// Fire a submit event at the form matching `selector`.
    ///
    /// Returns `None` when no form matches. If the handler does not call
    /// [`SubmitEvent::prevent_default`], the native submission runs and is
    /// recorded as a navigation.
    pub fn dispatch_submit<R>(
        &mut self,
        selector: &Selector,
        handler: impl FnOnce(&mut Self, &mut SubmitEvent) -> R,
    ) -> Option<R> {
        let form_id = self.form(selector)?.id.clone();
        let mut event = SubmitEvent::new(&form_id);
        let result = handler(self, &mut event);

        if !event.default_prevented() {
            let target = self
                .form(&Selector::Id(form_id))
                .map(|f| self.submission_target(f))
                .unwrap_or_else(|| self.page_path.clone());
            tracing::warn!("Native form submission navigated to {target}");
            self.navigation = Some(target);
        }
        Some(result)
    }

    /// Last native navigation, if any happened
    pub fn navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }

    pub fn container_html(&self) -> &str {
        &self.container_html
    }

    /// Replace the result container content (last write wins)
    pub fn set_container_html(&mut self, html: String) {
        self.container_html = html;
        self.container_writes += 1;
    }

    /// Number of times the result container has been replaced
    pub fn container_writes(&self) -> usize {
        self.container_writes
    }

    /// Banner currently shown in the result container
    pub fn banner(&self) -> Option<Banner> {
        Banner::parse(&self.container_html)
    }

    /// Queue a blocking popup
    pub fn alert(&mut self, message: impl Into<String>) {
        self.popups.push_back(message.into());
    }

    pub fn current_popup(&self) -> Option<&str> {
        self.popups.front().map(String::as_str)
    }

    pub fn popup_count(&self) -> usize {
        self.popups.len()
    }

    pub fn dismiss_popup(&mut self) -> Option<String> {
        self.popups.pop_front()
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.console.push(line.into());
    }

    pub fn console(&self) -> &[String] {
        &self.console
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("/profile").with_form(ProfileForm::referral_profile())
    }
}
