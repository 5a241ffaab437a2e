//! Application state and core logic

use crate::client::{HttpClient, SubmitTransport};
use crate::config::ProfileConfig;
use crate::interceptor::{Completion, Interceptor, SubmitState};
use crate::platform::CLEAR_MODIFIER;
use crate::state::{Document, Form, ProfileForm};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Buttons on the form's button row, in display order
pub const BUTTONS: [&str; 2] = ["Save", "Clear"];

/// Main application struct
pub struct App {
    /// The page being edited
    pub document: Document,
    /// Submit handler bound to the profile form
    pub interceptor: Interceptor,
    /// Transport shared with in-flight request tasks
    transport: Arc<dyn SubmitTransport>,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
    /// Which button is selected when on the buttons row
    pub selected_button: usize,
    /// Status bar message
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from configuration
    pub fn new(config: &ProfileConfig) -> Result<Self> {
        let base_url = config.server_url()?;
        tracing::info!("Profile editor posting to {base_url}");
        let transport = HttpClient::new(config.request_timeout())?;
        let document = Document::new(config.page_path()).with_form(ProfileForm::referral_profile());
        let interceptor = Interceptor::bind(
            &document,
            &config.form_selector(),
            base_url,
            config.endpoint_policy(),
            config.feedback_policy(),
        )?;

        Ok(Self::with_transport(document, interceptor, Arc::new(transport)))
    }

    pub fn with_transport(
        document: Document,
        interceptor: Interceptor,
        transport: Arc<dyn SubmitTransport>,
    ) -> Self {
        let (completions_tx, completions_rx) = unbounded_channel();
        Self {
            document,
            interceptor,
            transport,
            completions_tx,
            completions_rx,
            selected_button: 0,
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.interceptor.state() == SubmitState::Submitting
    }

    /// The bound form
    pub fn form(&self) -> Option<&ProfileForm> {
        self.document.form(self.interceptor.selector())
    }

    fn form_mut(&mut self) -> Option<&mut ProfileForm> {
        let selector = self.interceptor.selector().clone();
        self.document.form_mut(&selector)
    }

    /// Submit the form: one spawned request per call
    pub fn submit(&mut self) {
        match self.interceptor.submit(&mut self.document) {
            Some(Ok(pending)) => {
                let transport = Arc::clone(&self.transport);
                let tx = self.completions_tx.clone();
                tokio::spawn(async move {
                    let completion = Interceptor::dispatch(transport.as_ref(), pending).await;
                    // Receiver lives as long as the app
                    let _ = tx.send(completion);
                });
                self.status_message = None;
            }
            Some(Err(err)) => {
                tracing::error!("Submit failed before sending: {err}");
                self.status_message = Some(err.to_string());
            }
            None => {
                tracing::error!("Bound form {} is gone", self.interceptor.selector());
                self.status_message = Some("Profile form is missing".to_string());
            }
        }
    }

    /// Apply every completion that has arrived; returns how many were settled
    pub fn poll_completions(&mut self) -> usize {
        let mut settled = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.interceptor.settle(&mut self.document, completion);
            settled += 1;
        }
        settled
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Popups are modal
        if self.document.current_popup().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.document.dismiss_popup();
            }
            return;
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
            return;
        }

        if key.code == KeyCode::Char('u') && key.modifiers.contains(CLEAR_MODIFIER) {
            if let Some(field) = self.form_mut().and_then(|f| f.get_active_field_mut()) {
                field.clear();
            }
            return;
        }

        let on_buttons_row = self.form().is_some_and(|f| f.is_buttons_row_active());

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = self.form_mut() {
                    form.next_field();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = self.form_mut() {
                    form.prev_field();
                }
            }
            KeyCode::Left | KeyCode::Right if on_buttons_row => {
                self.selected_button = (self.selected_button + 1) % BUTTONS.len();
            }
            KeyCode::Enter if on_buttons_row => match self.selected_button {
                0 => self.submit(),
                _ => {
                    if let Some(form) = self.form_mut() {
                        form.fields.iter_mut().for_each(|f| f.clear());
                    }
                }
            },
            KeyCode::Enter => {
                if let Some(form) = self.form_mut() {
                    form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.form_mut().and_then(|f| f.get_active_field_mut()) {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.form_mut().and_then(|f| f.get_active_field_mut()) {
                    field.push_char(c);
                }
            }
            _ => {}
        }
    }
}
