//! Application struct and core event logic

use crate::api::ContactClient;
use crate::config::TuiConfig;
use crate::state::{content, AppState, SubmissionController, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submission controller owning the contact API client and status
    pub submission: SubmissionController<ContactClient>,
    /// Resolved Contact API base URL, shown in the status bar
    pub api_base_url: String,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance with the API client built from config
    pub fn new(config: &TuiConfig) -> Self {
        let api_base_url = config.api_base_url();
        let submission = SubmissionController::new(ContactClient::new(api_base_url.clone()));

        Self {
            state: AppState::default(),
            submission,
            api_base_url,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event, dispatching by current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Contact => self.handle_contact_key(key).await,
            _ => self.handle_browse_key(key),
        }
    }

    /// Handle keys in the static sections (everything except the form)
    fn handle_browse_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('1') => self.state.navigate(View::Home),
            KeyCode::Char('2') => self.state.navigate(View::Services),
            KeyCode::Char('3') => self.state.navigate(View::Work),
            KeyCode::Char('4') => self.state.navigate(View::About),
            KeyCode::Char('5') | KeyCode::Char('c') => self.state.navigate(View::Contact),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => {
                let next = self.state.current_view.next();
                self.state.navigate(next);
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
                let prev = self.state.current_view.prev();
                self.state.navigate(prev);
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('y') => self.copy_contact_email(),
            KeyCode::Esc => self.state.navigate(View::Home),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the Contact view (form editing and submission)
    async fn handle_contact_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_submit_row = self.state.contact_form.is_submit_row_active();

        match key.code {
            KeyCode::Tab => self.state.contact_form.next_field(),
            KeyCode::BackTab => self.state.contact_form.prev_field(),
            KeyCode::Esc => self.state.navigate(View::Home),
            // Submit shortcut works from any field
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact_form().await;
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_contact_email();
            }
            KeyCode::Enter if on_submit_row => self.submit_contact_form().await,
            KeyCode::Enter => {
                // Enter in the project details field adds a newline
                self.state.contact_form.newline();
            }
            KeyCode::Left | KeyCode::Up => {
                self.state.contact_form.cycle_option(false);
                self.state.form_hint = None;
            }
            KeyCode::Right | KeyCode::Down => {
                self.state.contact_form.cycle_option(true);
                self.state.form_hint = None;
            }
            KeyCode::Char(c) if !on_submit_row => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                self.state.contact_form.push_char(ch);
                self.state.form_hint = None;
            }
            KeyCode::Backspace if !on_submit_row => {
                self.state.contact_form.backspace();
                self.state.form_hint = None;
            }
            _ => {}
        }
        Ok(())
    }

    /// Run the submit flow: advisory required-field check, then hand the form
    /// to the submission controller.
    async fn submit_contact_form(&mut self) {
        if let Some(hint) = self.state.contact_form.data().validation_hint() {
            self.state.form_hint = Some(hint.to_string());
            return;
        }
        self.state.form_hint = None;
        self.submission.submit(&mut self.state.contact_form).await;
    }

    /// Copy the agency contact email to the system clipboard
    fn copy_contact_email(&mut self) {
        let result = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(content::CONTACT_EMAIL.to_string()));
        match result {
            Ok(()) => {
                self.copy_message = Some(format!("Copied {}", content::CONTACT_EMAIL));
            }
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                self.copy_message = Some("Clipboard unavailable".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContactField, SubmissionStatus};
    use crossterm::event::KeyEvent;

    fn test_app() -> App {
        App::new(&TuiConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_quit_key() {
        let mut app = test_app();
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_number_keys_navigate_sections() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('3'))).await.unwrap();
        assert_eq!(app.state.current_view, View::Work);
        app.handle_key(key(KeyCode::Char('5'))).await.unwrap();
        assert_eq!(app.state.current_view, View::Contact);
    }

    #[tokio::test]
    async fn test_typing_in_contact_view_edits_form() {
        let mut app = test_app();
        app.state.navigate(View::Contact);
        for c in ['J', 'a', 'n', 'e'] {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
        assert_eq!(app.state.contact_form.data().name, "Jane");
    }

    #[tokio::test]
    async fn test_q_is_input_not_quit_in_contact_view() {
        let mut app = test_app();
        app.state.navigate(View::Contact);
        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(!app.should_quit());
        assert_eq!(app.state.contact_form.data().name, "q");
    }

    #[tokio::test]
    async fn test_tab_cycles_to_submit_row() {
        let mut app = test_app();
        app.state.navigate(View::Contact);
        for _ in 0..ContactField::ALL.len() {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        assert!(app.state.contact_form.is_submit_row_active());
    }

    #[tokio::test]
    async fn test_submit_with_empty_form_shows_hint_without_request() {
        let mut app = test_app();
        app.state.navigate(View::Contact);
        app.submit_contact_form().await;

        assert_eq!(app.state.form_hint.as_deref(), Some("Name is required"));
        // The controller never ran, so no attempt was recorded
        assert_eq!(*app.submission.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_edit_clears_validation_hint() {
        let mut app = test_app();
        app.state.navigate(View::Contact);
        app.submit_contact_form().await;
        assert!(app.state.form_hint.is_some());

        app.handle_key(key(KeyCode::Char('J'))).await.unwrap();
        assert!(app.state.form_hint.is_none());
    }

    #[tokio::test]
    async fn test_escape_returns_home_and_keeps_draft() {
        let mut app = test_app();
        app.state.navigate(View::Contact);
        app.handle_key(key(KeyCode::Char('J'))).await.unwrap();
        app.handle_key(key(KeyCode::Esc)).await.unwrap();

        assert_eq!(app.state.current_view, View::Home);
        // Draft survives navigation within the session
        assert_eq!(app.state.contact_form.data().name, "J");
    }
}
