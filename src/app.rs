//! Application state and core logic

use crate::api::{LessonApiClient, RegistrationApi};
use crate::config::AppConfig;
use crate::platform::{Redirector, SystemBrowser};
use crate::state::{
    AppState, FieldId, GateOutcome, PolicyGate, Registration, Route, ValidationError,
    BACK_BUTTON, SUBMIT_BUTTON,
};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Lines moved per page scroll in the policy view
const PAGE_SCROLL: u16 = 10;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the registration backend
    api: Arc<dyn RegistrationApi>,
    /// Handles the decline redirect
    redirector: Box<dyn Redirector>,
    /// Result of the in-flight submission, if any
    pending: Option<oneshot::Receiver<Result<()>>>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App talking to the configured backend
    pub fn new(config: &AppConfig) -> Result<Self> {
        let api = LessonApiClient::from_config(config)?;
        tracing::info!(endpoint = %api.endpoint(), "Registration client ready");
        Ok(Self::with_collaborators(
            config,
            Arc::new(api),
            Box::new(SystemBrowser),
        ))
    }

    /// Create an App with explicit collaborators
    pub fn with_collaborators(
        config: &AppConfig,
        api: Arc<dyn RegistrationApi>,
        redirector: Box<dyn Redirector>,
    ) -> Self {
        let mut policy = PolicyGate::lesson_policy(config.decline_url());
        if config.quit_on_decline() {
            policy = policy.with_on_decline(GateOutcome::Quit);
        }
        let mut state = AppState::new(policy);
        let start = config.start_route();
        if start != Route::Policy {
            state.navigate(start);
        }

        Self {
            state,
            api,
            redirector,
            pending: None,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Queue a blocking alert
    pub fn push_alert(&mut self, message: impl Into<String>) {
        self.state.push_alert(message);
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Alerts are modal and must be dismissed first
        if self.state.has_alerts() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_route {
            Route::Policy => self.handle_policy_key(key),
            Route::Form => self.handle_form_key(key),
        }
        Ok(())
    }

    /// Handle keys on the policy gate
    fn handle_policy_key(&mut self, key: KeyEvent) {
        let policy = &mut self.state.policy;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => policy.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => policy.scroll_up(1),
            KeyCode::PageDown => policy.scroll_down(PAGE_SCROLL),
            KeyCode::PageUp => policy.scroll_up(PAGE_SCROLL),
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h')
            | KeyCode::Char('l') => policy.focused.toggle(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let outcome = policy.activate_focused();
                self.apply_gate_outcome(outcome);
            }
            KeyCode::Char('a') => {
                let outcome = policy.accept();
                self.apply_gate_outcome(outcome);
            }
            KeyCode::Char('n') => {
                let outcome = policy.decline();
                self.apply_gate_outcome(outcome);
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn apply_gate_outcome(&mut self, outcome: GateOutcome) {
        match outcome {
            GateOutcome::Navigate(route) => self.state.navigate(route),
            GateOutcome::Redirect(url) => match self.redirector.open(&url) {
                // Leaving for the external page ends the session
                Ok(()) => self.quit = true,
                Err(e) => {
                    tracing::error!(error = ?e, %url, "Redirect failed");
                    self.push_alert(format!("Could not open {url}: {e}"));
                }
            },
            GateOutcome::Quit => self.quit = true,
        }
    }

    /// Handle keys on the registration form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.state.navigate(Route::Policy),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left if form.is_buttons_row_active() => form.prev_button(),
            KeyCode::Right if form.is_buttons_row_active() => form.next_button(),
            KeyCode::Enter if form.is_buttons_row_active() => match form.selected_button {
                SUBMIT_BUTTON => self.submit(),
                BACK_BUTTON => self.state.navigate(Route::Policy),
                _ => {}
            },
            KeyCode::Enter if form.is_image_field_active() => self.select_typed_image(),
            KeyCode::Enter if form.is_active_field_multiline() => {
                if let Some(input) = form.active_input_mut() {
                    input.push_newline();
                }
            }
            KeyCode::Enter => form.next_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = form.active_input_mut() {
                    input.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = form.active_input_mut() {
                    input.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Insert pasted text into the active form input.
    ///
    /// Text fields append it; the image field takes it as the whole path
    /// and selects it, since terminals paste dropped files as paths.
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_alerts() {
            return;
        }
        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        if form.status().is_loading() {
            return;
        }

        if form.is_image_field_active() {
            form.image_path.set_text(text.trim());
            self.select_typed_image();
        } else if let Some(id) = FieldId::from_index(form.active_field_index) {
            let field = form.field(id);
            let pasted = if field.is_multiline {
                text.replace("\r\n", "\n")
            } else {
                text.replace(['\r', '\n'], " ")
            };
            let value = format!("{}{pasted}", field.as_text());
            form.edit_field(id, value);
        }
    }

    /// Accept the path typed into the image field, or alert why not
    fn select_typed_image(&mut self) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        match form.select_typed_image() {
            Ok(()) => {
                if let Some(image) = form.license_image() {
                    self.status_message = Some(format!("Selected {}", image.file_name));
                }
                form.next_field();
            }
            Err(e) => {
                tracing::debug!(error = %e, "Image rejected");
                self.push_alert(e.to_string());
            }
        }
    }

    /// Validate the form and start the upload in the background
    pub fn submit(&mut self) {
        if self.pending.is_some() {
            self.push_alert(ValidationError::SubmissionInProgress.to_string());
            return;
        }
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        match form.begin_submit() {
            Ok(registration) => self.spawn_submission(registration),
            Err(e) => {
                tracing::debug!(error = %e, "Submission blocked");
                self.push_alert(e.to_string());
            }
        }
    }

    fn spawn_submission(&mut self, registration: Registration) {
        let (tx, rx) = oneshot::channel();
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            let result = api.submit(&registration).await;
            // Receiver is gone only if the app is shutting down
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
    }

    /// Apply the submission result once it arrives.
    /// Returns true when a pending submission was resolved.
    pub fn poll_submission(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(anyhow!("Submission task ended without a result")),
        };
        self.pending = None;
        self.finish_submission(result);
        true
    }

    fn finish_submission(&mut self, result: Result<()>) {
        let Some(form) = self.state.form.as_mut() else {
            tracing::warn!("Submission finished after the form was closed");
            return;
        };
        match result {
            Ok(()) => {
                form.complete_success();
            }
            Err(e) => {
                tracing::error!(error = ?e, "Registration submission failed");
                form.complete_failure();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRegistrationApi;
    use crate::platform::MockRedirector;
    use crate::state::{write_fixture, SubmissionStatus, ERROR_MESSAGE, SUCCESS_MESSAGE};
    use mockall::predicate::eq;
    use std::time::Duration;
    use tempfile::TempDir;

    fn app_with(api: MockRegistrationApi, redirector: MockRedirector) -> App {
        App::with_collaborators(
            &AppConfig::default(),
            Arc::new(api),
            Box::new(redirector),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    /// Poll until the spawned submission reports back
    async fn settle(app: &mut App) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while !app.poll_submission() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("submission did not settle");
    }

    fn fill_jane(app: &mut App) {
        let form = app.state.form.as_mut().unwrap();
        form.edit_field(FieldId::Name, "Jane Doe");
        form.edit_field(FieldId::Phone, "555-1234");
        form.edit_field(FieldId::Email, "jane@example.com");
        form.edit_field(FieldId::Address, "1 Main St");
        form.edit_field(FieldId::LicenseNumber, "D1234567");
    }

    fn form_values(app: &App) -> Vec<String> {
        let form = app.state.form.as_ref().unwrap();
        FieldId::ALL
            .iter()
            .map(|id| form.field(*id).value.clone())
            .collect()
    }

    mod policy_gate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_accept_navigates_to_form() {
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            assert_eq!(app.state.current_route, Route::Policy);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_route, Route::Form);
            assert!(app.state.form.is_some());
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_decline_redirects_to_default_url() {
            let mut redirector = MockRedirector::new();
            redirector
                .expect_open()
                .with(eq("https://google.com"))
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(MockRegistrationApi::new(), redirector);

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.should_quit());
            assert_eq!(app.state.current_route, Route::Policy);
        }

        #[tokio::test]
        async fn test_decline_uses_configured_url() {
            let mut redirector = MockRedirector::new();
            redirector
                .expect_open()
                .with(eq("https://example.org"))
                .times(1)
                .returning(|_| Ok(()));
            let config = AppConfig {
                decline_url: Some("https://example.org".to_string()),
                ..Default::default()
            };
            let mut app = App::with_collaborators(
                &config,
                Arc::new(MockRegistrationApi::new()),
                Box::new(redirector),
            );

            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_quit_on_decline_skips_redirect() {
            let mut redirector = MockRedirector::new();
            redirector.expect_open().times(0);
            let config = AppConfig {
                quit_on_decline: Some(true),
                ..Default::default()
            };
            let mut app = App::with_collaborators(
                &config,
                Arc::new(MockRegistrationApi::new()),
                Box::new(redirector),
            );

            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_failed_redirect_alerts_and_stays() {
            let mut redirector = MockRedirector::new();
            redirector
                .expect_open()
                .returning(|_| Err(anyhow!("no browser")));
            let mut app = app_with(MockRegistrationApi::new(), redirector);

            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            assert!(!app.should_quit());
            assert!(app.state.current_alert().unwrap().contains("no browser"));
        }

        #[tokio::test]
        async fn test_scroll_keys() {
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            app.handle_key(key(KeyCode::PageDown)).await.unwrap();
            app.handle_key(key(KeyCode::Char('k'))).await.unwrap();
            assert_eq!(app.state.policy.scroll_offset, PAGE_SCROLL - 1);
        }

        #[test]
        fn test_start_path_skips_gate() {
            let config = AppConfig {
                start_path: Some("/form".to_string()),
                ..Default::default()
            };
            let app = App::with_collaborators(
                &config,
                Arc::new(MockRegistrationApi::new()),
                Box::new(MockRedirector::new()),
            );
            assert_eq!(app.state.current_route, Route::Form);
            assert!(app.state.form.is_some());
        }
    }

    mod form_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_edits_only_active_field() {
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            app.state.navigate(Route::Form);

            type_text(&mut app, "Jane").await;
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(
                form_values(&app),
                vec!["Jan".to_string(), String::new(), String::new(), String::new(), String::new()]
            );
        }

        #[tokio::test]
        async fn test_ctrl_letters_do_not_type() {
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            app.state.navigate(Route::Form);

            app.handle_key(ctrl('a')).await.unwrap();
            app.handle_key(ctrl('x')).await.unwrap();
            assert_eq!(app.state.form.as_ref().unwrap().name.as_text(), "");
        }

        #[tokio::test]
        async fn test_paste_appends_to_text_field() {
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            app.state.navigate(Route::Form);

            type_text(&mut app, "Jane").await;
            app.handle_paste(" Doe\n");
            assert_eq!(app.state.form.as_ref().unwrap().name.as_text(), "Jane Doe ");
        }

        #[test]
        fn test_paste_keeps_newlines_in_address() {
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            app.state.navigate(Route::Form);
            app.state.form.as_mut().unwrap().set_active_field(3);

            app.handle_paste("1 Main St\r\nSpringfield");
            assert_eq!(
                app.state.form.as_ref().unwrap().address.as_text(),
                "1 Main St\nSpringfield"
            );
        }

        #[test]
        fn test_paste_into_image_field_selects_file() {
            let dir = TempDir::new().unwrap();
            let path = write_fixture(&dir, "license.png", 1024);
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            app.state.navigate(Route::Form);
            app.state.form.as_mut().unwrap().set_active_field(5);

            app.handle_paste(&format!("'{}'\n", path.display()));
            let form = app.state.form.as_ref().unwrap();
            assert_eq!(form.license_image().unwrap().file_name, "license.png");
            assert!(form.is_buttons_row_active());
        }

        #[tokio::test]
        async fn test_enter_adds_newline_in_address() {
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            app.state.navigate(Route::Form);
            app.state.form.as_mut().unwrap().set_active_field(3);

            type_text(&mut app, "1 Main St").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            type_text(&mut app, "Springfield").await;
            assert_eq!(
                app.state.form.as_ref().unwrap().address.as_text(),
                "1 Main St\nSpringfield"
            );
        }

        #[tokio::test]
        async fn test_enter_on_image_field_selects_file() {
            let dir = TempDir::new().unwrap();
            let path = write_fixture(&dir, "license.jpg", 1024);
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            app.state.navigate(Route::Form);
            app.state.form.as_mut().unwrap().set_active_field(5);

            type_text(&mut app, path.to_str().unwrap()).await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            let form = app.state.form.as_ref().unwrap();
            assert_eq!(form.license_image().unwrap().file_name, "license.jpg");
            assert!(form.preview().is_some());
            assert!(form.is_buttons_row_active());
            assert_eq!(app.status_message.as_deref(), Some("Selected license.jpg"));
        }

        #[tokio::test]
        async fn test_alert_blocks_input_until_dismissed() {
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            app.state.navigate(Route::Form);
            app.push_alert("Heads up");

            type_text(&mut app, "x").await;
            assert_eq!(app.state.form.as_ref().unwrap().name.as_text(), "");

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.has_alerts());
            assert_eq!(app.state.current_route, Route::Form);
        }

        #[tokio::test]
        async fn test_esc_returns_to_policy_and_discards_form() {
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            app.state.navigate(Route::Form);
            type_text(&mut app, "Jane").await;

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_route, Route::Policy);
            assert!(app.state.form.is_none());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_successful_submission_resets_form() {
            let dir = TempDir::new().unwrap();
            let image = write_fixture(&dir, "license.jpg", 2 * 1024 * 1024);
            let mut api = MockRegistrationApi::new();
            api.expect_submit()
                .withf(|r: &Registration| {
                    r.name == "Jane Doe"
                        && r.license_number == "D1234567"
                        && r.license_image.content_type == "image/jpeg"
                })
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(api, MockRedirector::new());
            app.state.navigate(Route::Form);
            fill_jane(&mut app);
            app.state
                .form
                .as_mut()
                .unwrap()
                .select_image(image.to_str().unwrap())
                .unwrap();

            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(
                app.state.form.as_ref().unwrap().status(),
                SubmissionStatus::Loading
            );
            assert!(app.is_submitting());

            settle(&mut app).await;
            let form = app.state.form.as_ref().unwrap();
            assert_eq!(form.status(), SubmissionStatus::Success);
            assert_eq!(form.message(), SUCCESS_MESSAGE);
            assert_eq!(form_values(&app), vec![String::new(); 5]);
            assert!(form.license_image().is_none());
            assert!(form.preview().is_none());
            assert_eq!(app.state.previews.live_count(), 0);
            assert!(!app.is_submitting());
        }

        #[tokio::test]
        async fn test_transport_failure_keeps_values() {
            let dir = TempDir::new().unwrap();
            let image = write_fixture(&dir, "license.jpg", 1024);
            let mut api = MockRegistrationApi::new();
            api.expect_submit()
                .times(1)
                .returning(|_| Err(anyhow!("connection refused")));
            let mut app = app_with(api, MockRedirector::new());
            app.state.navigate(Route::Form);
            fill_jane(&mut app);
            app.state
                .form
                .as_mut()
                .unwrap()
                .select_image(image.to_str().unwrap())
                .unwrap();

            app.submit();
            settle(&mut app).await;

            let form = app.state.form.as_ref().unwrap();
            assert_eq!(form.status(), SubmissionStatus::Error);
            assert_eq!(form.message(), ERROR_MESSAGE);
            assert_eq!(
                form_values(&app),
                vec![
                    "Jane Doe".to_string(),
                    "555-1234".to_string(),
                    "jane@example.com".to_string(),
                    "1 Main St".to_string(),
                    "D1234567".to_string(),
                ]
            );
            assert!(!app.state.has_alerts());
        }

        #[tokio::test]
        async fn test_oversized_image_then_submit_is_blocked() {
            let dir = TempDir::new().unwrap();
            let image = write_fixture(&dir, "license.png", 6 * 1024 * 1024);
            let mut api = MockRegistrationApi::new();
            api.expect_submit().times(0);
            let mut app = app_with(api, MockRedirector::new());
            app.state.navigate(Route::Form);
            fill_jane(&mut app);

            let form = app.state.form.as_mut().unwrap();
            form.image_path.set_text(image.to_str().unwrap());
            form.set_active_field(5);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(
                app.state.current_alert(),
                Some("File size must be under 5MB.")
            );
            assert!(app.state.form.as_ref().unwrap().license_image().is_none());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(
                app.state.current_alert(),
                Some("Please upload your driver's license image.")
            );
            assert_eq!(
                app.state.form.as_ref().unwrap().status(),
                SubmissionStatus::Idle
            );
            assert!(!app.is_submitting());
        }

        #[tokio::test]
        async fn test_missing_text_field_blocks_submit() {
            let dir = TempDir::new().unwrap();
            let image = write_fixture(&dir, "license.jpg", 1024);
            let mut api = MockRegistrationApi::new();
            api.expect_submit().times(0);
            let mut app = app_with(api, MockRedirector::new());
            app.state.navigate(Route::Form);
            fill_jane(&mut app);
            let form = app.state.form.as_mut().unwrap();
            form.edit_field(FieldId::Email, "");
            form.select_image(image.to_str().unwrap()).unwrap();

            app.submit();
            assert_eq!(
                app.state.current_alert(),
                Some("Please fill out the Email Address field.")
            );
            assert!(!app.is_submitting());
        }

        #[tokio::test]
        async fn test_second_submit_while_loading_is_rejected() {
            let dir = TempDir::new().unwrap();
            let image = write_fixture(&dir, "license.jpg", 1024);
            let mut api = MockRegistrationApi::new();
            api.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = app_with(api, MockRedirector::new());
            app.state.navigate(Route::Form);
            fill_jane(&mut app);
            app.state
                .form
                .as_mut()
                .unwrap()
                .select_image(image.to_str().unwrap())
                .unwrap();

            app.submit();
            app.submit();
            assert_eq!(
                app.state.current_alert(),
                Some("A submission is already in progress.")
            );

            settle(&mut app).await;
            assert_eq!(
                app.state.form.as_ref().unwrap().status(),
                SubmissionStatus::Success
            );
        }

        #[tokio::test]
        async fn test_result_after_leaving_form_is_dropped() {
            let dir = TempDir::new().unwrap();
            let image = write_fixture(&dir, "license.jpg", 1024);
            let mut api = MockRegistrationApi::new();
            api.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = app_with(api, MockRedirector::new());
            app.state.navigate(Route::Form);
            fill_jane(&mut app);
            app.state
                .form
                .as_mut()
                .unwrap()
                .select_image(image.to_str().unwrap())
                .unwrap();

            app.submit();
            app.state.navigate(Route::Policy);
            settle(&mut app).await;

            assert!(app.state.form.is_none());
            assert!(!app.is_submitting());
        }

        #[test]
        fn test_poll_without_pending_is_noop() {
            let mut app = app_with(MockRegistrationApi::new(), MockRedirector::new());
            assert!(!app.poll_submission());
        }
    }
}
