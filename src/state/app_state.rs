//! Application state definitions

use super::forms::{PreviewRegistry, RegistrationForm};
use super::policy::PolicyGate;
use std::collections::VecDeque;

/// Screens reachable by path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Privacy policy gate
    #[default]
    Policy,
    /// Registration form
    Form,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Policy => "/",
            Self::Form => "/form",
        }
    }

    /// Unknown paths fall back to the policy root
    pub fn from_path(path: &str) -> Self {
        match path.trim().trim_end_matches('/') {
            "/form" | "form" => Self::Form,
            _ => Self::Policy,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Policy => "Privacy Policy",
            Self::Form => "Lesson Registration",
        }
    }
}

/// All UI state owned by the app
#[derive(Debug)]
pub struct AppState {
    pub current_route: Route,
    pub policy: PolicyGate,
    /// Present only while the form screen is mounted
    pub form: Option<RegistrationForm>,
    pub previews: PreviewRegistry,
    /// Blocking alerts, shown one at a time
    alerts: VecDeque<String>,
}

impl AppState {
    pub fn new(policy: PolicyGate) -> Self {
        Self {
            current_route: Route::Policy,
            policy,
            form: None,
            previews: PreviewRegistry::new(),
            alerts: VecDeque::new(),
        }
    }

    /// Switch screens. Entering the form mounts a fresh one; leaving drops it.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = self.current_route.path(), to = route.path(), "Navigate");
        self.form = match route {
            Route::Form if self.current_route == Route::Form => self.form.take(),
            Route::Form => Some(RegistrationForm::new(self.previews.clone())),
            Route::Policy => None,
        };
        if route == Route::Policy {
            self.policy.scroll_offset = 0;
        }
        self.current_route = route;
        tracing::debug!(live_previews = self.previews.live_count(), "Route changed");
    }

    pub fn push_alert(&mut self, message: impl Into<String>) {
        self.alerts.push_back(message.into());
    }

    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::policy::DEFAULT_DECLINE_URL;
    use crate::state::FieldId;

    fn state() -> AppState {
        AppState::new(PolicyGate::lesson_policy(DEFAULT_DECLINE_URL))
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Policy.path(), "/");
        assert_eq!(Route::Form.path(), "/form");
        assert_eq!(Route::from_path("/form"), Route::Form);
        assert_eq!(Route::from_path("/form/"), Route::Form);
        assert_eq!(Route::from_path("/"), Route::Policy);
        assert_eq!(Route::from_path("/nowhere"), Route::Policy);
    }

    #[test]
    fn test_starts_on_policy_without_form() {
        let state = state();
        assert_eq!(state.current_route, Route::Policy);
        assert!(state.form.is_none());
    }

    #[test]
    fn test_navigate_to_form_mounts_fresh_form() {
        let mut state = state();
        state.navigate(Route::Form);
        assert!(state.form.is_some());

        if let Some(form) = state.form.as_mut() {
            form.edit_field(FieldId::Name, "Jane");
        }
        state.navigate(Route::Policy);
        assert!(state.form.is_none());

        state.navigate(Route::Form);
        assert_eq!(state.form.as_ref().unwrap().name.as_text(), "");
    }

    #[test]
    fn test_navigate_to_form_twice_keeps_values() {
        let mut state = state();
        state.navigate(Route::Form);
        state.form.as_mut().unwrap().edit_field(FieldId::Name, "Jane");
        state.navigate(Route::Form);
        assert_eq!(state.form.as_ref().unwrap().name.as_text(), "Jane");
    }

    #[test]
    fn test_alert_queue_is_fifo() {
        let mut state = state();
        assert!(!state.has_alerts());
        state.push_alert("first");
        state.push_alert("second");
        assert_eq!(state.current_alert(), Some("first"));
        state.dismiss_alert();
        assert_eq!(state.current_alert(), Some("second"));
        state.dismiss_alert();
        assert!(!state.has_alerts());
    }
}
