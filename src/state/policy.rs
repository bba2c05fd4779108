//! Privacy policy gate shown before the registration form

use super::app_state::Route;

/// Where the decline button leads when no handler is configured
pub const DEFAULT_DECLINE_URL: &str = "https://google.com";

/// A renderable piece of policy text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyBlock {
    Heading(String),
    Paragraph(String),
    Bullet(String),
    /// Paragraph with one inline link
    Link {
        before: String,
        label: String,
        url: String,
        after: String,
    },
}

/// What the app should do after the user picks a gate button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// In-app navigation
    Navigate(Route),
    /// Leave the app for an external URL
    Redirect(String),
    /// Close the app
    Quit,
}

/// Which gate button has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateButton {
    #[default]
    Accept,
    Decline,
}

impl GateButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Accept => Self::Decline,
            Self::Decline => Self::Accept,
        };
    }
}

/// Static legal text with accept and decline actions
#[derive(Debug, Clone)]
pub struct PolicyGate {
    pub title: String,
    pub content: Vec<PolicyBlock>,
    pub accept_label: String,
    pub decline_label: String,
    on_accept: GateOutcome,
    on_decline: Option<GateOutcome>,
    decline_url: String,
    pub focused: GateButton,
    pub scroll_offset: u16,
}

impl PolicyGate {
    pub fn new(content: Vec<PolicyBlock>, on_accept: GateOutcome) -> Self {
        Self {
            title: "Privacy Policy".to_string(),
            content,
            accept_label: "Accept".to_string(),
            decline_label: "Decline".to_string(),
            on_accept,
            on_decline: None,
            decline_url: DEFAULT_DECLINE_URL.to_string(),
            focused: GateButton::default(),
            scroll_offset: 0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_labels(mut self, accept: impl Into<String>, decline: impl Into<String>) -> Self {
        self.accept_label = accept.into();
        self.decline_label = decline.into();
        self
    }

    /// Custom decline handler; replaces the default redirect
    pub fn with_on_decline(mut self, outcome: GateOutcome) -> Self {
        self.on_decline = Some(outcome);
        self
    }

    /// Destination of the default redirect
    pub fn with_decline_url(mut self, url: impl Into<String>) -> Self {
        self.decline_url = url.into();
        self
    }

    /// The policy used by the lesson signup deployment
    pub fn lesson_policy(decline_url: impl Into<String>) -> Self {
        let content = vec![
            PolicyBlock::Paragraph(
                "We value your privacy. This policy explains how we collect, store, \
                 and use your data. By clicking \u{201c}Accept\u{201d}, you agree to our terms."
                    .to_string(),
            ),
            PolicyBlock::Heading("Information We Collect".to_string()),
            PolicyBlock::Bullet("Name and contact details.".to_string()),
            PolicyBlock::Bullet("IP address (for security).".to_string()),
            PolicyBlock::Bullet("Usage data from the form itself.".to_string()),
            PolicyBlock::Link {
                before: "For more details, see our ".to_string(),
                label: "full privacy policy".to_string(),
                url: "https://example.com/full-privacy".to_string(),
                after: ".".to_string(),
            },
        ];

        Self::new(content, GateOutcome::Navigate(Route::Form))
            .with_title("Example Privacy Policy")
            .with_labels("I Agree", "No, Thanks")
            .with_decline_url(decline_url)
    }

    /// Accept never validates anything
    pub fn accept(&self) -> GateOutcome {
        self.on_accept.clone()
    }

    /// Custom handler when set, otherwise redirect to the decline URL
    pub fn decline(&self) -> GateOutcome {
        self.on_decline
            .clone()
            .unwrap_or_else(|| GateOutcome::Redirect(self.decline_url.clone()))
    }

    /// Outcome of the focused button
    pub fn activate_focused(&self) -> GateOutcome {
        match self.focused {
            GateButton::Accept => self.accept(),
            GateButton::Decline => self.decline(),
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}
