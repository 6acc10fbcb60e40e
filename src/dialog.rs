//! Dialog decision policy
//!
//! A browser dialog (alert, confirm, prompt) is answered by a registered
//! handler given the dialog's message text. The automation driver guarantees
//! at most one invocation per dialog instance and calls synchronously, so a
//! policy is a plain bundle of pure handlers with no concurrency concerns.

use std::fmt;

/// A dialog raised by the page, carrying its message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Alert { message: String },
    Confirm { message: String },
    Prompt { message: String },
}

impl Dialog {
    pub fn message(&self) -> &str {
        match self {
            Dialog::Alert { message } | Dialog::Confirm { message } | Dialog::Prompt { message } => {
                message
            }
        }
    }
}

/// The user's decision for a single dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogDecision {
    /// Alerts carry no choice; they are only dismissed.
    Acknowledged,
    /// Accept (`true`) or dismiss a confirm dialog.
    Confirmed(bool),
    /// Text entered into a prompt, or `None` to cancel it.
    Reply(Option<String>),
}

type ConfirmHandler = Box<dyn Fn(&str) -> bool>;
type PromptHandler = Box<dyn Fn(&str) -> Option<String>>;

/// Maps dialog messages to decisions.
pub struct DialogPolicy {
    on_confirm: ConfirmHandler,
    on_prompt: PromptHandler,
}

impl fmt::Debug for DialogPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogPolicy").finish_non_exhaustive()
    }
}

impl Default for DialogPolicy {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl DialogPolicy {
    /// Accept every dialog: confirms are accepted, prompts answered with an
    /// empty string.
    pub fn accept_all() -> Self {
        Self {
            on_confirm: Box::new(|_| true),
            on_prompt: Box::new(|_| Some(String::new())),
        }
    }

    pub fn with_confirm<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.on_confirm = Box::new(handler);
        self
    }

    pub fn with_prompt<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.on_prompt = Box::new(handler);
        self
    }

    /// Decide `dialog`. The driver calls this at most once per dialog
    /// instance; the policy keeps no state between calls.
    pub fn decide(&self, dialog: &Dialog) -> DialogDecision {
        match dialog {
            Dialog::Alert { message } => {
                log::debug!("alert acknowledged: \"{}\"", message);
                DialogDecision::Acknowledged
            }
            Dialog::Confirm { message } => DialogDecision::Confirmed((self.on_confirm)(message)),
            Dialog::Prompt { message } => DialogDecision::Reply((self.on_prompt)(message)),
        }
    }
}
