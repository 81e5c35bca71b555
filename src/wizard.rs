//! Contact dialog state machine
//!
//! `Idle -> CollectingName -> CollectingEmail -> CollectingMessage -> Sending -> Idle`
//!
//! Each collecting state owns one validator. A rejected value re-prompts the
//! same state and leaves the draft untouched. Cancellation is only possible
//! while collecting; once `Sending`, the machine waits for the outcome.

use crate::config::WizardConfig;
use crate::outbound::{OutboundMessage, SendOutcome};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Hint printed when the dialog opens
pub const CANCEL_HINT: &str = "Press Esc or Ctrl+C to cancel.";
/// Marker printed when the dialog is cancelled
pub const CANCEL_MARKER: &str = "^C";
/// Printed when input arrives during an in-flight send
pub const BUSY_MESSAGE: &str = "Still sending, please wait...";
pub const SENDING_MESSAGE: &str = "Sending...";
pub const FAILURE_MESSAGE: &str = "Error: Failed to send message. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardState {
    #[default]
    Idle,
    CollectingName,
    CollectingEmail,
    CollectingMessage,
    Sending,
}

impl WizardState {
    /// State reached after a valid submission in this state
    pub fn next(self) -> WizardState {
        match self {
            WizardState::Idle => WizardState::CollectingName,
            WizardState::CollectingName => WizardState::CollectingEmail,
            WizardState::CollectingEmail => WizardState::CollectingMessage,
            WizardState::CollectingMessage => WizardState::Sending,
            WizardState::Sending => WizardState::Idle,
        }
    }

    /// Prompt label shown while in this state
    pub fn label(self) -> &'static str {
        match self {
            WizardState::CollectingName => "Name: ",
            WizardState::CollectingEmail => "Email: ",
            WizardState::CollectingMessage => "Message: ",
            WizardState::Idle | WizardState::Sending => "",
        }
    }

    /// Zero-based step index, `0` when idle
    pub fn step(self) -> usize {
        match self {
            WizardState::Idle => 0,
            WizardState::CollectingName => 1,
            WizardState::CollectingEmail => 2,
            WizardState::CollectingMessage => 3,
            WizardState::Sending => 4,
        }
    }

    pub fn is_collecting(self) -> bool {
        matches!(
            self,
            WizardState::CollectingName | WizardState::CollectingEmail | WizardState::CollectingMessage
        )
    }

    fn field(self) -> &'static str {
        match self {
            WizardState::CollectingName => "Name",
            WizardState::CollectingEmail => "Email",
            _ => "Message",
        }
    }
}

/// Fields collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What a submission did to the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    /// Value rejected; the same state asks again
    Reprompt { error: String },
    /// Value accepted; `echo` is printed and the next label shown
    Advanced { echo: String },
    /// The message field was accepted and the draft is ready to go out
    ReadyToSend {
        echo: String,
        message: OutboundMessage,
    },
    /// A send is in flight
    Busy,
    /// The dialog is not running
    Inactive,
}

/// The contact dialog
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    state: WizardState,
    draft: Draft,
    limits: WizardConfig,
}

impl Wizard {
    pub fn new(limits: WizardConfig) -> Self {
        Self {
            state: WizardState::Idle,
            draft: Draft::default(),
            limits,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// True in every state but `Idle`
    pub fn is_active(&self) -> bool {
        self.state != WizardState::Idle
    }

    pub fn label(&self) -> &'static str {
        self.state.label()
    }

    /// Open the dialog with an empty draft
    pub fn start(&mut self) {
        self.draft = Draft::default();
        self.transition(WizardState::CollectingName);
    }

    /// Feed one submitted line to the current state's validator
    pub fn submit(&mut self, input: &str) -> WizardStep {
        let value = input.trim();
        match self.state {
            WizardState::Idle => return WizardStep::Inactive,
            WizardState::Sending => return WizardStep::Busy,
            _ => {}
        }

        if let Err(error) = self.validate(value) {
            debug!("Contact dialog rejected {:?} input", self.state);
            return WizardStep::Reprompt { error };
        }

        let echo = format!("{}{}", self.state.label(), value);
        match self.state {
            WizardState::CollectingName => self.draft.name = value.to_string(),
            WizardState::CollectingEmail => self.draft.email = value.to_string(),
            WizardState::CollectingMessage => self.draft.message = value.to_string(),
            WizardState::Idle | WizardState::Sending => {}
        }
        self.transition(self.state.next());

        if self.state == WizardState::Sending {
            let message = OutboundMessage {
                name: self.draft.name.clone(),
                email: self.draft.email.clone(),
                message: self.draft.message.clone(),
            };
            WizardStep::ReadyToSend { echo, message }
        } else {
            WizardStep::Advanced { echo }
        }
    }

    /// Abort a collecting dialog; returns false when there is nothing to cancel
    pub fn cancel(&mut self) -> bool {
        if !self.state.is_collecting() {
            return false;
        }
        self.draft = Draft::default();
        self.transition(WizardState::Idle);
        true
    }

    /// Consume the send outcome and return to `Idle`; returns the report lines
    pub fn finish(&mut self, outcome: &SendOutcome) -> Vec<String> {
        if self.state != WizardState::Sending {
            warn!("Send outcome arrived while the contact dialog was {:?}", self.state);
            return Vec::new();
        }

        let lines = match outcome {
            SendOutcome::Sent => vec![
                format!("From: {} <{}>", self.draft.name, self.draft.email),
                format!("Message: {}", self.draft.message),
                "Status: Sent successfully! ✓".to_string(),
            ],
            SendOutcome::Failed { .. } => vec![FAILURE_MESSAGE.to_string()],
        };
        self.draft = Draft::default();
        self.transition(WizardState::Idle);
        lines
    }

    fn transition(&mut self, next: WizardState) {
        debug!("Contact dialog: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn validate(&self, value: &str) -> Result<(), String> {
        let (max, empty_error) = match self.state {
            WizardState::CollectingName => (
                self.limits.max_name_len,
                "Name cannot be empty. Please enter your name:",
            ),
            WizardState::CollectingEmail => (
                self.limits.max_email_len,
                "Email cannot be empty. Please enter your email:",
            ),
            _ => (
                self.limits.max_message_len,
                "Message cannot be empty. Please enter your message:",
            ),
        };

        if value.is_empty() {
            return Err(empty_error.to_string());
        }
        if self.state == WizardState::CollectingEmail && !EMAIL.is_match(value) {
            return Err("Invalid email format. Please enter a valid email:".to_string());
        }
        if value.chars().count() > max {
            return Err(format!(
                "{} is too long (max {} characters). Please try again:",
                self.state.field(),
                max
            ));
        }
        Ok(())
    }
}

/// Whether `value` has the `local@domain.tld` shape
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}
