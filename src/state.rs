//! Application and session state
//!
//! The interpreter lives inside a larger application that can show either
//! the command line or a graphical view. Exactly one interpreter mode is
//! active at a time: normal command entry or the contact dialog.

use crate::wizard::WizardState;

/// Which surface of the application is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// The command-line interpreter
    #[default]
    Cli,
    /// The graphical portfolio view
    Gui,
}

impl AppMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AppMode::Cli => "cli",
            AppMode::Gui => "gui",
        }
    }
}

/// Interpreter input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Lines go to the command dispatcher
    #[default]
    Normal,
    /// Lines go to the contact dialog
    Wizard,
}

/// Snapshot of the interpreter's mode, step and prompt label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub mode: InputMode,
    /// Dialog step, `0` in normal mode
    pub step: usize,
    /// Prompt shown before the input line
    pub label: String,
}

impl SessionState {
    /// Derive the snapshot from the dialog state and the normal prompt
    pub fn new(wizard: WizardState, prompt: &str) -> Self {
        if wizard == WizardState::Idle {
            Self {
                mode: InputMode::Normal,
                step: 0,
                label: prompt.to_string(),
            }
        } else {
            Self {
                mode: InputMode::Wizard,
                step: wizard.step(),
                label: wizard.label().to_string(),
            }
        }
    }

    pub fn is_wizard(&self) -> bool {
        self.mode == InputMode::Wizard
    }
}
