use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::warn;

/// Asks the person at the keyboard before a destructive action
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Fixed answer, for non-interactive callers
impl Confirmation for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

/// Answers yes without asking (`--yes`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Yes/no prompt on the terminal. Defaults to no.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        match Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Confirmation prompt failed, treating as no: {}", e);
                false
            }
        }
    }
}
