//! Questions the commands need answered by the user.
//!
//! Commands ask through the [`Interaction`] trait so the same flow runs
//! against a terminal ([`TerminalInteraction`]) or against answers fixed up
//! front by command-line flags ([`PresetInteraction`]).

use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

pub trait Interaction {
    /// Asks a yes/no question.
    fn confirm(&self, message: Message) -> Result<bool>;

    /// Returns the fuel allowance paid for the day, or `None` when it was not a work day.
    fn paid_allowance(&self) -> Result<Option<f64>>;
}

/// Prompts on the terminal with `dialoguer`.
pub struct TerminalInteraction;

impl Interaction for TerminalInteraction {
    fn confirm(&self, message: Message) -> Result<bool> {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message.to_string())
            .default(true)
            .interact()?;
        Ok(confirmed)
    }

    fn paid_allowance(&self) -> Result<Option<f64>> {
        let work_day = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWorkDay.to_string())
            .default(true)
            .interact()?;
        if !work_day {
            return Ok(None);
        }

        let amount: f64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPaidAllowance.to_string())
            .validate_with(|input: &f64| -> Result<(), String> {
                if input.is_finite() && *input >= 0.0 {
                    Ok(())
                } else {
                    Err(Message::InvalidInput(input.to_string()).to_string())
                }
            })
            .interact_text()?;
        Ok(Some(amount))
    }
}

/// Fixed answers, used for `--yes`, `--paid` and `--no-work`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetInteraction {
    pub confirm: bool,
    pub paid_allowance: Option<f64>,
}

impl Interaction for PresetInteraction {
    fn confirm(&self, _message: Message) -> Result<bool> {
        Ok(self.confirm)
    }

    fn paid_allowance(&self) -> Result<Option<f64>> {
        Ok(self.paid_allowance)
    }
}
