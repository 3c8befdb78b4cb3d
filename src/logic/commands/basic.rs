// Argument-less commands: list, purge, help, toggletheme, exit

use super::CommandResult;
use crate::error::CommandError;
use crate::model::{show_all_persons, AddressBook, Model};

pub const LIST_COMMAND_WORD: &str = "list";
pub const PURGE_COMMAND_WORD: &str = "purge";
pub const HELP_COMMAND_WORD: &str = "help";
pub const TOGGLE_THEME_COMMAND_WORD: &str = "toggletheme";
pub const EXIT_COMMAND_WORD: &str = "exit";

pub const LIST_MESSAGE_SUCCESS: &str = "Listed all persons";
pub const PURGE_MESSAGE_SUCCESS: &str = "Address book has been cleared!";
pub const SHOWING_HELP_MESSAGE: &str = "Opened help window.";
pub const SHOWING_TOGGLE_THEME_MESSAGE: &str = "Toggled Theme.";
pub const EXIT_MESSAGE: &str = "Exiting Address Book as requested ...";

pub const HELP_MESSAGE_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

/// Shows everyone again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_persons(show_all_persons());
        Ok(CommandResult::new(LIST_MESSAGE_SUCCESS))
    }
}

/// Empties the whole book, regardless of the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeCommand;

impl PurgeCommand {
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.set_address_book(AddressBook::new());
        Ok(CommandResult::new(PURGE_MESSAGE_SUCCESS))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            show_help: true,
            ..CommandResult::new(SHOWING_HELP_MESSAGE)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleThemeCommand;

impl ToggleThemeCommand {
    pub fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            toggle_theme: true,
            ..CommandResult::new(SHOWING_TOGGLE_THEME_MESSAGE)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            exit: true,
            ..CommandResult::new(EXIT_MESSAGE)
        })
    }
}
