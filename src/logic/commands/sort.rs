// 🔤 sort - one-off reorder of the whole book by name

use super::{CommandResult, MESSAGE_NO_PERSON_TO_SORT};
use crate::error::CommandError;
use crate::model::Model;

pub const COMMAND_WORD: &str = "sort";

pub const MESSAGE_USAGE: &str = "sort: Sorts all persons by name in alphabetical order.\n\
Example: sort";

pub const MESSAGE_SORT_SUCCESS: &str = "Sorted all persons by name.";

/// Sorts once; persons added later are appended, not inserted in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCommand;

impl SortCommand {
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.address_book().is_empty() {
            return Ok(CommandResult::new(MESSAGE_NO_PERSON_TO_SORT));
        }
        model.sort_persons_by_name();
        Ok(CommandResult::new(MESSAGE_SORT_SUCCESS))
    }
}
