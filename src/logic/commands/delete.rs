// 🗑️ delete - removes one displayed student

use super::{person_at, CommandResult, Index};
use crate::error::CommandError;
use crate::model::Model;

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the person identified by the index number \
used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    target: Index,
}

impl DeleteCommand {
    pub fn new(target: Index) -> Self {
        DeleteCommand { target }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let to_delete = person_at(model, self.target)?;
        model.delete_person(&to_delete)?;
        Ok(CommandResult::new(format!("Deleted Person: {to_delete}")))
    }
}
