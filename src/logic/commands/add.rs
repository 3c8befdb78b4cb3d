// ➕ add - adds a new student

use super::CommandResult;
use crate::error::CommandError;
use crate::model::{Model, Person};

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds a person to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [el/EDUCATION] [y/CURRENT_YEAR] \
[cg/CURRENT_GRADE] [eg/EXP_GRADE] [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
el/Bachelor y/Year 2 cg/B eg/A t/CS2040 t/friends#4287f5";

pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Person,
}

impl AddCommand {
    pub fn new(person: Person) -> Self {
        AddCommand { to_add: person }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_person(&self.to_add) {
            return Err(CommandError::invalid(MESSAGE_DUPLICATE_PERSON));
        }
        model.add_person(self.to_add.clone())?;
        Ok(CommandResult::new(format!("New person added: {}", self.to_add)))
    }
}
