// 🏷️ untag - strips the given tags from every displayed student

use super::CommandResult;
use crate::error::CommandError;
use crate::model::{Model, Person, TagSet};

pub const COMMAND_WORD: &str = "untag";

pub const MESSAGE_USAGE: &str = "untag: Removes specified tags from all persons.\n\
Parameters: t/TAG [t/TAG]...\n\
Example: untag t/CS2040 t/CS2030";

pub const MESSAGE_NO_PERSON_UPDATED: &str = "No persons were updated as no matching tags were found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntagCommand {
    tags_to_remove: TagSet,
}

impl UntagCommand {
    pub fn new(tags_to_remove: TagSet) -> Self {
        UntagCommand { tags_to_remove }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let to_update: Vec<Person> = model
            .filtered_persons()
            .into_iter()
            .filter(|p| p.tags().intersects(&self.tags_to_remove))
            .collect();

        if to_update.is_empty() {
            return Err(CommandError::invalid(MESSAGE_NO_PERSON_UPDATED));
        }

        for person in &to_update {
            let untagged = person.with_tags(person.tags().without(&self.tags_to_remove));
            model.set_person(person, untagged)?;
        }

        Ok(CommandResult::new(format!(
            "The following tags have been cleared: {}.\n{} person(s) had their tags updated.",
            self.tags_to_remove,
            to_update.len()
        )))
    }
}
