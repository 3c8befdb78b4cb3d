// 🧹 clear - bulk delete, either a displayed index range or everyone
// carrying any of the given tags

use super::{CommandResult, Index};
use crate::error::CommandError;
use crate::model::{Model, Person, TagSet};

pub const COMMAND_WORD: &str = "clear";

pub const MESSAGE_USAGE: &str = "clear: Removes all persons EITHER from a start to end index \
OR matching the specified tags. \n\
Parameters: i/START...END OR t/TAG [t/TAG]...\n\
Example: clear i/1...5 OR clear t/CS2030C t/GEA1000";

pub const MESSAGE_INVALID_INDEX_RANGE: &str =
    "Invalid index range provided. End index must be strictly greater than start index";
pub const MESSAGE_INVALID_START_INDEX: &str = "Invalid start index provided";
pub const MESSAGE_INVALID_END_INDEX: &str = "Invalid end index provided";
pub const MESSAGE_MISSING_TAGS: &str = "Please provide at least one tag to clear";

fn success(detail: &str) -> String {
    format!("Number of persons removed successfully: {detail}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearCommand {
    IndexRange { start: Index, end: Index },
    Tags(TagSet),
}

impl ClearCommand {
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let detail = match self {
            ClearCommand::IndexRange { start, end } => clear_index_range(model, *start, *end)?,
            ClearCommand::Tags(tags) => clear_tags(model, tags)?,
        };
        Ok(CommandResult::new(success(&detail)))
    }
}

fn clear_index_range(model: &mut dyn Model, start: Index, end: Index) -> Result<String, CommandError> {
    let shown = model.filtered_persons();
    if start.zero_based() >= shown.len() {
        return Err(CommandError::invalid(MESSAGE_INVALID_START_INDEX));
    }
    if end.zero_based() >= shown.len() {
        return Err(CommandError::invalid(MESSAGE_INVALID_END_INDEX));
    }
    if end <= start {
        return Err(CommandError::invalid(MESSAGE_INVALID_INDEX_RANGE));
    }

    let to_delete = &shown[start.zero_based()..=end.zero_based()];
    delete_all(model, to_delete)?;

    Ok(format!(
        "{}. Deleted persons from index {} to {}",
        to_delete.len(),
        start.one_based(),
        end.one_based()
    ))
}

fn clear_tags(model: &mut dyn Model, tags: &TagSet) -> Result<String, CommandError> {
    if tags.is_empty() {
        return Err(CommandError::invalid(MESSAGE_MISSING_TAGS));
    }

    let to_delete: Vec<Person> = model
        .filtered_persons()
        .into_iter()
        .filter(|p| p.tags().intersects(tags))
        .collect();

    if to_delete.is_empty() {
        return Ok(format!("0. No persons found with the tags: {tags}."));
    }

    delete_all(model, &to_delete)?;
    Ok(format!(
        "{}. Person(s) deleted had at least one of these tag(s): {tags}",
        to_delete.len()
    ))
}

fn delete_all(model: &mut dyn Model, persons: &[Person]) -> Result<(), CommandError> {
    for person in persons {
        model.delete_person(person)?;
    }
    Ok(())
}
