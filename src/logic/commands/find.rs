// 🔎 find - shows students whose name contains any of the keywords

use super::{persons_listed_overview, CommandResult};
use crate::error::CommandError;
use crate::model::{Model, Person};
use std::sync::Arc;

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find: Finds all persons whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        FindCommand { keywords }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let keywords = self.keywords.clone();
        model.update_filtered_persons(Arc::new(move |person: &Person| name_matches(person, &keywords)));
        let count = model.filtered_persons().len();
        Ok(CommandResult::new(persons_listed_overview(count)))
    }
}

/// Whole-word, case-insensitive match of any keyword against the name.
fn name_matches(person: &Person, keywords: &[String]) -> bool {
    person
        .name()
        .as_str()
        .split_whitespace()
        .any(|word| keywords.iter().any(|k| word.eq_ignore_ascii_case(k)))
}
