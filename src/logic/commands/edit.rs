// ✏️ edit - replaces fields of one displayed student
//
// Tags support three operations applied in a fixed order against the
// person's current tags: replace (t/), then remove (t-/), then append (t+/).
// Payment info is never touched here; that's what `payment` is for.

use super::{person_at, CommandResult, Index};
use crate::error::CommandError;
use crate::model::{
    show_all_persons, Address, CurrentGrade, CurrentYear, EduLevel, Email, ExpectedGrade, Model,
    Name, Person, Phone, Tag, TagSet,
};

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the details of the person identified \
by the index number used in the displayed person list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] \
[el/EDUCATION] [y/CURRENT_YEAR] [cg/CURRENT_GRADE] [eg/EXP_GRADE] \
[t/TAG]... [t-/REMOVE_TAG]... [t+/APPEND_TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com cg/C";

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book.";

/// Fields to change; `None` keeps the person's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub edu_level: Option<EduLevel>,
    pub current_year: Option<CurrentYear>,
    pub current_grade: Option<CurrentGrade>,
    pub expected_grade: Option<ExpectedGrade>,
    pub tags: Option<TagSet>,
    pub tags_to_remove: Option<TagSet>,
    pub tags_to_append: Option<TagSet>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.edu_level.is_some()
            || self.current_year.is_some()
            || self.current_grade.is_some()
            || self.expected_grade.is_some()
            || self.tags.is_some()
            || self.tags_to_remove.is_some()
            || self.tags_to_append.is_some()
    }

    fn edited_tags(&self, current: &TagSet) -> TagSet {
        let mut tags = self.tags.clone().unwrap_or_else(|| current.clone());
        if let Some(remove) = &self.tags_to_remove {
            tags.remove_all(remove);
        }
        if let Some(append) = &self.tags_to_append {
            tags.extend(append);
        }
        tags
    }

    /// Builds the edited copy of `person`.
    pub fn apply_to(&self, person: &Person) -> Result<Person, CommandError> {
        let tags = self.edited_tags(person.tags());
        if tags.exceeds_limit() {
            return Err(CommandError::invalid(Tag::MESSAGE_CONSTRAINTS_EDIT_SET));
        }

        Ok(Person::new(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.address.clone().unwrap_or_else(|| person.address().clone()),
            self.edu_level.unwrap_or(person.edu_level()),
            self.current_year
                .clone()
                .unwrap_or_else(|| person.current_year().clone()),
            self.current_grade
                .clone()
                .unwrap_or_else(|| person.current_grade().clone()),
            self.expected_grade
                .clone()
                .unwrap_or_else(|| person.expected_grade().clone()),
            tags,
            *person.payment_info(),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        EditCommand { index, descriptor }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let to_edit = person_at(model, self.index)?;
        let edited = self.descriptor.apply_to(&to_edit)?;

        if !to_edit.is_same_person(&edited) && model.has_person(&edited) {
            return Err(CommandError::invalid(MESSAGE_DUPLICATE_PERSON));
        }

        model.set_person(&to_edit, edited.clone())?;
        model.update_filtered_persons(show_all_persons());
        Ok(CommandResult::new(format!("Edited Person: {edited}")))
    }
}
