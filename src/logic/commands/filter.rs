// 🔍 filter - narrows the displayed list by academic fields and tags
//
// Every set field must match: education level and grades exactly, tags as a
// subset of the person's tags. Unset fields match everyone.

use super::CommandResult;
use crate::error::CommandError;
use crate::model::{CurrentGrade, EduLevel, ExpectedGrade, Model, Person, TagSet};
use std::sync::Arc;

pub const COMMAND_WORD: &str = "filter";

pub const MESSAGE_USAGE: &str = "filter: Filter the contact list according to the specified \
conditions provided. If multiple conditions are provided, all conditions must be met.\n\
Parameters: [t/TAG]... [el/EDUCATION] [cg/CURRENT_GRADE] [eg/EXP_GRADE]\n\
Example: filter t/CS2040 el/Bachelor";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDescriptor {
    pub edu_level: Option<EduLevel>,
    pub current_grade: Option<CurrentGrade>,
    pub expected_grade: Option<ExpectedGrade>,
    pub tags: Option<TagSet>,
}

impl FilterDescriptor {
    pub fn is_any_field_set(&self) -> bool {
        self.edu_level.is_some()
            || self.current_grade.is_some()
            || self.expected_grade.is_some()
            || self.tags.is_some()
    }

    pub fn matches(&self, person: &Person) -> bool {
        self.edu_level.map_or(true, |level| level == person.edu_level())
            && self
                .current_grade
                .as_ref()
                .map_or(true, |grade| grade == person.current_grade())
            && self
                .expected_grade
                .as_ref()
                .map_or(true, |grade| grade == person.expected_grade())
            && self
                .tags
                .as_ref()
                .map_or(true, |tags| person.tags().is_superset_of(tags))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCommand {
    descriptor: FilterDescriptor,
}

impl FilterCommand {
    pub fn new(descriptor: FilterDescriptor) -> Self {
        FilterCommand { descriptor }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let descriptor = self.descriptor.clone();
        model.update_filtered_persons(Arc::new(move |person: &Person| descriptor.matches(person)));
        let count = model.filtered_persons().len();
        Ok(CommandResult::new(format!("Filtered Persons: {count}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testutil::{alice, benson, carl, daniel, fiona, george, typical_model};

    fn run(descriptor: FilterDescriptor) -> (String, Vec<Person>) {
        let mut model = typical_model();
        let result = FilterCommand::new(descriptor).execute(&mut model).unwrap();
        (result.feedback, model.filtered_persons())
    }

    #[test]
    fn test_no_fields_matches_everyone() {
        let (message, shown) = run(FilterDescriptor::default());
        assert_eq!(message, "Filtered Persons: 7");
        assert_eq!(shown.len(), 7);
    }

    #[test]
    fn test_edu_level_and_expected_grade() {
        let (message, shown) = run(FilterDescriptor {
            edu_level: Some(EduLevel::Bachelor),
            expected_grade: Some(ExpectedGrade::new("A").unwrap()),
            ..Default::default()
        });
        assert_eq!(message, "Filtered Persons: 2");
        assert_eq!(shown, vec![alice(), carl()]);
    }

    #[test]
    fn test_tags_must_all_be_present() {
        let (_, shown) = run(FilterDescriptor {
            tags: Some(TagSet::parse(&["CS2040"]).unwrap()),
            ..Default::default()
        });
        assert_eq!(shown, vec![fiona(), george()]);

        let (_, shown) = run(FilterDescriptor {
            tags: Some(TagSet::parse(&["cs2040", "CS2103T"]).unwrap()),
            ..Default::default()
        });
        assert_eq!(shown, vec![george()]);
    }

    #[test]
    fn test_current_grade_exact_match() {
        let (_, shown) = run(FilterDescriptor {
            current_grade: Some(CurrentGrade::new("B").unwrap()),
            ..Default::default()
        });
        // "B+" (Daniel) is a different grade
        assert_eq!(shown, vec![alice(), george()]);
        assert!(!shown.contains(&daniel()));
    }

    #[test]
    fn test_no_match() {
        let (message, shown) = run(FilterDescriptor {
            edu_level: Some(EduLevel::PhD),
            ..Default::default()
        });
        assert_eq!(message, "Filtered Persons: 0");
        assert!(shown.is_empty());
    }

    #[test]
    fn test_filter_replaces_previous_view() {
        let mut model = typical_model();
        FilterCommand::new(FilterDescriptor {
            edu_level: Some(EduLevel::Secondary),
            ..Default::default()
        })
        .execute(&mut model)
        .unwrap();
        assert_eq!(model.filtered_persons(), vec![benson()]);

        FilterCommand::new(FilterDescriptor {
            edu_level: Some(EduLevel::Master),
            ..Default::default()
        })
        .execute(&mut model)
        .unwrap();
        assert_eq!(model.filtered_persons(), vec![daniel()]);
    }
}
