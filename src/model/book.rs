// 📒 Address book - ordered person list with unique names, plus the Model
// facade that commands run against.
//
// The "displayed" list is never stored: ModelManager keeps the active
// predicate and re-applies it to the full book on every read, so adds,
// edits and deletes show up in the view without any bookkeeping.

use super::person::Person;
use crate::error::ModelError;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// ADDRESS BOOK
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        AddressBook::default()
    }

    /// Builds a book from `persons`, rejecting same-name duplicates.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self, ModelError> {
        let mut book = AddressBook::new();
        book.set_persons(persons)?;
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add(&mut self, person: Person) -> Result<(), ModelError> {
        if self.has_person(&person) {
            return Err(ModelError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` (matched by full equality) with `edited` in place.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(ModelError::PersonNotFound)?;

        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(ModelError::DuplicatePerson);
        }
        self.persons[position] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &Person) -> Result<(), ModelError> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(ModelError::PersonNotFound)?;
        self.persons.remove(position);
        Ok(())
    }

    /// Case-insensitive ascending by name. Stable, so equal keys keep their order.
    pub fn sort_by_name(&mut self) {
        self.persons
            .sort_by_cached_key(|p| p.name().as_str().to_lowercase());
    }

    pub fn set_persons(&mut self, persons: Vec<Person>) -> Result<(), ModelError> {
        for (i, person) in persons.iter().enumerate() {
            if persons[i + 1..].iter().any(|other| other.is_same_person(person)) {
                return Err(ModelError::DuplicatePerson);
            }
        }
        self.persons = persons;
        Ok(())
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} persons", self.persons.len())
    }
}

// ============================================================================
// MODEL
// ============================================================================

pub type PersonPredicate = Arc<dyn Fn(&Person) -> bool + Send + Sync>;

pub fn show_all_persons() -> PersonPredicate {
    Arc::new(|_: &Person| true)
}

/// What commands see: the full book plus the currently displayed subset.
pub trait Model {
    fn address_book(&self) -> &AddressBook;

    fn set_address_book(&mut self, book: AddressBook);

    fn has_person(&self, person: &Person) -> bool;

    fn add_person(&mut self, person: Person) -> Result<(), ModelError>;

    fn delete_person(&mut self, target: &Person) -> Result<(), ModelError>;

    fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError>;

    fn sort_persons_by_name(&mut self);

    /// The displayed list, in book order.
    fn filtered_persons(&self) -> Vec<Person>;

    fn update_filtered_persons(&mut self, predicate: PersonPredicate);
}

pub struct ModelManager {
    book: AddressBook,
    predicate: PersonPredicate,
}

impl ModelManager {
    pub fn new(book: AddressBook) -> Self {
        ModelManager {
            book,
            predicate: show_all_persons(),
        }
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        ModelManager::new(AddressBook::new())
    }
}

impl fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelManager")
            .field("book", &self.book)
            .field("displayed", &self.filtered_persons().len())
            .finish()
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.book
    }

    fn set_address_book(&mut self, book: AddressBook) {
        self.book = book;
    }

    fn has_person(&self, person: &Person) -> bool {
        self.book.has_person(person)
    }

    /// New persons are always visible: the view resets to show everyone.
    fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        self.book.add(person)?;
        self.predicate = show_all_persons();
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> Result<(), ModelError> {
        self.book.remove(target)
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        self.book.set_person(target, edited)
    }

    fn sort_persons_by_name(&mut self) {
        self.book.sort_by_name();
    }

    fn filtered_persons(&self) -> Vec<Person> {
        self.book
            .persons()
            .iter()
            .filter(|p| (self.predicate)(p))
            .cloned()
            .collect()
    }

    fn update_filtered_persons(&mut self, predicate: PersonPredicate) {
        self.predicate = predicate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testutil::{alice, benson, typical_address_book, PersonBuilder};

    #[test]
    fn test_add_rejects_same_name() {
        let mut book = AddressBook::new();
        book.add(alice()).unwrap();

        let same_name = PersonBuilder::from(&alice()).phone("11111111").build();
        assert_eq!(book.add(same_name), Err(ModelError::DuplicatePerson));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_set_person_replaces_in_place() {
        let mut book = typical_address_book();
        let edited = PersonBuilder::from(&alice()).phone("11111111").build();

        book.set_person(&alice(), edited.clone()).unwrap();
        assert_eq!(book.persons()[0], edited);
    }

    #[test]
    fn test_set_person_rejects_collision_with_other_entry() {
        let mut book = typical_address_book();
        let renamed = PersonBuilder::from(&alice()).name(benson().name().as_str()).build();

        assert_eq!(
            book.set_person(&alice(), renamed),
            Err(ModelError::DuplicatePerson)
        );
    }

    #[test]
    fn test_set_person_missing_target() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.set_person(&alice(), alice()),
            Err(ModelError::PersonNotFound)
        );
        assert_eq!(book.remove(&alice()), Err(ModelError::PersonNotFound));
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut book = AddressBook::new();
        for name in ["charlie", "Bob", "alice", "Dave"] {
            book.add(PersonBuilder::new().name(name).build()).unwrap();
        }
        book.sort_by_name();

        let names: Vec<&str> = book.persons().iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["alice", "Bob", "charlie", "Dave"]);
    }

    #[test]
    fn test_set_persons_rejects_duplicates() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.set_persons(vec![alice(), benson(), alice()]),
            Err(ModelError::DuplicatePerson)
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_filtered_view_tracks_mutations() {
        let mut model = ModelManager::new(typical_address_book());
        model.update_filtered_persons(Arc::new(|p: &Person| p.name().as_str().contains("Meier")));
        assert_eq!(model.filtered_persons().len(), 2);

        let benson = benson();
        model.delete_person(&benson).unwrap();
        assert_eq!(model.filtered_persons().len(), 1, "deleted person must leave the view");

        model.update_filtered_persons(show_all_persons());
        assert_eq!(model.filtered_persons().len(), 6);
    }

    #[test]
    fn test_add_person_resets_view() {
        let mut model = ModelManager::new(typical_address_book());
        model.update_filtered_persons(Arc::new(|_: &Person| false));
        assert!(model.filtered_persons().is_empty());

        model.add_person(PersonBuilder::new().build()).unwrap();
        assert_eq!(model.filtered_persons().len(), 8);
    }
}
