// 👤 Person - one student in the address book
//
// Identity is the name ("is_same_person"); full equality covers every field.
// Persons are values: edits build a new Person and swap it into the book.

use super::fields::{
    Address, CurrentGrade, CurrentYear, EduLevel, Email, ExpectedGrade, Name, Phone,
};
use super::payment::PaymentInfo;
use super::tag::TagSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    edu_level: EduLevel,
    current_year: CurrentYear,
    current_grade: CurrentGrade,
    expected_grade: ExpectedGrade,
    tags: TagSet,
    payment_info: PaymentInfo,
}

impl Person {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        edu_level: EduLevel,
        current_year: CurrentYear,
        current_grade: CurrentGrade,
        expected_grade: ExpectedGrade,
        tags: TagSet,
        payment_info: PaymentInfo,
    ) -> Self {
        Person {
            name,
            phone,
            email,
            address,
            edu_level,
            current_year,
            current_grade,
            expected_grade,
            tags,
            payment_info,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn edu_level(&self) -> EduLevel {
        self.edu_level
    }

    pub fn current_year(&self) -> &CurrentYear {
        &self.current_year
    }

    pub fn current_grade(&self) -> &CurrentGrade {
        &self.current_grade
    }

    pub fn expected_grade(&self) -> &ExpectedGrade {
        &self.expected_grade
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn payment_info(&self) -> &PaymentInfo {
        &self.payment_info
    }

    /// Weak identity used for duplicate detection: same name.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    pub fn with_tags(&self, tags: TagSet) -> Person {
        Person {
            tags,
            ..self.clone()
        }
    }

    pub fn with_payment_info(&self, payment_info: PaymentInfo) -> Person {
        Person {
            payment_info,
            ..self.clone()
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Education: {}; Year: {}; \
             Current Grade: {}; Expected Grade: {}; Tags: {}; Payment: {}",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.edu_level,
            self.current_year,
            self.current_grade,
            self.expected_grade,
            self.tags,
            self.payment_info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testutil::{alice, PersonBuilder};

    #[test]
    fn test_is_same_person_compares_names_only() {
        let a = alice();
        let same_name = PersonBuilder::from(&a)
            .phone("99999999")
            .email("other@example.com")
            .tags(&["other"])
            .build();
        assert!(a.is_same_person(&same_name));
        assert_ne!(a, same_name);

        let different_name = PersonBuilder::from(&a).name("Alice Pauline Tan").build();
        assert!(!a.is_same_person(&different_name));

        // Names are case sensitive
        let lower = PersonBuilder::from(&a).name("alice pauline").build();
        assert!(!a.is_same_person(&lower));
    }

    #[test]
    fn test_with_tags_replaces_only_tags() {
        let a = alice();
        let retagged = a.with_tags(TagSet::parse(&["Physics"]).unwrap());

        assert_eq!(retagged.name(), a.name());
        assert_eq!(retagged.payment_info(), a.payment_info());
        assert_eq!(retagged.tags(), &TagSet::parse(&["physics"]).unwrap());
    }

    #[test]
    fn test_with_payment_info_replaces_only_payment() {
        let a = alice();
        let paid = a.with_payment_info(PaymentInfo::builder().fee(120).build());

        assert_eq!(paid.tags(), a.tags());
        assert_eq!(paid.payment_info().fee(), 120);
    }

    #[test]
    fn test_display() {
        let person = PersonBuilder::new()
            .name("Amy Bee")
            .tags(&["Math#FF5733"])
            .build();
        assert_eq!(
            person.to_string(),
            "Amy Bee; Phone: 85355255; Email: amy@gmail.com; \
             Address: 123, Jurong West Ave 6, #08-111; Education: Bachelor; Year: ; \
             Current Grade: ; Expected Grade: A; Tags: [Math#FF5733]; \
             Payment: {Fee: $0, Date: , Status: }"
        );
    }
}
