// Model layer - value types, the Person aggregate and the in-memory book

pub mod book;
pub mod fields;
pub mod payment;
pub mod person;
pub mod sample;
pub mod tag;

#[cfg(test)]
pub(crate) mod testutil;

pub use book::{show_all_persons, AddressBook, Model, ModelManager, PersonPredicate};
pub use fields::{
    Address, CurrentGrade, CurrentYear, EduLevel, Email, ExpectedGrade, Name, Phone,
};
pub use payment::{PaymentInfo, PaymentInfoBuilder, PaymentStatus};
pub use person::Person;
pub use sample::sample_address_book;
pub use tag::{Tag, TagSet, MAX_TAGS_IN_SET};
