// 💾 JSON storage - the address book on disk
//
// { "persons": [ { "name": ..., "eduLevel": ..., "tags": ["CS2040#FF0000"], ... } ] }
//
// Required fields are read as Option so a missing one can be reported by
// name instead of as a generic serde error.

use crate::error::ValueError;
use crate::model::payment::{parse_payment_date, PaymentInfo, PaymentStatus};
use crate::model::{
    Address, AddressBook, CurrentGrade, CurrentYear, EduLevel, Email, ExpectedGrade, Name,
    Person, Phone, Tag, TagSet,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const MESSAGE_DUPLICATE_PERSON: &str = "Persons list contains duplicate person(s).";

fn missing_field(field: &str) -> ValueError {
    ValueError::new(format!("Person's {field} field is missing!"))
}

// ============================================================================
// WIRE FORMAT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedPerson {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub edu_level: Option<String>,
    #[serde(default)]
    pub current_year: Option<String>,
    pub current_grade: Option<String>,
    pub expected_grade: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub payment_fee: u32,
    #[serde(default)]
    pub payment_date: String,
    #[serde(default)]
    pub payment_status: String,
}

impl From<&Person> for JsonAdaptedPerson {
    fn from(person: &Person) -> Self {
        let payment = person.payment_info();
        JsonAdaptedPerson {
            name: Some(person.name().to_string()),
            phone: Some(person.phone().to_string()),
            email: Some(person.email().to_string()),
            address: Some(person.address().to_string()),
            edu_level: Some(person.edu_level().to_string()),
            current_year: Some(person.current_year().to_string()),
            current_grade: Some(person.current_grade().to_string()),
            expected_grade: Some(person.expected_grade().to_string()),
            tags: person.tags().iter().map(|t| t.full_tag().to_string()).collect(),
            payment_fee: payment.fee(),
            payment_date: payment.date_string(),
            payment_status: payment.status().as_str().to_string(),
        }
    }
}

impl JsonAdaptedPerson {
    /// Validates every field, in the order a person is displayed.
    pub fn to_model(&self) -> Result<Person, ValueError> {
        let tags: TagSet = self
            .tags
            .iter()
            .map(|raw| Tag::new(raw))
            .collect::<Result<_, _>>()?;
        if tags.exceeds_limit() {
            return Err(ValueError::new(Tag::MESSAGE_CONSTRAINTS_ADD_SET));
        }

        let name = Name::new(self.name.as_deref().ok_or_else(|| missing_field("Name"))?)?;
        let phone = Phone::new(self.phone.as_deref().ok_or_else(|| missing_field("Phone"))?)?;
        let email = Email::new(self.email.as_deref().ok_or_else(|| missing_field("Email"))?)?;
        let address =
            Address::new(self.address.as_deref().ok_or_else(|| missing_field("Address"))?)?;
        let edu_level =
            EduLevel::new(self.edu_level.as_deref().ok_or_else(|| missing_field("EduLevel"))?)?;
        let current_year = CurrentYear::new(self.current_year.as_deref().unwrap_or_default())?;
        let current_grade = CurrentGrade::new(
            self.current_grade
                .as_deref()
                .ok_or_else(|| missing_field("CurrentGrade"))?,
        )?;
        let expected_grade = ExpectedGrade::new(
            self.expected_grade
                .as_deref()
                .ok_or_else(|| missing_field("ExpectedGrade"))?,
        )?;

        let payment = PaymentInfo::builder()
            .fee(self.payment_fee)
            .date(parse_payment_date(&self.payment_date)?)
            .status(PaymentStatus::parse(&self.payment_status)?)
            .build();

        Ok(Person::new(
            name,
            phone,
            email,
            address,
            edu_level,
            current_year,
            current_grade,
            expected_grade,
            tags,
            payment,
        ))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    #[serde(default)]
    pub persons: Vec<JsonAdaptedPerson>,
}

impl From<&AddressBook> for JsonSerializableAddressBook {
    fn from(book: &AddressBook) -> Self {
        JsonSerializableAddressBook {
            persons: book.persons().iter().map(JsonAdaptedPerson::from).collect(),
        }
    }
}

impl JsonSerializableAddressBook {
    pub fn to_model(&self) -> Result<AddressBook, ValueError> {
        let mut book = AddressBook::new();
        for adapted in &self.persons {
            let person = adapted.to_model()?;
            if book.has_person(&person) {
                return Err(ValueError::new(MESSAGE_DUPLICATE_PERSON));
            }
            book.add(person)
                .map_err(|_| ValueError::new(MESSAGE_DUPLICATE_PERSON))?;
        }
        Ok(book)
    }
}

// ============================================================================
// FILE STORAGE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonAddressBookStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file does not exist yet.
    pub fn read(&self) -> Result<Option<AddressBook>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "data file not found");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read data file: {}", self.path.display()))?;
        let serialized: JsonSerializableAddressBook = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from {}", self.path.display()))?;
        let book = serialized
            .to_model()
            .with_context(|| format!("Illegal values in data file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), persons = book.len(), "address book loaded");
        Ok(Some(book))
    }

    pub fn save(&self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&JsonSerializableAddressBook::from(book))
            .context("Failed to serialize address book")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write data file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), persons = book.len(), "address book saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::payment::{MESSAGE_CONSTRAINTS_DATE, MESSAGE_CONSTRAINTS_STATUS};
    use crate::model::testutil::{alice, benson, george, typical_address_book};
    use tempfile::TempDir;

    fn adapted(person: &Person) -> JsonAdaptedPerson {
        JsonAdaptedPerson::from(person)
    }

    fn err(adapted: JsonAdaptedPerson) -> String {
        adapted.to_model().unwrap_err().message
    }

    // ------------------------------------------------------------------
    // JsonAdaptedPerson
    // ------------------------------------------------------------------

    #[test]
    fn test_valid_person_converts_back() {
        for person in [alice(), benson(), george()] {
            assert_eq!(adapted(&person).to_model().unwrap(), person);
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(adapted(&george())).unwrap();
        assert_eq!(json["name"], "George Best");
        assert_eq!(json["eduLevel"], "Bachelor");
        assert_eq!(json["currentYear"], "Year 4");
        assert_eq!(json["expectedGrade"], "B+");
        assert_eq!(json["tags"], serde_json::json!(["CS2040", "CS2103T#e67e22"]));
        assert_eq!(json["paymentFee"], 500);
        assert_eq!(json["paymentDate"], "13-03-2025");
        assert_eq!(json["paymentStatus"], "Waiting");
    }

    #[test]
    fn test_missing_required_fields() {
        let cases: [(&str, fn(&mut JsonAdaptedPerson)); 7] = [
            ("Name", |p| p.name = None),
            ("Phone", |p| p.phone = None),
            ("Email", |p| p.email = None),
            ("Address", |p| p.address = None),
            ("EduLevel", |p| p.edu_level = None),
            ("CurrentGrade", |p| p.current_grade = None),
            ("ExpectedGrade", |p| p.expected_grade = None),
        ];
        for (field, strip) in cases {
            let mut person = adapted(&benson());
            strip(&mut person);
            assert_eq!(err(person), format!("Person's {field} field is missing!"));
        }
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let json = r#"{
            "name": "Benson Meier", "phone": "98765432", "email": "johnd@example.com",
            "address": "311, Clementi Ave 2, #02-25", "eduLevel": "Secondary",
            "currentGrade": "C", "expectedGrade": "B"
        }"#;
        let person: JsonAdaptedPerson = serde_json::from_str(json).unwrap();
        let model = person.to_model().unwrap();
        assert_eq!(model.current_year().as_str(), "");
        assert!(model.tags().is_empty());
        assert!(model.payment_info().is_empty());
    }

    #[test]
    fn test_invalid_values_report_constraint() {
        let mut person = adapted(&benson());
        person.name = Some("R@chel".into());
        assert_eq!(err(person), Name::MESSAGE_CONSTRAINTS);

        let mut person = adapted(&benson());
        person.current_grade = Some("Z".into());
        assert_eq!(err(person), CurrentGrade::MESSAGE_CONSTRAINTS);

        let mut person = adapted(&benson());
        person.tags = vec!["#friend".into()];
        assert_eq!(err(person), Tag::MESSAGE_CONSTRAINTS);

        let mut person = adapted(&benson());
        person.payment_date = "2025-03-13".into();
        assert_eq!(err(person), MESSAGE_CONSTRAINTS_DATE);

        let mut person = adapted(&benson());
        person.payment_status = "late".into();
        assert_eq!(err(person), MESSAGE_CONSTRAINTS_STATUS);
    }

    #[test]
    fn test_too_many_tags() {
        let mut person = adapted(&benson());
        person.tags = (1..=9).map(|i| format!("t{i}")).collect();
        assert_eq!(err(person), Tag::MESSAGE_CONSTRAINTS_ADD_SET);
    }

    #[test]
    fn test_duplicate_persons_rejected() {
        let serialized = JsonSerializableAddressBook {
            persons: vec![adapted(&alice()), adapted(&alice())],
        };
        assert_eq!(
            serialized.to_model().unwrap_err().message,
            MESSAGE_DUPLICATE_PERSON
        );
    }

    // ------------------------------------------------------------------
    // JsonAddressBookStorage
    // ------------------------------------------------------------------

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonAddressBookStorage::new(temp.path().join("nothing.json"));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn test_save_then_read() {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonAddressBookStorage::new(temp.path().join("data").join("book.json"));

        let book = typical_address_book();
        storage.save(&book).unwrap();
        assert_eq!(storage.read().unwrap(), Some(book.clone()));

        // Overwrite with a smaller book
        let mut smaller = book;
        smaller.remove(&alice()).unwrap();
        storage.save(&smaller).unwrap();
        assert_eq!(storage.read().unwrap(), Some(smaller));
    }

    #[test]
    fn test_read_malformed_json() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("book.json");
        fs::write(&path, "{ \"persons\": [ not json").unwrap();

        let err = JsonAddressBookStorage::new(&path).read().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse JSON"));
    }

    #[test]
    fn test_read_invalid_person() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("book.json");
        fs::write(&path, r#"{ "persons": [ { "name": "Hans" } ] }"#).unwrap();

        let err = JsonAddressBookStorage::new(&path).read().unwrap_err();
        assert!(format!("{err:#}").contains("Person's Phone field is missing!"));
    }
}
