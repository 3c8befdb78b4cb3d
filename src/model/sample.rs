// 🌱 Sample data - what a fresh install starts with when no data file exists

use super::book::AddressBook;
use super::fields::{
    Address, CurrentGrade, CurrentYear, EduLevel, Email, ExpectedGrade, Name, Phone,
};
use super::payment::{parse_payment_date, PaymentInfo};
use super::person::Person;
use super::tag::TagSet;
use crate::error::ValueError;
use anyhow::{Context, Result};

struct SampleRow {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    edu_level: &'static str,
    current_year: &'static str,
    current_grade: &'static str,
    expected_grade: &'static str,
    tags: &'static [&'static str],
    fee: u32,
    date: &'static str,
}

const SAMPLE_ROWS: [SampleRow; 6] = [
    SampleRow {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        edu_level: "Primary",
        current_year: "Primary 6",
        current_grade: "C",
        expected_grade: "A",
        tags: &["Math#FF5733"],
        fee: 200,
        date: "12-01-2024",
    },
    SampleRow {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        edu_level: "Secondary",
        current_year: "Secondary 3",
        current_grade: "D",
        expected_grade: "B",
        tags: &["Physics#4287f5", "friends"],
        fee: 300,
        date: "15-02-2024",
    },
    SampleRow {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        edu_level: "Diploma",
        current_year: "Year 2",
        current_grade: "F",
        expected_grade: "C",
        tags: &["IT101#8e44ad"],
        fee: 0,
        date: "",
    },
    SampleRow {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        edu_level: "Bachelor",
        current_year: "Year 4",
        current_grade: "B-",
        expected_grade: "D",
        tags: &["CS2040C#1abc9c", "classmates"],
        fee: 600,
        date: "01-04-2024",
    },
    SampleRow {
        name: "Irfan Ibrahim",
        phone: "92492021",
        email: "irfan@example.com",
        address: "Blk 47 Tampines Street 20, #17-35",
        edu_level: "Master",
        current_year: "Year 2",
        current_grade: "C+",
        expected_grade: "E",
        tags: &["CS2103T#e67e22", "CS4238"],
        fee: 750,
        date: "18-05-2024",
    },
    SampleRow {
        name: "Roy Balakrishnan",
        phone: "92624417",
        email: "royb@example.com",
        address: "Blk 45 Aljunied Street 85, #11-31",
        edu_level: "",
        current_year: "",
        current_grade: "",
        expected_grade: "",
        tags: &["CS3230#3498db"],
        fee: 0,
        date: "",
    },
];

impl SampleRow {
    fn to_person(&self) -> Result<Person, ValueError> {
        let payment = PaymentInfo::builder()
            .fee(self.fee)
            .date(parse_payment_date(self.date)?)
            .build();
        Ok(Person::new(
            Name::new(self.name)?,
            Phone::new(self.phone)?,
            Email::new(self.email)?,
            Address::new(self.address)?,
            EduLevel::new(self.edu_level)?,
            CurrentYear::new(self.current_year)?,
            CurrentGrade::new(self.current_grade)?,
            ExpectedGrade::new(self.expected_grade)?,
            TagSet::parse(self.tags)?,
            payment,
        ))
    }
}

pub fn sample_persons() -> Result<Vec<Person>> {
    SAMPLE_ROWS
        .iter()
        .map(|row| {
            row.to_person()
                .with_context(|| format!("Invalid sample person: {}", row.name))
        })
        .collect()
}

pub fn sample_address_book() -> Result<AddressBook> {
    let persons = sample_persons()?;
    AddressBook::from_persons(persons).context("Sample data contains duplicate persons")
}
