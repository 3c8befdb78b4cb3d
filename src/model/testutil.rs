// Test fixtures: a Person builder with sensible defaults and a typical book.

use super::*;
use crate::model::payment::parse_payment_date;

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_ADDRESS: &str = "123, Jurong West Ave 6, #08-111";
pub const DEFAULT_EXP_GRADE: &str = "A";
pub const DEFAULT_EDU_LEVEL: &str = "Bachelor";

#[derive(Clone)]
pub struct PersonBuilder {
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

impl PersonBuilder {
    pub fn new() -> Self {
        PersonBuilder {
            name: Name::new(DEFAULT_NAME).unwrap(),
            phone: Phone::new(DEFAULT_PHONE).unwrap(),
            email: Email::new(DEFAULT_EMAIL).unwrap(),
            address: Address::new(DEFAULT_ADDRESS).unwrap(),
            edu_level: EduLevel::new(DEFAULT_EDU_LEVEL).unwrap(),
            current_year: CurrentYear::default(),
            current_grade: CurrentGrade::default(),
            expected_grade: ExpectedGrade::new(DEFAULT_EXP_GRADE).unwrap(),
            tags: TagSet::new(),
            payment_info: PaymentInfo::default(),
        }
    }

    pub fn from(person: &Person) -> Self {
        PersonBuilder {
            name: person.name().clone(),
            phone: person.phone().clone(),
            email: person.email().clone(),
            address: person.address().clone(),
            edu_level: person.edu_level(),
            current_year: person.current_year().clone(),
            current_grade: person.current_grade().clone(),
            expected_grade: person.expected_grade().clone(),
            tags: person.tags().clone(),
            payment_info: *person.payment_info(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Name::new(name).unwrap();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = Phone::new(phone).unwrap();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = Email::new(email).unwrap();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = Address::new(address).unwrap();
        self
    }

    pub fn edu_level(mut self, level: &str) -> Self {
        self.edu_level = EduLevel::new(level).unwrap();
        self
    }

    pub fn current_year(mut self, year: &str) -> Self {
        self.current_year = CurrentYear::new(year).unwrap();
        self
    }

    pub fn current_grade(mut self, grade: &str) -> Self {
        self.current_grade = CurrentGrade::new(grade).unwrap();
        self
    }

    pub fn expected_grade(mut self, grade: &str) -> Self {
        self.expected_grade = ExpectedGrade::new(grade).unwrap();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = TagSet::parse(tags).unwrap();
        self
    }

    pub fn payment(mut self, fee: u32, date: &str, status: &str) -> Self {
        self.payment_info = PaymentInfo::builder()
            .fee(fee)
            .date(parse_payment_date(date).unwrap())
            .status(PaymentStatus::parse(status).unwrap())
            .build();
        self
    }

    pub fn build(self) -> Person {
        Person::new(
            self.name,
            self.phone,
            self.email,
            self.address,
            self.edu_level,
            self.current_year,
            self.current_grade,
            self.expected_grade,
            self.tags,
            self.payment_info,
        )
    }
}

// ============================================================================
// TYPICAL PERSONS
// ============================================================================

pub fn alice() -> Person {
    PersonBuilder::new()
        .name("Alice Pauline")
        .phone("94351253")
        .email("alice@example.com")
        .address("123, Jurong West Ave 6, #08-111")
        .edu_level("Bachelor")
        .current_year("Year 2")
        .current_grade("B")
        .expected_grade("A")
        .tags(&["friends"])
        .payment(200, "01-01-2025", "paid")
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::new()
        .name("Benson Meier")
        .phone("98765432")
        .email("johnd@example.com")
        .address("311, Clementi Ave 2, #02-25")
        .edu_level("Secondary")
        .current_year("Secondary 4")
        .current_grade("C")
        .expected_grade("B")
        .tags(&["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::new()
        .name("Carl Kurz")
        .phone("95352563")
        .email("heinz@example.com")
        .address("wall street")
        .edu_level("Bachelor")
        .current_year("Year 1")
        .current_grade("A-")
        .expected_grade("A")
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::new()
        .name("Daniel Meier")
        .phone("87652533")
        .email("cornelia@example.com")
        .address("10th street")
        .edu_level("Master")
        .current_grade("B+")
        .expected_grade("A")
        .tags(&["friends"])
        .build()
}

pub fn elle() -> Person {
    PersonBuilder::new()
        .name("Elle Meyer")
        .phone("9482224")
        .email("werner@example.com")
        .address("michegan ave")
        .edu_level("Primary")
        .current_year("Primary 5")
        .current_grade("D")
        .expected_grade("C")
        .build()
}

pub fn fiona() -> Person {
    PersonBuilder::new()
        .name("Fiona Kunz")
        .phone("9482427")
        .email("lydia@example.com")
        .address("little tokyo")
        .edu_level("Diploma")
        .current_year("Year 3")
        .current_grade("C+")
        .expected_grade("B")
        .tags(&["CS2040#FF0000"])
        .build()
}

pub fn george() -> Person {
    PersonBuilder::new()
        .name("George Best")
        .phone("9482442")
        .email("anna@example.com")
        .address("4th street")
        .edu_level("Bachelor")
        .current_year("Year 4")
        .current_grade("B")
        .expected_grade("B+")
        .tags(&["CS2040", "CS2103T#e67e22"])
        .payment(500, "13-03-2025", "waiting")
        .build()
}

/// Not in the typical book; handy for add/edit tests.
pub fn amy() -> Person {
    PersonBuilder::new()
        .name("Amy Bee")
        .phone("11111111")
        .email("amy@example.com")
        .address("Block 312, Amy Street 1")
        .edu_level("Master")
        .current_year("Year 1")
        .current_grade("C-")
        .expected_grade("A")
        .tags(&["friend"])
        .build()
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel(), elle(), fiona(), george()]
}

pub fn typical_address_book() -> AddressBook {
    AddressBook::from_persons(typical_persons()).unwrap()
}

pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_address_book())
}
