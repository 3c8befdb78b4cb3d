// 🧾 Person field values
// Every value is validated once, on construction, and immutable afterwards.

use crate::error::ValueError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,}$").unwrap());

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9]+(?:[+_.-][A-Za-z0-9]+)*",
        r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*",
        r"[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$",
    ))
    .unwrap()
});

static CURRENT_YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 ]*$").unwrap());

static GRADE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-F][+-]?|PASS|FAIL)?$").unwrap());

fn check(valid: bool, message: &str) -> Result<(), ValueError> {
    if valid {
        Ok(())
    } else {
        Err(ValueError::new(message))
    }
}

// ============================================================================
// CONTACT DETAILS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn new(name: &str) -> Result<Self, ValueError> {
        check(Self::is_valid(name), Self::MESSAGE_CONSTRAINTS)?;
        Ok(Name(name.to_string()))
    }

    pub fn is_valid(test: &str) -> bool {
        NAME_REGEX.is_match(test)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn new(phone: &str) -> Result<Self, ValueError> {
        check(Self::is_valid(phone), Self::MESSAGE_CONSTRAINTS)?;
        Ok(Phone(phone.to_string()))
    }

    pub fn is_valid(test: &str) -> bool {
        PHONE_REGEX.is_match(test)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
        and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and these special characters, \
        excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
        2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
        separated by periods.\n\
        The domain name must:\n    \
        - end with a domain label at least 2 characters long\n    \
        - have each domain label start and end with alphanumeric characters\n    \
        - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    pub fn new(email: &str) -> Result<Self, ValueError> {
        check(Self::is_valid(email), Self::MESSAGE_CONSTRAINTS)?;
        Ok(Email(email.to_string()))
    }

    pub fn is_valid(test: &str) -> bool {
        EMAIL_REGEX.is_match(test)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Any text, as long as it doesn't start with whitespace (so blank is rejected).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Addresses can take any values, and it should not be blank";

    pub fn new(address: &str) -> Result<Self, ValueError> {
        check(Self::is_valid(address), Self::MESSAGE_CONSTRAINTS)?;
        Ok(Address(address.to_string()))
    }

    pub fn is_valid(test: &str) -> bool {
        test.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// ACADEMIC METADATA
// ============================================================================

/// Education level: one of six fixed levels, or unspecified.
///
/// Parsing is case-insensitive; the canonical spelling is what gets stored,
/// so "bachelor" and "Bachelor" produce the same value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EduLevel {
    #[default]
    Unspecified,
    Primary,
    Secondary,
    Diploma,
    Bachelor,
    Master,
    PhD,
}

impl EduLevel {
    pub const LEVELS: [EduLevel; 6] = [
        EduLevel::Primary,
        EduLevel::Secondary,
        EduLevel::Diploma,
        EduLevel::Bachelor,
        EduLevel::Master,
        EduLevel::PhD,
    ];

    pub const MESSAGE_CONSTRAINTS: &'static str = "Education level should not be blank and should be one \
        of the predefined levels: Primary, Secondary, Diploma, Bachelor, Master, PhD.";

    pub fn new(level: &str) -> Result<Self, ValueError> {
        if level.is_empty() {
            return Ok(EduLevel::Unspecified);
        }
        Self::LEVELS
            .iter()
            .copied()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(level))
            .ok_or_else(|| ValueError::new(Self::MESSAGE_CONSTRAINTS))
    }

    pub fn is_valid(test: &str) -> bool {
        Self::new(test).is_ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EduLevel::Unspecified => "",
            EduLevel::Primary => "Primary",
            EduLevel::Secondary => "Secondary",
            EduLevel::Diploma => "Diploma",
            EduLevel::Bachelor => "Bachelor",
            EduLevel::Master => "Master",
            EduLevel::PhD => "PhD",
        }
    }
}

/// Free text such as "Year 2" or "Secondary 3". Optional, so blank is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CurrentYear(String);

impl CurrentYear {
    pub const MAX_LENGTH: usize = 30;

    pub const MESSAGE_CONSTRAINTS: &'static str = "Current Year should only contain alphanumeric characters \
        and spaces and must not exceed 30 characters. As Current Year is an optional field, it could also be blank.";

    pub fn new(year: &str) -> Result<Self, ValueError> {
        check(Self::is_valid(year), Self::MESSAGE_CONSTRAINTS)?;
        Ok(CurrentYear(year.to_string()))
    }

    pub fn is_valid(test: &str) -> bool {
        CURRENT_YEAR_REGEX.is_match(test) && test.chars().count() <= Self::MAX_LENGTH
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// GRADES
// ============================================================================

const WHITE: &str = "#FFFFFF";

/// Display colour for a grade, looked up by its leading letter.
fn grade_hex_color(grade: &str) -> &'static str {
    match grade.chars().next() {
        Some('A') => "#4CAF50",
        Some('B') => "#6CAA00",
        Some('C') => "#BEB005",
        Some('D') => "#F57C00",
        Some('E') => "#FF7043",
        Some('F') => "#FF5252",
        _ => WHITE,
    }
}

/// Perceived luminance check for a 6-digit hex colour (with or without `#`).
/// Unparseable input counts as light.
pub fn is_light_color(hex: &str) -> bool {
    let Some((r, g, b)) = hex_to_rgb(hex) else {
        return true;
    };
    let luminance = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;
    luminance > 0.5
}

pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CurrentGrade(String);

impl CurrentGrade {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Current Grade can take any capitalised Letter Grade \
        from A to F with an optional + / - symbol, or PASS / FAIL";

    pub fn new(grade: &str) -> Result<Self, ValueError> {
        check(Self::is_valid(grade), Self::MESSAGE_CONSTRAINTS)?;
        Ok(CurrentGrade(grade.to_string()))
    }

    pub fn is_valid(test: &str) -> bool {
        GRADE_REGEX.is_match(test)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn hex_color(&self) -> &'static str {
        grade_hex_color(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExpectedGrade(String);

impl ExpectedGrade {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Expected Grade can take any capitalised Letter Grade \
        from A to F with an optional + / - symbol, or PASS / FAIL";

    pub fn new(grade: &str) -> Result<Self, ValueError> {
        check(Self::is_valid(grade), Self::MESSAGE_CONSTRAINTS)?;
        Ok(ExpectedGrade(grade.to_string()))
    }

    pub fn is_valid(test: &str) -> bool {
        GRADE_REGEX.is_match(test)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn hex_color(&self) -> &'static str {
        grade_hex_color(&self.0)
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for EduLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CurrentYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CurrentGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ExpectedGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================
