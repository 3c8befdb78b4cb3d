// 💰 Payment info - fee, date and status of a student's latest payment
//
// Every field has a zero value (0 / no date / unset status) and
// `PaymentInfo::default()` is the canonical "no payment recorded" value.

use crate::error::ValueError;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap());

pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub const MESSAGE_CONSTRAINTS_FEE: &str =
    "Fees should only contain numerical characters, and it should not be blank";
pub const MESSAGE_CONSTRAINTS_DATE: &str =
    "Dates should be in dd-MM-yyyy format, and it should not be blank";
pub const MESSAGE_CONSTRAINTS_STATUS: &str = "Payment status should be either 'paid' or 'waiting'";

// ============================================================================
// PAYMENT STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    #[default]
    Unset,
    Paid,
    Waiting,
}

impl PaymentStatus {
    /// Case-insensitive; "" is the unset status.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        if raw.is_empty() {
            Ok(PaymentStatus::Unset)
        } else if raw.eq_ignore_ascii_case("paid") {
            Ok(PaymentStatus::Paid)
        } else if raw.eq_ignore_ascii_case("waiting") {
            Ok(PaymentStatus::Waiting)
        } else {
            Err(ValueError::new(MESSAGE_CONSTRAINTS_STATUS))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unset => "",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Waiting => "Waiting",
        }
    }
}

/// Parses a `dd-MM-yyyy` date; "" is no date.
pub fn parse_payment_date(raw: &str) -> Result<Option<NaiveDate>, ValueError> {
    if raw.is_empty() {
        return Ok(None);
    }
    if !DATE_SHAPE.is_match(raw) {
        return Err(ValueError::new(MESSAGE_CONSTRAINTS_DATE));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValueError::new(MESSAGE_CONSTRAINTS_DATE))
}

// ============================================================================
// PAYMENT INFO
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PaymentInfo {
    fee: u32,
    date: Option<NaiveDate>,
    status: PaymentStatus,
}

impl PaymentInfo {
    pub fn builder() -> PaymentInfoBuilder {
        PaymentInfoBuilder::default()
    }

    pub fn fee(&self) -> u32 {
        self.fee
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// The date as `dd-MM-yyyy`, or "" when unset.
    pub fn date_string(&self) -> String {
        self.date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn is_empty(&self) -> bool {
        *self == PaymentInfo::default()
    }
}

impl fmt::Display for PaymentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Fee: ${}, Date: {}, Status: {}}}",
            self.fee,
            self.date_string(),
            self.status.as_str()
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentInfoBuilder {
    fee: u32,
    date: Option<NaiveDate>,
    status: PaymentStatus,
}

impl PaymentInfoBuilder {
    pub fn fee(mut self, fee: u32) -> Self {
        self.fee = fee;
        self
    }

    pub fn date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> PaymentInfo {
        PaymentInfo {
            fee: self.fee,
            date: self.date,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_empty() {
        let info = PaymentInfo::builder().build();
        assert!(info.is_empty());
        assert_eq!(info, PaymentInfo::default());
        assert_eq!(info.date_string(), "");
        assert_eq!(info.status().as_str(), "");
    }

    #[test]
    fn test_any_field_makes_it_non_empty() {
        assert!(!PaymentInfo::builder().fee(1).build().is_empty());
        assert!(!PaymentInfo::builder()
            .status(PaymentStatus::Waiting)
            .build()
            .is_empty());
        let date = parse_payment_date("13-03-2025").unwrap();
        assert!(!PaymentInfo::builder().date(date).build().is_empty());
    }

    #[test]
    fn test_equality_covers_every_field() {
        let date = parse_payment_date("13-03-2025").unwrap();
        let a = PaymentInfo::builder().fee(900).date(date).build();
        let b = PaymentInfo::builder().fee(900).date(date).build();
        let c = PaymentInfo::builder()
            .fee(900)
            .date(date)
            .status(PaymentStatus::Paid)
            .build();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_parse_payment_date() {
        assert_eq!(parse_payment_date("").unwrap(), None);
        assert_eq!(
            parse_payment_date("29-02-2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );

        for bad in ["2025-03-13", "1-3-2025", "13/03/2025", "32-01-2025", "29-02-2025", " "] {
            let err = parse_payment_date(bad).unwrap_err();
            assert_eq!(err.message, MESSAGE_CONSTRAINTS_DATE, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_status_is_case_insensitive() {
        assert_eq!(PaymentStatus::parse("PAID").unwrap(), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::parse("wAiTiNg").unwrap(), PaymentStatus::Waiting);
        assert_eq!(PaymentStatus::parse("").unwrap(), PaymentStatus::Unset);
        assert!(PaymentStatus::parse("overdue").is_err());
    }

    #[test]
    fn test_display() {
        let info = PaymentInfo::builder()
            .fee(900)
            .date(parse_payment_date("13-03-2025").unwrap())
            .status(PaymentStatus::Paid)
            .build();
        assert_eq!(info.to_string(), "{Fee: $900, Date: 13-03-2025, Status: Paid}");
    }
}
