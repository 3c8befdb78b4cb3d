// Command-line prefixes shared by every command parser

use super::tokenizer::Prefix;

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
pub const PREFIX_EDU_LEVEL: Prefix = Prefix("el/");
pub const PREFIX_CURRENT_YEAR: Prefix = Prefix("y/");
pub const PREFIX_CURRENT_GRADE: Prefix = Prefix("cg/");
pub const PREFIX_EXP_GRADE: Prefix = Prefix("eg/");

pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_TAG_REMOVE: Prefix = Prefix("t-/");
pub const PREFIX_TAG_APPEND: Prefix = Prefix("t+/");

pub const PREFIX_PAYMENT_FEE: Prefix = Prefix("f/");
pub const PREFIX_PAYMENT_DATE: Prefix = Prefix("d/");
pub const PREFIX_PAYMENT_STATUS: Prefix = Prefix("s/");

/// `START...END`, used by `clear`.
pub const PREFIX_INDEX_SEQUENCE: Prefix = Prefix("i/");
