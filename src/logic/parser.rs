// 🧩 Command parser - raw text -> Command
//
// parse_command splits off the command word, then hands the rest (leading
// whitespace included, so the first prefix is still found) to the command's
// own parser. Field parsers trim and validate through the value types and
// surface the field's constraint message on failure.

use super::commands::{
    self, add, clear, delete, edit, filter, find, invalid_command_format, payment, untag,
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, EditPersonDescriptor,
    ExitCommand, FilterCommand, FilterDescriptor, FindCommand, HelpCommand, Index, ListCommand,
    PaymentCommand, PurgeCommand, SortCommand, ToggleThemeCommand, UntagCommand,
};
use super::syntax::*;
use super::tokenizer::{tokenize, ArgumentMultimap, Prefix};
use crate::error::ParseError;
use crate::model::payment::{
    parse_payment_date, MESSAGE_CONSTRAINTS_DATE, MESSAGE_CONSTRAINTS_FEE,
    MESSAGE_CONSTRAINTS_STATUS,
};
use crate::model::{
    Address, CurrentGrade, CurrentYear, EduLevel, Email, ExpectedGrade, Name, PaymentInfo,
    PaymentStatus, Person, Phone, Tag, TagSet,
};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static COMMAND_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?s)(?P<word>\S+)(?P<args>.*)$").unwrap());

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_INDEX_SEQUENCE: &str = "Start index must be strictly less than End index.";
pub const MESSAGE_INVALID_INDEX_SEQUENCE_FORMAT: &str =
    "Invalid format. Provide exactly two positive integers separated by '...'.";

fn invalid_format(usage: &str) -> ParseError {
    ParseError::new(invalid_command_format(usage))
}

// ============================================================================
// DISPATCH
// ============================================================================

pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let caps = COMMAND_FORMAT
        .captures(input.trim())
        .ok_or_else(|| invalid_format(commands::basic::HELP_MESSAGE_USAGE))?;
    let word = &caps["word"];
    let args = &caps["args"];

    match word {
        add::COMMAND_WORD => parse_add(args).map(Command::Add),
        edit::COMMAND_WORD => parse_edit(args).map(Command::Edit),
        delete::COMMAND_WORD => parse_delete(args).map(Command::Delete),
        clear::COMMAND_WORD => parse_clear(args).map(Command::Clear),
        filter::COMMAND_WORD => parse_filter(args).map(Command::Filter),
        find::COMMAND_WORD => parse_find(args).map(Command::Find),
        untag::COMMAND_WORD => parse_untag(args).map(Command::Untag),
        payment::COMMAND_WORD => parse_payment(args).map(Command::Payment),
        commands::basic::LIST_COMMAND_WORD => no_arguments("List", args).map(|_| Command::List(ListCommand)),
        commands::sort::COMMAND_WORD => no_arguments("Sort", args).map(|_| Command::Sort(SortCommand)),
        commands::basic::PURGE_COMMAND_WORD => {
            no_arguments("Purge", args).map(|_| Command::Purge(PurgeCommand))
        }
        commands::basic::HELP_COMMAND_WORD => no_arguments("Help", args).map(|_| Command::Help(HelpCommand)),
        commands::basic::TOGGLE_THEME_COMMAND_WORD => {
            no_arguments("Toggle theme", args).map(|_| Command::ToggleTheme(ToggleThemeCommand))
        }
        commands::basic::EXIT_COMMAND_WORD => no_arguments("Exit", args).map(|_| Command::Exit(ExitCommand)),
        _ => Err(ParseError::new(commands::MESSAGE_UNKNOWN_COMMAND)),
    }
}

fn no_arguments(name: &str, args: &str) -> Result<(), ParseError> {
    if args.trim().is_empty() {
        Ok(())
    } else {
        Err(ParseError::new(format!(
            "{name} command does not take any arguments!"
        )))
    }
}

// ============================================================================
// FIELD PARSERS
// ============================================================================

pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    parse_non_zero_unsigned(raw.trim())
        .map(Index::from_one_based)
        .ok_or_else(|| ParseError::new(MESSAGE_INVALID_INDEX))
}

/// `START...END`, both one-based, START strictly less than END.
pub fn parse_index_range(raw: &str) -> Result<(Index, Index), ParseError> {
    let parts: Vec<&str> = raw.trim().split("...").collect();
    let [start, end] = parts.as_slice() else {
        return Err(ParseError::new(MESSAGE_INVALID_INDEX_SEQUENCE_FORMAT));
    };
    let start = parse_non_zero_unsigned(start)
        .ok_or_else(|| ParseError::new(format!("Start Index: {MESSAGE_INVALID_INDEX}")))?;
    let end = parse_non_zero_unsigned(end)
        .ok_or_else(|| ParseError::new(format!("End Index: {MESSAGE_INVALID_INDEX}")))?;
    if start >= end {
        return Err(ParseError::new(MESSAGE_INVALID_INDEX_SEQUENCE));
    }
    Ok((Index::from_one_based(start), Index::from_one_based(end)))
}

/// Digits only, no sign, value at least 1.
fn parse_non_zero_unsigned(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<usize>().ok().filter(|n| *n > 0)
}

pub fn parse_name(raw: &str) -> Result<Name, ParseError> {
    Ok(Name::new(raw.trim())?)
}

pub fn parse_phone(raw: &str) -> Result<Phone, ParseError> {
    Ok(Phone::new(raw.trim())?)
}

pub fn parse_email(raw: &str) -> Result<Email, ParseError> {
    Ok(Email::new(raw.trim())?)
}

pub fn parse_address(raw: &str) -> Result<Address, ParseError> {
    Ok(Address::new(raw.trim())?)
}

pub fn parse_edu_level(raw: &str) -> Result<EduLevel, ParseError> {
    Ok(EduLevel::new(raw.trim())?)
}

pub fn parse_current_year(raw: &str) -> Result<CurrentYear, ParseError> {
    Ok(CurrentYear::new(raw.trim())?)
}

pub fn parse_current_grade(raw: &str) -> Result<CurrentGrade, ParseError> {
    Ok(CurrentGrade::new(&raw.trim().to_uppercase())?)
}

pub fn parse_expected_grade(raw: &str) -> Result<ExpectedGrade, ParseError> {
    Ok(ExpectedGrade::new(&raw.trim().to_uppercase())?)
}

pub fn parse_tag(raw: &str) -> Result<Tag, ParseError> {
    Ok(Tag::new(raw.trim())?)
}

pub fn parse_tags<S: AsRef<str>>(raw: &[S]) -> Result<TagSet, ParseError> {
    raw.iter().map(|t| parse_tag(t.as_ref())).collect()
}

/// A single blank value means "the empty set"; no values means "not given".
fn parse_tags_allowing_empty(raw: &[String]) -> Result<Option<TagSet>, ParseError> {
    match raw {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(TagSet::new())),
        _ => parse_tags(raw).map(Some),
    }
}

pub fn parse_fee(raw: &str) -> Result<u32, ParseError> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(MESSAGE_CONSTRAINTS_FEE));
    }
    digits
        .parse::<u32>()
        .map_err(|_| ParseError::new(MESSAGE_CONSTRAINTS_FEE))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    parse_payment_date(raw.trim())?.ok_or_else(|| ParseError::new(MESSAGE_CONSTRAINTS_DATE))
}

pub fn parse_payment_status(raw: &str) -> Result<PaymentStatus, ParseError> {
    match PaymentStatus::parse(raw.trim())? {
        PaymentStatus::Unset => Err(ParseError::new(MESSAGE_CONSTRAINTS_STATUS)),
        status => Ok(status),
    }
}

// ============================================================================
// COMMAND PARSERS
// ============================================================================

fn are_prefixes_present(map: &ArgumentMultimap, prefixes: &[Prefix]) -> bool {
    prefixes.iter().all(|p| map.is_present(*p))
}

fn reject_blank(map: &ArgumentMultimap, prefixes: &[Prefix]) -> Result<(), ParseError> {
    match prefixes.iter().find(|p| map.is_empty_field(**p)) {
        Some(blank) => Err(invalid_format(&format!("{blank} cannot be empty."))),
        None => Ok(()),
    }
}

pub fn parse_add(args: &str) -> Result<AddCommand, ParseError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_EDU_LEVEL,
            PREFIX_TAG,
            PREFIX_CURRENT_YEAR,
            PREFIX_CURRENT_GRADE,
            PREFIX_EXP_GRADE,
        ],
    );

    if !are_prefixes_present(&map, &[PREFIX_NAME, PREFIX_ADDRESS, PREFIX_PHONE, PREFIX_EMAIL])
        || !map.preamble().is_empty()
    {
        return Err(invalid_format(add::MESSAGE_USAGE));
    }

    map.verify_no_duplicate_prefixes_for(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_EDU_LEVEL,
        PREFIX_CURRENT_YEAR,
        PREFIX_CURRENT_GRADE,
        PREFIX_EXP_GRADE,
    ])?;
    reject_blank(
        &map,
        &[PREFIX_EDU_LEVEL, PREFIX_CURRENT_YEAR, PREFIX_CURRENT_GRADE, PREFIX_EXP_GRADE],
    )?;

    let name = parse_name(map.value(PREFIX_NAME).unwrap_or_default())?;
    let phone = parse_phone(map.value(PREFIX_PHONE).unwrap_or_default())?;
    let email = parse_email(map.value(PREFIX_EMAIL).unwrap_or_default())?;
    let address = parse_address(map.value(PREFIX_ADDRESS).unwrap_or_default())?;
    let edu_level = parse_edu_level(map.value(PREFIX_EDU_LEVEL).unwrap_or_default())?;

    let tags = parse_tags(&map.all_values(PREFIX_TAG))?;
    if tags.exceeds_limit() {
        return Err(ParseError::new(Tag::MESSAGE_CONSTRAINTS_ADD_SET));
    }

    let current_year = parse_current_year(map.value(PREFIX_CURRENT_YEAR).unwrap_or_default())?;
    let current_grade = parse_current_grade(map.value(PREFIX_CURRENT_GRADE).unwrap_or_default())?;
    let expected_grade = parse_expected_grade(map.value(PREFIX_EXP_GRADE).unwrap_or_default())?;

    Ok(AddCommand::new(Person::new(
        name,
        phone,
        email,
        address,
        edu_level,
        current_year,
        current_grade,
        expected_grade,
        tags,
        PaymentInfo::default(),
    )))
}

pub fn parse_edit(args: &str) -> Result<EditCommand, ParseError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_EDU_LEVEL,
            PREFIX_CURRENT_YEAR,
            PREFIX_CURRENT_GRADE,
            PREFIX_EXP_GRADE,
            PREFIX_TAG,
            PREFIX_TAG_REMOVE,
            PREFIX_TAG_APPEND,
        ],
    );

    let index = parse_index(map.preamble()).map_err(|_| invalid_format(edit::MESSAGE_USAGE))?;

    map.verify_no_duplicate_prefixes_for(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_EDU_LEVEL,
        PREFIX_CURRENT_YEAR,
        PREFIX_CURRENT_GRADE,
        PREFIX_EXP_GRADE,
    ])?;

    let descriptor = EditPersonDescriptor {
        name: map.value(PREFIX_NAME).map(parse_name).transpose()?,
        phone: map.value(PREFIX_PHONE).map(parse_phone).transpose()?,
        email: map.value(PREFIX_EMAIL).map(parse_email).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
        edu_level: map.value(PREFIX_EDU_LEVEL).map(parse_edu_level).transpose()?,
        current_year: map
            .value(PREFIX_CURRENT_YEAR)
            .map(parse_current_year)
            .transpose()?,
        current_grade: map
            .value(PREFIX_CURRENT_GRADE)
            .map(parse_current_grade)
            .transpose()?,
        expected_grade: map
            .value(PREFIX_EXP_GRADE)
            .map(parse_expected_grade)
            .transpose()?,
        tags: parse_tags_allowing_empty(&map.all_values(PREFIX_TAG))?,
        tags_to_remove: parse_tags_allowing_empty(&map.all_values(PREFIX_TAG_REMOVE))?,
        tags_to_append: parse_tags_allowing_empty(&map.all_values(PREFIX_TAG_APPEND))?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::new(edit::MESSAGE_NOT_EDITED));
    }

    Ok(EditCommand::new(index, descriptor))
}

pub fn parse_delete(args: &str) -> Result<DeleteCommand, ParseError> {
    parse_index(args)
        .map(DeleteCommand::new)
        .map_err(|_| invalid_format(delete::MESSAGE_USAGE))
}

pub fn parse_filter(args: &str) -> Result<FilterCommand, ParseError> {
    let map = tokenize(
        args,
        &[PREFIX_TAG, PREFIX_EDU_LEVEL, PREFIX_CURRENT_GRADE, PREFIX_EXP_GRADE],
    );

    if !map.preamble().is_empty() {
        return Err(invalid_format(filter::MESSAGE_USAGE));
    }

    map.verify_no_duplicate_prefixes_for(&[PREFIX_EDU_LEVEL, PREFIX_CURRENT_GRADE, PREFIX_EXP_GRADE])?;
    reject_blank(&map, &[PREFIX_TAG])?;

    let descriptor = FilterDescriptor {
        edu_level: map.value(PREFIX_EDU_LEVEL).map(parse_edu_level).transpose()?,
        current_grade: map
            .value(PREFIX_CURRENT_GRADE)
            .map(parse_current_grade)
            .transpose()?,
        expected_grade: map
            .value(PREFIX_EXP_GRADE)
            .map(parse_expected_grade)
            .transpose()?,
        tags: parse_tags_allowing_empty(&map.all_values(PREFIX_TAG))?,
    };

    if !descriptor.is_any_field_set() {
        return Err(invalid_format(filter::MESSAGE_USAGE));
    }

    Ok(FilterCommand::new(descriptor))
}

pub fn parse_find(args: &str) -> Result<FindCommand, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(invalid_format(find::MESSAGE_USAGE));
    }
    Ok(FindCommand::new(keywords))
}

pub fn parse_clear(args: &str) -> Result<ClearCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_TAG, PREFIX_INDEX_SEQUENCE]);

    if !map.preamble().is_empty() {
        return Err(invalid_format(clear::MESSAGE_USAGE));
    }
    map.verify_no_duplicate_prefixes_for(&[PREFIX_INDEX_SEQUENCE])?;

    match (map.value(PREFIX_INDEX_SEQUENCE), map.is_present(PREFIX_TAG)) {
        (Some(_), true) | (None, false) => Err(invalid_format(clear::MESSAGE_USAGE)),
        (Some(sequence), false) => {
            let (start, end) = parse_index_range(sequence)?;
            Ok(ClearCommand::IndexRange { start, end })
        }
        (None, true) => {
            let tags = parse_tags_allowing_empty(&map.all_values(PREFIX_TAG))?.unwrap_or_default();
            Ok(ClearCommand::Tags(tags))
        }
    }
}

pub fn parse_untag(args: &str) -> Result<UntagCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_TAG]);

    if !map.preamble().is_empty() || !map.is_present(PREFIX_TAG) {
        return Err(invalid_format(untag::MESSAGE_USAGE));
    }

    let tags = parse_tags(&map.all_values(PREFIX_TAG))?;
    if tags.is_empty() {
        return Err(invalid_format(untag::MESSAGE_USAGE));
    }
    Ok(UntagCommand::new(tags))
}

pub fn parse_payment(args: &str) -> Result<PaymentCommand, ParseError> {
    let map = tokenize(
        args,
        &[PREFIX_PAYMENT_FEE, PREFIX_PAYMENT_DATE, PREFIX_PAYMENT_STATUS],
    );

    let index = parse_index(map.preamble()).map_err(|_| invalid_format(payment::MESSAGE_USAGE))?;

    map.verify_no_duplicate_prefixes_for(&[
        PREFIX_PAYMENT_FEE,
        PREFIX_PAYMENT_DATE,
        PREFIX_PAYMENT_STATUS,
    ])?;

    let fee = map.value(PREFIX_PAYMENT_FEE).map(parse_fee).transpose()?;
    let date = map.value(PREFIX_PAYMENT_DATE).map(parse_date).transpose()?;
    let status = map
        .value(PREFIX_PAYMENT_STATUS)
        .map(parse_payment_status)
        .transpose()?;

    let info = PaymentInfo::builder()
        .fee(fee.unwrap_or_default())
        .date(date)
        .status(status.unwrap_or_default())
        .build();
    Ok(PaymentCommand::new(index, info))
}
