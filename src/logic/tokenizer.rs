// ✂️ Argument tokenizer - splits `preamble p/value q/value ...` into a multimap
//
// A prefix only counts when it follows whitespace, so "e/" inside
// "alice@example.com" or "t/" inside "street t/x" behave as expected:
//
//   " 1 n/Alex p/123 t/a t/b"
//     preamble = "1", n/ = ["Alex"], p/ = ["123"], t/ = ["a", "b"]
//
// Text that looks like a prefix but isn't one of the requested prefixes stays
// inside the value before it.

use crate::error::ParseError;
use std::collections::HashMap;
use std::fmt;

pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(pub &'static str);

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in the order they appeared.
    pub fn all_values(&self, prefix: Prefix) -> Vec<String> {
        self.values.get(&prefix).cloned().unwrap_or_default()
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Present, but given with a blank value.
    pub fn is_empty_field(&self, prefix: Prefix) -> bool {
        self.value(prefix).is_some_and(str::is_empty)
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|p| self.values.get(*p).is_some_and(|v| v.len() > 1))
            .map(Prefix::as_str)
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::new(format!(
                "{MESSAGE_DUPLICATE_FIELDS}{}",
                duplicated.join(" ")
            )))
        }
    }
}

/// Tokenizes `args` against `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions = find_all_prefix_positions(args, prefixes);
    positions.sort_by_key(|(position, _)| *position);

    let mut multimap = ArgumentMultimap::default();
    let preamble_end = positions.first().map_or(args.len(), |(position, _)| *position);
    multimap.preamble = args[..preamble_end].trim().to_string();

    for (i, (position, prefix)) in positions.iter().enumerate() {
        let value_start = position + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        let value = args[value_start..value_end].trim().to_string();
        multimap.values.entry(*prefix).or_default().push(value);
    }

    multimap
}

fn find_all_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();
    for prefix in prefixes {
        let needle = format!(" {}", prefix.as_str());
        let mut from = 0;
        while let Some(found) = args[from..].find(&needle) {
            let position = from + found + 1;
            positions.push((position, *prefix));
            from = position;
        }
    }
    positions
}
