// 🏷️ Tags - name is identity, colour is decoration
//
// "CS2040#FF0000" and "cs2040#00FF00" are the same tag. A TagSet is keyed by
// the lowercased name, so re-inserting a known name only swaps the stored
// colour/spelling and never changes membership.

use crate::error::ValueError;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9]{1,10})(?:#([A-Fa-f0-9]{6}))?$").unwrap());

pub const MAX_TAGS_IN_SET: usize = 8;

// ============================================================================
// TAG
// ============================================================================

#[derive(Debug, Clone)]
pub struct Tag {
    full_tag: String,
    name_len: usize,
}

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric and at most 10 characters \
        long, while its color codes should be 6 hexadecimal long (e.g. \"CS2040C#F2552E\")";
    pub const MESSAGE_CONSTRAINTS_ADD_SET: &'static str = "There can at most be 8 unique tags per person.";
    pub const MESSAGE_CONSTRAINTS_EDIT_SET: &'static str =
        "The resulting set of tags should at most contain 8 tags per person.";

    /// Builds a tag from `NAME` or `NAME#RRGGBB`.
    pub fn new(full_tag: &str) -> Result<Self, ValueError> {
        let caps = TAG_REGEX
            .captures(full_tag)
            .ok_or_else(|| ValueError::new(Self::MESSAGE_CONSTRAINTS))?;
        let name_len = caps.get(1).map_or(0, |m| m.end());
        Ok(Tag {
            full_tag: full_tag.to_string(),
            name_len,
        })
    }

    pub fn is_valid(test: &str) -> bool {
        TAG_REGEX.is_match(test)
    }

    pub fn name(&self) -> &str {
        &self.full_tag[..self.name_len]
    }

    /// Hex digits of the colour, without the leading `#`.
    pub fn color(&self) -> Option<&str> {
        self.full_tag.get(self.name_len + 1..).filter(|c| !c.is_empty())
    }

    pub fn full_tag(&self) -> &str {
        &self.full_tag
    }

    /// Lowercased name: the identity used for equality and set membership.
    pub fn key(&self) -> String {
        self.name().to_ascii_lowercase()
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name().eq_ignore_ascii_case(other.name())
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.full_tag)
    }
}

// ============================================================================
// TAG SET
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct TagSet {
    tags: BTreeMap<String, Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        TagSet::default()
    }

    /// Parses every entry; the first invalid one aborts with its constraint message.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, ValueError> {
        let mut set = TagSet::new();
        for tag in raw {
            set.insert(Tag::new(tag.as_ref())?);
        }
        Ok(set)
    }

    /// Inserts `tag`, replacing any stored tag with the same name.
    /// Returns true if the name was not present before.
    pub fn insert(&mut self, tag: Tag) -> bool {
        self.tags.insert(tag.key(), tag).is_none()
    }

    pub fn extend(&mut self, other: &TagSet) {
        for tag in other.iter() {
            self.insert(tag.clone());
        }
    }

    /// Removes every tag whose name appears in `other`.
    pub fn remove_all(&mut self, other: &TagSet) {
        self.tags.retain(|key, _| !other.tags.contains_key(key));
    }

    pub fn without(&self, other: &TagSet) -> TagSet {
        let mut remaining = self.clone();
        remaining.remove_all(other);
        remaining
    }

    /// True when at least one name is shared.
    pub fn intersects(&self, other: &TagSet) -> bool {
        other.tags.keys().any(|key| self.tags.contains_key(key))
    }

    pub fn is_superset_of(&self, other: &TagSet) -> bool {
        other.tags.keys().all(|key| self.tags.contains_key(key))
    }

    pub fn exceeds_limit(&self) -> bool {
        self.tags.len() > MAX_TAGS_IN_SET
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates in order of lowercased name.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.values()
    }
}

/// Membership only; colours are ignored, like tag equality.
impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.tags.len() == other.tags.len() && self.is_superset_of(other)
    }
}

impl Eq for TagSet {}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in self.iter() {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(raw: &str) -> Tag {
        Tag::new(raw).unwrap()
    }

    #[test]
    fn test_tag_validation() {
        assert!(Tag::is_valid("CS2040"));
        assert!(Tag::is_valid("Math#FF5733"));
        assert!(Tag::is_valid("a1b2c3d4e5"));
        assert!(Tag::is_valid("friends#4287f5"));

        assert!(!Tag::is_valid(""));
        assert!(!Tag::is_valid("a1b2c3d4e5f"));
        assert!(!Tag::is_valid("CS 2040"));
        assert!(!Tag::is_valid("CS2040#"));
        assert!(!Tag::is_valid("CS2040#FFF"));
        assert!(!Tag::is_valid("CS2040#GGGGGG"));
        assert!(!Tag::is_valid("#FFFFFF"));
    }

    #[test]
    fn test_tag_name_and_color() {
        let coloured = tag("CS2103T#e67e22");
        assert_eq!(coloured.name(), "CS2103T");
        assert_eq!(coloured.color(), Some("e67e22"));

        let plain = tag("friends");
        assert_eq!(plain.name(), "friends");
        assert_eq!(plain.color(), None);
        assert_eq!(plain.to_string(), "[friends]");
    }

    #[test]
    fn test_tag_equality_ignores_case_and_color() {
        assert_eq!(tag("cs2040#FFFFFF"), tag("CS2040#000000"));
        assert_eq!(tag("cs2040"), tag("CS2040#000000"));
        assert_ne!(tag("CS2040"), tag("CS2030"));

        use std::collections::hash_map::DefaultHasher;
        let hash = |t: &Tag| {
            let mut h = DefaultHasher::new();
            t.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash(&tag("cs2040#FFFFFF")), hash(&tag("CS2040#000000")));
    }

    #[test]
    fn test_reinsert_updates_color_in_place() {
        let mut set = TagSet::new();
        assert!(set.insert(tag("Math#FF0000")));
        assert!(!set.insert(tag("math#00FF00")));

        assert_eq!(set.len(), 1);
        let stored = set.iter().next().unwrap();
        assert_eq!(stored.full_tag(), "math#00FF00");
    }

    #[test]
    fn test_limit_counts_distinct_names_only() {
        let mut set = TagSet::parse(&["t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8"]).unwrap();
        assert!(!set.exceeds_limit());

        set.insert(tag("T8#123456"));
        assert!(!set.exceeds_limit(), "duplicate name must not count twice");

        set.insert(tag("t9"));
        assert!(set.exceeds_limit());
    }

    #[test]
    fn test_set_operations() {
        let person = TagSet::parse(&["CS2040", "Math", "friends"]).unwrap();
        let query = TagSet::parse(&["math#000000", "FRIENDS"]).unwrap();
        let other = TagSet::parse(&["Physics"]).unwrap();

        assert!(person.is_superset_of(&query));
        assert!(!person.is_superset_of(&other));
        assert!(person.intersects(&query));
        assert!(!person.intersects(&other));

        let remaining = person.without(&query);
        assert_eq!(remaining, TagSet::parse(&["CS2040"]).unwrap());
    }

    #[test]
    fn test_parse_rejects_first_invalid_entry() {
        let err = TagSet::parse(&["ok", "not valid"]).unwrap_err();
        assert_eq!(err.message, Tag::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_display_is_ordered_by_name() {
        let set = TagSet::parse(&["b", "A#000000", "c"]).unwrap();
        assert_eq!(set.to_string(), "[A#000000][b][c]");
    }
}
