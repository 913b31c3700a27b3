//! Cipher text records.
//!
//! A record carries an owner and a source text, plus the parameters of one
//! cipher variant. Fields are reachable by name through the [`Fields`] table
//! so the removal filter can compare any attribute without knowing the
//! variant in advance.

use std::fmt;

/// Field name of the record owner.
pub const OWNER_NAME: &str = "owner_name";
/// Field name of the text the cipher applies to.
pub const SOURCE_TEXT: &str = "source_text";
/// Field name of the shift cipher offset.
pub const SHIFT_AMOUNT: &str = "shift_amount";
/// Field name of the substitution source alphabet.
pub const SOURCE_ALPHABET: &str = "source_alphabet";
/// Field name of the substitution target alphabet.
pub const TARGET_ALPHABET: &str = "target_alphabet";

const SHIFT_FIELDS: &[&str] = &[OWNER_NAME, SOURCE_TEXT, SHIFT_AMOUNT];
const SUBSTITUTION_FIELDS: &[&str] = &[OWNER_NAME, SOURCE_TEXT, SOURCE_ALPHABET, TARGET_ALPHABET];

/// Discriminator for the closed set of record variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Shift,
    Substitution,
}

impl RecordKind {
    /// Look up a variant by its `type=` argument value.
    pub fn from_type(value: &str) -> Option<Self> {
        match value {
            "shift" => Some(RecordKind::Shift),
            "substitution" => Some(RecordKind::Substitution),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Shift => "shift",
            RecordKind::Substitution => "substitution",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime value of a named field, borrowed from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Int(i64),
    Text(&'a str),
}

/// Named field access.
///
/// Implementors list their fields once in `field_names` and resolve each
/// name in `field`; names outside the table resolve to `None`.
pub trait Fields {
    /// Canonical field names, in display order.
    fn field_names(&self) -> &'static [&'static str];

    /// Current value of the named field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// All fields with their values.
    fn fields(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        self.field_names()
            .iter()
            .filter_map(|name| self.field(name).map(|value| (*name, value)))
            .collect()
    }
}

/// Caesar-style record: text shifted by a fixed offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRecord {
    pub owner_name: String,
    pub source_text: String,
    pub shift_amount: i64,
}

impl Fields for ShiftRecord {
    fn field_names(&self) -> &'static [&'static str] {
        SHIFT_FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            OWNER_NAME => Some(FieldValue::Text(&self.owner_name)),
            SOURCE_TEXT => Some(FieldValue::Text(&self.source_text)),
            SHIFT_AMOUNT => Some(FieldValue::Int(self.shift_amount)),
            _ => None,
        }
    }
}

/// Record mapping each character of one alphabet to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRecord {
    pub owner_name: String,
    pub source_text: String,
    pub source_alphabet: String,
    pub target_alphabet: String,
}

impl Fields for SubstitutionRecord {
    fn field_names(&self) -> &'static [&'static str] {
        SUBSTITUTION_FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            OWNER_NAME => Some(FieldValue::Text(&self.owner_name)),
            SOURCE_TEXT => Some(FieldValue::Text(&self.source_text)),
            SOURCE_ALPHABET => Some(FieldValue::Text(&self.source_alphabet)),
            TARGET_ALPHABET => Some(FieldValue::Text(&self.target_alphabet)),
            _ => None,
        }
    }
}

/// A stored record of any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Shift(ShiftRecord),
    Substitution(SubstitutionRecord),
}

impl Record {
    pub fn shift(
        owner_name: impl Into<String>,
        source_text: impl Into<String>,
        shift_amount: i64,
    ) -> Self {
        Record::Shift(ShiftRecord {
            owner_name: owner_name.into(),
            source_text: source_text.into(),
            shift_amount,
        })
    }

    pub fn substitution(
        owner_name: impl Into<String>,
        source_text: impl Into<String>,
        source_alphabet: impl Into<String>,
        target_alphabet: impl Into<String>,
    ) -> Self {
        Record::Substitution(SubstitutionRecord {
            owner_name: owner_name.into(),
            source_text: source_text.into(),
            source_alphabet: source_alphabet.into(),
            target_alphabet: target_alphabet.into(),
        })
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Shift(_) => RecordKind::Shift,
            Record::Substitution(_) => RecordKind::Substitution,
        }
    }

    pub fn owner_name(&self) -> &str {
        match self {
            Record::Shift(r) => &r.owner_name,
            Record::Substitution(r) => &r.owner_name,
        }
    }

    pub fn source_text(&self) -> &str {
        match self {
            Record::Shift(r) => &r.source_text,
            Record::Substitution(r) => &r.source_text,
        }
    }

    /// Shift offset, for shift records only.
    pub fn shift_amount(&self) -> Option<i64> {
        match self {
            Record::Shift(r) => Some(r.shift_amount),
            Record::Substitution(_) => None,
        }
    }
}

impl Fields for Record {
    fn field_names(&self) -> &'static [&'static str] {
        match self {
            Record::Shift(r) => r.field_names(),
            Record::Substitution(r) => r.field_names(),
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match self {
            Record::Shift(r) => r.field(name),
            Record::Substitution(r) => r.field(name),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Shift(r) => write!(
                f,
                "[Shift] Owner: {}, Text: {}, Shift: {}",
                r.owner_name, r.source_text, r.shift_amount
            ),
            Record::Substitution(r) => write!(
                f,
                "[Substitution] Owner: {}, Text: {}, Alphabets: {}->{}",
                r.owner_name, r.source_text, r.source_alphabet, r.target_alphabet
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_type() {
        assert_eq!(RecordKind::from_type("shift"), Some(RecordKind::Shift));
        assert_eq!(
            RecordKind::from_type("substitution"),
            Some(RecordKind::Substitution)
        );
        assert_eq!(RecordKind::from_type("Shift"), None);
        assert_eq!(RecordKind::from_type(""), None);
    }

    #[test]
    fn test_shift_field_table() {
        let record = Record::shift("Alice", "Hello", 3);
        assert_eq!(record.field(OWNER_NAME), Some(FieldValue::Text("Alice")));
        assert_eq!(record.field(SOURCE_TEXT), Some(FieldValue::Text("Hello")));
        assert_eq!(record.field(SHIFT_AMOUNT), Some(FieldValue::Int(3)));
        assert_eq!(record.field(SOURCE_ALPHABET), None);
        assert_eq!(record.field("owner"), None);
    }

    #[test]
    fn test_substitution_fields_in_order() {
        let record = Record::substitution("Bob", "Secret", "abc", "def");
        let names: Vec<&str> = record.fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![OWNER_NAME, SOURCE_TEXT, SOURCE_ALPHABET, TARGET_ALPHABET]
        );
        assert_eq!(record.field(SHIFT_AMOUNT), None);
        assert_eq!(record.shift_amount(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Record::shift("User1", "A", 3).to_string(),
            "[Shift] Owner: User1, Text: A, Shift: 3"
        );
        assert_eq!(
            Record::substitution("Alice", "Secret", "abc", "def").to_string(),
            "[Substitution] Owner: Alice, Text: Secret, Alphabets: abc->def"
        );
    }
}
