//! Record construction from parsed ADD arguments.
//!
//! Required arguments per variant:
//! - `shift`: `owner`, `text`, `shift` (integer)
//! - `substitution`: `owner`, `text`, `source`, `target`
//!
//! A record is only returned once every argument has been validated.

use crate::args::Args;
use crate::error::{CommandError, Result};
use crate::record::{Record, RecordKind};

/// Build a record from `key=value` arguments.
///
/// `type` is checked first, then `owner` and `text`, then the variant's own
/// arguments. An empty value counts as missing.
pub fn build_record(args: &Args) -> Result<Record> {
    let type_value = args.get("type").map(String::as_str).unwrap_or_default();
    let kind = RecordKind::from_type(type_value)
        .ok_or_else(|| CommandError::UnknownType(type_value.to_string()))?;

    let owner = required(args, "owner")?;
    let text = required(args, "text")?;

    match kind {
        RecordKind::Shift => {
            let raw = required(args, "shift")?;
            let shift = parse_int(raw)?;
            Ok(Record::shift(owner, text, shift))
        }
        RecordKind::Substitution => {
            let source = required(args, "source")?;
            let target = required(args, "target")?;
            Ok(Record::substitution(owner, text, source, target))
        }
    }
}

fn required<'a>(args: &'a Args, key: &'static str) -> Result<&'a str> {
    match args.get(key) {
        Some(value) if !value.is_empty() => Ok(value.as_str()),
        _ => Err(CommandError::MissingField(key)),
    }
}

fn parse_int(raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::parse_args;

    fn build(tokens: &[&str]) -> Result<Record> {
        build_record(&parse_args(tokens))
    }

    #[test]
    fn test_build_shift() {
        let record = build(&["type=shift", "owner=TestUser", "text=Hello", "shift=3"]).unwrap();
        assert_eq!(record, Record::shift("TestUser", "Hello", 3));
    }

    #[test]
    fn test_build_negative_shift() {
        let record = build(&["type=shift", "owner=A", "text=B", "shift=-7"]).unwrap();
        assert_eq!(record.shift_amount(), Some(-7));
    }

    #[test]
    fn test_build_substitution() {
        let record = build(&[
            "type=substitution",
            "owner=Alice",
            "text=Secret",
            "source=abc",
            "target=def",
        ])
        .unwrap();
        assert_eq!(record.kind(), RecordKind::Substitution);
        assert_eq!(record, Record::substitution("Alice", "Secret", "abc", "def"));
    }

    #[test]
    fn test_missing_text() {
        let err = build(&["type=shift", "owner=User", "shift=5"]).unwrap_err();
        assert_eq!(err, CommandError::MissingField("text"));
    }

    #[test]
    fn test_missing_shift() {
        let err = build(&["type=shift", "owner=A", "text=x"]).unwrap_err();
        assert_eq!(err, CommandError::MissingField("shift"));
    }

    #[test]
    fn test_missing_source_alphabet() {
        let err = build(&["type=substitution", "owner=A", "text=B", "target=def"]).unwrap_err();
        assert_eq!(err, CommandError::MissingField("source"));
    }

    #[test]
    fn test_owner_reported_before_variant_keys() {
        let err = build(&["type=substitution", "text=B", "target=def"]).unwrap_err();
        assert_eq!(err, CommandError::MissingField("owner"));
    }

    #[test]
    fn test_missing_target_alphabet() {
        let err = build(&["type=substitution", "owner=A", "text=B", "source=abc"]).unwrap_err();
        assert_eq!(err, CommandError::MissingField("target"));
    }

    #[test]
    fn test_empty_value_is_missing() {
        let err = build(&["type=shift", "owner=", "text=Hi", "shift=1"]).unwrap_err();
        assert_eq!(err, CommandError::MissingField("owner"));
    }

    #[test]
    fn test_invalid_number() {
        let err =
            build(&["type=shift", "owner=User", "text=Hi", "shift=not_a_number"]).unwrap_err();
        assert_eq!(err, CommandError::InvalidNumber("not_a_number".to_string()));
    }

    #[test]
    fn test_unknown_type() {
        let err = build(&["type=ufo_cipher", "owner=Alien", "text=Beep"]).unwrap_err();
        assert_eq!(err, CommandError::UnknownType("ufo_cipher".to_string()));
    }

    #[test]
    fn test_absent_type_is_unknown() {
        let err = build(&["owner=Alien", "text=Beep"]).unwrap_err();
        assert_eq!(err, CommandError::UnknownType(String::new()));
    }

    #[test]
    fn test_extra_keys_ignored() {
        let record = build(&["type=shift", "owner=A", "text=B", "shift=1", "color=red"]).unwrap();
        assert_eq!(record.kind(), RecordKind::Shift);
    }
}
