//! Condition evaluation and record removal.
//!
//! A record is removed only when it has the condition's field, the operand
//! converts to that field's type, and the comparison holds. Every other case
//! keeps the record.

use std::num::IntErrorKind;

use crate::condition::{Condition, Operator};
use crate::record::{FieldValue, Fields};

/// Does `record` satisfy `condition`?
pub fn matches<R: Fields + ?Sized>(record: &R, condition: &Condition) -> bool {
    match record.field(&condition.field) {
        Some(value) => compare(value, condition.op, &condition.value),
        None => false,
    }
}

/// Compare a field value against a raw operand.
///
/// Integer fields parse the operand as an integer; an operand that is not an
/// integer never matches. An integer beyond the `i64` range lies above or
/// below every field value. Text fields only support equality.
fn compare(value: FieldValue<'_>, op: Operator, operand: &str) -> bool {
    match value {
        FieldValue::Int(current) => match operand.parse::<i64>() {
            Ok(target) => match op {
                Operator::Eq => current == target,
                Operator::Gt => current > target,
                Operator::Lt => current < target,
            },
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => op == Operator::Lt,
                IntErrorKind::NegOverflow => op == Operator::Gt,
                _ => false,
            },
        },
        FieldValue::Text(current) => op == Operator::Eq && current == operand,
    }
}

/// Remove every record matching `condition`, keeping the order of the rest.
///
/// Returns the number of records removed.
pub fn remove_matching<R: Fields>(records: &mut Vec<R>, condition: &Condition) -> usize {
    let before = records.len();
    records.retain(|record| !matches(record, condition));
    before - records.len()
}
