//! # cipher-batch
//!
//! A line-oriented batch interpreter for cipher text records.
//!
//! A script is a sequence of commands, one per line:
//! - `ADD type=<kind> key=value ...` validates and appends a record
//! - `REM <field><op><value>` removes every record matching a comparison
//! - `PRINT` renders every stored record
//!
//! ## Records
//!
//! Every record has an owner and a source text. The `shift` variant adds an
//! integer offset; the `substitution` variant adds a source and a target
//! alphabet. The cipher parameters are stored only, never applied.
//!
//! ## Conditions
//!
//! `REM` compares one named field with `>`, `<` or `=`. The names `owner`,
//! `text` and `shift` are aliases for `owner_name`, `source_text` and
//! `shift_amount`; any other name is looked up as-is. Records without the
//! field, or whose field type the operand cannot be converted to, are kept.
//!
//! ## Example
//!
//! ```
//! use cipher_batch::Interpreter;
//!
//! let mut interp = Interpreter::new();
//! interp.add(&["type=shift", "owner=User1", "text=A", "shift=3"]).unwrap();
//! interp.add(&["type=shift", "owner=User2", "text=B", "shift=10"]).unwrap();
//!
//! assert_eq!(interp.remove("shift>5").unwrap(), 1);
//! assert_eq!(interp.records()[0].shift_amount(), Some(3));
//! ```

pub mod args;
pub mod command;
pub mod condition;
pub mod error;
pub mod factory;
pub mod filter;
pub mod interpreter;
pub mod record;
pub mod trace;

pub use args::{Args, parse_args};
pub use command::{Command, parse_commands, parse_line, parse_tokens, tokenize};
pub use condition::{Condition, Operator, parse_condition, resolve_field};
pub use error::CommandError;
pub use factory::build_record;
pub use filter::{matches, remove_matching};
pub use interpreter::{Interpreter, Outcome, ScriptReport, run_script, run_script_traced};
pub use record::{FieldValue, Fields, Record, RecordKind, ShiftRecord, SubstitutionRecord};
pub use trace::{ScriptTrace, StepTrace};
