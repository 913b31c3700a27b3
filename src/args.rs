//! `key=value` argument parsing for ADD commands.

use std::collections::HashMap;

/// Parsed command arguments, keyed by argument name.
pub type Args = HashMap<String, String>;

/// Collect every `key=value` token into a map.
///
/// Each token is split on its first `=`, so values may contain `=` too.
/// Tokens without `=` are dropped. A repeated key keeps its last value.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Args {
    tokens
        .iter()
        .filter_map(|token| token.as_ref().split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
