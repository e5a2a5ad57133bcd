use serde::Serialize;
use std::collections::BTreeMap;

/// Result of tokenizing an argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tokenized {
    /// Positional parameters, in input order.
    pub params: Vec<String>,
    /// Flag name (dashes stripped, lower-cased) mapped to its optional
    /// value token. When a flag name repeats, the last occurrence wins.
    pub flags: BTreeMap<String, Option<String>>,
}

/// Returns `true` if `arg` is a flag token (one or more leading dashes).
pub(crate) fn is_flag(arg: &str) -> bool {
    arg.starts_with('-')
}

/// Normalize a flag token to its name: strip leading dashes, lower-case.
pub(crate) fn flag_name(arg: &str) -> String {
    arg.trim_start_matches('-').to_ascii_lowercase()
}

/// Tokenize an argument list into positional parameters and flags.
///
/// Scans left to right with a single cursor. A non-flag token is
/// collected as a positional parameter. A flag token consumes the next
/// token as its value only when that token exists and is not itself a
/// flag; a flag at the end of the input, or immediately followed by
/// another flag, has no value.
///
/// # Examples
///
/// ```
/// use argbind_core::tokenize;
///
/// let args: Vec<String> = ["a", "-x", "1", "-y"].map(String::from).into();
/// let tokenized = tokenize(&args);
/// assert_eq!(tokenized.params, ["a"]);
/// assert_eq!(tokenized.flags["x"], Some("1".to_string()));
/// assert_eq!(tokenized.flags["y"], None);
/// ```
pub fn tokenize(args: &[String]) -> Tokenized {
    let mut out = Tokenized::default();
    let mut index = 0;
    while index < args.len() {
        let arg = &args[index];
        index += 1;
        if !is_flag(arg) {
            out.params.push(arg.clone());
            continue;
        }
        let name = flag_name(arg);
        let mut value = None;
        if index < args.len() && !is_flag(&args[index]) {
            value = Some(args[index].clone());
            index += 1;
        }
        out.flags.insert(name, value);
    }
    out
}

/// Serialize a tokenization result to a pretty-printed JSON string.
pub fn to_pretty_json(tokenized: &Tokenized) -> String {
    serde_json::to_string_pretty(tokenized).expect("Tokenized serialization cannot fail")
}
