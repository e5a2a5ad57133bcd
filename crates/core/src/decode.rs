use crate::coerce::CoerceError;
use crate::error::DecodeError;
use crate::schema::{Resolution, Schema};
use crate::tokenize::{flag_name, is_flag, tokenize};
use serde_json::{Map, Value};

/// A destination that handles its own decoding.
///
/// Pass an implementor as [`Target::Custom`] and the orchestrator
/// defers to it entirely, returning exactly what it returns; no variant
/// dispatch occurs. This lets a destination with custom semantics opt
/// out of the generic machinery without modifying the engine.
pub trait DecodeArguments {
    /// Decode `args` into `self`, returning the unconsumed tokens.
    fn decode_arguments(&mut self, args: &[String]) -> Result<Vec<String>, DecodeError>;
}

/// The destination of a [`decode`] call.
///
/// A `Target` borrows its destination for a single decode; construct a
/// fresh one per call.
pub enum Target<'a> {
    /// A record described by a [`Schema`]; the primary path. Consumes
    /// matching flags (and their values) and returns everything else.
    Record(RecordBinding<'a>),
    /// A string-keyed map holding dynamically typed payloads. Greedy:
    /// the map is fully replaced and every input token is considered
    /// consumed, so nothing is ever returned unused.
    Mapping(&'a mut Map<String, Value>),
    /// A bare string sequence. Degenerate leaf: nothing is assigned and
    /// the whole input is returned unconsumed. Rich sequence decoding
    /// is a record-field concern (`Vec` fields), not a top-level one.
    Sequence(&'a mut Vec<String>),
    /// A scalar string. Degenerate leaf: nothing is assigned and the
    /// whole input is returned unconsumed.
    Scalar(&'a mut String),
    /// A destination that opts out via [`DecodeArguments`].
    Custom(&'a mut dyn DecodeArguments),
}

/// A [`Schema`] bound to a mutable record, type-erased for [`Target`].
pub struct RecordBinding<'a> {
    apply: Box<dyn FnMut(&[String]) -> Result<Vec<String>, DecodeError> + 'a>,
}

impl<'a> Target<'a> {
    /// Bind `schema` to `record` as a record destination.
    pub fn record<R>(schema: &'a Schema<R>, record: &'a mut R) -> Self {
        Target::Record(RecordBinding {
            apply: Box::new(move |args| schema.apply(args, record)),
        })
    }
}

/// Decode an argument list into a destination, returning the tokens
/// that were not consumed.
///
/// Dispatches once on the destination variant; see [`Target`] for the
/// per-variant contracts. The unused tokens keep their original
/// relative order, so they can be handed to further destinations, each
/// consuming its own flags.
///
/// On a fatal error the destination may be left partially mutated:
/// fields assigned before the failing flag keep their values.
///
/// # Examples
///
/// ```
/// use argbind_core::{Schema, Target, decode};
///
/// #[derive(Default)]
/// struct Config {
///     host: String,
///     verbose: bool,
/// }
///
/// let schema = Schema::builder()
///     .field("host", |c: &mut Config, v: String| c.host = v)
///     .field("verbose", |c: &mut Config, v: bool| c.verbose = v)
///     .build();
///
/// let args: Vec<String> = ["up", "-host", "example.net", "-verbose"]
///     .map(String::from)
///     .into();
/// let mut config = Config::default();
/// let unused = decode(&args, Target::record(&schema, &mut config))?;
///
/// assert_eq!(config.host, "example.net");
/// assert!(config.verbose);
/// assert_eq!(unused, ["up"]);
/// # Ok::<(), argbind_core::DecodeError>(())
/// ```
pub fn decode(args: &[String], target: Target<'_>) -> Result<Vec<String>, DecodeError> {
    match target {
        Target::Custom(custom) => custom.decode_arguments(args),
        Target::Record(mut binding) => (binding.apply)(args),
        Target::Mapping(map) => {
            apply_mapping(args, map);
            Ok(Vec::new())
        }
        // Degenerate leaves: nothing is assigned, the whole input is
        // returned unconsumed.
        Target::Sequence(_) | Target::Scalar(_) => Ok(args.to_vec()),
    }
}

/// Replace `map` with the tokenized form of `args`.
///
/// Positional parameters, if any, are stored under the empty-string key
/// as an array; each flag becomes a key holding its value string or
/// null. The previous map contents are discarded, not merged into.
fn apply_mapping(args: &[String], map: &mut Map<String, Value>) {
    let tokenized = tokenize(args);
    map.clear();
    if !tokenized.params.is_empty() {
        map.insert(
            String::new(),
            Value::Array(tokenized.params.into_iter().map(Value::String).collect()),
        );
    }
    for (name, value) in tokenized.flags {
        map.insert(name, value.map_or(Value::Null, Value::String));
    }
}

impl<R> Schema<R> {
    /// Decode `args` into `record`, returning the unused tokens.
    ///
    /// Drives a token cursor directly instead of pre-tokenizing, so
    /// unknown flags pass through in their original positions and a
    /// speculatively consumed value token can be re-examined. Per flag:
    /// the name is resolved against the schema; an unknown flag (and
    /// its value token, if one was consumed) goes to the unused list
    /// verbatim and contiguous; a match on an internal field aborts;
    /// otherwise the value is coerced and assigned through the field's
    /// setter, later occurrences overwriting earlier ones.
    ///
    /// A distinguished boolean parse failure after a value token was
    /// consumed means that token was not meant for this flag (a bare
    /// boolean flag followed by an unrelated positional argument): the
    /// cursor backs off one position so the token is re-examined as an
    /// ordinary argument, and the field receives its bare-flag value.
    /// Any other coercion failure aborts the decode.
    pub fn apply(&self, args: &[String], record: &mut R) -> Result<Vec<String>, DecodeError> {
        let mut unused = Vec::new();
        let mut index = 0;
        while index < args.len() {
            let arg = &args[index];
            index += 1;
            if !is_flag(arg) {
                unused.push(arg.clone());
                continue;
            }
            let name = flag_name(arg);
            let mut value = None;
            if index < args.len() && !is_flag(&args[index]) {
                value = Some(args[index].as_str());
                index += 1;
            }
            match self.resolve(&name) {
                Resolution::Unknown => {
                    unused.push(arg.clone());
                    if let Some(v) = value {
                        unused.push(v.to_string());
                    }
                }
                Resolution::Internal(field) => {
                    return Err(DecodeError::InternalField { flag: name, field });
                }
                Resolution::Settable(setter) => match setter(record, value) {
                    Ok(()) => {}
                    Err(CoerceError::BoolParse) if value.is_some() => {
                        // The consumed token was a positional argument,
                        // not this flag's value: back off one position
                        // and assign the bare-flag value instead.
                        index -= 1;
                        setter(record, None)
                            .map_err(|source| DecodeError::Coerce { flag: name, source })?;
                    }
                    Err(source) => {
                        return Err(DecodeError::Coerce { flag: name, source });
                    }
                },
            }
        }
        Ok(unused)
    }
}
