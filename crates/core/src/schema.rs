//! Record schemas: the descriptor table that drives struct decoding.
//!
//! A [`Schema`] describes how flag names map onto the fields of one
//! record type `R`. Each descriptor carries the field's own name, an
//! optional alias list, and a typed setter closure; the decoder resolves
//! flag names against descriptors in declaration order and assigns
//! coerced values through the setters. Build a schema once per record
//! type via [`Schema::builder`] and reuse it across decode calls.

use crate::coerce::{CoerceError, FromArgValue};

/// Coerces an optional value token and assigns it into a record.
/// `None` means the flag had no value token.
pub(crate) type Setter<R> = Box<dyn Fn(&mut R, Option<&str>) -> Result<(), CoerceError>>;

/// A single field descriptor within a [`Schema`].
struct Field<R> {
    /// The field's own name, matched case-insensitively.
    name: &'static str,
    /// Alternate flag names, each matched case-insensitively.
    aliases: Vec<String>,
    /// Coerce-and-assign closure; `None` marks an internal field.
    setter: Option<Setter<R>>,
}

impl<R> Field<R> {
    fn matches(&self, candidate: &str) -> bool {
        candidate.eq_ignore_ascii_case(self.name)
            || self
                .aliases
                .iter()
                .any(|alias| candidate.eq_ignore_ascii_case(alias))
    }
}

/// Outcome of resolving a flag name against a schema.
pub(crate) enum Resolution<'s, R> {
    /// No descriptor matched; the flag flows through unused.
    Unknown,
    /// The first match is an internal field; the decode must abort.
    Internal(&'static str),
    /// The first match is a settable field.
    Settable(&'s Setter<R>),
}

/// Maps flag names onto typed field setters for one record type `R`.
pub struct Schema<R> {
    fields: Vec<Field<R>>,
}

impl<R> Schema<R> {
    /// Start building a schema.
    pub fn builder() -> SchemaBuilder<R> {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Resolve a flag name to a field descriptor.
    ///
    /// Scans descriptors in declaration order; the first
    /// case-insensitive match on a field's own name or any of its
    /// aliases wins. A schema should not declare ambiguous aliases;
    /// first-match on ambiguity is an implementation detail callers
    /// must not rely on.
    pub(crate) fn resolve(&self, name: &str) -> Resolution<'_, R> {
        for field in &self.fields {
            if !field.matches(name) {
                continue;
            }
            return match &field.setter {
                Some(setter) => Resolution::Settable(setter),
                None => Resolution::Internal(field.name),
            };
        }
        Resolution::Unknown
    }
}

/// Builder for [`Schema`], one call per field descriptor.
pub struct SchemaBuilder<R> {
    fields: Vec<Field<R>>,
}

impl<R> SchemaBuilder<R> {
    /// Declare a settable field matched by its own name only.
    ///
    /// `set` receives the record and the coerced value. It is invoked
    /// once per matching flag occurrence, in token order, so later
    /// occurrences overwrite earlier assignments.
    pub fn field<V, F>(self, name: &'static str, set: F) -> Self
    where
        V: FromArgValue,
        F: Fn(&mut R, V) + 'static,
    {
        self.field_with_aliases(name, "", set)
    }

    /// Declare a settable field with a comma-separated alias list.
    ///
    /// Each alias is trimmed and matched case-insensitively alongside
    /// the field's own name; empty pieces are dropped.
    pub fn field_with_aliases<V, F>(mut self, name: &'static str, aliases: &str, set: F) -> Self
    where
        V: FromArgValue,
        F: Fn(&mut R, V) + 'static,
    {
        let setter: Setter<R> = Box::new(move |record, value| {
            set(record, V::from_arg_value(value)?);
            Ok(())
        });
        self.fields.push(Field {
            name,
            aliases: split_aliases(aliases),
            setter: Some(setter),
        });
        self
    }

    /// Declare an internal field: it participates in name resolution
    /// but can never be assigned.
    ///
    /// A flag matching an internal field aborts the decode. This is
    /// deliberately distinct from not declaring the name at all (which
    /// would let the flag flow through unused): the destination claims
    /// the name but cannot accept a value for it, so continuing would
    /// silently drop input.
    pub fn internal(mut self, name: &'static str) -> Self {
        self.fields.push(Field {
            name,
            aliases: Vec::new(),
            setter: None,
        });
        self
    }

    /// Finish building.
    pub fn build(self) -> Schema<R> {
        Schema {
            fields: self.fields,
        }
    }
}

fn split_aliases(aliases: &str) -> Vec<String> {
    aliases
        .split(',')
        .map(str::trim)
        .filter(|alias| !alias.is_empty())
        .map(str::to_string)
        .collect()
}
