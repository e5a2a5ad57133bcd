//! Decode error types.

use crate::coerce::CoerceError;

/// Errors that abort a decode call.
///
/// Unknown flags are not errors; they flow through to the unused-token
/// list for chained destinations to pick up. When a decode does fail,
/// the destination may be left partially mutated: fields assigned
/// before the failing flag keep their values.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    // -- Structural --
    /// A flag matched a field declared internal.
    ///
    /// Distinct from an unknown flag: the destination declares the name
    /// but cannot accept a value for it, so the destination as a whole
    /// is structurally unusable for this input.
    #[error("flag -{flag} matches internal field {field:?}, which cannot be set")]
    InternalField {
        /// The flag name as it appeared, dashes stripped.
        flag: String,
        /// The declared field name.
        field: &'static str,
    },

    // -- Coercion --
    /// A value matched to a field failed coercion.
    #[error("invalid value for flag -{flag}: {source}")]
    Coerce {
        /// The flag name as it appeared, dashes stripped.
        flag: String,
        /// The underlying coercion failure.
        #[source]
        source: CoerceError,
    },

    // -- Custom decoders --
    /// An error reported by a
    /// [`DecodeArguments`](crate::DecodeArguments) implementation.
    #[error("{0}")]
    Custom(String),
}

impl DecodeError {
    /// Build an error from a custom decoder implementation.
    pub fn custom(message: impl Into<String>) -> Self {
        DecodeError::Custom(message.into())
    }

    /// Returns `true` for errors indicating a structurally unusable
    /// destination, as opposed to a bad value in the input.
    pub fn is_structural(&self) -> bool {
        matches!(self, DecodeError::InternalField { .. })
    }
}
