//! Error types for registry construction and lookups.

use thiserror::Error;

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An instance was declared with an empty name.
    InvalidArgument,
    /// Two instances of one type share an exact name.
    DuplicateName,
    /// A name or value lookup found no match.
    NotFound,
    /// A flag value is not a power of two, or the flag bits are not contiguous.
    NotPowerOfTwo,
    /// A negative composite value was passed to a type that does not accept one.
    NegativeValueNotAllowed,
    /// A name list or combined value could not be fully resolved.
    Parse,
}

/// Errors produced while building registries or resolving instances.
///
/// Names and values are captured as text so the error stays `Clone` and can be
/// cached by the memoized flag validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An instance was declared with an empty name.
    #[error("{type_name}: instance name cannot be empty")]
    EmptyName {
        /// Enum type the instance belongs to.
        type_name: &'static str,
    },

    /// A second instance tried to register an existing exact name.
    #[error("{type_name}: duplicate name \"{name}\"")]
    DuplicateName {
        /// Enum type the instance belongs to.
        type_name: &'static str,
        /// The contested name.
        name: String,
    },

    /// No instance with the requested name.
    #[error("no {type_name} with name \"{name}\" found")]
    NameNotFound {
        /// Enum type that was searched.
        type_name: &'static str,
        /// The requested name.
        name: String,
    },

    /// No instance with the requested value.
    #[error("no {type_name} with value \"{value}\" found")]
    ValueNotFound {
        /// Enum type that was searched.
        type_name: &'static str,
        /// The requested value.
        value: String,
    },

    /// A flag value is not a single bit.
    #[error("{type_name}: value {value} of flag \"{name}\" is not a power of two")]
    NotPowerOfTwo {
        /// Flag enum type.
        type_name: &'static str,
        /// Offending flag name.
        name: String,
        /// Offending flag value.
        value: String,
    },

    /// The single-bit flags do not form the run 1, 2, 4, ...
    #[error("{type_name}: missing power-of-two flag value {expected}")]
    MissingFlag {
        /// Flag enum type.
        type_name: &'static str,
        /// The first bit value absent from the run.
        expected: String,
    },

    /// Negative composite input on a type without negative-input support.
    #[error("negative flag value {value} not allowed for {type_name}")]
    NegativeValue {
        /// Flag enum type.
        type_name: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A comma-separated name list could not be resolved.
    #[error("failed to parse one or more flags in \"{input}\" for {type_name}")]
    ParseNames {
        /// Flag enum type.
        type_name: &'static str,
        /// The raw input.
        input: String,
    },

    /// A combined value has bits outside every defined flag.
    #[error("{type_name}: value {value} does not fit in defined flags")]
    OutOfRange {
        /// Flag enum type.
        type_name: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A combined value could not be explained by the defined flags.
    #[error("value {value} could not be converted to a valid flag for {type_name}")]
    ParseValue {
        /// Flag enum type.
        type_name: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName { .. } => ErrorKind::InvalidArgument,
            Self::DuplicateName { .. } => ErrorKind::DuplicateName,
            Self::NameNotFound { .. } | Self::ValueNotFound { .. } => ErrorKind::NotFound,
            Self::NotPowerOfTwo { .. } | Self::MissingFlag { .. } => ErrorKind::NotPowerOfTwo,
            Self::NegativeValue { .. } => ErrorKind::NegativeValueNotAllowed,
            Self::ParseNames { .. } | Self::OutOfRange { .. } | Self::ParseValue { .. } => {
                ErrorKind::Parse
            }
        }
    }

    /// The enum type this error refers to.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::EmptyName { type_name }
            | Self::DuplicateName { type_name, .. }
            | Self::NameNotFound { type_name, .. }
            | Self::ValueNotFound { type_name, .. }
            | Self::NotPowerOfTwo { type_name, .. }
            | Self::MissingFlag { type_name, .. }
            | Self::NegativeValue { type_name, .. }
            | Self::ParseNames { type_name, .. }
            | Self::OutOfRange { type_name, .. }
            | Self::ParseValue { type_name, .. } => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let err = Error::OutOfRange {
            type_name: "Perms",
            value: "16".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.type_name(), "Perms");
        assert_eq!(err.to_string(), "Perms: value 16 does not fit in defined flags");

        let err = Error::MissingFlag {
            type_name: "Perms",
            expected: "4".into(),
        };
        assert_eq!(err.kind(), ErrorKind::NotPowerOfTwo);
    }
}
