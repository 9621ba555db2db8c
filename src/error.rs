

//! Error type for all code length computations.

/// A specialized result with the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;


/// Why no code lengths could be assigned.
/// On any error, the output length buffer is fully zeroed,
/// so a caller can safely retry with another strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {

    /// The histogram contains no used symbol, so there is nothing to encode.
    EmptyAlphabet,

    /// A length limit, or an intermediate code length,
    /// is outside the supported range of 1 to 63 bits.
    UnsupportedLimit(u8),

    /// No prefix code with the requested length limit can represent
    /// all used symbols. This happens exactly when `2^limit` is smaller
    /// than the number of used symbols.
    LimitTooSmall {

        /// The requested upper limit on the code length, in bits.
        limit: u8,

        /// The number of used symbols that would have to be encoded.
        symbols: usize,
    },

    /// A bit length histogram does not describe a code
    /// that the in-place reducers can transform.
    InvalidLengthHistogram,
}


impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Error::EmptyAlphabet =>
                write!(formatter, "all symbol counts are zero"),

            Error::UnsupportedLimit(limit) =>
                write!(formatter, "code length limit of {} bits is not supported", limit),

            Error::LimitTooSmall { limit, symbols } =>
                write!(formatter, "{} symbols cannot be encoded with at most {} bits each", symbols, limit),

            Error::InvalidLengthHistogram =>
                write!(formatter, "bit length histogram does not describe a reducible prefix code"),
        }
    }
}

impl std::error::Error for Error {}
