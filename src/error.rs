use thiserror::Error;

/// Error type for every codec operation in the crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RleError {
    /// A legacy count token was not a single decimal digit.
    #[error("Malformed count {found:?} at position {position}")]
    MalformedCount { position: usize, found: String },
    /// A legacy count token had no symbol after it.
    #[error("Count at position {position} has no paired symbol")]
    TruncatedPair { position: usize },
    /// A run is longer than the target format can carry.
    #[error("Run of {count} exceeds the format limit of {max}")]
    RunTooLong { count: usize, max: usize },
    #[error("Bad stream header: {0}")]
    BadHeader(String),
    /// A binary record was cut short.
    #[error("Stream truncated at byte {position}: needed {needed} bytes, {available} available")]
    Truncated {
        position: usize,
        needed: usize,
        available: usize,
    },
    #[error("Run at byte {position} has a zero count")]
    ZeroCount { position: usize },
    #[error("Invalid symbol value {value:#x} at byte {position}")]
    InvalidSymbol { position: usize, value: u32 },
    /// Decoding would expand past the allowed output size.
    #[error("Decoded output would exceed {max} symbols")]
    OutputTooLarge { max: usize },
    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidText(#[from] std::str::Utf8Error),
}

impl From<RleError> for std::io::Error {
    fn from(e: RleError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}

#[cfg(test)]
mod test {
    use super::RleError;

    #[test]
    fn display_test() {
        let e = RleError::MalformedCount {
            position: 4,
            found: "x".to_string(),
        };
        assert_eq!(e.to_string(), "Malformed count \"x\" at position 4");
    }

    #[test]
    fn io_conversion_test() {
        let e: std::io::Error = RleError::TruncatedPair { position: 2 }.into();
        assert_eq!(e.kind(), std::io::ErrorKind::InvalidData);
        assert_eq!(e.to_string(), "Count at position 2 has no paired symbol");
    }
}
