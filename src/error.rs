//! Error types for packetmaker

/// Errors that can occur while emitting into a caller-provided buffer
///
/// Declaring fields and allocating emits never fail; only writes into a
/// caller slice ([`Maker::write_into`](crate::Maker::write_into) and
/// [`Field::write`](crate::Field::write)) can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Destination slice shorter than the declared packet length
    ShortBuffer,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::ShortBuffer => "buffer too small for declared packet",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for packetmaker operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_matches_description() {
        let err = Error::ShortBuffer;
        assert_eq!(err.to_string(), err.description());
    }
}
