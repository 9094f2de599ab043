use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Input is NaN, infinite or has a fractional part
    NotAnInteger,
    /// Value does not fit the target width, or an encoding needs too many groups
    OutOfRange,
    /// Buffer ended before the last group of a varint
    IncompleteNumber,
    /// Fewer bytes remain than a length prefix or raw read asked for
    Truncated,
    /// String payload is not valid UTF-8
    InvalidUtf8,
    /// Unread bytes left after the final value
    TrailingBytes,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::NotAnInteger =>
                write!(f, "value is not an integer"),
            CodecError::OutOfRange =>
                write!(f, "number out of range"),
            CodecError::IncompleteNumber =>
                write!(f, "incomplete number"),
            CodecError::Truncated =>
                write!(f, "not enough bytes left in buffer"),
            CodecError::InvalidUtf8 =>
                write!(f, "invalid UTF-8 in string"),
            CodecError::TrailingBytes =>
                write!(f, "trailing bytes after last value"),
        }
    }
}

impl std::error::Error for CodecError {}
