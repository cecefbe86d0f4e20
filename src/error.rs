use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by polynomial construction and radix conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input has an invalid shape, e.g. an empty coefficient list.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("base {base} should be in range [{min}, {max}]")]
    OutOfRange { base: u32, min: u32, max: u32 },

    #[error("element '{element}' is not in base {base} system")]
    InvalidFormat { element: char, base: u32 },

    #[error("value can not fit in u32")]
    Overflow,
}
