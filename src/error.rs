//! Error types

use core::fmt;

/// The error returned by fallible HMAC and DRBG operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// An argument failed validation: an empty MAC key, a seed or
    /// personalization string outside its permitted length range, an
    /// additional input which is present but empty (or over-length), or
    /// an output request of zero or more than [`MAX_OUTPUT_LEN`] bytes.
    ///
    /// The rejected operation made no change to caller-visible state.
    ///
    /// [`MAX_OUTPUT_LEN`]: crate::drbg::MAX_OUTPUT_LEN
    InvalidInput,

    /// The generator's reseed countdown has reached zero: it refuses to
    /// produce output until [`HmacDrbg::reseed`] succeeds.
    ///
    /// The generator state is left intact, so the caller may reseed and
    /// retry the request.
    ///
    /// [`HmacDrbg::reseed`]: crate::HmacDrbg::reseed
    ReseedRequired,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput => f.write_str("invalid input"),
            Error::ReseedRequired => f.write_str("reseed required"),
        }
    }
}

impl core::error::Error for Error {}
