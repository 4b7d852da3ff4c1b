use std::fmt;

use crate::error::DecodeError;

/// Default block size: 0 = "use the input buffer's size as the quantum".
pub const DEFAULT_BLOCK_SIZE: u32 = 0;

/// The decoding method selector.
///
/// Discriminant values are part of the host-facing configuration surface
/// (the host may hand us a raw integer property): 0 = gzip, 1 = bzip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Gzip-framed DEFLATE streams.
    #[default]
    Gzip = 0,
    /// Bzip2 streams.
    Bzip = 1,
}

impl Method {
    /// Human-readable method name for CLI display and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Method::Gzip => "gzip",
            Method::Bzip => "bzip",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation boundary for raw integer method selectors coming from the host.
impl TryFrom<u32> for Method {
    type Error = DecodeError;

    fn try_from(value: u32) -> Result<Self, DecodeError> {
        match value {
            0 => Ok(Method::Gzip),
            1 => Ok(Method::Bzip),
            other => Err(DecodeError::UnsupportedMethod(other)),
        }
    }
}

/// The engine's configuration surface, set by the host and read at decode
/// time. Mirrors the two host-visible properties: `method` and `block-size`.
#[derive(Debug, Clone, Copy)]
pub struct DecoderConfig {
    /// Which decoder backend a session uses. Immutable once a session starts.
    pub method: Method,
    /// Bytes requested from the decoder per step and the growth increment of
    /// the output buffer. 0 = use the current input buffer's size.
    pub block_size: u32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            method: Method::Gzip,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}
