use crate::block::decode_block;
use crate::codec::StreamDecoder;
use crate::config::Method;
use crate::error::DecodeError;

/// The live, lifetime-bound handle to one decoder backend instance.
///
/// # Lifecycle
/// A session is started once per stream (allocating the backend decoder
/// state), serves an arbitrary number of [`decode`](Session::decode) calls,
/// and is stopped once when the stream closes. The decoder state is owned
/// exclusively by the session — never shared, never copied.
///
/// Use `gzdec_codecs::start_session(method)` to start a session with one of
/// the bundled backends; `Session::new` exists so hosts can supply their own
/// [`StreamDecoder`] implementation.
pub struct Session {
    decoder: Box<dyn StreamDecoder>,
}

impl Session {
    /// Wrap a freshly-initialized decoder into a session.
    pub fn new(decoder: Box<dyn StreamDecoder>) -> Self {
        Self { decoder }
    }

    /// The method this session decodes. Fixed for the session's lifetime.
    pub fn method(&self) -> Method {
        self.decoder.method()
    }

    /// Backend name for display.
    pub fn decoder_name(&self) -> &'static str {
        self.decoder.name()
    }

    /// Decode one complete compressed buffer to completion.
    ///
    /// `block_size` is the per-step output quantum; 0 = use `input.len()`.
    /// At most one call may be in flight at a time (enforced by `&mut self`).
    /// After a [`DecodeError`] the decoder state is undefined and the session
    /// should be replaced rather than reused.
    pub fn decode(&mut self, input: &[u8], block_size: u32) -> Result<Vec<u8>, DecodeError> {
        decode_block(self.decoder.as_mut(), input, block_size)
    }

    /// Release the decoder state.
    ///
    /// Teardown is tolerant: backend teardown statuses are ignored and stop
    /// always succeeds from the engine's point of view. Dropping the session
    /// has the same effect; this method only makes the stream-stop point
    /// explicit in host code.
    pub fn stop(self) {}
}
