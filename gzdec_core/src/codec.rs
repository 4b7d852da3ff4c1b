use crate::config::Method;
use crate::error::DecodeError;

/// Bookkeeping returned by one incremental decode step.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Bytes of the input slice the backend consumed during this step.
    pub consumed: usize,
    /// Bytes the backend wrote into the output window during this step.
    ///
    /// `produced == window length` means the window was exhausted and more
    /// output may be pending — the block decode loop's continuation signal.
    pub produced: usize,
    /// The backend reached the end of the compressed stream.
    pub end_of_stream: bool,
}

/// Core decompression abstraction.
///
/// Each `StreamDecoder` implementation wraps one stateful backend
/// decompressor (a z_stream-style state machine) and:
/// - Carries partially-consumed input position and window/dictionary state
///   across calls to [`step`](StreamDecoder::step). Exactly one decoder
///   exists per session; it is never shared or copied.
/// - Maps backend-fatal statuses (corrupt data, bad magic, memory
///   exhaustion) to [`DecodeError`] — a returned error aborts the decode
///   immediately, no retry.
/// - Is `Send` but not `Sync`: a session may move between threads, but at
///   most one step may be in flight at any time because the backend state
///   machines carry non-reentrant internal cursors.
pub trait StreamDecoder: Send {
    /// The method this decoder implements.
    fn method(&self) -> Method;

    /// Human-readable backend name for CLI display.
    fn name(&self) -> &'static str;

    /// One incremental decompress step: consume bytes from the front of
    /// `input`, write decoded bytes into `output`, and report how far both
    /// cursors moved plus whether the stream ended.
    fn step(&mut self, input: &[u8], output: &mut [u8]) -> Result<Step, DecodeError>;

    /// Return the decoder to its freshly-initialized state, ready for a new
    /// compressed stream. Called by the decode loop after a stream completes
    /// so a persistent session stays primed for the next buffer.
    fn reset(&mut self);
}
