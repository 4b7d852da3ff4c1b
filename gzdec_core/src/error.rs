use crate::config::Method;

/// A decoder backend could not be initialized.
///
/// Fatal to the session: the caller must not proceed to decode, and there is
/// nothing to tear down.
#[derive(Debug, thiserror::Error)]
#[error("failed to initialize {method} decoder: {reason}")]
pub struct InitError {
    pub method: Method,
    pub reason: String,
}

/// Errors surfaced by a single block decode call.
///
/// No retries happen anywhere in the engine — every failure is returned
/// immediately, and any partially built output buffer is dropped before the
/// error is handed back. Whether a failure halts the pipeline or is merely
/// reported is the host's decision, not the engine's.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The compressed data is structurally invalid, truncated, or empty, or
    /// the backend rejected it mid-stream (bad magic, missing dictionary,
    /// invalid parameters).
    ///
    /// The session's decoder state is left exactly as the backend left it;
    /// reusing the session after this error is unsupported.
    #[error("corrupt {method} stream: {reason}")]
    Corrupt { method: Method, reason: String },

    /// Output-buffer allocation failed, or the backend reported memory
    /// exhaustion.
    #[error("{method} decoder ran out of memory")]
    ResourceExhausted { method: Method },

    /// The raw method selector holds a value outside the closed enumeration
    /// (anything other than 0 = gzip, 1 = bzip).
    #[error("unsupported decoding method {0} (expected 0 = gzip or 1 = bzip)")]
    UnsupportedMethod(u32),
}
