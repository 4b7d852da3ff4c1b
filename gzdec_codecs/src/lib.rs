mod bzip;
mod gzip;

pub use bzip::BzipDecoder;
pub use gzip::GzipDecoder;

use gzdec_core::{InitError, Method, Session, StreamDecoder};

/// Resolve a decoder backend from the configured method.
///
/// Called when a stream starts, so the session can be initialized with the
/// right backend automatically from the host's `method` property.
pub fn decoder_for_method(method: Method) -> Result<Box<dyn StreamDecoder>, InitError> {
    match method {
        Method::Gzip => Ok(Box::new(GzipDecoder::new()?)),
        Method::Bzip => Ok(Box::new(BzipDecoder::new()?)),
    }
}

/// Start a decoding session for `method`: allocates the backend decoder
/// state and hands back the live [`Session`].
///
/// Fails with [`InitError`] if the backend cannot initialize; the session
/// must not be used further on failure (there is nothing to stop).
pub fn start_session(method: Method) -> Result<Session, InitError> {
    Ok(Session::new(decoder_for_method(method)?))
}
