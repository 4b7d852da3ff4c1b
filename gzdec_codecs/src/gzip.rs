use flate2::{Decompress, FlushDecompress, Status};

use gzdec_core::{DecodeError, InitError, Method, Step, StreamDecoder};

/// Default zlib window: 2^15 bytes. Matches the backend's maximum and what
/// every mainstream gzip encoder emits.
const WINDOW_BITS: u8 = 15;

/// Gzip decoder backend.
///
/// Wraps `flate2`'s stateful [`Decompress`] in gzip mode (header and CRC
/// trailer handled by the backend; this crate never reimplements the
/// framing). One fatal condition class: `flate2` folds corrupt data, bad
/// magic, and missing-dictionary failures into a single `DecompressError`.
pub struct GzipDecoder {
    raw: Decompress,
}

impl GzipDecoder {
    /// Initialize a gzip decompression state with no preset dictionary and
    /// the default window size.
    pub fn new() -> Result<Self, InitError> {
        Ok(Self {
            raw: Decompress::new_gzip(WINDOW_BITS),
        })
    }
}

impl StreamDecoder for GzipDecoder {
    fn method(&self) -> Method {
        Method::Gzip
    }

    fn name(&self) -> &'static str {
        "gzip"
    }

    fn step(&mut self, input: &[u8], output: &mut [u8]) -> Result<Step, DecodeError> {
        let in_before = self.raw.total_in();
        let out_before = self.raw.total_out();

        let status = self
            .raw
            .decompress(input, output, FlushDecompress::None)
            .map_err(|e| DecodeError::Corrupt {
                method: Method::Gzip,
                reason: e.to_string(),
            })?;

        Ok(Step {
            consumed: (self.raw.total_in() - in_before) as usize,
            produced: (self.raw.total_out() - out_before) as usize,
            end_of_stream: matches!(status, Status::StreamEnd),
        })
    }

    fn reset(&mut self) {
        self.raw = Decompress::new_gzip(WINDOW_BITS);
    }
}
