use bzip2::{Decompress, Status};

use gzdec_core::{DecodeError, InitError, Method, Step, StreamDecoder};

/// Bzip2 decoder backend.
///
/// Wraps the `bzip2` crate's stateful [`Decompress`] with the default
/// parameters (no small-memory mode, no verbosity). Data, magic, parameter,
/// and sequence errors are all fatal and map to [`DecodeError::Corrupt`];
/// backend-reported memory exhaustion maps to
/// [`DecodeError::ResourceExhausted`].
pub struct BzipDecoder {
    raw: Decompress,
}

impl BzipDecoder {
    /// Initialize a bzip2 decompression state.
    pub fn new() -> Result<Self, InitError> {
        Ok(Self {
            raw: Decompress::new(false),
        })
    }
}

impl StreamDecoder for BzipDecoder {
    fn method(&self) -> Method {
        Method::Bzip
    }

    fn name(&self) -> &'static str {
        "bzip"
    }

    fn step(&mut self, input: &[u8], output: &mut [u8]) -> Result<Step, DecodeError> {
        let in_before = self.raw.total_in();
        let out_before = self.raw.total_out();

        let status = self
            .raw
            .decompress(input, output)
            .map_err(|e| DecodeError::Corrupt {
                method: Method::Bzip,
                reason: e.to_string(),
            })?;

        if let Status::MemNeeded = status {
            return Err(DecodeError::ResourceExhausted {
                method: Method::Bzip,
            });
        }

        Ok(Step {
            consumed: (self.raw.total_in() - in_before) as usize,
            produced: (self.raw.total_out() - out_before) as usize,
            end_of_stream: matches!(status, Status::StreamEnd),
        })
    }

    fn reset(&mut self) {
        // libbz2 has no in-place reset; tear down and reinitialize.
        self.raw = Decompress::new(false);
    }
}
