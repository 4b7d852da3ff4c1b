use crate::codec::StreamDecoder;
use crate::error::DecodeError;

/// Decode one complete compressed buffer against a live decoder, producing a
/// single contiguous output buffer.
///
/// # Algorithm
/// The decompressed size is unknown in advance, so the output buffer grows
/// incrementally: each iteration hands the backend a `quantum`-byte output
/// window at the current write offset, then advances the offset by the full
/// `quantum`. The loop continues only while the backend filled the entire
/// window (more output may be pending) and the stream has not ended, so the
/// logical length always equals the final window start plus the final
/// partial produce — windows never leave holes in the returned bytes.
///
/// `block_size == 0` selects the input buffer's size as the quantum.
///
/// # Errors
/// - [`DecodeError::Corrupt`] if the backend rejects the data, or if the
///   input ends before the backend reaches end-of-stream (truncated input —
///   never a silently truncated success). Empty input is a degenerate
///   truncated stream and also fails with `Corrupt`, for every block size.
/// - [`DecodeError::ResourceExhausted`] if the initial or grown output
///   allocation fails.
///
/// On success the backend is reset, so a persistent session is immediately
/// ready for the next complete buffer.
pub fn decode_block(
    decoder: &mut dyn StreamDecoder,
    input: &[u8],
    block_size: u32,
) -> Result<Vec<u8>, DecodeError> {
    let quantum = if block_size == 0 {
        input.len()
    } else {
        block_size as usize
    };
    if quantum == 0 {
        // Empty input with block_size 0: no output window can be built, so
        // the backend cannot even be asked. Degenerate truncated stream.
        return Err(DecodeError::Corrupt {
            method: decoder.method(),
            reason: "empty input".into(),
        });
    }

    let mut out: Vec<u8> = Vec::new();
    grow(&mut out, quantum, decoder)?;

    let mut pos = 0; // input cursor
    let mut offset = 0; // window start of the next step
    let mut len = 0; // logical bytes produced so far
    loop {
        let step = decoder.step(&input[pos..], &mut out[offset..offset + quantum])?;
        pos += step.consumed;
        len += step.produced;
        offset += quantum;
        if step.end_of_stream {
            break;
        }
        if step.produced < quantum {
            // Window not exhausted and no stream end: the backend has run
            // out of input before the stream completed.
            return Err(DecodeError::Corrupt {
                method: decoder.method(),
                reason: format!("stream truncated after {} decoded bytes", len),
            });
        }
        grow(&mut out, quantum, decoder)?;
    }

    decoder.reset();
    out.truncate(len);
    Ok(out)
}

/// Extend `out` by `quantum` zeroed bytes, mapping allocation failure to
/// [`DecodeError::ResourceExhausted`].
fn grow(
    out: &mut Vec<u8>,
    quantum: usize,
    decoder: &dyn StreamDecoder,
) -> Result<(), DecodeError> {
    out.try_reserve_exact(quantum)
        .map_err(|_| DecodeError::ResourceExhausted {
            method: decoder.method(),
        })?;
    out.resize(out.len() + quantum, 0);
    Ok(())
}
