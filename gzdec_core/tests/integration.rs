/// Integration tests for the decode engine, driven through the bundled
/// backends exactly the way a host would drive them:
///
///  1. Compress known plaintext with the reference encoders.
///  2. Start a session for the matching method.
///  3. Decode the complete compressed buffer in one call.
///  4. Assert the decoded bytes match the plaintext byte-for-byte,
///     independent of the configured block size.
use gzdec_codecs::start_session;
use gzdec_core::{DecodeError, Method};

use std::io::Write;

use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;

/// Generate `len` deterministic bytes using a simple LCG.
fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (rng >> 56) as u8
        })
        .collect()
}

/// Generate `len` highly compressible bytes (repeating pattern).
fn compressible_bytes(len: usize) -> Vec<u8> {
    let pattern = b"the quick brown fox jumps over the lazy dog. ";
    (0..len).map(|i| pattern[i % pattern.len()]).collect()
}

// ── helpers ────────────────────────────────────────────────────────────────

fn gzip_compress(data: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), flate2::Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

fn bzip_compress(data: &[u8]) -> Vec<u8> {
    let mut enc = BzEncoder::new(Vec::new(), bzip2::Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

fn compress(method: Method, data: &[u8]) -> Vec<u8> {
    match method {
        Method::Gzip => gzip_compress(data),
        Method::Bzip => bzip_compress(data),
    }
}

fn decode(method: Method, input: &[u8], block_size: u32) -> Result<Vec<u8>, DecodeError> {
    let mut session = start_session(method).unwrap();
    let out = session.decode(input, block_size);
    session.stop();
    out
}

// ── tests ──────────────────────────────────────────────────────────────────

/// The canonical scenario: gzip-compress "hello world" repeated 1000 times
/// and decode it with a 16-byte block size. The engine must grow the output
/// buffer from 16 bytes up to the full 11000-byte plaintext.
#[test]
fn test_gzip_small_block_size_reproduces_plaintext() {
    let plaintext: Vec<u8> = b"hello world".repeat(1000);
    assert_eq!(plaintext.len(), 11000);

    let compressed = gzip_compress(&plaintext);
    let raw = decode(Method::Gzip, &compressed, 16).unwrap();
    assert_eq!(raw, plaintext);
}

/// Decoding must produce identical bytes at every block size, including
/// 1-byte windows, sizes that don't divide the output, sizes larger than
/// the whole output, and the 0 sentinel ("use the input buffer's size").
#[test]
fn test_block_size_invariance_gzip() {
    let plaintext = compressible_bytes(50_000);
    let compressed = gzip_compress(&plaintext);

    for block_size in [1u32, 7, 4096, compressed.len() as u32, 1 << 20, 0] {
        let raw = decode(Method::Gzip, &compressed, block_size).unwrap();
        assert_eq!(
            raw, plaintext,
            "gzip output differs at block size {block_size}"
        );
    }
}

#[test]
fn test_block_size_invariance_bzip() {
    let plaintext = compressible_bytes(50_000);
    let compressed = bzip_compress(&plaintext);

    for block_size in [1u32, 7, 4096, compressed.len() as u32, 1 << 20, 0] {
        let raw = decode(Method::Bzip, &compressed, block_size).unwrap();
        assert_eq!(
            raw, plaintext,
            "bzip output differs at block size {block_size}"
        );
    }
}

/// High-entropy data round-trips too (output barely larger than input, so
/// the growth loop takes a different path than with compressible data).
#[test]
fn test_roundtrip_incompressible_data() {
    let plaintext = pseudo_random_bytes(100_000, 0xDEAD_BEEF);
    for method in [Method::Gzip, Method::Bzip] {
        let compressed = compress(method, &plaintext);
        let raw = decode(method, &compressed, 4096).unwrap();
        assert_eq!(raw, plaintext, "{method} round-trip failed");
    }
}

/// Two independent sessions over the same input yield byte-identical output.
#[test]
fn test_independent_sessions_agree() {
    let plaintext = compressible_bytes(10_000);
    for method in [Method::Gzip, Method::Bzip] {
        let compressed = compress(method, &plaintext);
        let first = decode(method, &compressed, 512).unwrap();
        let second = decode(method, &compressed, 512).unwrap();
        assert_eq!(first, second);
    }
}

/// A session persists across decode calls: after one complete stream is
/// decoded the backend is re-primed, so a second complete buffer decodes on
/// the same session.
#[test]
fn test_session_decodes_consecutive_buffers() {
    for method in [Method::Gzip, Method::Bzip] {
        let mut session = start_session(method).unwrap();
        assert_eq!(session.method(), method);

        let a = compress(method, b"first stream");
        let b = compress(method, b"second stream, a bit longer than the first");

        assert_eq!(session.decode(&a, 8).unwrap(), b"first stream");
        assert_eq!(
            session.decode(&b, 8).unwrap(),
            b"second stream, a bit longer than the first".as_slice()
        );
        session.stop();
    }
}

/// Removing trailing bytes from a valid stream must fail with `Corrupt`,
/// never succeed with silently truncated output.
#[test]
fn test_truncated_stream_is_corrupt() {
    let plaintext = compressible_bytes(20_000);
    for method in [Method::Gzip, Method::Bzip] {
        let compressed = compress(method, &plaintext);

        // Cut mid-stream and cut just the trailer.
        for keep in [compressed.len() / 2, compressed.len() - 4] {
            let err = decode(method, &compressed[..keep], 4096).unwrap_err();
            assert!(
                matches!(err, DecodeError::Corrupt { .. }),
                "{method} truncated to {keep} bytes returned {err:?}"
            );
        }
    }
}

/// Bytes that were never compressed at all are rejected as corrupt.
#[test]
fn test_garbage_input_is_corrupt() {
    let garbage = pseudo_random_bytes(1024, 42);
    for method in [Method::Gzip, Method::Bzip] {
        let err = decode(method, &garbage, 256).unwrap_err();
        assert!(matches!(err, DecodeError::Corrupt { .. }));
    }
}

/// A compressed empty payload is a complete, valid stream and decodes to an
/// empty buffer. Pinned behavior.
#[test]
fn test_compressed_empty_payload_decodes_to_empty() {
    for method in [Method::Gzip, Method::Bzip] {
        let compressed = compress(method, b"");
        assert!(!compressed.is_empty());
        let raw = decode(method, &compressed, 64).unwrap();
        assert!(raw.is_empty(), "{method} should decode to empty output");
    }
}

/// A zero-length input buffer is a degenerate truncated stream: it must
/// never panic and always fails with `Corrupt`, for every block size
/// including the 0 sentinel. Pinned behavior.
#[test]
fn test_empty_input_is_corrupt() {
    for method in [Method::Gzip, Method::Bzip] {
        for block_size in [0u32, 16] {
            let err = decode(method, &[], block_size).unwrap_err();
            assert!(
                matches!(err, DecodeError::Corrupt { .. }),
                "{method} with block size {block_size} returned {err:?}"
            );
        }
    }
}

/// Feeding a gzip stream to the bzip backend (and vice versa) fails cleanly.
#[test]
fn test_method_mismatch_is_corrupt() {
    let plaintext = compressible_bytes(1_000);
    let gz = gzip_compress(&plaintext);
    let bz = bzip_compress(&plaintext);

    assert!(matches!(
        decode(Method::Bzip, &gz, 256),
        Err(DecodeError::Corrupt { .. })
    ));
    assert!(matches!(
        decode(Method::Gzip, &bz, 256),
        Err(DecodeError::Corrupt { .. })
    ));
}

/// Raw integer selectors outside the closed enumeration are rejected at the
/// conversion boundary.
#[test]
fn test_unsupported_method_selector() {
    assert_eq!(Method::try_from(0).unwrap(), Method::Gzip);
    assert_eq!(Method::try_from(1).unwrap(), Method::Bzip);
    let err = Method::try_from(2).unwrap_err();
    assert!(matches!(err, DecodeError::UnsupportedMethod(2)));
}
