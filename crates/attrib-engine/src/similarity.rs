//! Perceptual-hash similarity scoring
//!
//! Perceptual hashes are 64-bit fingerprints carried as hexadecimal
//! strings. Similarity is derived from the Hamming distance between the two
//! decoded values: identical hashes score exactly 100, fully inverted
//! hashes score 0. Values are left unrounded here; rounding happens only at
//! final output.

use attrib_core::AttributionError;

/// Fixed bit width of a perceptual hash.
pub const PHASH_BITS: u32 = 64;

const MAX_HEX_DIGITS: usize = (PHASH_BITS / 4) as usize;

/// Decode a hexadecimal perceptual hash, left-zero-padded to 64 bits.
///
/// Empty strings, non-hex characters, and hashes wider than 64 bits fail
/// with `InvalidHashFormat`; the value is never truncated or wrapped.
pub fn decode_phash(hash: &str) -> Result<u64, AttributionError> {
    if hash.is_empty() {
        return Err(AttributionError::invalid_hash(hash, "empty string"));
    }
    if hash.len() > MAX_HEX_DIGITS {
        return Err(AttributionError::invalid_hash(
            hash,
            format!("{} hex digits exceed the 64-bit width", hash.len()),
        ));
    }
    u64::from_str_radix(hash, 16)
        .map_err(|e| AttributionError::invalid_hash(hash, e.to_string()))
}

/// Number of differing bit positions between two perceptual hashes.
pub fn hamming_distance(a: &str, b: &str) -> Result<u32, AttributionError> {
    let left = decode_phash(a)?;
    let right = decode_phash(b)?;
    Ok((left ^ right).count_ones())
}

/// Similarity percentage in `[0, 100]` between a reference hash and a
/// candidate: `(64 − distance) / 64 × 100`.
pub fn similarity(reference: &str, candidate: &str) -> Result<f64, AttributionError> {
    let distance = hamming_distance(reference, candidate)?;
    Ok(f64::from(PHASH_BITS - distance) / f64::from(PHASH_BITS) * 100.0)
}
