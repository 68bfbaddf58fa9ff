//! Unified Error Model
use thiserror::Error;

/// Errors surfaced by the attribution engine.
///
/// Both variants abort the whole computation: a single malformed hash would
/// silently corrupt the percentage normalization if skipped, and an
/// over-deep lineage is a resource-protection fault rather than a data
/// error. The normal "no attributable lineage" outcome is an empty result,
/// not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributionError {
    #[error("HASH/{hash:?} is not a valid 64-bit perceptual hash: {reason}")]
    InvalidHashFormat { hash: String, reason: String },

    #[error("LINEAGE/ingredient nesting exceeds {max_depth} levels")]
    LineageTooDeep { max_depth: usize },
}

impl AttributionError {
    pub fn invalid_hash(hash: impl Into<String>, reason: impl Into<String>) -> Self {
        AttributionError::InvalidHashFormat {
            hash: hash.into(),
            reason: reason.into(),
        }
    }
}
