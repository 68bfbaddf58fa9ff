//! Attrib Engine: Provenance Lineage Resolver and Creator Attribution
//!
//! Given the provenance manifest of a finished asset, this crate determines
//! who contributed to it and how much: it walks the embedded
//! edit/ingredient history, scores each ancestor's perceptual hash against
//! the finished asset's, and normalizes the scores into per-contributor
//! percentages.
//!
//! # Architecture
//!
//! ```text
//! ProvenanceManifest → Lineage Walker → Similarity Scorer → Aggregator
//!                           ↓                  ↓                ↓
//!                    ancestor records    score vs root    percentages
//! ```
//!
//! # Example
//!
//! ```
//! use attrib_core::{ProvenanceManifest, STORY_REGISTRATION_LABEL};
//! use attrib_engine::attribute;
//! use serde_json::json;
//!
//! let manifest = ProvenanceManifest::from_json(json!({
//!     "title": "final.png",
//!     "assertions": [{
//!         "label": STORY_REGISTRATION_LABEL,
//!         "data": { "wallet": "0xroot", "pHash": "ffffffffffffffff" }
//!     }],
//!     "ingredients": [{
//!         "manifest": {
//!             "assertions": [{
//!                 "label": STORY_REGISTRATION_LABEL,
//!                 "data": { "wallet": "0xbase", "pHash": "fffffffffffffffe" }
//!             }]
//!         }
//!     }]
//! })).unwrap();
//!
//! let creators = attribute(&manifest).unwrap();
//! assert_eq!(creators[0].address, "0xroot");
//! assert_eq!(creators[0].contribution_percent, 0.0);
//! assert_eq!(creators[1].address, "0xbase");
//! assert_eq!(creators[1].contribution_percent, 100.0);
//! ```
//!
//! The computation is pure: no I/O, no shared state, one manifest tree in,
//! one owned contributor list out. Malformed hashes and over-deep lineages
//! abort with an error rather than degrading the normalization silently.

pub mod aggregator;
pub mod similarity;
pub mod walker;

pub use aggregator::{attribute, AttributionEngine, CreatorContribution};
pub use similarity::{decode_phash, hamming_distance, similarity, PHASH_BITS};
pub use walker::{walk, Lineage, DEFAULT_MAX_DEPTH};

pub use attrib_core::AttributionError;
