//! Attrib Core: Manifest Data Model and Error Types
//!
//! Typed view over the provenance manifest tree produced by the external
//! C2PA signing service, plus the unified error model shared by the
//! attribution engine. Parsing is tolerant: absent fields and unknown
//! assertion labels are passed through, never rejected.

pub mod error;
pub mod manifest;
pub mod sanitize;

pub use error::AttributionError;
pub use manifest::{
    Assertion, ContributionRecord, Ingredient, ProvenanceManifest, STORY_REGISTRATION_LABEL,
};
pub use sanitize::strip_thumbnails;
