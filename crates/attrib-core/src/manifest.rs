//! Provenance manifest tree
//!
//! Typed view over the manifest document produced by the external signing
//! service. Field names follow the wire format (`assetID`, `pHash`); unknown
//! fields and unknown assertion labels pass through untouched.
use serde::{Deserialize, Serialize};

use crate::sanitize::strip_thumbnails;

/// Reserved assertion label carrying contributor identity and hash data.
pub const STORY_REGISTRATION_LABEL: &str = "com.kreon-labs.story-registration";

/// Root or nested node of the provenance tree.
///
/// A manifest with neither assertions nor ingredients is a valid leaf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvenanceManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Emitted by the signer (ex: "kreon-labs/1.0.0"); opaque here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_generator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertions: Option<Vec<Assertion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl ProvenanceManifest {
    /// Deserialize a raw manifest document, dropping embedded thumbnail
    /// blobs first. Raw manifests from the signer carry binary thumbnails
    /// at arbitrary nesting depths.
    pub fn from_json(mut value: serde_json::Value) -> serde_json::Result<Self> {
        strip_thumbnails(&mut value);
        serde_json::from_value(value)
    }

    /// The manifest's assertions carrying the given reserved label,
    /// in document order. Absent `assertions` yields an empty list.
    pub fn contribution_assertions(&self, label: &str) -> Vec<&Assertion> {
        match &self.assertions {
            Some(assertions) => assertions.iter().filter(|a| a.label == label).collect(),
            None => Vec::new(),
        }
    }
}

/// Reference from a manifest to a prior-state asset.
///
/// An ingredient without a nested manifest contributes no attribution data
/// and is not traversed further.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<Box<ProvenanceManifest>>,
}

/// Opaque-labelled metadata record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assertion {
    pub label: String,
    pub data: serde_json::Value,
}

impl Assertion {
    /// Decode the payload as a contribution record. Undecodable payloads
    /// count as disqualified records, not errors.
    pub fn contribution_record(&self) -> Option<ContributionRecord> {
        serde_json::from_value(self.data.clone()).ok()
    }
}

/// Payload of a reserved contribution assertion.
///
/// Missing `wallet` or `pHash` disqualifies the record from scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,
    #[serde(rename = "assetID", skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(rename = "pHash", skip_serializing_if = "Option::is_none")]
    pub p_hash: Option<String>,
}

impl ContributionRecord {
    /// A record is scorable when both identity and perceptual hash are
    /// present.
    pub fn is_scorable(&self) -> bool {
        self.wallet.is_some() && self.p_hash.is_some()
    }
}
