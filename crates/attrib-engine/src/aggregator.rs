//! Attribution aggregation
//!
//! Orchestrates the full computation: walk the lineage, score every
//! ancestor record against the finished asset's perceptual hash, group by
//! wallet, and normalize into contribution percentages.

use std::collections::HashMap;

use attrib_core::{AttributionError, ProvenanceManifest, STORY_REGISTRATION_LABEL};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::similarity::similarity;
use crate::walker::{walk, DEFAULT_MAX_DEPTH};

/// One contributor's share of the attribution credit.
///
/// `name` and `description` are left empty for the caller (the registration
/// workflow) to fill before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorContribution {
    pub address: String,
    #[serde(rename = "contributionPercent")]
    pub contribution_percent: f64,
    pub name: String,
    pub description: String,
}

impl CreatorContribution {
    fn new(address: impl Into<String>, contribution_percent: f64) -> Self {
        Self {
            address: address.into(),
            contribution_percent,
            name: String::new(),
            description: String::new(),
        }
    }
}

/// The attribution engine. Pure and stateless: `resolve` holds no state
/// across calls, so one engine may serve concurrent callers.
#[derive(Debug, Clone)]
pub struct AttributionEngine {
    assertion_label: String,
    max_depth: usize,
}

impl Default for AttributionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributionEngine {
    pub fn new() -> Self {
        Self {
            assertion_label: STORY_REGISTRATION_LABEL.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the reserved assertion label (ex: a different namespace).
    pub fn with_assertion_label(mut self, label: impl Into<String>) -> Self {
        self.assertion_label = label.into();
        self
    }

    /// Override the ingredient-nesting bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Resolve the contributor list for a finished asset's manifest.
    ///
    /// Returns the root creator first, then ancestor contributors in
    /// first-discovery order. A root without a contribution record or
    /// without a `pHash` yields an empty list (no attributable lineage).
    /// When any ancestor is attributable, all credit is distributed among
    /// ancestors and the root creator is assigned 0%; otherwise the root
    /// creator receives 100%.
    pub fn resolve(
        &self,
        manifest: &ProvenanceManifest,
    ) -> Result<Vec<CreatorContribution>, AttributionError> {
        let lineage = walk(manifest, &self.assertion_label, self.max_depth)?;

        let Some(root_record) = lineage.root.first() else {
            return Ok(Vec::new());
        };
        let Some(reference) = root_record.p_hash.as_deref() else {
            return Ok(Vec::new());
        };

        // Per-wallet similarity totals; repeat wallets sum, never average.
        // Discovery order is tracked separately so output stays stable.
        let mut totals: HashMap<String, f64> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for record in &lineage.ancestors {
            let (Some(wallet), Some(p_hash)) = (&record.wallet, &record.p_hash) else {
                continue;
            };
            let score = similarity(reference, p_hash)?;
            match totals.get_mut(wallet) {
                Some(total) => *total += score,
                None => {
                    totals.insert(wallet.clone(), score);
                    order.push(wallet.clone());
                }
            }
        }

        let total_similarity: f64 = totals.values().sum();
        debug!(
            wallets = order.len(),
            total_similarity, "ancestor scoring complete"
        );

        let root_address = root_record.wallet.clone().unwrap_or_default();
        if total_similarity <= 0.0 {
            // No attributable ancestors: the immediate creator keeps full
            // credit and zero-similarity ancestors do not register.
            return Ok(vec![CreatorContribution::new(root_address, 100.0)]);
        }

        let mut output = Vec::with_capacity(order.len() + 1);
        output.push(CreatorContribution::new(root_address, 0.0));
        for wallet in order {
            let accumulated = totals[&wallet];
            let percent = round2(accumulated / total_similarity * 100.0);
            output.push(CreatorContribution::new(wallet, percent));
        }
        Ok(output)
    }
}

/// Round to 2 decimal places; applied only at final output so intermediate
/// accumulation never compounds rounding error.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Resolve with the default engine configuration.
pub fn attribute(
    manifest: &ProvenanceManifest,
) -> Result<Vec<CreatorContribution>, AttributionError> {
    AttributionEngine::new().resolve(manifest)
}
