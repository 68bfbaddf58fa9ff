//! Lineage traversal
//!
//! Collects contribution records from the root manifest and, recursively,
//! from every ingredient's nested manifest. Manifests are assumed to form a
//! tree; the walker does not deduplicate contributor identities (that
//! happens downstream in the aggregator).

use attrib_core::{AttributionError, ContributionRecord, Ingredient, ProvenanceManifest};
use tracing::debug;

/// Default bound on ingredient nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Contribution records discovered on one manifest tree.
#[derive(Debug, Clone, Default)]
pub struct Lineage {
    /// Records asserted on the root manifest itself (0 or 1 expected).
    pub root: Vec<ContributionRecord>,
    /// Records from every ancestor manifest, in pre-order discovery order.
    pub ancestors: Vec<ContributionRecord>,
}

/// Walk the manifest tree depth-first, collecting contribution records for
/// the given assertion label.
///
/// Ingredients without a nested manifest are skipped. Recursion carries an
/// explicit depth counter; nesting past `max_depth` fails with
/// `LineageTooDeep` rather than exhausting the stack on adversarial input.
pub fn walk(
    manifest: &ProvenanceManifest,
    label: &str,
    max_depth: usize,
) -> Result<Lineage, AttributionError> {
    let mut lineage = Lineage {
        root: collect_records(manifest, label),
        ancestors: Vec::new(),
    };

    if let Some(ingredients) = &manifest.ingredients {
        walk_ingredients(ingredients, label, 1, max_depth, &mut lineage.ancestors)?;
    }

    debug!(
        root_records = lineage.root.len(),
        ancestor_records = lineage.ancestors.len(),
        "lineage walk complete"
    );
    Ok(lineage)
}

fn walk_ingredients(
    ingredients: &[Ingredient],
    label: &str,
    depth: usize,
    max_depth: usize,
    acc: &mut Vec<ContributionRecord>,
) -> Result<(), AttributionError> {
    if depth > max_depth {
        return Err(AttributionError::LineageTooDeep { max_depth });
    }

    for ingredient in ingredients {
        let Some(manifest) = &ingredient.manifest else {
            continue;
        };

        acc.extend(collect_records(manifest, label));

        if let Some(nested) = &manifest.ingredients {
            walk_ingredients(nested, label, depth + 1, max_depth, acc)?;
        }
    }
    Ok(())
}

fn collect_records(manifest: &ProvenanceManifest, label: &str) -> Vec<ContributionRecord> {
    manifest
        .contribution_assertions(label)
        .iter()
        .filter_map(|a| a.contribution_record())
        .collect()
}
