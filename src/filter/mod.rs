// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Include/exclude selection for the export pipeline.
//!
//! Two layers of filtering decide what ends up in the dump:
//! - the scope filter gates discovered API groups and resource types,
//! - the item filter gates individual objects by namespace scope and labels.
//!
//! All predicates are pure functions over an immutable [`FilterCriteria`];
//! an empty set or map means "unconstrained", and an exclude entry always
//! wins over a matching include entry.

mod item;
mod scope;

pub use item::accept_item;
pub use scope::{accept_group, accept_resource_type};

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, anyhow};

/// Selection criteria for one export run, built once from the CLI.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    /// API groups to export; empty for all.
    pub want_groups: BTreeSet<String>,
    /// API groups to skip.
    pub ignore_groups: BTreeSet<String>,
    /// Resource plural names to export; empty for all.
    pub want_resources: BTreeSet<String>,
    /// Resource plural names to skip.
    pub ignore_resources: BTreeSet<String>,
    /// Namespaces to export; empty for all.
    pub want_namespaces: BTreeSet<String>,
    /// Namespaces to skip.
    pub ignore_namespaces: BTreeSet<String>,
    /// Label pairs that must all be present on an object (subset match).
    pub want_labels: BTreeMap<String, String>,
    /// Label pairs any one of which excludes an object.
    pub ignore_labels: BTreeMap<String, String>,
    /// Export namespaced objects.
    pub namespaced: bool,
    /// Export cluster-scoped objects.
    pub cluster_scoped: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            want_groups: BTreeSet::new(),
            ignore_groups: BTreeSet::new(),
            want_resources: BTreeSet::new(),
            ignore_resources: BTreeSet::new(),
            want_namespaces: BTreeSet::new(),
            ignore_namespaces: BTreeSet::new(),
            want_labels: BTreeMap::new(),
            ignore_labels: BTreeMap::new(),
            namespaced: true,
            cluster_scoped: true,
        }
    }
}

/// Parse a comma-separated name list into a lowercased set.
///
/// Blank segments are dropped, so an unset flag and a flag set to `""` both
/// yield a genuinely empty (unconstrained) set.
pub fn parse_name_set(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|s| {
        s.split(',')
            .map(|part| part.trim().to_lowercase())
            .filter(|part| !part.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Parse a comma-separated list of `key=value` label pairs.
///
/// Label keys and values are case-sensitive in Kubernetes, so no case
/// folding happens here.
pub fn parse_label_pairs(raw: Option<&str>) -> Result<BTreeMap<String, String>> {
    let mut pairs = BTreeMap::new();
    let Some(raw) = raw else {
        return Ok(pairs);
    };

    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid label pair '{part}', expected key=value"))?;
        if key.is_empty() {
            return Err(anyhow!("invalid label pair '{part}', empty key"));
        }
        pairs.insert(key.to_string(), value.to_string());
    }

    Ok(pairs)
}
