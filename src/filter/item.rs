// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Item filtering: which individual objects of an accepted resource type
//! are exported.

use crate::kubernetes::ObjectRecord;

use super::FilterCriteria;

/// Decide whether a single object should be exported.
///
/// Namespace checks treat a cluster-scoped object as having the empty
/// namespace, so a non-empty `want_namespaces` set also rejects
/// cluster-scoped objects. Label matching is a subset test: every wanted
/// pair must be present, and a single matching ignored pair is enough to
/// exclude the object.
pub fn accept_item(record: &ObjectRecord, criteria: &FilterCriteria) -> bool {
    if record.is_namespaced() && !criteria.namespaced {
        return false;
    }
    if !record.is_namespaced() && !criteria.cluster_scoped {
        return false;
    }

    let namespace = record.namespace().unwrap_or("");
    if !criteria.want_namespaces.is_empty() && !criteria.want_namespaces.contains(namespace) {
        return false;
    }
    if criteria.ignore_namespaces.contains(namespace) {
        return false;
    }

    for (key, value) in &criteria.want_labels {
        if record.labels().get(key) != Some(value) {
            return false;
        }
    }
    for (key, value) in &criteria.ignore_labels {
        if record.labels().get(key) == Some(value) {
            return false;
        }
    }

    true
}
