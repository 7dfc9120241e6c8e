// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Removal of volatile fields from object trees.

use serde_json::Value;

use crate::kubernetes::ObjectRecord;

use super::fields::{COMMON_FIELDS, NAMESPACED_FIELDS};

/// Strip volatile, cluster-generated fields from a record in place.
///
/// A no-op unless `stateless` is set. The namespaced-only table is applied
/// only to records that carry a namespace; a cluster-scoped object keeps
/// fields like `spec.volumeName` untouched. Applying this twice yields the
/// same tree as applying it once.
pub fn normalize(record: &mut ObjectRecord, stateless: bool) {
    if !stateless {
        return;
    }

    let namespaced = record.is_namespaced();
    let tree = record.fields_mut();

    for path in COMMON_FIELDS {
        remove_field(tree, path);
    }
    if namespaced {
        for path in NAMESPACED_FIELDS {
            remove_field(tree, path);
        }
    }
}

/// Remove the value at `path` from a tree, one key per segment.
///
/// Missing intermediate keys, or intermediate nodes that are not mappings
/// (a sequence or scalar occupying the slot), silently end the walk and
/// leave the tree unmodified. Field presence varies by resource kind and
/// API version, so an absent path is the normal case, not an error.
pub fn remove_field(tree: &mut Value, path: &[&str]) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut node = tree;
    for segment in parents {
        // Value::get_mut yields None for missing keys and non-object nodes.
        match node.get_mut(*segment) {
            Some(next) => node = next,
            None => return,
        }
    }

    if let Value::Object(map) = node {
        map.remove(*last);
    }
}
