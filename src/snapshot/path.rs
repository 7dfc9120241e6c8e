// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Output path derivation.

use std::path::{Path, PathBuf};

use crate::kubernetes::ObjectRecord;

/// File extension for written manifests.
pub const MANIFEST_EXT: &str = "yaml";

/// Compute the output path for a record:
/// `<out_dir>/<scope>/<resource_segment>/<file>`.
///
/// Scope is `clusterscoped` for objects without a namespace and
/// `namespaced/<ns>` otherwise. The file name is the object name with `:`
/// replaced by `_` (Windows forbids colons in file names). A pure function
/// of its inputs; two distinct objects mapping to the same path overwrite
/// each other, which is the caller's concern.
pub fn compute_path(out_dir: &Path, resource_segment: &str, record: &ObjectRecord) -> PathBuf {
    let scope = match record.namespace() {
        Some(ns) => Path::new("namespaced").join(ns),
        None => PathBuf::from("clusterscoped"),
    };

    let file_name = format!("{}.{}", record.name().replace(':', "_"), MANIFEST_EXT);

    out_dir.join(scope).join(resource_segment).join(file_name)
}
