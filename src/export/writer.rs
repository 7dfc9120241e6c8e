// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! YAML manifest writing.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serialize a normalized object tree and write it, creating parent
/// directories as needed.
///
/// `serde_json::Value` objects are BTreeMap-backed, so keys serialize in
/// sorted order and repeated exports of an unchanged object are
/// byte-identical. An existing file at the path is overwritten.
pub fn write_manifest(path: &Path, fields: &Value) -> Result<()> {
    let yaml = serde_yaml::to_string(fields).context("failed serializing manifest")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating directory '{}'", parent.display()))?;
    }

    fs::write(path, yaml).with_context(|| format!("failed writing '{}'", path.display()))
}
