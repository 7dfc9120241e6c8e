// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! In-memory representation of one retrieved cluster object.

use anyhow::{Context, Result, anyhow};
use kube::api::DynamicObject;
use serde_json::Value;
use std::collections::BTreeMap;

use super::ResourceType;

/// One object retrieved from the cluster, ready for filtering and
/// normalization.
///
/// `fields` holds the full object tree as served by the API; the snapshot
/// normalizer mutates it in place. Identity and labels are extracted once
/// at construction so the filter predicates never have to walk the tree.
#[derive(Debug, Clone)]
pub struct ObjectRecord {
    api_version: String,
    kind: String,
    /// `None` for cluster-scoped objects.
    namespace: Option<String>,
    name: String,
    labels: BTreeMap<String, String>,
    fields: Value,
}

impl ObjectRecord {
    /// Build a record from a listed object.
    ///
    /// The API server omits `apiVersion`/`kind` on list items for some
    /// types; they are filled in from the resource type so every written
    /// manifest is self-describing.
    pub fn from_dynamic(object: &DynamicObject, resource: &ResourceType) -> Result<Self> {
        let name = object
            .metadata
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| anyhow!("object without a name"))?;

        // An empty namespace string means cluster-scoped.
        let namespace = object.metadata.namespace.clone().filter(|ns| !ns.is_empty());
        let labels = object.metadata.labels.clone().unwrap_or_default();

        let mut fields = serde_json::to_value(object)
            .with_context(|| format!("failed converting object '{name}'"))?;
        if let Value::Object(map) = &mut fields {
            map.entry("apiVersion")
                .or_insert_with(|| Value::String(resource.api_version().to_string()));
            map.entry("kind")
                .or_insert_with(|| Value::String(resource.kind().to_string()));
        }

        let api_version = resource.api_version().to_string();
        let kind = resource.kind().to_string();

        Ok(Self {
            api_version,
            kind,
            namespace,
            name,
            labels,
            fields,
        })
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning namespace, or `None` for cluster-scoped objects.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn is_namespaced(&self) -> bool {
        self.namespace.is_some()
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    /// The full object tree, as handed to the serializer.
    pub fn fields(&self) -> &Value {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Value {
        &mut self.fields
    }

    #[cfg(test)]
    pub(crate) fn for_tests(
        name: &str,
        namespace: Option<&str>,
        labels: &[(&str, &str)],
        fields: Value,
    ) -> Self {
        Self {
            api_version: "v1".to_string(),
            kind: "Test".to_string(),
            namespace: namespace.map(String::from),
            name: name.to_string(),
            labels: labels
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            fields,
        }
    }
}
