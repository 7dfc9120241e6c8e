// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! The export pass.
//!
//! Walks discovered API groups through the scope filter, lists surviving
//! resource types, gates each object through the item filter, normalizes
//! it and hands it to the writer. A failing resource type or object is
//! logged and skipped; it never aborts the run.

mod writer;

use anyhow::Result;
use kube::Client;
use kube::api::DynamicObject;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::filter::{FilterCriteria, accept_group, accept_item, accept_resource_type};
use crate::kubernetes::{self, ObjectRecord, ResourceType};
use crate::progress::ExportProgress;
use crate::snapshot::{compute_path, normalize};

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportSummary {
    /// Manifests written to disk.
    pub written: usize,
    /// Resource types or objects skipped because of an error.
    pub failed: usize,
    /// Resource types that passed the scope filter.
    pub resource_types: usize,
}

/// One export run over a single cluster.
pub struct Exporter {
    client: Client,
    criteria: FilterCriteria,
    out_dir: PathBuf,
    stateless: bool,
    progress: ExportProgress,
}

impl Exporter {
    pub fn new(
        client: Client,
        criteria: FilterCriteria,
        out_dir: PathBuf,
        stateless: bool,
        show_spinner: bool,
    ) -> Self {
        Self {
            client,
            criteria,
            out_dir,
            stateless,
            progress: ExportProgress::new(show_spinner),
        }
    }

    /// Run the full pass: discover, filter, normalize, write.
    pub async fn run(&self) -> Result<ExportSummary> {
        let groups = kubernetes::discover(&self.client).await?;
        let mut summary = ExportSummary::default();

        for group in &groups {
            if !accept_group(&group.name, &self.criteria) {
                debug!(group = %group.name, "group filtered out");
                continue;
            }

            for resource in &group.resources {
                if !accept_resource_type(resource, &self.criteria) {
                    continue;
                }

                summary.resource_types += 1;
                self.progress.processing(&resource.to_string());
                debug!(resource = %resource, "processing");

                let objects = match kubernetes::list_all(&self.client, resource).await {
                    Ok(objects) => objects,
                    Err(err) => {
                        warn!(resource = %resource, error = %err, "failed listing, skipping resource type");
                        summary.failed += 1;
                        continue;
                    }
                };

                for object in &objects {
                    match export_object(
                        object,
                        resource,
                        &self.criteria,
                        &self.out_dir,
                        self.stateless,
                    ) {
                        Ok(Some(_)) => {
                            summary.written += 1;
                            self.progress.wrote_manifest();
                        }
                        Ok(None) => {}
                        Err(err) => {
                            warn!(resource = %resource, error = %err, "failed exporting object, skipping");
                            summary.failed += 1;
                        }
                    }
                }
            }
        }

        self.progress.finish();
        Ok(summary)
    }
}

/// Export a single listed object.
///
/// Returns the written path, or `None` when the item filter rejected the
/// object.
fn export_object(
    object: &DynamicObject,
    resource: &ResourceType,
    criteria: &FilterCriteria,
    out_dir: &Path,
    stateless: bool,
) -> Result<Option<PathBuf>> {
    let mut record = ObjectRecord::from_dynamic(object, resource)?;

    if !accept_item(&record, criteria) {
        return Ok(None);
    }

    normalize(&mut record, stateless);

    let path = compute_path(out_dir, &resource.resource_segment(), &record);
    writer::write_manifest(&path, record.fields())?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::discovery::{ApiCapabilities, ApiResource, Scope, verbs};
    use tempfile::TempDir;

    fn resource(group: &str, version: &str, kind: &str, plural: &str) -> ResourceType {
        let api_version = if group.is_empty() {
            version.to_string()
        } else {
            format!("{group}/{version}")
        };
        ResourceType::new(
            ApiResource {
                group: group.to_string(),
                version: version.to_string(),
                api_version,
                kind: kind.to_string(),
                plural: plural.to_string(),
            },
            ApiCapabilities {
                scope: Scope::Namespaced,
                subresources: vec![],
                operations: vec![verbs::LIST.to_string()],
            },
        )
    }

    fn object(json: serde_json::Value) -> DynamicObject {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_export_cluster_scoped_object() {
        let dir = TempDir::new().unwrap();
        let svc = object(serde_json::json!({
            "metadata": {"name": "svc1"}
        }));

        let path = export_object(
            &svc,
            &resource("", "v1", "Service", "services"),
            &FilterCriteria::default(),
            dir.path(),
            true,
        )
        .unwrap()
        .expect("object should be exported");

        assert_eq!(path, dir.path().join("clusterscoped/services/svc1.yaml"));
        assert!(path.is_file());
    }

    #[test]
    fn test_export_namespaced_object_with_colon_name() {
        let dir = TempDir::new().unwrap();
        let role = object(serde_json::json!({
            "metadata": {"name": "foo:bar", "namespace": "ns1"}
        }));

        let path = export_object(
            &role,
            &resource("rbac.authorization.k8s.io", "v1", "Role", "roles"),
            &FilterCriteria::default(),
            dir.path(),
            true,
        )
        .unwrap()
        .expect("object should be exported");

        assert_eq!(
            path,
            dir.path()
                .join("namespaced/ns1/roles.rbac.authorization.k8s.io/foo_bar.yaml")
        );
        assert!(path.is_file());
    }

    #[test]
    fn test_export_filtered_object_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let pod = object(serde_json::json!({
            "metadata": {"name": "web-1", "namespace": "ns2"}
        }));

        let mut criteria = FilterCriteria::default();
        criteria.want_namespaces.insert("ns1".to_string());

        let result = export_object(
            &pod,
            &resource("", "v1", "Pod", "pods"),
            &criteria,
            dir.path(),
            true,
        )
        .unwrap();

        assert!(result.is_none());
        assert!(!dir.path().join("namespaced").exists());
    }

    #[test]
    fn test_export_stateless_strips_state() {
        let dir = TempDir::new().unwrap();
        let pvc = object(serde_json::json!({
            "metadata": {
                "name": "data",
                "namespace": "ns1",
                "uid": "123",
                "resourceVersion": "42"
            },
            "spec": {"volumeName": "pvc-0001", "storageClassName": "standard"},
            "status": {"phase": "Bound"}
        }));

        let path = export_object(
            &pvc,
            &resource("", "v1", "PersistentVolumeClaim", "persistentvolumeclaims"),
            &FilterCriteria::default(),
            dir.path(),
            true,
        )
        .unwrap()
        .expect("object should be exported");

        let yaml = std::fs::read_to_string(&path).unwrap();
        assert!(!yaml.contains("volumeName"));
        assert!(!yaml.contains("resourceVersion"));
        assert!(!yaml.contains("status"));
        assert!(yaml.contains("storageClassName: standard"));
    }

    #[test]
    fn test_export_full_fidelity_keeps_state() {
        let dir = TempDir::new().unwrap();
        let pvc = object(serde_json::json!({
            "metadata": {"name": "data", "namespace": "ns1", "uid": "123"},
            "status": {"phase": "Bound"}
        }));

        let path = export_object(
            &pvc,
            &resource("", "v1", "PersistentVolumeClaim", "persistentvolumeclaims"),
            &FilterCriteria::default(),
            dir.path(),
            false,
        )
        .unwrap()
        .expect("object should be exported");

        let yaml = std::fs::read_to_string(&path).unwrap();
        assert!(yaml.contains("uid:"));
        assert!(yaml.contains("phase: Bound"));
    }
}
