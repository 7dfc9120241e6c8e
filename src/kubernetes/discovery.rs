// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Resource discovery for Kubernetes clusters.
//!
//! Enumerates every resource type served by the cluster (including CRDs)
//! at runtime using the Kubernetes discovery API. Unlike tools that only
//! look at each group's preferred version, the exporter walks every
//! version of every group: an object served under two versions is simply
//! written twice to the same path.

use anyhow::{Context, Result};
use kube::Client;
use kube::discovery::{ApiCapabilities, ApiResource, Discovery, Scope, verbs};

/// One exportable resource type within one API group/version.
#[derive(Debug, Clone)]
pub struct ResourceType {
    api_resource: ApiResource,
    capabilities: ApiCapabilities,
}

impl ResourceType {
    pub fn new(api_resource: ApiResource, capabilities: ApiCapabilities) -> Self {
        Self {
            api_resource,
            capabilities,
        }
    }

    /// The kube API resource definition, used to build dynamic clients.
    pub fn api_resource(&self) -> &ApiResource {
        &self.api_resource
    }

    /// API group; empty string for the core group.
    pub fn group(&self) -> &str {
        &self.api_resource.group
    }

    pub fn version(&self) -> &str {
        &self.api_resource.version
    }

    /// Full group/version string (e.g. `v1`, `apps/v1`).
    pub fn api_version(&self) -> &str {
        &self.api_resource.api_version
    }

    pub fn kind(&self) -> &str {
        &self.api_resource.kind
    }

    /// Plural resource name (e.g. `deployments`); subresources carry a
    /// `/` (e.g. `pods/status`).
    pub fn plural(&self) -> &str {
        &self.api_resource.plural
    }

    /// Whether the API server allows bulk listing of this type.
    pub fn supports_list(&self) -> bool {
        self.capabilities.supports_operation(verbs::LIST)
    }

    /// Check if this resource is namespace-scoped.
    pub fn is_namespaced(&self) -> bool {
        self.capabilities.scope == Scope::Namespaced
    }

    /// Directory name for this type in the output tree.
    ///
    /// Plural alone is not unique across groups (`pods` exists in both the
    /// core group and `metrics.k8s.io`), so the group is appended; the
    /// trailing dot is trimmed for the core group.
    pub fn resource_segment(&self) -> String {
        format!("{}.{}", self.plural(), self.group())
            .trim_end_matches('.')
            .to_string()
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.api_version(), self.plural())
    }
}

/// All resource types discovered under one API group, across versions.
#[derive(Debug, Clone)]
pub struct DiscoveredGroup {
    pub name: String,
    pub resources: Vec<ResourceType>,
}

/// Discover every resource type served by the cluster, grouped by API group.
///
/// Groups are returned sorted by name so that a run over an unchanged
/// cluster processes types in a stable order.
pub async fn discover(client: &Client) -> Result<Vec<DiscoveredGroup>> {
    let discovery = Discovery::new(client.clone())
        .run()
        .await
        .context("failed running API discovery")?;

    let mut groups = Vec::new();
    for group in discovery.groups() {
        let mut resources = Vec::new();
        for version in group.versions() {
            for (ar, caps) in group.versioned_resources(version) {
                resources.push(ResourceType::new(ar, caps));
            }
        }
        groups.push(DiscoveredGroup {
            name: group.name().to_string(),
            resources,
        });
    }

    groups.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(groups)
}
