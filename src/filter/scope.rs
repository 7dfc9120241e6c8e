// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Scope filtering: which API groups and resource types are exported at all.

use crate::kubernetes::ResourceType;

use super::FilterCriteria;

/// Decide whether an API group should be exported.
///
/// An empty `want_groups` set accepts every group; a group listed in both
/// the want and ignore sets is rejected.
pub fn accept_group(group: &str, criteria: &FilterCriteria) -> bool {
    if !criteria.want_groups.is_empty() && !criteria.want_groups.contains(group) {
        return false;
    }
    !criteria.ignore_groups.contains(group)
}

/// Decide whether a discovered resource type should be exported.
///
/// Objects are fetched with bulk list calls, so a type that does not
/// support the list verb cannot be exported. Subresources (plural names
/// containing `/`, e.g. `pods/status`) are views of a parent object and
/// are never exported on their own.
pub fn accept_resource_type(resource: &ResourceType, criteria: &FilterCriteria) -> bool {
    if !resource.supports_list() {
        return false;
    }

    if resource.plural().contains('/') {
        return false;
    }

    if !criteria.want_resources.is_empty() && !criteria.want_resources.contains(resource.plural())
    {
        return false;
    }

    !criteria.ignore_resources.contains(resource.plural())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kubernetes::ResourceType;
    use kube::discovery::{ApiCapabilities, ApiResource, Scope};

    fn listable(plural: &str) -> ResourceType {
        resource_with_verbs(plural, &["get", "list"])
    }

    fn resource_with_verbs(plural: &str, verbs: &[&str]) -> ResourceType {
        let ar = ApiResource {
            group: "apps".to_string(),
            version: "v1".to_string(),
            api_version: "apps/v1".to_string(),
            kind: "Widget".to_string(),
            plural: plural.to_string(),
        };
        let caps = ApiCapabilities {
            scope: Scope::Namespaced,
            subresources: vec![],
            operations: verbs.iter().map(|v| v.to_string()).collect(),
        };
        ResourceType::new(ar, caps)
    }

    fn criteria_with<F>(build: F) -> FilterCriteria
    where
        F: FnOnce(&mut FilterCriteria),
    {
        let mut criteria = FilterCriteria::default();
        build(&mut criteria);
        criteria
    }

    #[test]
    fn test_accept_group_unconstrained() {
        let criteria = FilterCriteria::default();
        assert!(accept_group("", &criteria));
        assert!(accept_group("apps", &criteria));
        assert!(accept_group("metrics.k8s.io", &criteria));
    }

    #[test]
    fn test_accept_group_want_match() {
        let criteria = criteria_with(|c| {
            c.want_groups.insert("apps".to_string());
        });
        assert!(accept_group("apps", &criteria));
        assert!(!accept_group("batch", &criteria));
    }

    #[test]
    fn test_accept_group_ignore_match() {
        let criteria = criteria_with(|c| {
            c.ignore_groups.insert("metrics.k8s.io".to_string());
        });
        assert!(!accept_group("metrics.k8s.io", &criteria));
        assert!(accept_group("apps", &criteria));
    }

    #[test]
    fn test_accept_group_exclude_wins_over_include() {
        let criteria = criteria_with(|c| {
            c.want_groups.insert("apps".to_string());
            c.ignore_groups.insert("apps".to_string());
        });
        assert!(!accept_group("apps", &criteria));
    }

    #[test]
    fn test_accept_resource_type_unconstrained() {
        let criteria = FilterCriteria::default();
        assert!(accept_resource_type(&listable("widgets"), &criteria));
    }

    #[test]
    fn test_accept_resource_type_requires_list_verb() {
        let criteria = FilterCriteria::default();
        assert!(!accept_resource_type(
            &resource_with_verbs("widgets", &["get", "watch"]),
            &criteria
        ));
        assert!(!accept_resource_type(
            &resource_with_verbs("widgets", &[]),
            &criteria
        ));
    }

    #[test]
    fn test_accept_resource_type_rejects_subresources() {
        let criteria = FilterCriteria::default();
        assert!(!accept_resource_type(&listable("pods/status"), &criteria));
        assert!(!accept_resource_type(&listable("pods/log"), &criteria));
    }

    #[test]
    fn test_accept_resource_type_want_match() {
        let criteria = criteria_with(|c| {
            c.want_resources.insert("widgets".to_string());
        });
        assert!(accept_resource_type(&listable("widgets"), &criteria));
        assert!(!accept_resource_type(&listable("gadgets"), &criteria));
    }

    #[test]
    fn test_accept_resource_type_ignore_match() {
        let criteria = criteria_with(|c| {
            c.ignore_resources.insert("secrets".to_string());
        });
        assert!(!accept_resource_type(&listable("secrets"), &criteria));
        assert!(accept_resource_type(&listable("configmaps"), &criteria));
    }

    #[test]
    fn test_accept_resource_type_exclude_wins_over_include() {
        let criteria = criteria_with(|c| {
            c.want_resources.insert("widgets".to_string());
            c.ignore_resources.insert("widgets".to_string());
        });
        assert!(!accept_resource_type(&listable("widgets"), &criteria));
    }
}
