// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Field tables for stateless normalization.
//!
//! Each entry is a path through the object tree, one key per segment.
//! Annotation keys contain dots (`kubernetes.io/config.seen`), so paths
//! are stored pre-split instead of as dotted strings.
//!
//! The tables are versioned with the tool and not user-configurable.

/// Fields stripped from every object, cluster-scoped or namespaced.
pub(crate) const COMMON_FIELDS: &[&[&str]] = &[
    &["metadata", "annotations", "control-plane.alpha.kubernetes.io/leader"],
    &["metadata", "annotations", "kubectl.kubernetes.io/last-applied-configuration"],
    &["metadata", "creationTimestamp"],
    &["metadata", "finalizers"],
    &["metadata", "generation"],
    &["metadata", "managedFields"],
    &["metadata", "resourceVersion"],
    &["metadata", "selfLink"],
    &["metadata", "ownerReferences"],
    &["metadata", "uid"],
    &["status"],
];

/// Fields stripped only from namespaced objects.
pub(crate) const NAMESPACED_FIELDS: &[&[&str]] = &[
    &["metadata", "annotations", "autoscaling.alpha.kubernetes.io/conditions"],
    &["metadata", "annotations", "autoscaling.alpha.kubernetes.io/current-metrics"],
    &["metadata", "annotations", "deployment.kubernetes.io/revision"],
    &["metadata", "annotations", "kubernetes.io/config.seen"],
    &["metadata", "annotations", "kubernetes.io/service-account.uid"],
    &["metadata", "annotations", "pv.kubernetes.io/bind-completed"],
    &["metadata", "annotations", "pv.kubernetes.io/bound-by-controller"],
    &["clusterIP"],
    &["spec", "progressDeadlineSeconds"],
    &["spec", "revisionHistoryLimit"],
    &["spec", "template", "metadata", "annotations", "kubectl.kubernetes.io/restartedAt"],
    &["spec", "template", "metadata", "creationTimestamp"],
    &["spec", "volumeName"],
    &["spec", "volumeMode"],
];
