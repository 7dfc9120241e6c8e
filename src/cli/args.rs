// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::filter::{FilterCriteria, parse_label_pairs, parse_name_set};

#[derive(Parser, Debug)]
#[command(name = "kube-export")]
#[command(author, version, long_version = { let v: &'static str = crate::version::long_version().leak(); v })]
#[command(about = "Export live cluster objects as a reproducible YAML manifest tree")]
pub struct Args {
    /// Path to the kubeconfig, default lookup chain when omitted
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Context from the kubeconfig, empty for the current one
    #[arg(short, long)]
    pub context: Option<String>,

    /// Output directory for the dump
    #[arg(short, long, default_value = "dump", value_name = "DIR")]
    pub dir: PathBuf,

    /// Resources to export (e.g. 'configmaps,secrets'), empty for all
    #[arg(short, long, value_name = "LIST")]
    pub resources: Option<String>,

    /// Resources to ignore (e.g. 'events,endpoints')
    #[arg(long, value_name = "LIST")]
    pub ignore_resources: Option<String>,

    /// API groups to export (e.g. 'apps,batch'), empty for all
    #[arg(short, long, value_name = "LIST")]
    pub groups: Option<String>,

    /// API groups to ignore (e.g. 'metrics.k8s.io')
    #[arg(long, value_name = "LIST")]
    pub ignore_groups: Option<String>,

    /// Namespaces to export (e.g. 'ns1,ns2'), empty for all
    #[arg(short, long, value_name = "LIST")]
    pub namespaces: Option<String>,

    /// Namespaces to ignore (e.g. 'kube-system')
    #[arg(long, value_name = "LIST")]
    pub ignore_namespaces: Option<String>,

    /// Label pairs an object must all carry (e.g. 'app=web,tier=db')
    #[arg(short, long, value_name = "PAIRS")]
    pub labels: Option<String>,

    /// Label pairs any one of which excludes an object
    #[arg(long, value_name = "PAIRS")]
    pub ignore_labels: Option<String>,

    /// Export cluster-scoped objects
    #[arg(long, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
    pub clusterscoped: bool,

    /// Export namespaced objects
    #[arg(long, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
    pub namespaced: bool,

    /// Remove fields containing runtime state of the object
    #[arg(long, action = ArgAction::Set, default_value_t = true, value_name = "BOOL")]
    pub stateless: bool,

    /// Output the current progress
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the run's filter criteria from the parsed flags.
    pub fn criteria(&self) -> Result<FilterCriteria> {
        Ok(FilterCriteria {
            want_groups: parse_name_set(self.groups.as_deref()),
            ignore_groups: parse_name_set(self.ignore_groups.as_deref()),
            want_resources: parse_name_set(self.resources.as_deref()),
            ignore_resources: parse_name_set(self.ignore_resources.as_deref()),
            want_namespaces: parse_name_set(self.namespaces.as_deref()),
            ignore_namespaces: parse_name_set(self.ignore_namespaces.as_deref()),
            want_labels: parse_label_pairs(self.labels.as_deref())?,
            ignore_labels: parse_label_pairs(self.ignore_labels.as_deref())?,
            namespaced: self.namespaced,
            cluster_scoped: self.clusterscoped,
        })
    }
}
