// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Progress reporting for the export pass.
//!
//! A spinner shows the resource type currently being processed and a
//! running manifest count. In verbose mode the spinner is suppressed and
//! debug log lines carry the same information instead.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Create a spinner with consistent styling
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Progress state for one export run.
pub struct ExportProgress {
    bar: Option<ProgressBar>,
    manifests: AtomicUsize,
}

impl ExportProgress {
    pub fn new(show_spinner: bool) -> Self {
        Self {
            bar: show_spinner.then(|| create_spinner("discovering resources...")),
            manifests: AtomicUsize::new(0),
        }
    }

    /// Report the resource type currently being listed.
    pub fn processing(&self, resource: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{} ({} manifests)", resource, self.written()));
        }
    }

    /// Count one written manifest.
    pub fn wrote_manifest(&self) {
        self.manifests.fetch_add(1, Ordering::SeqCst);
    }

    /// Manifests written so far.
    pub fn written(&self) -> usize {
        self.manifests.load(Ordering::SeqCst)
    }

    /// Remove the spinner from the terminal.
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
