// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Snapshot normalization.
//!
//! Strips volatile, cluster-generated fields from retrieved objects so
//! that two exports of an unchanged object are byte-identical, and
//! derives the deterministic output path each manifest is written to.

mod fields;
mod normalize;
mod path;

pub use normalize::{normalize, remove_field};
pub use path::{MANIFEST_EXT, compute_path};
