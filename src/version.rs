// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Build-time metadata.

use std::fmt;

/// Immutable build metadata, resolved at compile time.
///
/// Commit and date are injected by the release build through the
/// `KUBE_EXPORT_COMMIT` and `KUBE_EXPORT_BUILD_DATE` environment
/// variables; a plain `cargo build` reports them as "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub date: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: match option_env!("KUBE_EXPORT_COMMIT") {
                Some(commit) => commit,
                None => "unknown",
            },
            date: match option_env!("KUBE_EXPORT_BUILD_DATE") {
                Some(date) => date,
                None => "unknown",
            },
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (commit {}, built {})",
            self.version, self.commit, self.date
        )
    }
}

/// Version string rendered into `--version` output.
pub fn long_version() -> String {
    BuildInfo::current().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_crate() {
        assert_eq!(BuildInfo::current().version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_display_contains_all_parts() {
        let info = BuildInfo {
            version: "1.2.3",
            commit: "abc123",
            date: "2025-06-01",
        };
        assert_eq!(info.to_string(), "1.2.3 (commit abc123, built 2025-06-01)");
    }

    #[test]
    fn test_long_version_not_empty() {
        assert!(long_version().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
