// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

mod cli;
mod export;
mod filter;
mod kubernetes;
pub mod progress;
mod snapshot;
mod version;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::prelude::*;

use cli::Args;
use export::Exporter;

/// Initialize stderr logging, overridable through RUST_LOG
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "kube_export=debug"
    } else {
        "kube_export=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install rustls crypto provider (aws-lc-rs)
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let args = Args::parse();
    init_logging(args.verbose);

    let start = std::time::Instant::now();

    let criteria = args.criteria()?;
    let client =
        kubernetes::build_client(args.kubeconfig.as_deref(), args.context.as_deref()).await?;

    // The spinner and verbose debug lines would fight over stderr.
    let exporter = Exporter::new(
        client,
        criteria,
        args.dir.clone(),
        args.stateless,
        !args.verbose,
    );
    let summary = exporter.run().await?;

    if summary.failed > 0 {
        warn!(
            failed = summary.failed,
            "some resource types or objects could not be exported"
        );
    }
    println!(
        "exported {} manifests from {} resource types in {:.2?}",
        summary.written,
        summary.resource_types,
        start.elapsed()
    );

    Ok(())
}
