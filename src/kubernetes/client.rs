// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Cluster connection and bulk listing.

use anyhow::{Context, Result, anyhow};
use kube::api::{Api, DynamicObject, ListParams, ObjectList};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use super::ResourceType;

/// Timeout for connecting to the K8s API
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for reading K8s API responses
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum retry attempts for transient failures
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (doubles each retry)
const RETRY_BASE_DELAY: Duration = Duration::from_millis(100);

/// Page size for paginated list requests
/// Smaller pages reduce memory pressure and allow faster initial response
const PAGE_SIZE: u32 = 500;

/// Create a client from a kubeconfig, with an optional explicit path and
/// context override.
pub async fn build_client(kubeconfig_path: Option<&Path>, context: Option<&str>) -> Result<Client> {
    let kubeconfig = match kubeconfig_path {
        Some(path) => Kubeconfig::read_from(path)
            .with_context(|| format!("failed reading kubeconfig '{}'", path.display()))?,
        None => Kubeconfig::read().context("failed reading kubeconfig")?,
    };

    if let Some(ctx) = context
        && !kubeconfig.contexts.iter().any(|c| c.name == ctx)
    {
        return Err(anyhow!("context '{}' not found in kubeconfig", ctx));
    }

    let options = KubeConfigOptions {
        context: context.map(String::from),
        ..Default::default()
    };
    let mut config = Config::from_custom_kubeconfig(kubeconfig, &options)
        .await
        .context("failed loading kubeconfig")?;

    config.connect_timeout = Some(CONNECT_TIMEOUT);
    config.read_timeout = Some(READ_TIMEOUT);

    Client::try_from(config).context("failed creating Kubernetes client")
}

/// List every object of a resource type across all namespaces.
///
/// Pages through the collection with continue tokens rather than fetching
/// it in one response; large clusters can hold tens of thousands of
/// objects of a single type.
pub async fn list_all(client: &Client, resource: &ResourceType) -> Result<Vec<DynamicObject>> {
    let api: Api<DynamicObject> = Api::all_with(client.clone(), resource.api_resource());

    let mut items = Vec::new();
    let mut continue_token: Option<String> = None;

    loop {
        let mut params = ListParams::default().limit(PAGE_SIZE);
        if let Some(token) = &continue_token {
            params = params.continue_token(token);
        }

        let page = list_page(&api, &params)
            .await
            .with_context(|| format!("failed listing {resource}"))?;

        continue_token = page.metadata.continue_.clone().filter(|t| !t.is_empty());
        items.extend(page.items);

        if continue_token.is_none() {
            break;
        }
    }

    Ok(items)
}

/// Fetch one page, retrying transient API failures with exponential backoff.
async fn list_page(
    api: &Api<DynamicObject>,
    params: &ListParams,
) -> Result<ObjectList<DynamicObject>> {
    let mut attempt = 0u32;
    loop {
        match api.list(params).await {
            Ok(page) => return Ok(page),
            Err(err) if attempt < MAX_RETRIES && is_transient(&err) => {
                let delay = RETRY_BASE_DELAY * 2u32.pow(attempt);
                debug!(error = %err, attempt, "transient list failure, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Server overload and internal errors are worth retrying; everything else
/// (forbidden, not found, bad request) is not.
fn is_transient(err: &kube::Error) -> bool {
    match err {
        kube::Error::Api(response) => response.code == 429 || response.code >= 500,
        _ => false,
    }
}
