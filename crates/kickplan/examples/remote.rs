// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! A simple example of using the remote adapter against the Kickplan API.
//!
//! Requires `KICKPLAN_ACCESS_TOKEN`; honors `KICKPLAN_ENDPOINT`,
//! `KICKPLAN_USER_AGENT`, and `KICKPLAN_TIMEOUT` (e.g. "5s").

use kickplan::{AdapterError, Client, EvaluationContext, RemoteAdapter, RemoteConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt::init();

	// Passing the adapter explicitly here; `Client::new()` would pick the
	// same one up from the environment.
	let config = RemoteConfig::from_env().expect("KICKPLAN_ACCESS_TOKEN must be set");
	let client = Client::builder().adapter(RemoteAdapter::new(config)).build();

	// One of the account UUIDs to evaluate against.
	let account = std::env::var("KICKPLAN_ACCOUNT").unwrap_or_default();
	let ctx = EvaluationContext::new().with_attribute("account_id", account);

	const FLAG: &str = "my-flag";

	match client.get_bool(FLAG, false, &ctx).await {
		Ok(enabled) => info!(flag = FLAG, enabled, "resolved flag"),
		Err(AdapterError::FlagNotFound) => {
			warn!(flag = FLAG, "flag not found");
			return Ok(());
		}
		Err(e) => return Err(e.into()),
	}

	client.inc_metric("api-requests", 1, &ctx).await?;
	info!(metric = "api-requests", "incremented");

	Ok(())
}
