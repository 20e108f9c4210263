// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! A simple example of using the in-memory adapter.

use kickplan::{Client, EvaluationContext};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt::init();

	// With no KICKPLAN_ACCESS_TOKEN in the environment this is in-memory.
	let client = Client::new();
	let ctx = EvaluationContext::new();

	const FLAG: &str = "my-flag";

	let enabled = client.get_bool(FLAG, false, &ctx).await?;
	info!(flag = FLAG, enabled, "initial value");

	client.set_bool(FLAG, true).await?;
	info!(flag = FLAG, "updated");

	let enabled = client.get_bool(FLAG, false, &ctx).await?;
	info!(flag = FLAG, enabled, "current value");

	Ok(())
}
