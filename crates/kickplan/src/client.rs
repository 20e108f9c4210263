// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client façade over a single adapter.

use std::sync::Arc;

use kickplan_core::{EvaluationContext, FlagValue};

use crate::adapter::Adapter;
use crate::config::RemoteConfig;
use crate::error::Result;
use crate::inmemory::InMemoryAdapter;
use crate::remote::RemoteAdapter;

/// Kickplan client.
///
/// Owns exactly one [`Adapter`], chosen at construction and never swapped,
/// and forwards typed calls to it.
///
/// # Example
///
/// ```no_run
/// use kickplan::{Client, EvaluationContext};
///
/// # async fn run() -> kickplan::Result<()> {
/// // Remote when KICKPLAN_ACCESS_TOKEN is set, in-memory otherwise.
/// let client = Client::new();
///
/// let ctx = EvaluationContext::new().with_attribute("account_id", "acme");
/// let enabled = client.get_bool("checkout.new_flow", false, &ctx).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
	adapter: Arc<dyn Adapter>,
}

impl Client {
	/// Creates a client with default adapter selection.
	///
	/// Equivalent to `Client::builder().build()`.
	pub fn new() -> Self {
		Self::builder().build()
	}

	/// Starts building a client.
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}

	/// Returns a boolean flag.
	pub async fn get_bool(
		&self,
		flag: &str,
		default: bool,
		ctx: &EvaluationContext,
	) -> Result<bool> {
		self.adapter.boolean_evaluation(flag, default, ctx).await
	}

	/// Returns a string flag.
	pub async fn get_string(
		&self,
		flag: &str,
		default: &str,
		ctx: &EvaluationContext,
	) -> Result<String> {
		self.adapter.string_evaluation(flag, default, ctx).await
	}

	/// Returns an int64 flag.
	pub async fn get_int64(
		&self,
		flag: &str,
		default: i64,
		ctx: &EvaluationContext,
	) -> Result<i64> {
		self.adapter.int64_evaluation(flag, default, ctx).await
	}

	/// Returns the raw dynamically-typed value of a flag.
	pub async fn get_object(
		&self,
		flag: &str,
		default: FlagValue,
		ctx: &EvaluationContext,
	) -> Result<FlagValue> {
		self.adapter.object_evaluation(flag, default, ctx).await
	}

	/// Sets a boolean flag.
	pub async fn set_bool(&self, flag: &str, value: bool) -> Result<()> {
		self.adapter.set_boolean(flag, value).await
	}

	/// Sets a metric counter to an absolute value.
	pub async fn set_metric(
		&self,
		metric: &str,
		value: i64,
		ctx: &EvaluationContext,
	) -> Result<()> {
		self.adapter.set_metric(metric, value, ctx).await
	}

	/// Increments a metric counter.
	pub async fn inc_metric(
		&self,
		metric: &str,
		value: i64,
		ctx: &EvaluationContext,
	) -> Result<()> {
		self.adapter.inc_metric(metric, value, ctx).await
	}

	/// Decrements a metric counter.
	pub async fn dec_metric(
		&self,
		metric: &str,
		value: i64,
		ctx: &EvaluationContext,
	) -> Result<()> {
		self.adapter.dec_metric(metric, value, ctx).await
	}

	/// Creates an account and assigns plans to it.
	pub async fn create_account(&self, key: &str, name: &str, plan_keys: &[String]) -> Result<()> {
		self.adapter.create_account(key, name, plan_keys).await
	}
}

impl Default for Client {
	fn default() -> Self {
		Self::new()
	}
}

/// Builder choosing the backing adapter.
///
/// Configuration is resolved once in [`build`](ClientBuilder::build); there
/// are no runtime options after that.
#[derive(Default)]
pub struct ClientBuilder {
	adapter: Option<Arc<dyn Adapter>>,
}

impl ClientBuilder {
	/// Uses an explicit adapter instead of environment-driven selection.
	pub fn adapter(mut self, adapter: impl Adapter + 'static) -> Self {
		self.adapter = Some(Arc::new(adapter));
		self
	}

	/// Builds the client.
	///
	/// Without an explicit adapter, a [`RemoteAdapter`] is constructed from
	/// the `KICKPLAN_*` environment when an access token is present, falling
	/// back to a fresh [`InMemoryAdapter`].
	pub fn build(self) -> Client {
		let adapter = self.adapter.unwrap_or_else(|| match RemoteConfig::from_env() {
			Some(config) => Arc::new(RemoteAdapter::new(config)) as Arc<dyn Adapter>,
			None => Arc::new(InMemoryAdapter::new()),
		});
		Client { adapter }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::AdapterError;

	#[tokio::test]
	async fn forwards_to_the_configured_adapter() {
		let adapter = InMemoryAdapter::new();
		adapter.set_value("theme", "dark").await;
		let client = Client::builder().adapter(adapter).build();
		let ctx = EvaluationContext::new();

		assert_eq!(client.get_string("theme", "light", &ctx).await.unwrap(), "dark");
		assert!(!client.get_bool("missing", false, &ctx).await.unwrap());

		client.set_bool("missing", true).await.unwrap();
		assert!(client.get_bool("missing", false, &ctx).await.unwrap());
	}

	#[tokio::test]
	async fn metrics_round_trip_through_the_facade() {
		let client = Client::builder().adapter(InMemoryAdapter::new()).build();
		let ctx = EvaluationContext::new();

		client.inc_metric("hits", 5, &ctx).await.unwrap();
		client.dec_metric("hits", 3, &ctx).await.unwrap();
		client.set_metric("seats", 10, &ctx).await.unwrap();
		client.create_account("acme", "Acme Inc.", &[]).await.unwrap();
	}

	#[tokio::test]
	async fn remote_write_gap_passes_through() {
		let client = Client::builder()
			.adapter(crate::RemoteAdapter::new(RemoteConfig::new("token")))
			.build();

		let err = client.set_bool("flag", true).await.unwrap_err();
		assert!(matches!(err, AdapterError::NotImplemented));
	}

	#[tokio::test]
	async fn clients_share_their_adapter() {
		let client = Client::builder().adapter(InMemoryAdapter::new()).build();
		let clone = client.clone();
		let ctx = EvaluationContext::new();

		client.set_bool("shared", true).await.unwrap();
		assert!(clone.get_bool("shared", false, &ctx).await.unwrap());
	}
}
