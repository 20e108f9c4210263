// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory adapter for testing and offline use.

use std::collections::HashMap;

use async_trait::async_trait;
use kickplan_core::{resolve, EvaluationContext, FlagValue};
use tokio::sync::Mutex;

use crate::adapter::Adapter;
use crate::error::Result;

/// An adapter that stores flags and metric counters in process memory.
///
/// Evaluating a flag that was never set returns the caller's default with no
/// error. Metric counters start at zero and are created on first increment or
/// decrement. Both stores sit behind mutexes so one instance can be shared
/// across tasks; mutations are serialized, last writer wins.
///
/// This is the default backend when no access token is configured, and the
/// reference behavior the remote adapter's contract is tested against.
#[derive(Debug, Default)]
pub struct InMemoryAdapter {
	flags: Mutex<HashMap<String, FlagValue>>,
	metrics: Mutex<HashMap<String, i64>>,
}

impl InMemoryAdapter {
	/// Creates an adapter with empty stores.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores an arbitrary flag value, creating or overwriting the entry.
	///
	/// The [`Adapter`] surface only exposes boolean writes; this seeds
	/// string, integer, and object flags for tests and offline runs.
	pub async fn set_value(&self, flag: &str, value: impl Into<FlagValue>) {
		self.flags.lock().await.insert(flag.to_string(), value.into());
	}

	/// Returns the current value of a metric counter, if it exists.
	pub async fn metric(&self, metric: &str) -> Option<i64> {
		self.metrics.lock().await.get(metric).copied()
	}

	async fn find(&self, flag: &str) -> Option<FlagValue> {
		self.flags.lock().await.get(flag).cloned()
	}
}

#[async_trait]
impl Adapter for InMemoryAdapter {
	async fn boolean_evaluation(
		&self,
		flag: &str,
		default: bool,
		_ctx: &EvaluationContext,
	) -> Result<bool> {
		let value = self.find(flag).await;
		Ok(resolve(value.as_ref(), default)?)
	}

	async fn string_evaluation(
		&self,
		flag: &str,
		default: &str,
		_ctx: &EvaluationContext,
	) -> Result<String> {
		let value = self.find(flag).await;
		Ok(resolve(value.as_ref(), default.to_string())?)
	}

	async fn int64_evaluation(
		&self,
		flag: &str,
		default: i64,
		_ctx: &EvaluationContext,
	) -> Result<i64> {
		let value = self.find(flag).await;
		Ok(resolve(value.as_ref(), default)?)
	}

	async fn object_evaluation(
		&self,
		flag: &str,
		default: FlagValue,
		_ctx: &EvaluationContext,
	) -> Result<FlagValue> {
		Ok(self.find(flag).await.unwrap_or(default))
	}

	async fn set_boolean(&self, flag: &str, value: bool) -> Result<()> {
		self.flags
			.lock()
			.await
			.insert(flag.to_string(), FlagValue::Boolean(value));
		Ok(())
	}

	async fn set_metric(&self, metric: &str, value: i64, _ctx: &EvaluationContext) -> Result<()> {
		self.metrics.lock().await.insert(metric.to_string(), value);
		Ok(())
	}

	async fn inc_metric(&self, metric: &str, value: i64, _ctx: &EvaluationContext) -> Result<()> {
		*self.metrics.lock().await.entry(metric.to_string()).or_insert(0) += value;
		Ok(())
	}

	async fn dec_metric(&self, metric: &str, value: i64, _ctx: &EvaluationContext) -> Result<()> {
		*self.metrics.lock().await.entry(metric.to_string()).or_insert(0) -= value;
		Ok(())
	}

	async fn create_account(&self, _key: &str, _name: &str, _plan_keys: &[String]) -> Result<()> {
		// Accounts only exist on the service side; accepted and discarded.
		Ok(())
	}
}
