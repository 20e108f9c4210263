// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The capability contract every flag backend implements.

use async_trait::async_trait;
use kickplan_core::{EvaluationContext, FlagValue};

use crate::error::Result;

/// A backing implementation of flag evaluation and metric reporting.
///
/// Call sites are polymorphic over this trait and never know which
/// implementation is active. Each method is one synchronous unit of work with
/// respect to its caller; nothing is cached or retried.
///
/// Evaluation methods fall back to the caller's default: an absent flag on an
/// in-memory backend resolves to `Ok(default)`, and every error leaves the
/// default in the caller's hands.
#[async_trait]
pub trait Adapter: Send + Sync {
	/// Returns the value of a boolean flag.
	async fn boolean_evaluation(
		&self,
		flag: &str,
		default: bool,
		ctx: &EvaluationContext,
	) -> Result<bool>;

	/// Returns the value of a string flag.
	async fn string_evaluation(
		&self,
		flag: &str,
		default: &str,
		ctx: &EvaluationContext,
	) -> Result<String>;

	/// Returns the value of an int64 flag.
	async fn int64_evaluation(
		&self,
		flag: &str,
		default: i64,
		ctx: &EvaluationContext,
	) -> Result<i64>;

	/// Returns the raw dynamically-typed value of a flag, with no coercion.
	async fn object_evaluation(
		&self,
		flag: &str,
		default: FlagValue,
		ctx: &EvaluationContext,
	) -> Result<FlagValue>;

	/// Sets the value of a boolean flag.
	///
	/// Read-only backends fail with
	/// [`AdapterError::NotImplemented`](crate::AdapterError::NotImplemented);
	/// that is a permanent capability gap, not a transient failure.
	async fn set_boolean(&self, flag: &str, value: bool) -> Result<()>;

	/// Sets a metric counter to an absolute value.
	async fn set_metric(&self, metric: &str, value: i64, ctx: &EvaluationContext) -> Result<()>;

	/// Increments a metric counter, creating it at zero first if needed.
	async fn inc_metric(&self, metric: &str, value: i64, ctx: &EvaluationContext) -> Result<()>;

	/// Decrements a metric counter, creating it at zero first if needed.
	async fn dec_metric(&self, metric: &str, value: i64, ctx: &EvaluationContext) -> Result<()>;

	/// Creates an account and assigns plans to it.
	async fn create_account(&self, key: &str, name: &str, plan_keys: &[String]) -> Result<()>;
}
