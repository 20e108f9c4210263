// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Caller-supplied attributes forwarded with every evaluation and metric call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Evaluation context sent to the backing adapter.
///
/// An unordered mapping from attribute name to JSON value (for example an
/// account identifier). The SDK never inspects it; the remote adapter
/// forwards it verbatim so the service can scope flag resolution and metric
/// updates.
///
/// # Example
///
/// ```
/// use kickplan_core::EvaluationContext;
///
/// let ctx = EvaluationContext::new()
///     .with_attribute("account_id", "acme")
///     .with_attribute("seats", 25);
/// assert_eq!(ctx.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationContext {
	attributes: Map<String, Value>,
}

impl EvaluationContext {
	/// Creates an empty context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an attribute, replacing any previous value for the same name.
	pub fn with_attribute<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.attributes.insert(key.into(), value.into());
		self
	}

	/// Gets an attribute by name.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.attributes.get(key)
	}

	/// Returns true if no attributes are set.
	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.attributes.len()
	}
}

impl From<Map<String, Value>> for EvaluationContext {
	fn from(attributes: Map<String, Value>) -> Self {
		Self { attributes }
	}
}

impl From<EvaluationContext> for Value {
	fn from(ctx: EvaluationContext) -> Self {
		Value::Object(ctx.attributes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn new_context_is_empty() {
		let ctx = EvaluationContext::new();
		assert!(ctx.is_empty());
		assert_eq!(ctx.len(), 0);
	}

	#[test]
	fn with_attribute_chains() {
		let ctx = EvaluationContext::new()
			.with_attribute("account_id", "account")
			.with_attribute("seats", 25)
			.with_attribute("beta", true);

		assert_eq!(ctx.get("account_id"), Some(&json!("account")));
		assert_eq!(ctx.get("seats"), Some(&json!(25)));
		assert_eq!(ctx.get("beta"), Some(&json!(true)));
	}

	#[test]
	fn later_attribute_wins() {
		let ctx = EvaluationContext::new()
			.with_attribute("plan", "free")
			.with_attribute("plan", "enterprise");

		assert_eq!(ctx.len(), 1);
		assert_eq!(ctx.get("plan"), Some(&json!("enterprise")));
	}

	#[test]
	fn serializes_as_a_bare_object() {
		let ctx = EvaluationContext::new().with_attribute("account_id", "account");
		assert_eq!(serde_json::to_value(&ctx).unwrap(), json!({"account_id": "account"}));
	}

	#[test]
	fn deserializes_from_a_bare_object() {
		let ctx: EvaluationContext =
			serde_json::from_value(json!({"account_id": "account"})).unwrap();
		assert_eq!(ctx.get("account_id"), Some(&json!("account")));
	}

	proptest! {
		#[test]
		fn len_counts_unique_keys(keys in proptest::collection::vec("[a-z]{1,10}", 0..20)) {
			let unique: std::collections::HashSet<_> = keys.iter().cloned().collect();
			let mut ctx = EvaluationContext::new();
			for key in &keys {
				ctx = ctx.with_attribute(key.clone(), "value");
			}
			prop_assert_eq!(ctx.len(), unique.len());
		}

		#[test]
		fn roundtrips_through_json(key in "[a-z]{1,20}", value in "[a-zA-Z0-9]{0,30}") {
			let ctx = EvaluationContext::new().with_attribute(key.clone(), value.clone());
			let json = serde_json::to_string(&ctx).unwrap();
			let parsed: EvaluationContext = serde_json::from_str(&json).unwrap();
			prop_assert_eq!(parsed.get(&key), Some(&Value::String(value)));
		}
	}
}
